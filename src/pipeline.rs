use crate::enrichment::{EcosystemProvider, LocationResolver, NarrativeAnalyzer};
use crate::error::Result;
use crate::scoring;
use crate::types::intake::Intake;
use crate::types::profile::{EcosystemAssessment, NarrativeAssessment};
use crate::types::report::{AssessmentReport, EnrichmentStage, ReadinessTier};
use crate::types::scoring::{Score, Weights};
use chrono::Utc;
use tracing::{debug, info, warn};

pub struct Assessor<'a> {
    location: &'a dyn LocationResolver,
    ecosystem: &'a dyn EcosystemProvider,
    narrative: &'a dyn NarrativeAnalyzer,
    weights: Weights,
    ecosystem_fallback_score: Score,
}

impl<'a> Assessor<'a> {
    pub fn new(
        location: &'a dyn LocationResolver,
        ecosystem: &'a dyn EcosystemProvider,
        narrative: &'a dyn NarrativeAnalyzer,
    ) -> Self {
        Self {
            location,
            ecosystem,
            narrative,
            weights: Weights::default(),
            ecosystem_fallback_score: 0,
        }
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_ecosystem_fallback_score(mut self, score: Score) -> Self {
        self.ecosystem_fallback_score = score;
        self
    }

    pub fn assess(&self, intake: &Intake) -> Result<AssessmentReport> {
        intake.validate()?;
        if intake.team.team_size < intake.team.founder_count {
            warn!(
                founders = intake.team.founder_count,
                team_size = intake.team.team_size,
                "team size is smaller than founder count"
            );
        }

        info!(company = %intake.company.name, "resolving location");
        let location = self.location.resolve(&intake.location)?;
        debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            "location resolved"
        );

        let mut degraded = Vec::new();

        info!("analyzing startup ecosystem");
        let ecosystem = match self.ecosystem.assess(location.latitude, location.longitude) {
            Ok(assessment) => assessment,
            Err(err) => {
                warn!(error = %err, fallback = self.ecosystem_fallback_score, "ecosystem lookup failed; using fallback");
                degraded.push(EnrichmentStage::Ecosystem);
                EcosystemAssessment::fallback(self.ecosystem_fallback_score)
            }
        };

        info!("evaluating product narrative");
        let narrative = match self
            .narrative
            .analyze(&intake.company.product_description, intake.company.industry)
        {
            Ok(assessment) => assessment,
            Err(err) => {
                warn!(error = %err, "narrative analysis failed; using fallback");
                degraded.push(EnrichmentStage::Narrative);
                NarrativeAssessment::fallback()
            }
        };

        let breakdown = scoring::compute_score_breakdown_with_weights(
            &intake.team,
            &intake.traction,
            &narrative,
            &ecosystem,
            &self.weights,
        );
        let recommendations = scoring::generate_recommendations(&breakdown);
        let next_steps = scoring::next_steps(&breakdown, &recommendations);
        let tier = ReadinessTier::from_score(breakdown.overall_score);
        info!(
            overall = breakdown.overall_score,
            tier = tier.label(),
            recommendations = recommendations.len(),
            "assessment complete"
        );

        Ok(AssessmentReport {
            company_name: intake.company.name.clone(),
            founding_year: intake.company.founding_year,
            generated_at: Utc::now().to_rfc3339(),
            location,
            overall_score: breakdown.overall_score,
            tier,
            breakdown,
            recommendations,
            next_steps,
            narrative,
            ecosystem,
            degraded,
        })
    }
}
