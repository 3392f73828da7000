pub mod operational;
pub mod recommend;
pub mod team;

pub use recommend::{generate_recommendations, next_steps};

use operational::operational_readiness_score;
use team::team_strength_score;

use crate::types::profile::{
    EcosystemAssessment, NarrativeAssessment, TeamProfile, TractionProfile,
};
use crate::types::scoring::{Component, Score, ScoreBreakdown, Weights};

const MAX_SCORE: Score = 100;

pub fn compute_score_breakdown(
    team: &TeamProfile,
    traction: &TractionProfile,
    narrative: &NarrativeAssessment,
    ecosystem: &EcosystemAssessment,
) -> ScoreBreakdown {
    compute_score_breakdown_with_weights(team, traction, narrative, ecosystem, &Weights::default())
}

pub fn compute_score_breakdown_with_weights(
    team: &TeamProfile,
    traction: &TractionProfile,
    narrative: &NarrativeAssessment,
    ecosystem: &EcosystemAssessment,
    weights: &Weights,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown {
        operational_readiness: operational_readiness_score(traction),
        team_strength: team_strength_score(team),
        market_fit: narrative.market_fit.min(MAX_SCORE),
        narrative_and_innovation: narrative.overall_score.min(MAX_SCORE),
        geo_ecosystem: ecosystem.ecosystem_score.min(MAX_SCORE),
        overall_score: 0,
    };
    breakdown.overall_score = weighted_overall(&breakdown, weights);
    breakdown
}

// Weights sum to 100, so (sum + 50) / 100 is the half-up rounded mean.
pub fn weighted_overall(breakdown: &ScoreBreakdown, weights: &Weights) -> Score {
    let weighted: u64 = Component::ALL
        .iter()
        .map(|component| {
            u64::from(weights.get(*component)) * u64::from(breakdown.component(*component))
        })
        .fold(0u64, u64::saturating_add);
    Score::try_from(weighted.saturating_add(50) / 100)
        .unwrap_or(MAX_SCORE)
        .min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_inputs() -> (TeamProfile, TractionProfile, NarrativeAssessment, EcosystemAssessment) {
        (
            TeamProfile {
                founder_count: 2,
                team_size: 8,
                tech_background_percentage: 60.0,
                previous_startups: 1,
            },
            TractionProfile {
                monthly_revenue: 25_000.0,
                user_count: 1_500,
                growth_rate: 15.0,
            },
            NarrativeAssessment {
                clarity: 70,
                innovation: 80,
                market_fit: 75,
                professionalism: 70,
                overall_score: 78,
                summary: String::new(),
            },
            EcosystemAssessment::with_score(55),
        )
    }

    fn components(op: Score, team: Score, market: Score, narrative: Score, geo: Score) -> ScoreBreakdown {
        ScoreBreakdown {
            operational_readiness: op,
            team_strength: team,
            market_fit: market,
            narrative_and_innovation: narrative,
            geo_ecosystem: geo,
            overall_score: 0,
        }
    }

    #[test]
    fn reference_scenario_breakdown() {
        let (team, traction, narrative, ecosystem) = reference_inputs();
        let breakdown = compute_score_breakdown(&team, &traction, &narrative, &ecosystem);
        assert_eq!(
            breakdown,
            ScoreBreakdown {
                operational_readiness: 60,
                team_strength: 75,
                market_fit: 75,
                narrative_and_innovation: 78,
                geo_ecosystem: 55,
                overall_score: 70,
            }
        );
    }

    #[test]
    fn compute_is_idempotent() {
        let (team, traction, narrative, ecosystem) = reference_inputs();
        let first = compute_score_breakdown(&team, &traction, &narrative, &ecosystem);
        let second = compute_score_breakdown(&team, &traction, &narrative, &ecosystem);
        assert_eq!(first, second);
    }

    #[test]
    fn half_point_rounds_up() {
        // 0.25 * 2 = 0.5
        let weights = Weights::default();
        assert_eq!(weighted_overall(&components(0, 0, 0, 2, 0), &weights), 1);
        // 0.25 * 6 = 1.5
        assert_eq!(weighted_overall(&components(0, 0, 0, 6, 0), &weights), 2);
        // 0.15 * 3 = 0.45
        assert_eq!(weighted_overall(&components(0, 0, 0, 0, 3), &weights), 0);
        // 0.20 * 60 + 0.25 * 78 + 0.15 * 55 ... = 69.75
        assert_eq!(weighted_overall(&components(60, 75, 75, 78, 55), &weights), 70);
    }

    #[test]
    fn all_components_at_bounds() {
        let weights = Weights::default();
        assert_eq!(weighted_overall(&components(0, 0, 0, 0, 0), &weights), 0);
        assert_eq!(weighted_overall(&components(100, 100, 100, 100, 100), &weights), 100);
    }

    #[test]
    fn enrichment_scores_pass_through_unchanged() {
        let (team, traction, mut narrative, _) = reference_inputs();
        narrative.market_fit = 13;
        narrative.overall_score = 42;
        let breakdown = compute_score_breakdown(
            &team,
            &traction,
            &narrative,
            &EcosystemAssessment::with_score(99),
        );
        assert_eq!(breakdown.market_fit, 13);
        assert_eq!(breakdown.narrative_and_innovation, 42);
        assert_eq!(breakdown.geo_ecosystem, 99);
    }

    #[test]
    fn custom_weights_change_overall() {
        let (team, traction, narrative, ecosystem) = reference_inputs();
        let weights = Weights::new(100, 0, 0, 0, 0).expect("weights should be valid");
        let breakdown =
            compute_score_breakdown_with_weights(&team, &traction, &narrative, &ecosystem, &weights);
        assert_eq!(breakdown.overall_score, 60);
    }

    #[test]
    fn out_of_range_enrichment_scores_are_capped() {
        let (team, traction, mut narrative, _) = reference_inputs();
        narrative.market_fit = 500;
        narrative.overall_score = 500;
        let breakdown = compute_score_breakdown(
            &team,
            &traction,
            &narrative,
            &EcosystemAssessment::with_score(500),
        );
        assert_eq!(breakdown.market_fit, 100);
        assert_eq!(breakdown.narrative_and_innovation, 100);
        assert_eq!(breakdown.geo_ecosystem, 100);
        assert!(breakdown.overall_score <= 100);
    }

    #[test]
    fn overall_never_exceeds_one_hundred() {
        let weights = Weights::default();
        assert_eq!(weighted_overall(&components(500, 500, 500, 500, 500), &weights), 100);
    }
}
