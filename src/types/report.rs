use crate::types::intake::ResolvedLocation;
use crate::types::profile::{EcosystemAssessment, NarrativeAssessment};
use crate::types::scoring::{Score, ScoreBreakdown};
use serde::{Deserialize, Serialize};

pub const GOOD_THRESHOLD: Score = 70;
pub const WARNING_THRESHOLD: Score = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Good,
    Warning,
    Bad,
}

impl Status {
    pub fn from_score(score: Score) -> Self {
        if score >= GOOD_THRESHOLD {
            Status::Good
        } else if score >= WARNING_THRESHOLD {
            Status::Warning
        } else {
            Status::Bad
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TeamDevelopment,
    MarketStrategy,
    GeoEcosystemUtilization,
    OperationalEfficiency,
    NarrativeImprovement,
}

impl Category {
    pub fn title(self) -> &'static str {
        match self {
            Category::TeamDevelopment => "Team Development",
            Category::MarketStrategy => "Market Strategy",
            Category::GeoEcosystemUtilization => "Geo-Ecosystem Utilization",
            Category::OperationalEfficiency => "Operational Efficiency",
            Category::NarrativeImprovement => "Narrative Improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: Category,
    pub title: String,
    pub status: Status,
    pub items: Vec<String>,
}

impl Recommendation {
    pub fn new(category: Category, status: Status, items: &[&str]) -> Self {
        Self {
            category,
            title: category.title().to_string(),
            status,
            items: items.iter().map(|item| item.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessTier {
    InvestorReady,
    ApproachingReady,
    NeedsImprovement,
}

impl ReadinessTier {
    pub fn from_score(overall: Score) -> Self {
        if overall >= 80 {
            ReadinessTier::InvestorReady
        } else if overall >= 60 {
            ReadinessTier::ApproachingReady
        } else {
            ReadinessTier::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReadinessTier::InvestorReady => "Investor Ready",
            ReadinessTier::ApproachingReady => "Approaching Ready",
            ReadinessTier::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrichmentStage {
    Location,
    Ecosystem,
    Narrative,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub company_name: String,
    pub founding_year: Option<u16>,
    pub generated_at: String,
    pub location: ResolvedLocation,
    pub overall_score: Score,
    pub tier: ReadinessTier,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<Recommendation>,
    pub next_steps: Vec<String>,
    pub narrative: NarrativeAssessment,
    pub ecosystem: EcosystemAssessment,
    pub degraded: Vec<EnrichmentStage>,
}

impl AssessmentReport {
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}
