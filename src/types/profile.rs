use serde::{Deserialize, Serialize};

pub const NARRATIVE_FALLBACK_SUMMARY: &str = "Analysis could not be completed.";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamProfile {
    pub founder_count: u32,
    pub team_size: u32,
    pub tech_background_percentage: f64,
    pub previous_startups: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TractionProfile {
    pub monthly_revenue: f64,
    pub user_count: u64,
    pub growth_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeAssessment {
    pub clarity: u32,
    pub innovation: u32,
    pub market_fit: u32,
    pub professionalism: u32,
    pub overall_score: u32,
    pub summary: String,
}

impl NarrativeAssessment {
    pub fn fallback() -> Self {
        Self {
            clarity: 0,
            innovation: 0,
            market_fit: 0,
            professionalism: 0,
            overall_score: 0,
            summary: NARRATIVE_FALLBACK_SUMMARY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcosystemAssessment {
    #[serde(default)]
    pub innovation_hubs: u32,
    #[serde(default)]
    pub vc_firms: u32,
    #[serde(default)]
    pub accelerators: u32,
    #[serde(default)]
    pub coworking_spaces: u32,
    pub ecosystem_score: u32,
}

impl EcosystemAssessment {
    pub fn with_score(ecosystem_score: u32) -> Self {
        Self {
            innovation_hubs: 0,
            vc_firms: 0,
            accelerators: 0,
            coworking_spaces: 0,
            ecosystem_score,
        }
    }

    pub fn fallback(score: u32) -> Self {
        Self::with_score(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrative_fallback_is_all_zero_with_explanation() {
        let fallback = NarrativeAssessment::fallback();
        assert_eq!(fallback.overall_score, 0);
        assert_eq!(fallback.market_fit, 0);
        assert_eq!(fallback.summary, "Analysis could not be completed.");
    }

    #[test]
    fn ecosystem_counts_default_when_absent() {
        let assessment: EcosystemAssessment =
            serde_json::from_str(r#"{"ecosystem_score": 42}"#).expect("json should parse");
        assert_eq!(assessment, EcosystemAssessment::with_score(42));
    }
}
