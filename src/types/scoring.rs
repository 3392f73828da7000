use crate::error::ReadinessError;
use serde::{Deserialize, Serialize};

pub type Score = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub operational_readiness: Score,
    pub team_strength: Score,
    pub market_fit: Score,
    pub narrative_and_innovation: Score,
    pub geo_ecosystem: Score,
    pub overall_score: Score,
}

impl ScoreBreakdown {
    pub fn component(&self, component: Component) -> Score {
        match component {
            Component::OperationalReadiness => self.operational_readiness,
            Component::TeamStrength => self.team_strength,
            Component::MarketFit => self.market_fit,
            Component::NarrativeAndInnovation => self.narrative_and_innovation,
            Component::GeoEcosystem => self.geo_ecosystem,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    OperationalReadiness,
    TeamStrength,
    MarketFit,
    NarrativeAndInnovation,
    GeoEcosystem,
}

impl Component {
    pub const ALL: [Component; 5] = [
        Component::OperationalReadiness,
        Component::TeamStrength,
        Component::MarketFit,
        Component::NarrativeAndInnovation,
        Component::GeoEcosystem,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Component::OperationalReadiness => "operational_readiness",
            Component::TeamStrength => "team_strength",
            Component::MarketFit => "market_fit",
            Component::NarrativeAndInnovation => "narrative_and_innovation",
            Component::GeoEcosystem => "geo_ecosystem",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Component::OperationalReadiness => "Operational Readiness",
            Component::TeamStrength => "Team Strength",
            Component::MarketFit => "Market Fit",
            Component::NarrativeAndInnovation => "Narrative & Innovation",
            Component::GeoEcosystem => "Geo-Ecosystem",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Component::OperationalReadiness => {
                "Assessment of your business processes, operational efficiency, and scalability potential."
            }
            Component::TeamStrength => {
                "Evaluation of your team's experience, diversity, technical skills, and leadership capabilities."
            }
            Component::MarketFit => {
                "Analysis of your product-market fit, addressable market size, and competitive positioning."
            }
            Component::NarrativeAndInnovation => {
                "Assessment of your product innovation, unique value proposition, and storytelling capability."
            }
            Component::GeoEcosystem => {
                "Evaluation of your location's startup ecosystem, access to resources, and regional advantages."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Weights {
    operational_readiness: u32,
    team_strength: u32,
    market_fit: u32,
    narrative_and_innovation: u32,
    geo_ecosystem: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            operational_readiness: 20,
            team_strength: 20,
            market_fit: 20,
            narrative_and_innovation: 25,
            geo_ecosystem: 15,
        }
    }
}

impl Weights {
    pub fn new(
        operational_readiness: u32,
        team_strength: u32,
        market_fit: u32,
        narrative_and_innovation: u32,
        geo_ecosystem: u32,
    ) -> Result<Self, ReadinessError> {
        let weights = Self {
            operational_readiness,
            team_strength,
            market_fit,
            narrative_and_innovation,
            geo_ecosystem,
        };
        if weights.total() != 100 {
            return Err(ReadinessError::InvalidWeights(format!(
                "must sum to 100 (found {})",
                weights.total()
            )));
        }
        Ok(weights)
    }

    pub fn get(&self, component: Component) -> u32 {
        match component {
            Component::OperationalReadiness => self.operational_readiness,
            Component::TeamStrength => self.team_strength,
            Component::MarketFit => self.market_fit,
            Component::NarrativeAndInnovation => self.narrative_and_innovation,
            Component::GeoEcosystem => self.geo_ecosystem,
        }
    }

    pub fn total(&self) -> u32 {
        Component::ALL
            .iter()
            .fold(0u32, |acc, component| acc.saturating_add(self.get(*component)))
    }
}
