use crate::error::ReadinessError;
use crate::types::scoring::{Component, Weights};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 50.0;
pub const DEFAULT_ECOSYSTEM_FALLBACK_SCORE: u32 = 0;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadinessConfig {
    pub scoring: Option<ScoringConfig>,
    pub ecosystem: Option<EcosystemConfig>,
    #[serde(default)]
    pub places: Vec<PlaceConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub weights: Option<HashMap<String, u32>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EcosystemConfig {
    pub search_radius_km: Option<f64>,
    pub fallback_score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceConfig {
    pub city: String,
    pub state: String,
    #[serde(default = "default_country")]
    pub country: String,
    pub postal_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub innovation_hubs: u32,
    #[serde(default)]
    pub vc_firms: u32,
    #[serde(default)]
    pub accelerators: u32,
    #[serde(default)]
    pub coworking_spaces: u32,
}

fn default_country() -> String {
    "United States".to_string()
}

impl ReadinessConfig {
    pub fn weights(&self) -> Result<Weights, ReadinessError> {
        let defaults = Weights::default();
        let Some(weights) = self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.weights.as_ref())
        else {
            return Ok(defaults);
        };
        let pick = |component: Component| {
            weights
                .get(component.key())
                .copied()
                .unwrap_or_else(|| defaults.get(component))
        };
        Weights::new(
            pick(Component::OperationalReadiness),
            pick(Component::TeamStrength),
            pick(Component::MarketFit),
            pick(Component::NarrativeAndInnovation),
            pick(Component::GeoEcosystem),
        )
    }

    pub fn search_radius_km(&self) -> f64 {
        self.ecosystem
            .as_ref()
            .and_then(|ecosystem| ecosystem.search_radius_km)
            .unwrap_or(DEFAULT_SEARCH_RADIUS_KM)
    }

    pub fn ecosystem_fallback_score(&self) -> u32 {
        self.ecosystem
            .as_ref()
            .and_then(|ecosystem| ecosystem.fallback_score)
            .unwrap_or(DEFAULT_ECOSYSTEM_FALLBACK_SCORE)
    }

    pub fn validate(&self) -> Result<(), ReadinessError> {
        if let Some(weights) = self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.weights.as_ref())
        {
            let allowed: Vec<&str> = Component::ALL.iter().map(|c| c.key()).collect();
            let mut unknown = weights
                .keys()
                .filter(|key| !allowed.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(ReadinessError::ConfigParse(format!(
                    "scoring.weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        self.weights()?;

        if let Some(ecosystem) = &self.ecosystem {
            if let Some(radius) = ecosystem.search_radius_km {
                if !radius.is_finite() || radius <= 0.0 {
                    return Err(ReadinessError::ConfigParse(
                        "ecosystem.search_radius_km must be greater than 0".to_string(),
                    ));
                }
            }
            if let Some(score) = ecosystem.fallback_score {
                if score > 100 {
                    return Err(ReadinessError::ConfigParse(
                        "ecosystem.fallback_score must be between 0 and 100".to_string(),
                    ));
                }
            }
        }

        validate_places(&self.places)
    }
}

fn validate_places(places: &[PlaceConfig]) -> Result<(), ReadinessError> {
    let mut seen = HashSet::<(String, String, Option<String>)>::new();
    for place in places {
        let city = place.city.trim().to_lowercase();
        let state = place.state.trim().to_lowercase();
        if city.is_empty() || state.is_empty() {
            return Err(ReadinessError::ConfigParse(
                "places entries must have a non-empty city and state".to_string(),
            ));
        }
        if !(-90.0..=90.0).contains(&place.latitude) {
            return Err(ReadinessError::ConfigParse(format!(
                "places.latitude for {} must be between -90 and 90",
                place.city
            )));
        }
        if !(-180.0..=180.0).contains(&place.longitude) {
            return Err(ReadinessError::ConfigParse(format!(
                "places.longitude for {} must be between -180 and 180",
                place.city
            )));
        }
        let postal = place.postal_code.as_ref().map(|code| code.trim().to_string());
        if !seen.insert((city, state, postal)) {
            return Err(ReadinessError::ConfigParse(format!(
                "places contains duplicate entry: {}, {}",
                place.city, place.state
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let cfg: ReadinessConfig = toml::from_str("").expect("empty config should parse");
        assert!(cfg.places.is_empty());
        assert_eq!(cfg.weights().expect("weights should be valid"), Weights::default());
        assert_eq!(cfg.search_radius_km(), 50.0);
        assert_eq!(cfg.ecosystem_fallback_score(), 0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[scoring.weights]
operational_readiness = 30
team_strength = 20
market_fit = 20
narrative_and_innovation = 15
geo_ecosystem = 15

[ecosystem]
search_radius_km = 25.0
fallback_score = 40

[[places]]
city = "Austin"
state = "TX"
latitude = 30.2672
longitude = -97.7431
innovation_hubs = 3
vc_firms = 6
accelerators = 2
coworking_spaces = 7
"#;

        let cfg: ReadinessConfig = toml::from_str(toml_str).expect("full config should parse");
        let weights = cfg.weights().expect("weights should be valid");
        assert_eq!(weights.get(Component::OperationalReadiness), 30);
        assert_eq!(weights.get(Component::NarrativeAndInnovation), 15);
        assert_eq!(cfg.search_radius_km(), 25.0);
        assert_eq!(cfg.ecosystem_fallback_score(), 40);
        assert_eq!(cfg.places.len(), 1);
        assert_eq!(cfg.places[0].country, "United States");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_weights_fall_back_to_defaults() {
        let toml_str = r#"
[scoring.weights]
operational_readiness = 20
"#;
        let cfg: ReadinessConfig = toml::from_str(toml_str).expect("config should parse");
        assert_eq!(cfg.weights().expect("weights should be valid"), Weights::default());
    }

    #[test]
    fn validate_rejects_invalid_weight_sum() {
        let toml_str = r#"
[scoring.weights]
operational_readiness = 90
team_strength = 90
"#;
        let cfg: ReadinessConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("must sum to 100"));
    }

    #[test]
    fn validate_rejects_unknown_weight_keys() {
        let toml_str = r#"
[scoring.weights]
operational_readiness = 20
team_strength = 20
market_fit = 20
narrative_and_innovation = 25
geo_ecosystem = 15
vibes = 1
"#;
        let cfg: ReadinessConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unknown key"));
        assert!(err.to_string().contains("vibes"));
    }

    #[test]
    fn validate_rejects_non_positive_radius() {
        let toml_str = r#"
[ecosystem]
search_radius_km = 0.0
"#;
        let cfg: ReadinessConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("search_radius_km"));
    }

    #[test]
    fn validate_rejects_fallback_score_above_range() {
        let toml_str = r#"
[ecosystem]
fallback_score = 101
"#;
        let cfg: ReadinessConfig = toml::from_str(toml_str).expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_coordinates() {
        let toml_str = r#"
[[places]]
city = "Nowhere"
state = "ZZ"
latitude = 91.0
longitude = 0.0
"#;
        let cfg: ReadinessConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn validate_rejects_duplicate_places() {
        let toml_str = r#"
[[places]]
city = "Austin"
state = "TX"
latitude = 30.2672
longitude = -97.7431

[[places]]
city = " austin "
state = "tx"
latitude = 30.2672
longitude = -97.7431
"#;
        let cfg: ReadinessConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("duplicate"));
    }
}
