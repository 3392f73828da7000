use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadinessError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("invalid intake: {0}")]
    InvalidIntake(String),

    #[error("enrichment failed: {0}")]
    Enrichment(#[from] EnrichmentError),

    #[error("refusing to overwrite existing file: {0}")]
    FileExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnrichmentError {
    #[error("could not resolve location: {0}")]
    LocationNotFound(String),

    #[error("no ecosystem data within {radius_km} km of ({latitude}, {longitude})")]
    NoEcosystemData {
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    },

    #[error("product description is empty")]
    EmptyDescription,

    #[error("enrichment service unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, ReadinessError>;
