pub mod config;
pub mod enrichment;
pub mod error;
pub mod generator;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod types;

pub use error::{EnrichmentError, ReadinessError, Result};
pub use pipeline::Assessor;
pub use scoring::{compute_score_breakdown, generate_recommendations};
