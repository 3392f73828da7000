
pub mod ecosystem;
pub mod location;
pub mod narrative;

use crate::error::EnrichmentError;
use crate::types::intake::{AddressQuery, Industry, ResolvedLocation};
use crate::types::profile::{EcosystemAssessment, NarrativeAssessment};

pub use ecosystem::{ecosystem_score_from_counts, DirectoryEcosystemProvider, FakeEcosystemProvider};
pub use location::DirectoryLocationResolver;
pub use narrative::HeuristicNarrativeAnalyzer;

pub trait LocationResolver: Send + Sync {
    fn resolve(&self, query: &AddressQuery) -> Result<ResolvedLocation, EnrichmentError>;
}

pub trait EcosystemProvider: Send + Sync {
    fn assess(&self, latitude: f64, longitude: f64) -> Result<EcosystemAssessment, EnrichmentError>;
}

pub trait NarrativeAnalyzer: Send + Sync {
    fn analyze(
        &self,
        product_description: &str,
        industry: Industry,
    ) -> Result<NarrativeAssessment, EnrichmentError>;
}
