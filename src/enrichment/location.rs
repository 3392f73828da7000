use super::LocationResolver;
use crate::error::EnrichmentError;
use crate::types::config::PlaceConfig;
use crate::types::intake::{AddressQuery, ResolvedLocation};

#[derive(Debug, Clone, Default)]
pub struct DirectoryLocationResolver {
    places: Vec<PlaceConfig>,
}

impl DirectoryLocationResolver {
    pub fn new(places: Vec<PlaceConfig>) -> Self {
        Self { places }
    }

    fn matches(place: &PlaceConfig, query: &AddressQuery) -> bool {
        let same_city = place.city.trim().eq_ignore_ascii_case(query.city.trim());
        let same_state = place.state.trim().eq_ignore_ascii_case(query.state.trim());
        let postal_ok = match &place.postal_code {
            Some(code) => code.trim() == query.postal_code.trim(),
            None => true,
        };
        same_city && same_state && postal_ok
    }
}

impl LocationResolver for DirectoryLocationResolver {
    fn resolve(&self, query: &AddressQuery) -> Result<ResolvedLocation, EnrichmentError> {
        // Postal-code-specific entries win over city-wide ones.
        let place = self
            .places
            .iter()
            .filter(|place| Self::matches(place, query))
            .max_by_key(|place| place.postal_code.is_some())
            .ok_or_else(|| EnrichmentError::LocationNotFound(query.formatted()))?;

        Ok(ResolvedLocation {
            latitude: place.latitude,
            longitude: place.longitude,
            city: place.city.clone(),
            state: place.state.clone(),
            country: place.country.clone(),
            formatted: query.formatted(),
        })
    }
}
