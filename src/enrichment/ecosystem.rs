use super::EcosystemProvider;
use crate::error::EnrichmentError;
use crate::types::config::PlaceConfig;
use crate::types::profile::EcosystemAssessment;
use crate::types::scoring::Score;

const EARTH_RADIUS_KM: f64 = 6371.0;

pub fn ecosystem_score_from_counts(
    innovation_hubs: u32,
    vc_firms: u32,
    accelerators: u32,
    coworking_spaces: u32,
) -> Score {
    let raw = u64::from(innovation_hubs) * 5
        + u64::from(vc_firms) * 3
        + u64::from(accelerators) * 7
        + u64::from(coworking_spaces) * 2;
    // raw / 1.5 == 2 * raw / 3, rounded
    let rounded = (raw * 4 + 3) / 6;
    Score::try_from(rounded.min(100)).unwrap_or(100)
}

pub fn haversine_km(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let d_lat = (lat_b - lat_a).to_radians();
    let d_lon = (lon_b - lon_a).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat_a.to_radians().cos() * lat_b.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

#[derive(Debug, Clone)]
pub struct DirectoryEcosystemProvider {
    places: Vec<PlaceConfig>,
    radius_km: f64,
}

impl DirectoryEcosystemProvider {
    pub fn new(places: Vec<PlaceConfig>, radius_km: f64) -> Self {
        Self { places, radius_km }
    }
}

impl EcosystemProvider for DirectoryEcosystemProvider {
    fn assess(&self, latitude: f64, longitude: f64) -> Result<EcosystemAssessment, EnrichmentError> {
        let nearest = self
            .places
            .iter()
            .map(|place| {
                (
                    place,
                    haversine_km(latitude, longitude, place.latitude, place.longitude),
                )
            })
            .filter(|(_, distance)| *distance <= self.radius_km)
            .min_by(|(_, a), (_, b)| a.total_cmp(b));

        let (place, distance) = nearest.ok_or(EnrichmentError::NoEcosystemData {
            latitude,
            longitude,
            radius_km: self.radius_km,
        })?;
        tracing::debug!(city = %place.city, distance_km = distance, "matched ecosystem place");

        Ok(EcosystemAssessment {
            innovation_hubs: place.innovation_hubs,
            vc_firms: place.vc_firms,
            accelerators: place.accelerators,
            coworking_spaces: place.coworking_spaces,
            ecosystem_score: ecosystem_score_from_counts(
                place.innovation_hubs,
                place.vc_firms,
                place.accelerators,
                place.coworking_spaces,
            ),
        })
    }
}

#[derive(Debug, Clone)]
pub struct FakeEcosystemProvider {
    outcome: Result<EcosystemAssessment, EnrichmentError>,
}

impl FakeEcosystemProvider {
    pub fn returning(assessment: EcosystemAssessment) -> Self {
        Self {
            outcome: Ok(assessment),
        }
    }

    pub fn with_score(score: Score) -> Self {
        Self::returning(EcosystemAssessment::with_score(score))
    }

    pub fn failing(error: EnrichmentError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

impl EcosystemProvider for FakeEcosystemProvider {
    fn assess(&self, _latitude: f64, _longitude: f64) -> Result<EcosystemAssessment, EnrichmentError> {
        self.outcome.clone()
    }
}
