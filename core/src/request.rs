use crate::aircraft::{self, AircraftProfile};
use crate::model::{KinematicState, WindState};
use crate::prelude::{SearchError, SearchResult};
use crate::telemetry::log::LogManager;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const RECOMMENDED_MULTIPLIER: RangeInclusive<f64> = 1.0..=5.0;
pub const RECOMMENDED_POINTS: RangeInclusive<usize> = 100..=5000;

/// Everything a caller supplies to start a search estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub aircraft_type: String,
    pub state: KinematicState,
    pub wind: WindState,
    pub radius_multiplier: f64,
    pub point_count: usize,
}

/// A request that passed validation, with its aircraft resolved.
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
    pub aircraft: &'static AircraftProfile,
    /// True when the requested type was unknown and the default was used.
    pub fell_back: bool,
    pub state: KinematicState,
    pub wind: WindState,
    pub radius_multiplier: f64,
    pub point_count: usize,
}

impl SearchRequest {
    /// Validates ranges and resolves the aircraft type.
    ///
    /// With `strict` set an unknown aircraft type is a validation error,
    /// otherwise it resolves to the catalog default. Values outside the
    /// recommended multiplier and point ranges are only logged.
    pub fn validate(&self, strict: bool) -> SearchResult<ResolvedRequest> {
        let logger = LogManager::new("sarcore::request");

        self.state.validate()?;
        self.wind.validate()?;

        if !(self.radius_multiplier.is_finite() && self.radius_multiplier > 0.0) {
            return Err(SearchError::Validation(format!(
                "radius multiplier must be positive, got {}",
                self.radius_multiplier
            )));
        }
        if self.point_count == 0 {
            return Err(SearchError::Validation(
                "point count must be greater than zero".into(),
            ));
        }
        if !RECOMMENDED_MULTIPLIER.contains(&self.radius_multiplier) {
            logger.caution(&format!(
                "radius multiplier {} outside recommended range 1.0-5.0",
                self.radius_multiplier
            ));
        }
        if !RECOMMENDED_POINTS.contains(&self.point_count) {
            logger.caution(&format!(
                "point count {} outside recommended range 100-5000",
                self.point_count
            ));
        }

        let (profile, fell_back) = match aircraft::find(&self.aircraft_type) {
            Some(profile) => (profile, false),
            None if strict => {
                return Err(SearchError::Validation(format!(
                    "unknown aircraft type '{}'",
                    self.aircraft_type
                )))
            }
            None => {
                let fallback = aircraft::default_profile();
                logger.caution(&format!(
                    "unknown aircraft type '{}', using '{}'",
                    self.aircraft_type, fallback.name
                ));
                (fallback, true)
            }
        };

        Ok(ResolvedRequest {
            aircraft: profile,
            fell_back,
            state: self.state,
            wind: self.wind,
            radius_multiplier: self.radius_multiplier,
            point_count: self.point_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(aircraft_type: &str) -> SearchRequest {
        SearchRequest {
            aircraft_type: aircraft_type.into(),
            state: KinematicState {
                latitude: 40.7128,
                longitude: -74.0060,
                altitude_ft: 35_000.0,
                ground_speed_kn: 450.0,
                heading_deg: 90.0,
                vertical_speed_fpm: 0.0,
            },
            wind: WindState {
                speed_kn: 10.0,
                direction_deg: 45.0,
            },
            radius_multiplier: 2.0,
            point_count: 1000,
        }
    }

    #[test]
    fn known_aircraft_resolves_without_fallback() {
        let resolved = request("Wide-Body Airliner (Boeing 777)")
            .validate(true)
            .unwrap();
        assert!(!resolved.fell_back);
        assert_eq!(resolved.aircraft.performance.glide_ratio, 19.0);
    }

    #[test]
    fn unknown_aircraft_falls_back_unless_strict() {
        let lenient = request("TEST").validate(false).unwrap();
        assert!(lenient.fell_back);
        assert_eq!(lenient.aircraft.name, aircraft::DEFAULT_AIRCRAFT);

        assert!(matches!(
            request("TEST").validate(true),
            Err(SearchError::Validation(_))
        ));
    }

    #[test]
    fn out_of_recommended_range_is_not_an_error() {
        let mut req = request(aircraft::DEFAULT_AIRCRAFT);
        req.radius_multiplier = 8.0;
        req.point_count = 20;
        assert!(req.validate(false).is_ok());
    }

    #[test]
    fn malformed_inputs_fail_fast() {
        let mut req = request(aircraft::DEFAULT_AIRCRAFT);
        req.state.latitude = 120.0;
        assert!(req.validate(false).is_err());

        let mut req = request(aircraft::DEFAULT_AIRCRAFT);
        req.point_count = 0;
        assert!(req.validate(false).is_err());

        let mut req = request(aircraft::DEFAULT_AIRCRAFT);
        req.radius_multiplier = 0.0;
        assert!(req.validate(false).is_err());
    }
}
