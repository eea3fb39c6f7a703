use crate::geodesy::{destination_point, LatLon, FEET_PER_NM};
use crate::model::{AircraftPerformance, KinematicState, SearchEnvelope, WindState};
use crate::prelude::{SearchError, SearchResult};
use crate::telemetry::log::LogManager;

/// Share of the wind drift added to the radius as drift uncertainty.
const WIND_UNCERTAINTY_FACTOR: f64 = 0.2;

/// Intermediate quantities of a descent estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentProfile {
    pub time_to_impact_hr: f64,
    /// Distance covered along the heading before impact, nautical miles.
    pub horizontal_distance_nm: f64,
    /// Wind drift accumulated during the descent, nautical miles.
    pub wind_distance_nm: f64,
    pub glide_distance_nm: f64,
}

impl DescentProfile {
    /// Level or climbing aircraft are assumed to have entered an emergency
    /// descent at the type's emergency rate, the same as a zero vertical speed.
    pub fn compute(
        state: &KinematicState,
        wind: &WindState,
        perf: &AircraftPerformance,
    ) -> SearchResult<Self> {
        let altitude_nm = state.altitude_ft / FEET_PER_NM;
        let glide_distance_nm = altitude_nm * perf.glide_ratio;

        let descent_rate = if state.is_descending() {
            state.vertical_speed_fpm.abs()
        } else {
            perf.emergency_descent_rate_fpm
        };
        if descent_rate.is_nan() || descent_rate <= 0.0 {
            return Err(SearchError::InvalidParameter(format!(
                "descent rate must be positive to estimate time to impact, got {} ft/min",
                descent_rate
            )));
        }

        let time_to_impact_hr = state.altitude_ft / descent_rate / 60.0;

        Ok(Self {
            time_to_impact_hr,
            horizontal_distance_nm: state.ground_speed_kn * time_to_impact_hr,
            wind_distance_nm: wind.speed_kn * time_to_impact_hr,
            glide_distance_nm,
        })
    }
}

/// Projects the last known kinematics into a search center and radius.
pub struct EnvelopeEstimator {
    radius_multiplier: f64,
    logger: LogManager,
}

impl EnvelopeEstimator {
    pub fn new(radius_multiplier: f64) -> SearchResult<Self> {
        if !(radius_multiplier.is_finite() && radius_multiplier > 0.0) {
            return Err(SearchError::InvalidParameter(format!(
                "radius multiplier must be positive, got {}",
                radius_multiplier
            )));
        }
        Ok(Self {
            radius_multiplier,
            logger: LogManager::new("sarcore::envelope"),
        })
    }

    pub fn estimate(
        &self,
        state: &KinematicState,
        wind: &WindState,
        perf: &AircraftPerformance,
    ) -> SearchResult<SearchEnvelope> {
        state.validate()?;
        wind.validate()?;
        perf.validate()?;

        let profile = DescentProfile::compute(state, wind, perf)?;
        self.logger.detail(&format!(
            "time to impact {:.4} h, along-track {:.3} nm, drift {:.3} nm",
            profile.time_to_impact_hr, profile.horizontal_distance_nm, profile.wind_distance_nm
        ));

        let origin = LatLon::new(state.latitude, state.longitude);
        let along_track = destination_point(
            origin,
            state.heading_deg,
            profile.horizontal_distance_nm,
        );
        let center = destination_point(along_track, wind.direction_deg, profile.wind_distance_nm);

        let base_radius = profile
            .glide_distance_nm
            .max(profile.horizontal_distance_nm);
        let wind_uncertainty = WIND_UNCERTAINTY_FACTOR * profile.wind_distance_nm;
        let radius_nm = (base_radius + wind_uncertainty) * self.radius_multiplier;

        self.logger.record(&format!(
            "EnvelopeEstimator center ({:.6}, {:.6}) radius {:.2} nm glide {:.2} nm",
            center.lat, center.lon, radius_nm, profile.glide_distance_nm
        ));

        Ok(SearchEnvelope {
            center,
            radius_nm,
            glide_distance_nm: profile.glide_distance_nm,
        })
    }
}
