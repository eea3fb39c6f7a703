use crate::prelude::{ensure_finite, SearchError, SearchResult};
use serde::{Deserialize, Serialize};

/// Last known position and flight state of the aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub latitude: f64,
    pub longitude: f64,
    /// Feet above sea level.
    pub altitude_ft: f64,
    /// Knots.
    pub ground_speed_kn: f64,
    /// Degrees true.
    pub heading_deg: f64,
    /// Feet per minute, negative while descending.
    pub vertical_speed_fpm: f64,
}

impl KinematicState {
    pub fn validate(&self) -> SearchResult<()> {
        ensure_finite("latitude", self.latitude)?;
        ensure_finite("longitude", self.longitude)?;
        ensure_finite("altitude", self.altitude_ft)?;
        ensure_finite("ground speed", self.ground_speed_kn)?;
        ensure_finite("heading", self.heading_deg)?;
        ensure_finite("vertical speed", self.vertical_speed_fpm)?;

        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SearchError::Validation(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SearchError::Validation(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        if self.altitude_ft < 0.0 {
            return Err(SearchError::Validation(format!(
                "altitude {} ft is negative",
                self.altitude_ft
            )));
        }
        if self.ground_speed_kn < 0.0 {
            return Err(SearchError::Validation(format!(
                "ground speed {} kn is negative",
                self.ground_speed_kn
            )));
        }
        check_direction("heading", self.heading_deg)
    }

    pub fn is_descending(&self) -> bool {
        self.vertical_speed_fpm < 0.0
    }
}

/// Wind acting on the descending aircraft. `direction_deg` is the direction
/// the wind blows toward, on the same convention as heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindState {
    pub speed_kn: f64,
    pub direction_deg: f64,
}

impl WindState {
    pub fn calm() -> Self {
        Self {
            speed_kn: 0.0,
            direction_deg: 0.0,
        }
    }

    pub fn validate(&self) -> SearchResult<()> {
        ensure_finite("wind speed", self.speed_kn)?;
        ensure_finite("wind direction", self.direction_deg)?;
        if self.speed_kn < 0.0 {
            return Err(SearchError::Validation(format!(
                "wind speed {} kn is negative",
                self.speed_kn
            )));
        }
        check_direction("wind direction", self.direction_deg)
    }
}

/// Performance figures for one aircraft class.
///
/// Only `glide_ratio` and `emergency_descent_rate_fpm` feed the estimator;
/// the remaining fields are reference data reported alongside results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftPerformance {
    pub glide_ratio: f64,
    pub emergency_descent_rate_fpm: f64,
    #[serde(default)]
    pub max_range_nm: f64,
    #[serde(default)]
    pub cruise_speed_kn: f64,
    #[serde(default)]
    pub fuel_endurance_hr: f64,
}

impl AircraftPerformance {
    pub fn new(glide_ratio: f64, emergency_descent_rate_fpm: f64) -> Self {
        Self {
            glide_ratio,
            emergency_descent_rate_fpm,
            max_range_nm: 0.0,
            cruise_speed_kn: 0.0,
            fuel_endurance_hr: 0.0,
        }
    }

    pub fn validate(&self) -> SearchResult<()> {
        if !(self.glide_ratio.is_finite() && self.glide_ratio > 0.0) {
            return Err(SearchError::InvalidParameter(format!(
                "glide ratio must be positive, got {}",
                self.glide_ratio
            )));
        }
        if !(self.emergency_descent_rate_fpm.is_finite() && self.emergency_descent_rate_fpm > 0.0)
        {
            return Err(SearchError::InvalidParameter(format!(
                "emergency descent rate must be positive, got {} ft/min",
                self.emergency_descent_rate_fpm
            )));
        }
        Ok(())
    }
}

// 360 is accepted as a synonym for north.
fn check_direction(name: &str, degrees: f64) -> SearchResult<()> {
    if (0.0..=360.0).contains(&degrees) {
        Ok(())
    } else {
        Err(SearchError::Validation(format!(
            "{} {} outside [0, 360]",
            name, degrees
        )))
    }
}
