//! Spherical-earth navigation helpers.
//!
//! Two approximations live here and are deliberately kept apart:
//! [`great_circle`] solves the direct and inverse problems on a sphere and
//! is used for projecting the aircraft along its heading and for tracing the
//! search boundary, while [`local`] applies a flat-earth offset around a
//! reference point and is used only for placing sampled probability points.

pub mod great_circle;
pub mod local;

pub use great_circle::{destination_point, haversine_nm, initial_bearing};
pub use local::offset_to_lat_lon;

/// Mean Earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Feet in one nautical mile, as used for altitude conversion.
pub const FEET_PER_NM: f64 = 6076.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
