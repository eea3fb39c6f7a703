use crate::geodesy::LatLon;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Derived search area: where to center the search and how far to reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchEnvelope {
    pub center: LatLon,
    /// Nautical miles.
    pub radius_nm: f64,
    /// Maximum unpowered glide distance, nautical miles.
    pub glide_distance_nm: f64,
}

impl SearchEnvelope {
    /// Total search area in square nautical miles.
    pub fn area_sq_nm(&self) -> f64 {
        PI * self.radius_nm * self.radius_nm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn area_is_circle_of_radius() {
        let envelope = SearchEnvelope {
            center: LatLon::new(0.0, 0.0),
            radius_nm: 10.0,
            glide_distance_nm: 5.0,
        };
        assert_relative_eq!(envelope.area_sq_nm(), 100.0 * PI);
    }
}
