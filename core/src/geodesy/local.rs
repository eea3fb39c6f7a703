use super::{LatLon, EARTH_RADIUS_NM};

/// Converts a planar offset around `center` (x east-ish, y north-ish, both
/// in nautical miles) into a position using a flat-earth approximation.
///
/// Only valid for offsets that are small compared to the Earth radius.
pub fn offset_to_lat_lon(center: LatLon, x_nm: f64, y_nm: f64) -> LatLon {
    let lat = center.lat + (y_nm / EARTH_RADIUS_NM).to_degrees();
    let lon = center.lon + (x_nm / (EARTH_RADIUS_NM * center.lat.to_radians().cos())).to_degrees();
    LatLon::new(lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::haversine_nm;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_offset_returns_center() {
        let center = LatLon::new(37.0, -122.0);
        assert_eq!(offset_to_lat_lon(center, 0.0, 0.0), center);
    }

    #[test]
    fn small_offsets_agree_with_great_circle_distance() {
        let center = LatLon::new(45.0, 7.0);
        let moved = offset_to_lat_lon(center, 3.0, 4.0);
        assert_abs_diff_eq!(haversine_nm(center, moved), 5.0, epsilon = 0.01);
    }

    #[test]
    fn longitude_offset_widens_with_latitude() {
        let equator = offset_to_lat_lon(LatLon::new(0.0, 0.0), 10.0, 0.0);
        let north = offset_to_lat_lon(LatLon::new(60.0, 0.0), 10.0, 0.0);
        assert_abs_diff_eq!(north.lon, equator.lon * 2.0, epsilon = 1e-9);
    }
}
