use crate::geodesy::{offset_to_lat_lon, LatLon};
use crate::math::angles::angular_difference;
use crate::math::stats::StatsHelper;
use crate::model::{ProbabilityField, ProbabilityPoint, SearchEnvelope, WindState};
use crate::prelude::{ensure_finite, SearchError, SearchResult};
use crate::sampling::{Rayleigh, VonMises};
use crate::telemetry::log::LogManager;
use rand::distributions::Distribution;
use rand::Rng;

/// Angular concentration of sampled points around the dominant direction.
pub const DEFAULT_KAPPA: f64 = 2.0;

const WIND_SATURATION_KN: f64 = 50.0;
const MAX_WIND_WEIGHT: f64 = 0.8;
const DISTANCE_DECAY: f64 = 1.5;
const BASE_WEIGHT: f64 = 0.7;
const ALIGNMENT_WEIGHT: f64 = 0.3;

/// Direction (radians, `(-π, π]`) in which the probability mass is biased.
///
/// Heading and wind direction are blended as unit vectors. Wind gains
/// weight linearly up to 50 kn and is capped at 80%, so the heading always
/// keeps at least 20% of the influence.
pub fn dominant_direction(heading_deg: f64, wind_direction_deg: f64, wind_speed_kn: f64) -> f64 {
    let wind_weight = (wind_speed_kn / WIND_SATURATION_KN).min(MAX_WIND_WEIGHT);
    let heading_weight = 1.0 - wind_weight;

    let (heading_y, heading_x) = heading_deg.to_radians().sin_cos();
    let (wind_y, wind_x) = wind_direction_deg.to_radians().sin_cos();

    let x = heading_weight * heading_x + wind_weight * wind_x;
    let y = heading_weight * heading_y + wind_weight * wind_y;
    y.atan2(x)
}

/// Samples a directionally biased probability field over a search envelope.
///
/// Radial offsets follow a Rayleigh distribution with half the radius as
/// scale, clipped to the radius; bearings follow a von Mises distribution
/// around [`dominant_direction`]. Each point is then weighted by an
/// exponential decay with distance and by its alignment with the dominant
/// direction, and the batch is normalized so its maximum is exactly 1.0.
///
/// The offset angle is used directly as the planar angle: `x = d·cos θ` is
/// applied to longitude and `y = d·sin θ` to latitude.
pub struct FieldGenerator {
    point_count: usize,
    kappa: f64,
    logger: LogManager,
}

impl FieldGenerator {
    pub fn new(point_count: usize) -> SearchResult<Self> {
        Self::with_concentration(point_count, DEFAULT_KAPPA)
    }

    pub fn with_concentration(point_count: usize, kappa: f64) -> SearchResult<Self> {
        if point_count == 0 {
            return Err(SearchError::InvalidParameter(
                "point count must be greater than zero".into(),
            ));
        }
        if !(kappa.is_finite() && kappa >= 0.0) {
            return Err(SearchError::InvalidParameter(format!(
                "concentration must be non-negative, got {}",
                kappa
            )));
        }
        Ok(Self {
            point_count,
            kappa,
            logger: LogManager::new("sarcore::field"),
        })
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        envelope: &SearchEnvelope,
        heading_deg: f64,
        wind: &WindState,
        rng: &mut R,
    ) -> SearchResult<ProbabilityField> {
        self.generate_around(
            envelope.center,
            envelope.radius_nm,
            heading_deg,
            wind.direction_deg,
            wind.speed_kn,
            envelope.glide_distance_nm,
            rng,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn generate_around<R: Rng + ?Sized>(
        &self,
        center: LatLon,
        radius_nm: f64,
        heading_deg: f64,
        wind_direction_deg: f64,
        wind_speed_kn: f64,
        glide_distance_nm: f64,
        rng: &mut R,
    ) -> SearchResult<ProbabilityField> {
        ensure_finite("center latitude", center.lat)?;
        ensure_finite("center longitude", center.lon)?;
        ensure_finite("heading", heading_deg)?;
        ensure_finite("wind direction", wind_direction_deg)?;
        if !(radius_nm.is_finite() && radius_nm >= 0.0) {
            return Err(SearchError::InvalidParameter(format!(
                "search radius must be non-negative, got {}",
                radius_nm
            )));
        }
        if !(wind_speed_kn.is_finite() && wind_speed_kn >= 0.0) {
            return Err(SearchError::InvalidParameter(format!(
                "wind speed must be non-negative, got {}",
                wind_speed_kn
            )));
        }

        let direction = dominant_direction(heading_deg, wind_direction_deg, wind_speed_kn);
        self.logger.detail(&format!(
            "dominant direction {:.4} rad, radius {:.2} nm, glide {:.2} nm",
            direction, radius_nm, glide_distance_nm
        ));

        let radial = Rayleigh::new(radius_nm / 2.0)?;
        let angular = VonMises::new(direction, self.kappa)?;

        let distances: Vec<f64> = (0..self.point_count)
            .map(|_| radial.sample(rng).clamp(0.0, radius_nm))
            .collect();
        let angles: Vec<f64> = (0..self.point_count)
            .map(|_| angular.sample(rng))
            .collect();

        let offsets: Vec<(f64, f64)> = distances
            .iter()
            .zip(&angles)
            .map(|(&d, &theta)| {
                let (sin, cos) = theta.sin_cos();
                (d * cos, d * sin)
            })
            .collect();

        let weights: Vec<f64> = offsets
            .iter()
            .map(|&(x, y)| point_weight(x, y, radius_nm, direction))
            .collect();
        let max_weight = StatsHelper::safe_max(&weights);

        let points: Vec<ProbabilityPoint> = offsets
            .iter()
            .zip(&weights)
            .map(|(&(x, y), &weight)| {
                let position = offset_to_lat_lon(center, x, y);
                ProbabilityPoint::new(position.lat, position.lon, weight / max_weight)
            })
            .collect();

        let probabilities: Vec<f64> = points.iter().map(|p| p.probability).collect();
        self.logger.record(&format!(
            "FieldGenerator points {} mean probability {:.4}",
            points.len(),
            StatsHelper::mean(&probabilities)
        ));

        Ok(ProbabilityField::new(points))
    }
}

fn point_weight(x: f64, y: f64, radius_nm: f64, direction: f64) -> f64 {
    // a zero radius puts every point on the center; leave distance out of it
    let distance_factor = if radius_nm > 0.0 {
        (-DISTANCE_DECAY * x.hypot(y) / radius_nm).exp()
    } else {
        1.0
    };
    // a point on the center has no bearing of its own and counts as aligned
    let angle_factor = if x == 0.0 && y == 0.0 {
        1.0
    } else {
        angular_difference(y.atan2(x), direction).cos().powi(2)
    };
    distance_factor * (BASE_WEIGHT + ALIGNMENT_WEIGHT * angle_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::PI;

    fn envelope(radius_nm: f64) -> SearchEnvelope {
        SearchEnvelope {
            center: LatLon::new(37.7749, -121.35),
            radius_nm,
            glide_distance_nm: radius_nm / 2.0,
        }
    }

    fn breeze() -> WindState {
        WindState {
            speed_kn: 15.0,
            direction_deg: 270.0,
        }
    }

    #[test]
    fn calm_wind_follows_heading_exactly() {
        for heading in [0.0_f64, 45.0, 90.0, 180.0, 270.0, 359.0] {
            let direction = dominant_direction(heading, 123.0, 0.0);
            let expected = heading.to_radians();
            assert!(angular_difference(direction, expected) < 1e-12);
        }
    }

    #[test]
    fn strong_wind_is_capped_at_eighty_percent() {
        let heading = 0.0_f64;
        let wind_direction = 90.0_f64;
        let direction = dominant_direction(heading, wind_direction, 80.0);
        let expected = (0.8_f64).atan2(0.2);
        assert_abs_diff_eq!(direction, expected, epsilon = 1e-12);
        assert!(direction < wind_direction.to_radians());

        // 50 kn and 200 kn both saturate at the same blend
        assert_abs_diff_eq!(
            dominant_direction(heading, wind_direction, 50.0),
            dominant_direction(heading, wind_direction, 200.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn field_has_requested_length_and_unit_maximum() {
        let generator = FieldGenerator::new(1_000).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let field = generator
            .generate(&envelope(168.63), 90.0, &breeze(), &mut rng)
            .unwrap();

        assert_eq!(field.len(), 1_000);
        assert_eq!(field.max_probability(), Some(1.0));
        assert!(field
            .iter()
            .all(|p| (0.0..=1.0).contains(&p.probability)));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let generator = FieldGenerator::new(250).unwrap();
        let first = generator
            .generate(&envelope(40.0), 45.0, &breeze(), &mut StdRng::seed_from_u64(9))
            .unwrap();
        let second = generator
            .generate(&envelope(40.0), 45.0, &breeze(), &mut StdRng::seed_from_u64(9))
            .unwrap();
        let other = generator
            .generate(&envelope(40.0), 45.0, &breeze(), &mut StdRng::seed_from_u64(10))
            .unwrap();
        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn sampled_offsets_never_leave_the_radius() {
        let radius = 25.0;
        let env = envelope(radius);
        let generator = FieldGenerator::new(5_000).unwrap();
        let field = generator
            .generate(&env, 200.0, &breeze(), &mut StdRng::seed_from_u64(5))
            .unwrap();

        let earth = crate::geodesy::EARTH_RADIUS_NM;
        let cos_lat = env.center.lat.to_radians().cos();
        for point in &field {
            let y = (point.lat - env.center.lat).to_radians() * earth;
            let x = (point.lon - env.center.lon).to_radians() * earth * cos_lat;
            assert!(x.hypot(y) <= radius * (1.0 + 1e-9), "offset {}", x.hypot(y));
        }
    }

    #[test]
    fn zero_radius_collapses_onto_center() {
        let env = envelope(0.0);
        let generator = FieldGenerator::new(50).unwrap();
        let field = generator
            .generate(&env, 90.0, &breeze(), &mut StdRng::seed_from_u64(1))
            .unwrap();
        for point in &field {
            assert_eq!(point.lat, env.center.lat);
            assert_eq!(point.lon, env.center.lon);
            assert_eq!(point.probability, 1.0);
        }
    }

    #[test]
    fn probability_mass_leans_toward_dominant_direction() {
        let generator = FieldGenerator::new(4_000).unwrap();
        let env = envelope(50.0);
        let calm = WindState::calm();
        // heading 0 is the +x axis of the planar offsets, i.e. increasing longitude
        let field = generator
            .generate(&env, 0.0, &calm, &mut StdRng::seed_from_u64(77))
            .unwrap();
        let leading = field.iter().filter(|p| p.lon > env.center.lon).count();
        assert!(leading > 3 * (field.len() - leading), "leading {leading}");
    }

    #[test]
    fn point_weight_blends_distance_and_alignment() {
        let aligned = point_weight(1.0, 0.0, 10.0, 0.0);
        let perpendicular = point_weight(0.0, 1.0, 10.0, 0.0);
        assert_abs_diff_eq!(aligned, (-0.15_f64).exp(), epsilon = 1e-12);
        assert_abs_diff_eq!(perpendicular, 0.7 * (-0.15_f64).exp(), epsilon = 1e-12);
        assert_abs_diff_eq!(point_weight(-1.0, 0.0, 10.0, 0.0), aligned, epsilon = 1e-12);
        assert_abs_diff_eq!(point_weight(0.0, 0.0, 10.0, PI / 3.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_points_is_a_caller_error() {
        assert!(matches!(
            FieldGenerator::new(0),
            Err(SearchError::InvalidParameter(_))
        ));
        assert!(FieldGenerator::with_concentration(10, -1.0).is_err());
    }

    #[test]
    fn negative_radius_is_rejected() {
        let generator = FieldGenerator::new(10).unwrap();
        let result = generator.generate_around(
            LatLon::new(0.0, 0.0),
            -1.0,
            0.0,
            0.0,
            0.0,
            0.0,
            &mut StdRng::seed_from_u64(0),
        );
        assert!(result.is_err());
    }
}
