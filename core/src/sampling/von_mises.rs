use crate::math::angles::wrap_pi;
use crate::prelude::{SearchError, SearchResult};
use rand::distributions::Distribution;
use rand::Rng;
use std::f64::consts::PI;

/// Circular normal distribution on `[-π, π]` centered at `mu`.
///
/// Sampled with the Best & Fisher (1979) rejection scheme. Concentrations
/// below 1e-8 are treated as uniform on the circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VonMises {
    mu: f64,
    kappa: f64,
    s: f64,
}

impl VonMises {
    pub fn new(mu: f64, kappa: f64) -> SearchResult<Self> {
        if !mu.is_finite() {
            return Err(SearchError::InvalidParameter(format!(
                "von Mises mean must be finite, got {}",
                mu
            )));
        }
        if !(kappa.is_finite() && kappa >= 0.0) {
            return Err(SearchError::InvalidParameter(format!(
                "von Mises concentration must be non-negative, got {}",
                kappa
            )));
        }

        let s = if kappa < 1e-5 {
            // second-order expansion avoids cancellation for tiny kappa
            1.0 / kappa + kappa
        } else {
            let r = 1.0 + (1.0 + 4.0 * kappa * kappa).sqrt();
            let rho = (r - (2.0 * r).sqrt()) / (2.0 * kappa);
            (1.0 + rho * rho) / (2.0 * rho)
        };

        Ok(Self { mu, kappa, s })
    }
}

impl Distribution<f64> for VonMises {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.kappa < 1e-8 {
            return wrap_pi(self.mu + PI * (2.0 * rng.gen::<f64>() - 1.0));
        }

        let w = loop {
            let z = (PI * rng.gen::<f64>()).cos();
            let w = (1.0 + self.s * z) / (self.s + z);
            let y = self.kappa * (self.s - w);
            let v: f64 = rng.gen();
            if y * (2.0 - y) - v >= 0.0 || (y / v).ln() + 1.0 - y >= 0.0 {
                break w;
            }
        };

        let mut theta = w.clamp(-1.0, 1.0).acos();
        if rng.gen::<f64>() < 0.5 {
            theta = -theta;
        }
        wrap_pi(theta + self.mu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::angles::angular_difference;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(VonMises::new(0.0, -1.0).is_err());
        assert!(VonMises::new(f64::NAN, 2.0).is_err());
        assert!(VonMises::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn samples_stay_on_the_circle() {
        let dist = VonMises::new(3.0, 2.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5_000 {
            let angle = dist.sample(&mut rng);
            assert!((-PI..=PI).contains(&angle), "angle {angle} escaped");
        }
    }

    #[test]
    fn samples_cluster_around_mean() {
        let mu = 1.0;
        let dist = VonMises::new(mu, 2.0).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let n = 10_000;
        let (sum_sin, sum_cos) = (0..n).fold((0.0, 0.0), |(s, c), _| {
            let a = dist.sample(&mut rng);
            (s + a.sin(), c + a.cos())
        });
        let circular_mean = f64::atan2(sum_sin, sum_cos);
        assert!(angular_difference(circular_mean, mu) < 0.05);

        // mean resultant length for kappa = 2 is I1(2)/I0(2) ~= 0.698
        let resultant = (sum_sin * sum_sin + sum_cos * sum_cos).sqrt() / n as f64;
        assert!((resultant - 0.698).abs() < 0.02, "resultant {resultant}");
    }

    #[test]
    fn zero_concentration_is_uniform() {
        let dist = VonMises::new(0.0, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let n = 10_000;
        let forward = (0..n)
            .filter(|_| dist.sample(&mut rng).abs() < PI / 2.0)
            .count();
        let share = forward as f64 / n as f64;
        assert!((share - 0.5).abs() < 0.03, "share {share}");
    }
}
