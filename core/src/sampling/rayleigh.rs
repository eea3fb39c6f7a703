use crate::prelude::{SearchError, SearchResult};
use rand::distributions::Distribution;
use rand::Rng;

/// Rayleigh distribution with the given scale (mode), sampled by inverse CDF.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rayleigh {
    scale: f64,
}

impl Rayleigh {
    /// A zero scale is allowed and always yields zero.
    pub fn new(scale: f64) -> SearchResult<Self> {
        if !(scale.is_finite() && scale >= 0.0) {
            return Err(SearchError::InvalidParameter(format!(
                "rayleigh scale must be non-negative, got {}",
                scale
            )));
        }
        Ok(Self { scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution<f64> for Rayleigh {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // gen::<f64>() is in [0, 1), so ln_1p(-u) stays finite
        let u: f64 = rng.gen();
        self.scale * (-2.0 * (-u).ln_1p()).sqrt()
    }
}
