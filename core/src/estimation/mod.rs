pub mod envelope;
pub mod field;

pub use envelope::{DescentProfile, EnvelopeEstimator};
pub use field::{dominant_direction, FieldGenerator, DEFAULT_KAPPA};
