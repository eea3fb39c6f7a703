pub mod envelope;
pub mod field;
pub mod state;

pub use envelope::SearchEnvelope;
pub use field::{ProbabilityField, ProbabilityPoint};
pub use state::{AircraftPerformance, KinematicState, WindState};
