//! Search-area estimation core for missing or emergency-descending aircraft.
//!
//! Two stateless stages run in order: the envelope estimator projects the
//! last known kinematics into a search center and radius, and the field
//! generator samples a directionally biased probability field over that
//! area. Everything else (catalog lookup, request validation, export) is
//! plumbing around those two computations.

pub mod aircraft;
pub mod estimation;
pub mod export;
pub mod geodesy;
pub mod math;
pub mod model;
pub mod prelude;
pub mod request;
pub mod sampling;
pub mod telemetry;

pub use estimation::{EnvelopeEstimator, FieldGenerator};
pub use model::{
    AircraftPerformance, KinematicState, ProbabilityField, ProbabilityPoint, SearchEnvelope,
    WindState,
};
pub use prelude::{SearchError, SearchResult};
