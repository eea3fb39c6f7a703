pub mod angles;
pub mod stats;

pub use stats::StatsHelper;
