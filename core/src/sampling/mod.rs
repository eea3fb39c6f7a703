//! Samplers for the radial and angular components of the probability field.
//!
//! Both implement [`rand::distributions::Distribution`], so the caller owns
//! the random source and seeded runs are reproducible.

pub mod rayleigh;
pub mod von_mises;

pub use rayleigh::Rayleigh;
pub use von_mises::VonMises;
