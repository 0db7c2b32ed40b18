//! pushbroom - fleet observation scheduling for pushbroom-sensor satellites.
//!
//! Computes access windows between a satellite fleet and a set of areas of
//! interest, scores them, and schedules observations within each sensor's
//! per-revolution duty-cycle budget via a per-batch mixed-integer linear
//! program maximizing total weighted scheduled duration.

pub mod aoi;
pub mod astro;
pub mod error;
pub mod interval;
pub mod preprocessor;
pub mod report;
pub mod satellite;
pub mod scheduler;
pub mod scoring;

#[cfg(test)]
mod test_utils;

pub use error::Error;

/// Identifier type used for scheduling artifacts.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
