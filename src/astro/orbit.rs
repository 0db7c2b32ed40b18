//! Orbit propagation interface.
//!
//! The core scheduler does not propagate orbits itself — that is the job
//! of an external astrodynamics collaborator. This module only defines the
//! trait boundary the rest of the crate consumes.

use chrono::{DateTime, Utc};

/// Cartesian position/velocity state at one instant, in whatever frame the
/// implementing [`Propagator`] documents (typically ECI).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
}

/// Propagates a satellite's orbit to produce state vectors over time.
///
/// A real implementation wraps an SGP4/numerical propagator and a force
/// model; this crate only needs the ability to ask "where was/will the
/// satellite be at time `t`."
pub trait Propagator: Send + Sync {
    fn state_at(&self, t: DateTime<Utc>) -> OrbitState;
}
