//! Astrodynamics collaborator boundary.
//!
//! Orbit propagation, frame conversions, reference-ellipsoid math, and
//! field-of-view/event geometry are owned by an external collaborator.
//! This module defines only the trait interfaces the scheduling core
//! consumes, plus deterministic test doubles.

pub mod events;
pub mod fov;
pub mod frames;
pub mod orbit;
pub mod testdouble;

pub use events::EventDetector;
pub use fov::FovGeometry;
pub use frames::Frame;
pub use orbit::{OrbitState, Propagator};
