//! Sensor field-of-view ground footprint interface.

use chrono::{DateTime, Utc};
use geo::Polygon;

use super::orbit::OrbitState;

/// Projects a sensor's field of view onto the ground at a given instant.
///
/// A real implementation intersects the sensor cone with a reference
/// ellipsoid; this crate only consumes the resulting ground polygon.
pub trait FovGeometry: Send + Sync {
    fn footprint_at(&self, state: &OrbitState, t: DateTime<Utc>) -> Option<Polygon<f64>>;
}
