//! Access-window detection interface.

use geo::Polygon;

use crate::interval::{DateInterval, DateIntervalList};

use super::fov::FovGeometry;
use super::orbit::Propagator;

/// Detects the time windows during which a sensor's footprint intersects a
/// ground polygon.
///
/// Real event detection (root-finding on the rise/set geometry, sun-angle
/// events, eclipse events) belongs to the astrodynamics collaborator. This
/// crate consumes only the resulting access windows.
pub trait EventDetector: Send + Sync {
    /// Returns the windows within `search_window` during which `fov`'s
    /// footprint (propagated via `propagator`) overlaps `target`.
    fn find_access_windows(
        &self,
        propagator: &dyn Propagator,
        fov: &dyn FovGeometry,
        target: &Polygon<f64>,
        search_window: DateInterval,
    ) -> DateIntervalList;
}
