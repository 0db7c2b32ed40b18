//! Deterministic test doubles for the astrodynamics collaborator traits.
//!
//! These are not physics: they let the rest of the crate (and its tests)
//! exercise the `Propagator` / `FovGeometry` / `EventDetector` boundary
//! without a real orbit propagator or ellipsoid intersection.

use chrono::{DateTime, Duration, Utc};
use geo::{polygon, Polygon};

use crate::interval::{DateInterval, DateIntervalList};

use super::fov::FovGeometry;
use super::orbit::{OrbitState, Propagator};
use super::events::EventDetector;

/// A propagator that always reports the same state, for tests that don't
/// care about orbital motion.
#[derive(Debug, Clone, Copy)]
pub struct ConstantPropagator(pub OrbitState);

impl Propagator for ConstantPropagator {
    fn state_at(&self, _t: DateTime<Utc>) -> OrbitState {
        self.0
    }
}

/// A FOV that always projects the same ground footprint.
#[derive(Debug, Clone)]
pub struct ConstantFov(pub Polygon<f64>);

impl ConstantFov {
    /// A small square footprint centered near the origin, useful as a
    /// default in tests that don't care about the exact shape.
    pub fn unit_square() -> Self {
        Self(polygon![
            (x: -1.0, y: -1.0),
            (x: 1.0, y: -1.0),
            (x: 1.0, y: 1.0),
            (x: -1.0, y: 1.0),
            (x: -1.0, y: -1.0),
        ])
    }
}

impl FovGeometry for ConstantFov {
    fn footprint_at(&self, _state: &OrbitState, _t: DateTime<Utc>) -> Option<Polygon<f64>> {
        Some(self.0.clone())
    }
}

/// Produces access windows on a fixed period/duration schedule, ignoring
/// the propagator, FOV, and target geometry entirely.
///
/// `period` is the repeat cadence (e.g. one orbital revolution); `pass_duration`
/// is how long each access lasts; `phase` offsets the first window from the
/// search window's start.
#[derive(Debug, Clone, Copy)]
pub struct PeriodicEventDetector {
    pub period: Duration,
    pub pass_duration: Duration,
    pub phase: Duration,
}

impl EventDetector for PeriodicEventDetector {
    fn find_access_windows(
        &self,
        _propagator: &dyn Propagator,
        _fov: &dyn FovGeometry,
        _target: &Polygon<f64>,
        search_window: DateInterval,
    ) -> DateIntervalList {
        let mut windows = Vec::new();
        let mut cursor = search_window.start() + self.phase;
        while cursor < search_window.stop() {
            let stop = (cursor + self.pass_duration).min(search_window.stop());
            if stop > cursor {
                windows.push(DateInterval::new(cursor, stop));
            }
            cursor = cursor + self.period;
        }
        DateIntervalList::from(windows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn periodic_detector_generates_evenly_spaced_windows() {
        let detector = PeriodicEventDetector {
            period: Duration::seconds(1000),
            pass_duration: Duration::seconds(100),
            phase: Duration::zero(),
        };
        let propagator = ConstantPropagator(OrbitState {
            position_km: [0.0; 3],
            velocity_km_s: [0.0; 3],
        });
        let fov = ConstantFov::unit_square();
        let target = ConstantFov::unit_square().0;

        let windows = detector.find_access_windows(
            &propagator,
            &fov,
            &target,
            DateInterval::new(t(0), t(3500)),
        );

        assert_eq!(windows.len(), 4);
        assert_eq!(windows[0], DateInterval::new(t(0), t(100)));
        assert_eq!(windows[1], DateInterval::new(t(1000), t(1100)));
        assert_eq!(windows[3], DateInterval::new(t(3000), t(3100)));
    }
}
