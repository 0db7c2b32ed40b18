//! Per-revolution payload duty-cycle accounting.
//!
//! An interval's consumption is attributed entirely to the revolution
//! containing its midpoint, not split proportionally across a boundary it
//! might cross — this is the adopted resolution where the source this crate
//! is grown from was ambiguous (see DESIGN.md).

use std::collections::HashMap;

use crate::interval::{DateIndexed, DateInterval};
use crate::satellite::RevSchedule;

/// Tracks how many seconds of a sensor's duty cycle have been consumed in
/// each revolution, against a (possibly time-varying) per-rev budget.
#[derive(Debug, Clone)]
pub struct DutyCycleTracker {
    revs: RevSchedule,
    budget_s: DateIndexed<f64>,
    used_s: HashMap<i64, f64>,
}

impl DutyCycleTracker {
    pub fn new(revs: RevSchedule, budget_s: DateIndexed<f64>) -> Self {
        Self {
            revs,
            budget_s,
            used_s: HashMap::new(),
        }
    }

    fn midpoint(interval: DateInterval) -> chrono::DateTime<chrono::Utc> {
        interval.start() + interval.duration() / 2
    }

    /// Seconds already consumed in the revolution containing `at`.
    pub fn used(&self, at: chrono::DateTime<chrono::Utc>) -> f64 {
        *self.used_s.get(&self.revs.rev_index(at)).unwrap_or(&0.0)
    }

    /// A snapshot of consumption so far, keyed by [`RevSchedule::rev_index`].
    pub fn used_map(&self) -> &HashMap<i64, f64> {
        &self.used_s
    }

    /// The budget in effect for the revolution containing `at`.
    pub fn budget(&self, at: chrono::DateTime<chrono::Utc>) -> f64 {
        *self.budget_s.get(at).unwrap_or(&0.0)
    }

    /// Remaining duty cycle in the revolution containing `at`.
    pub fn remaining(&self, at: chrono::DateTime<chrono::Utc>) -> f64 {
        (self.budget(at) - self.used(at)).max(0.0)
    }

    /// True if an interval whose midpoint falls in a revolution with no
    /// remaining budget at all would necessarily be rejected there.
    pub fn can_fit(&self, interval: DateInterval) -> bool {
        let at = Self::midpoint(interval);
        interval.duration().num_milliseconds() as f64 / 1000.0 <= self.remaining(at) + 1e-9
    }

    /// Records `interval` as consumed, attributed in full to the revolution
    /// containing its midpoint.
    pub fn consume(&mut self, interval: DateInterval) {
        let at = Self::midpoint(interval);
        let idx = self.revs.rev_index(at);
        let seconds = interval.duration().num_milliseconds() as f64 / 1000.0;
        *self.used_s.entry(idx).or_insert(0.0) += seconds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn t(secs: i64) -> chrono::DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn exact_budget_scenario_five_of_ten() {
        // Rev length 10s, budget 5s. Two 5s accesses in the same rev: the
        // first fits exactly, the second has none left.
        let revs = RevSchedule::new(t(0), Duration::seconds(10));
        let mut tracker = DutyCycleTracker::new(revs, DateIndexed::new(5.0));

        let first = DateInterval::new(t(0), t(5));
        assert!(tracker.can_fit(first));
        tracker.consume(first);

        let second = DateInterval::new(t(5), t(10));
        assert!(!tracker.can_fit(second));
        assert_eq!(tracker.remaining(t(7)), 0.0);
    }

    #[test]
    fn budget_resets_each_revolution() {
        let revs = RevSchedule::new(t(0), Duration::seconds(10));
        let mut tracker = DutyCycleTracker::new(revs, DateIndexed::new(5.0));
        tracker.consume(DateInterval::new(t(0), t(5)));
        assert_eq!(tracker.remaining(t(15)), 5.0);
    }

    #[test]
    fn consumption_attributes_to_the_midpoints_revolution() {
        let revs = RevSchedule::new(t(0), Duration::seconds(10));
        let mut tracker = DutyCycleTracker::new(revs, DateIndexed::new(5.0));
        // [8, 13) has its midpoint at 10.5, inside rev 1, even though it
        // starts in rev 0.
        let interval = DateInterval::new(t(8), t(13));
        tracker.consume(interval);
        assert_eq!(tracker.remaining(t(1)), 5.0);
        assert_eq!(tracker.remaining(t(11)), 0.0);
    }
}
