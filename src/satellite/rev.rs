//! Revolution boundaries, used to key per-rev duty-cycle budgets.
//!
//! A satellite's true revolution boundaries (ascending-node crossings) are
//! astrodynamics; this crate only needs a stable, monotonic way to bucket
//! time into revolutions, so it models them as a fixed period measured from
//! an epoch. A real propagator-backed implementation would report actual
//! ascending-node crossing times instead.

use chrono::{DateTime, Duration, Utc};

use crate::interval::DateInterval;

/// Fixed-period revolution boundaries anchored at `epoch`.
#[derive(Debug, Clone, Copy)]
pub struct RevSchedule {
    epoch: DateTime<Utc>,
    period: Duration,
}

impl RevSchedule {
    pub fn new(epoch: DateTime<Utc>, period: Duration) -> Self {
        assert!(period > Duration::zero(), "revolution period must be positive");
        Self { epoch, period }
    }

    /// The zero-based index of the revolution containing `t`.
    pub fn rev_index(&self, t: DateTime<Utc>) -> i64 {
        let elapsed_ms = (t - self.epoch).num_milliseconds();
        let period_ms = self.period.num_milliseconds();
        elapsed_ms.div_euclid(period_ms)
    }

    /// The half-open `[start, stop)` bounds of the revolution containing `t`.
    pub fn rev_bounds(&self, t: DateTime<Utc>) -> DateInterval {
        let idx = self.rev_index(t);
        let start = self.epoch + self.period * idx as i32;
        let stop = start + self.period;
        DateInterval::new(start, stop)
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
    fn rev_index_increments_per_period() {
        let sched = RevSchedule::new(t(0), Duration::seconds(1000));
        assert_eq!(sched.rev_index(t(0)), 0);
        assert_eq!(sched.rev_index(t(999)), 0);
        assert_eq!(sched.rev_index(t(1000)), 1);
        assert_eq!(sched.rev_index(t(2500)), 2);
    }

    #[test]
    fn rev_bounds_are_half_open() {
        let sched = RevSchedule::new(t(0), Duration::seconds(1000));
        let bounds = sched.rev_bounds(t(1500));
        assert_eq!(bounds, DateInterval::new(t(1000), t(2000)));
    }

    #[test]
    fn rev_index_handles_time_before_epoch() {
        let sched = RevSchedule::new(t(1000), Duration::seconds(1000));
        assert_eq!(sched.rev_index(t(0)), -1);
    }
}
