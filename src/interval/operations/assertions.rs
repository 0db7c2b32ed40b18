//! Canonical-form checks for interval lists.

use super::super::date_interval::DateInterval;

/// Returns true if `intervals` is canonical: sorted by start, and for every
/// adjacent pair `prev.stop() < curr.start()` strictly — no overlap, no
/// abutting.
pub fn is_canonical(intervals: &[DateInterval]) -> bool {
    intervals
        .windows(2)
        .all(|w| w[0].stop() < w[1].start())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn iv(a: i64, b: i64) -> DateInterval {
        DateInterval::new(t(a), t(b))
    }

    #[test]
    fn empty_is_canonical() {
        let intervals: Vec<DateInterval> = vec![];
        assert!(is_canonical(&intervals));
    }

    #[test]
    fn sorted_gapped_is_canonical() {
        assert!(is_canonical(&[iv(0, 10), iv(20, 30)]));
    }

    #[test]
    fn touching_is_not_canonical() {
        assert!(!is_canonical(&[iv(0, 10), iv(10, 20)]));
    }

    #[test]
    fn overlapping_is_not_canonical() {
        assert!(!is_canonical(&[iv(0, 30), iv(20, 50)]));
    }

    #[test]
    fn unsorted_is_not_canonical() {
        assert!(!is_canonical(&[iv(20, 30), iv(0, 10)]));
    }
}
