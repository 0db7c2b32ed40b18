use super::super::date_interval::DateInterval;
use super::super::date_interval_list::DateIntervalList;

/// Computes the intersection of two canonical interval lists via a
/// two-pointer merge, advancing whichever interval ends first (ties advance
/// both).
pub fn compute_intersection(a: &[DateInterval], b: &[DateInterval]) -> DateIntervalList {
    debug_assert!(super::assertions::is_canonical(a));
    debug_assert!(super::assertions::is_canonical(b));

    if a.is_empty() || b.is_empty() {
        return DateIntervalList::new();
    }

    let mut result = Vec::with_capacity(a.len().min(b.len()));
    let mut i = 0usize;
    let mut j = 0usize;

    while i < a.len() && j < b.len() {
        let ia = &a[i];
        let ib = &b[j];

        if let Some(overlap) = ia.intersection(ib) {
            result.push(overlap);
        }

        if ia.stop() < ib.stop() {
            i += 1;
        } else if ia.stop() > ib.stop() {
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }

    DateIntervalList::from_sorted_unchecked(result)
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
    fn intersection_disjoint() {
        let a = vec![iv(0, 10)];
        let b = vec![iv(20, 30)];
        assert!(compute_intersection(&a, &b).is_empty());
    }

    #[test]
    fn intersection_partial_overlap() {
        let a = vec![iv(0, 50)];
        let b = vec![iv(30, 80)];
        let result = compute_intersection(&a, &b);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0], iv(30, 50));
    }

    #[test]
    fn intersection_touching_endpoints_is_empty() {
        let a = vec![iv(0, 50)];
        let b = vec![iv(50, 100)];
        assert!(compute_intersection(&a, &b).is_empty());
    }

    #[test]
    fn intersection_multiple_intervals() {
        let a = vec![iv(0, 30), iv(50, 80)];
        let b = vec![iv(10, 60)];
        let result = compute_intersection(&a, &b);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], iv(10, 30));
        assert_eq!(result[1], iv(50, 60));
    }
}
