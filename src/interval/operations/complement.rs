use super::super::date_interval::DateInterval;
use super::super::date_interval_list::DateIntervalList;

/// Returns the complement of a canonical interval list within `[bounds.start(), bounds.stop())`.
pub fn compute_complement(canonical: Vec<DateInterval>, bounds: DateInterval) -> DateIntervalList {
    #[cfg(debug_assertions)]
    assert!(
        super::assertions::is_canonical(&canonical),
        "input `canonical` is not in canonical form"
    );

    if canonical.is_empty() {
        return DateIntervalList::from(bounds);
    }

    let mut result = Vec::with_capacity(canonical.len() + 1);
    let mut cursor = bounds.start();
    for iv in canonical {
        if iv.start() > cursor {
            result.push(DateInterval::new(cursor, iv.start()));
        }
        if iv.stop() > cursor {
            cursor = iv.stop();
        }
    }

    if cursor < bounds.stop() {
        result.push(DateInterval::new(cursor, bounds.stop()));
    }

    DateIntervalList::from_sorted_unchecked(result)
}

/// `a` minus `b`, equivalent to `a.intersection(&b.complement(bounds_of(a)))`
/// but computed directly by sweeping both lists together.
pub fn compute_subtract(a: &[DateInterval], b: &[DateInterval]) -> DateIntervalList {
    debug_assert!(super::assertions::is_canonical(a));
    debug_assert!(super::assertions::is_canonical(b));

    let mut result = Vec::with_capacity(a.len());
    for iv in a {
        let mut cursor = iv.start();
        for other in b {
            if other.stop() <= cursor || other.start() >= iv.stop() {
                continue;
            }
            if other.start() > cursor {
                result.push(DateInterval::new(cursor, other.start()));
            }
            if other.stop() > cursor {
                cursor = other.stop();
            }
        }
        if cursor < iv.stop() {
            result.push(DateInterval::new(cursor, iv.stop()));
        }
    }

    DateIntervalList::from(result)
}
