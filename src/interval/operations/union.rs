use super::super::date_interval::DateInterval;
use super::super::date_interval_list::DateIntervalList;

/// Merges `iv` into `result`, merging with the last entry when they overlap
/// or touch (`last.stop() == iv.start()`).
fn merge_into(result: &mut Vec<DateInterval>, iv: DateInterval) {
    if let Some(last) = result.last_mut() {
        if last.overlaps(&iv) || last.stop() == iv.start() {
            let new_stop = last.stop().max(iv.stop());
            *last = DateInterval::new(last.start(), new_stop);
            return;
        }
    }
    result.push(iv);
}

fn extend_merged(result: &mut Vec<DateInterval>, intervals: &[DateInterval]) {
    for iv in intervals {
        merge_into(result, *iv);
    }
}

/// Computes the union of two canonical interval lists via a two-pointer merge.
pub fn compute_union(a: &[DateInterval], b: &[DateInterval]) -> DateIntervalList {
    debug_assert!(super::assertions::is_canonical(a));
    debug_assert!(super::assertions::is_canonical(b));

    if a.is_empty() {
        return DateIntervalList::from_sorted_unchecked(b.to_vec());
    }
    if b.is_empty() {
        return DateIntervalList::from_sorted_unchecked(a.to_vec());
    }

    let mut result: Vec<DateInterval> = Vec::with_capacity(a.len() + b.len());
    let mut i = 0usize;
    let mut j = 0usize;

    while i < a.len() && j < b.len() {
        if a[i].start() > b[j].start() {
            merge_into(&mut result, b[j]);
            j += 1;
        } else {
            merge_into(&mut result, a[i]);
            i += 1;
        }
    }

    extend_merged(&mut result, &a[i..]);
    extend_merged(&mut result, &b[j..]);

    DateIntervalList::from_sorted_unchecked(result)
}
