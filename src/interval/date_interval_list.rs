//! A canonical container for sorted, non-overlapping, non-abutting intervals.
//!
//! [`DateIntervalList`] wraps a `Vec<DateInterval>` and guarantees the
//! **canonical invariant**: intervals are sorted by start, and for every
//! adjacent pair `i_k.stop() < i_{k+1}.start()` strictly — touching
//! intervals are merged into one, never left abutting.

use std::fmt::Display;
use std::ops::Deref;

use super::date_interval::DateInterval;
use super::error::IntervalError;

/// A sorted, canonical set of half-open [`DateInterval`]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DateIntervalList(Vec<DateInterval>);

impl DateIntervalList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Wraps a `Vec` that is already canonical, without re-normalizing.
    ///
    /// In debug builds this asserts the invariant.
    pub fn from_sorted_unchecked(vec: Vec<DateInterval>) -> Self {
        debug_assert!(
            super::operations::assertions::is_canonical(&vec),
            "DateIntervalList::from_sorted_unchecked called with non-canonical input"
        );
        Self(vec)
    }

    fn normalize(&mut self) {
        if self.0.len() <= 1 {
            return;
        }
        self.0.sort_by_key(|i| i.start());
        let mut merged: Vec<DateInterval> = Vec::with_capacity(self.0.len());
        for interval in self.0.drain(..) {
            if let Some(last) = merged.last_mut() {
                if last.stop() >= interval.start() {
                    if interval.stop() > last.stop() {
                        *last = DateInterval::new(last.start(), interval.stop());
                    }
                } else {
                    merged.push(interval);
                }
            } else {
                merged.push(interval);
            }
        }
        self.0 = merged;
    }

    /// Inserts an interval, maintaining the canonical invariant.
    pub fn push(&mut self, interval: DateInterval) {
        if self.0.is_empty() {
            self.0.push(interval);
            return;
        }
        if let Some(last) = self.0.last() {
            if interval.start() >= last.stop() {
                if interval.start() == last.stop() {
                    let last_idx = self.0.len() - 1;
                    self.0[last_idx] = DateInterval::new(self.0[last_idx].start(), interval.stop());
                } else {
                    self.0.push(interval);
                }
                return;
            }
        }
        self.0.push(interval);
        self.normalize();
    }

    pub fn extend_from_slice(&mut self, intervals: &[DateInterval]) {
        if intervals.is_empty() {
            return;
        }
        self.0.extend_from_slice(intervals);
        self.normalize();
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn retain<F: FnMut(&DateInterval) -> bool>(&mut self, f: F) {
        self.0.retain(f);
    }

    pub fn into_inner(self) -> Vec<DateInterval> {
        self.0
    }

    pub fn as_slice(&self) -> &[DateInterval] {
        &self.0
    }

    pub fn union(&self, other: &DateIntervalList) -> DateIntervalList {
        super::operations::compute_union(&self.0, &other.0)
    }

    pub fn intersection(&self, other: &DateIntervalList) -> DateIntervalList {
        super::operations::compute_intersection(&self.0, &other.0)
    }

    pub fn subtract(&self, other: &DateIntervalList) -> DateIntervalList {
        super::operations::compute_subtract(&self.0, &other.0)
    }

    /// Complement within `bounds`: the gaps of `bounds` not covered by `self`.
    pub fn complement(&self, bounds: DateInterval) -> DateIntervalList {
        super::operations::compute_complement(self.0.clone(), bounds)
    }

    /// The smallest interval covering every instant in the list: `min start`
    /// to `max stop`. Since the list is canonical (sorted, non-abutting),
    /// that's simply the first interval's start and the last interval's
    /// stop.
    pub fn span(&self) -> Result<DateInterval, IntervalError> {
        let first = self.0.first().ok_or(IntervalError::EmptyList)?;
        let last = self.0.last().expect("non-empty checked above");
        Ok(DateInterval::new(first.start(), last.stop()))
    }
}

impl Deref for DateIntervalList {
    type Target = [DateInterval];

    fn deref(&self) -> &[DateInterval] {
        &self.0
    }
}

impl AsRef<[DateInterval]> for DateIntervalList {
    fn as_ref(&self) -> &[DateInterval] {
        &self.0
    }
}

impl From<Vec<DateInterval>> for DateIntervalList {
    fn from(vec: Vec<DateInterval>) -> Self {
        let mut set = Self(vec);
        set.normalize();
        set
    }
}

impl From<DateInterval> for DateIntervalList {
    fn from(interval: DateInterval) -> Self {
        Self(vec![interval])
    }
}

impl FromIterator<DateInterval> for DateIntervalList {
    fn from_iter<I: IntoIterator<Item = DateInterval>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<DateInterval> for DateIntervalList {
    fn extend<I: IntoIterator<Item = DateInterval>>(&mut self, iter: I) {
        self.0.extend(iter);
        self.normalize();
    }
}

impl IntoIterator for DateIntervalList {
    type Item = DateInterval;
    type IntoIter = std::vec::IntoIter<DateInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DateIntervalList {
    type Item = &'a DateInterval;
    type IntoIter = std::slice::Iter<'a, DateInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for DateIntervalList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

impl PartialEq<Vec<DateInterval>> for DateIntervalList {
    fn eq(&self, other: &Vec<DateInterval>) -> bool {
        self.0 == *other
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DateIntervalList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DateIntervalList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = Vec::<DateInterval>::deserialize(deserializer)?;
        Ok(Self::from(vec))
    }
}
