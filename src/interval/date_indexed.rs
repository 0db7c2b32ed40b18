//! A transition-timestamp-keyed map with floor lookup.
//!
//! `DateIndexed<V>` associates values with points in time such that a query
//! at any instant `t` returns the value that was in effect at or before `t`
//! — the most recent transition not after `t`. This is how per-rev
//! duty-cycle budgets are modeled: a budget can change value over time, and
//! every lookup needs "whatever budget was active at this instant."

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// Sentinel transition timestamp: the Unix epoch. Every `DateIndexed<V>`
/// carries a value effective from the epoch onward unless overridden by a
/// later transition, so a lookup never returns `None` once any value has
/// been set (including at construction).
pub fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(0, 0).expect("epoch timestamp is always valid")
}

/// A value that changes at known transition points in time.
#[derive(Debug, Clone, PartialEq)]
pub struct DateIndexed<V> {
    transitions: BTreeMap<DateTime<Utc>, V>,
}

impl<V: Clone> DateIndexed<V> {
    /// Creates a `DateIndexed` with `initial` in effect from the epoch.
    pub fn new(initial: V) -> Self {
        let mut transitions = BTreeMap::new();
        transitions.insert(epoch(), initial);
        Self { transitions }
    }

    /// Records that `value` takes effect at `at`, overriding anything
    /// already scheduled at exactly that instant.
    pub fn set(&mut self, at: DateTime<Utc>, value: V) {
        self.transitions.insert(at, value);
    }

    /// Returns the value in effect at `at`: the value of the latest
    /// transition at or before `at`.
    ///
    /// Always returns `Some` because the epoch sentinel guarantees a floor
    /// for any `at >= epoch()`; for `at` before the epoch this returns
    /// `None`.
    pub fn get(&self, at: DateTime<Utc>) -> Option<&V> {
        self.transitions.range(..=at).next_back().map(|(_, v)| v)
    }

    /// Iterates transitions in chronological order.
    pub fn transitions(&self) -> impl Iterator<Item = (&DateTime<Utc>, &V)> {
        self.transitions.iter()
    }
}
