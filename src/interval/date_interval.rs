//! Half-open calendar-date interval representation.

use std::fmt::Display;

use chrono::{DateTime, Duration, Utc};

/// A half-open range `[start, stop)` of absolute time.
///
/// Unlike a closed interval, a point exactly at `stop` is **not** contained.
/// This lets adjacent, non-overlapping intervals share a boundary (`a.stop
/// == b.start`) without ambiguity about which interval owns that instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    start: DateTime<Utc>,
    stop: DateTime<Utc>,
}

impl DateInterval {
    /// Creates interval `[start, stop)`.
    ///
    /// `stop < start` is not an error: the pair is canonicalized by swapping,
    /// so the resulting interval always satisfies `start <= stop`.
    pub fn new(start: DateTime<Utc>, stop: DateTime<Utc>) -> Self {
        if start <= stop {
            Self { start, stop }
        } else {
            Self { start: stop, stop: start }
        }
    }

    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub const fn stop(&self) -> DateTime<Utc> {
        self.stop
    }

    pub fn duration(&self) -> Duration {
        self.stop - self.start
    }

    /// True if the interval contains no instants (`start == stop`).
    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    /// Returns true if `position` ∈ `[start, stop)`.
    pub fn contains(&self, position: DateTime<Utc>) -> bool {
        self.start <= position && position < self.stop
    }

    /// Checks overlap with `other` using the given inclusivity of each
    /// interval's upper bound.
    ///
    /// `start_inclusive`/`stop_inclusive` govern whether touching at a
    /// single point counts as overlap. With the defaults used by
    /// [`DateInterval::overlaps`] (`true`/`false`), two intervals that only
    /// touch at a boundary (`a.stop == b.start`) do **not** overlap.
    pub fn overlaps_with(&self, other: &DateInterval, start_inclusive: bool, stop_inclusive: bool) -> bool {
        let lower_ok = if stop_inclusive {
            self.start <= other.stop
        } else {
            self.start < other.stop
        };
        let upper_ok = if start_inclusive {
            other.start <= self.stop
        } else {
            other.start < self.stop
        };
        lower_ok && upper_ok
    }

    /// Overlap check using the default semantics: `startInclusive = true`,
    /// `stopInclusive = false`. Touching intervals do not overlap.
    pub fn overlaps(&self, other: &DateInterval) -> bool {
        self.overlaps_with(other, true, false)
    }

    pub fn intersection(&self, other: &DateInterval) -> Option<DateInterval> {
        let start = self.start.max(other.start);
        let stop = self.stop.min(other.stop);
        if start < stop {
            Some(DateInterval::new(start, stop))
        } else {
            None
        }
    }

    /// The smallest interval covering both `self` and `other`. Unlike
    /// [`DateIntervalList::union`](super::DateIntervalList::union), this
    /// always succeeds even when the two don't overlap or touch — the
    /// result may cover a gap neither interval actually spans.
    pub fn union(&self, other: &DateInterval) -> DateInterval {
        DateInterval::new(self.start.min(other.start), self.stop.max(other.stop))
    }

    /// True if `self` ends at or before `other` begins, with no overlap.
    pub fn strictly_before(&self, other: &DateInterval) -> bool {
        self.stop <= other.start
    }

    /// True if `self` begins at or after `other` ends, with no overlap.
    pub fn strictly_after(&self, other: &DateInterval) -> bool {
        self.start >= other.stop
    }
}

impl Display for DateInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start.to_rfc3339(),
            self.stop.to_rfc3339()
        )
    }
}

/// Serializes as a `[startISO, stopISO]` pair, matching the wire format of
/// a schedule activity's `interval` field and a schedule's `intervals` list.
#[cfg(feature = "serde")]
impl serde::Serialize for DateInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.start.to_rfc3339())?;
        tup.serialize_element(&self.stop.to_rfc3339())?;
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DateInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (start, stop) = <(String, String) as serde::Deserialize>::deserialize(deserializer)?;
        let start = DateTime::parse_from_rfc3339(&start)
            .map_err(serde::de::Error::custom)?
            .with_timezone(&Utc);
        let stop = DateTime::parse_from_rfc3339(&stop)
            .map_err(serde::de::Error::custom)?
            .with_timezone(&Utc);
        Ok(Self::new(start, stop))
    }
}
