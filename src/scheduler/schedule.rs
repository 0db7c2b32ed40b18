//! The scheduled output: a time-ordered, non-overlapping set of activities.

use crate::interval::{DateInterval, DateIntervalList};

use super::error::ScheduleError;
use super::result_code::ResultCode;

/// One scheduled (or rejected) observation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleActivity {
    pub id: String,
    pub satellite_id: String,
    pub sensor_id: String,
    pub aoi_id: String,
    pub interval: DateInterval,
    pub score: f64,
    pub priority: f64,
    pub country: Option<String>,
    pub continent: Option<String>,
    pub result: ResultCode,
}

/// A `(satellite, payload)` timeline: a committed, non-overlapping interval
/// list and the sorted activity list that produced it.
///
/// Mutating methods (`with_intervals`, `add_intervals`, `with_activities`)
/// return a new instance rather than mutating in place, matching the
/// persistent-update convention used elsewhere for value types in this
/// crate.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    id: String,
    intervals: DateIntervalList,
    activities: Vec<ScheduleActivity>,
}

impl Schedule {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            intervals: DateIntervalList::new(),
            activities: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn intervals(&self) -> &DateIntervalList {
        &self.intervals
    }

    pub fn activities(&self) -> &[ScheduleActivity] {
        &self.activities
    }

    /// Returns a new `Schedule` with `intervals` replacing the current
    /// committed interval list.
    pub fn with_intervals(&self, intervals: DateIntervalList) -> Self {
        Self {
            id: self.id.clone(),
            intervals,
            activities: self.activities.clone(),
        }
    }

    /// Returns a new `Schedule` with `intervals` merged into the current
    /// committed interval list.
    pub fn add_intervals(&self, intervals: &DateIntervalList) -> Self {
        Self {
            id: self.id.clone(),
            intervals: self.intervals.union(intervals),
            activities: self.activities.clone(),
        }
    }

    /// Returns a new `Schedule` with `activities` as its activity list,
    /// sorted ascending by interval start. Rejects a set whose intervals
    /// are not pairwise non-overlapping.
    pub fn with_activities(&self, mut activities: Vec<ScheduleActivity>) -> Result<Self, ScheduleError> {
        activities.sort_by_key(|a| a.interval.start());
        for pair in activities.windows(2) {
            if pair[0].interval.overlaps(&pair[1].interval) {
                return Err(ScheduleError::OverlapsExisting {
                    new_id: pair[1].id.clone(),
                    existing_id: pair[0].id.clone(),
                });
            }
        }
        Ok(Self {
            id: self.id.clone(),
            intervals: self.intervals.clone(),
            activities,
        })
    }
}
