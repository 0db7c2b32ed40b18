//! Groups scored candidates by (satellite, sensor) and, within each group,
//! processes them in score-ordered batches: each batch's MILP sees the
//! duty-cycle budget and committed intervals left over from the one before
//! it, so later, lower-priority candidates compete only for what earlier
//! ones didn't take.

use std::cmp::Ordering;
use std::collections::HashMap;

use rayon::prelude::*;

use crate::interval::{DateIndexed, DateIntervalList};
use crate::satellite::RevSchedule;
use crate::scoring::ScoredAoi;

use super::duty_cycle::DutyCycleTracker;
use super::error::SchedulerError;
use super::model::solve_batch;
use super::result_code::ResultCode;
use super::schedule::{Schedule, ScheduleActivity};

/// Per-(satellite, sensor) scheduling configuration: the revolution
/// schedule used for duty-cycle bucketing, the duty-cycle budget itself,
/// and how many score-ordered candidates make up one solver batch.
#[derive(Clone)]
pub struct SensorConfig {
    pub revs: RevSchedule,
    pub duty_cycle_budget_s: DateIndexed<f64>,
    pub batch_size: usize,
}

const DEFAULT_BATCH_SIZE: usize = 16;

impl SensorConfig {
    pub fn new(revs: RevSchedule, duty_cycle_budget_s: DateIndexed<f64>) -> Self {
        Self {
            revs,
            duty_cycle_budget_s,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

/// One (satellite, sensor) key's solved output: the committed [`Schedule`]
/// (containing only [`ResultCode::Scheduled`] activities, per its literal
/// `{id, intervals, activities}` shape) plus every candidate's activity,
/// regardless of disposition, for reporting.
pub struct BatchResult {
    pub schedules: HashMap<(String, String), Schedule>,
    pub activities: Vec<ScheduleActivity>,
}

/// Solves every (satellite, sensor) batch present in `candidates`.
///
/// Candidates with non-positive score are dropped before scheduling
/// (scoring ordering rule). Candidates for a sensor with no matching
/// [`SensorConfig`] are recorded as [`ResultCode::NoData`] rather than
/// silently dropped.
pub fn schedule_all(candidates: &[ScoredAoi], configs: &HashMap<(String, String), SensorConfig>) -> BatchResult {
    let mut groups: HashMap<(String, String), Vec<ScoredAoi>> = HashMap::new();
    for c in candidates {
        if c.score <= 0.0 {
            continue;
        }
        groups.entry((c.satellite_id.clone(), c.sensor_id.clone())).or_default().push(c.clone());
    }

    let group_results: Vec<((String, String), Vec<ScheduleActivity>)> = groups
        .into_par_iter()
        .map(|(key, group)| {
            let activities = match configs.get(&key) {
                Some(config) => schedule_group(group, config),
                None => group.into_iter().map(no_data_activity).collect(),
            };
            (key, activities)
        })
        .collect();

    let mut schedules = HashMap::new();
    let mut all_activities = Vec::new();
    for (key, activities) in group_results {
        let committed: DateIntervalList =
            DateIntervalList::from(activities.iter().filter(|a| a.result == ResultCode::Scheduled).map(|a| a.interval).collect::<Vec<_>>());
        let scheduled_only: Vec<ScheduleActivity> = activities.iter().filter(|a| a.result == ResultCode::Scheduled).cloned().collect();
        let id = format!("{}/{}", key.0, key.1);
        match Schedule::new(id).with_intervals(committed).with_activities(scheduled_only) {
            Ok(schedule) => {
                schedules.insert(key, schedule);
            }
            Err(err) => {
                tracing::warn!(satellite = %key.0, sensor = %key.1, error = %err, "solver produced an overlapping activity set");
                schedules.insert(key, Schedule::new(format!("{}/{}", key.0, key.1)));
            }
        }
        all_activities.extend(activities);
    }
    BatchResult { schedules, activities: all_activities }
}

fn no_data_activity(c: ScoredAoi) -> ScheduleActivity {
    ScheduleActivity {
        id: crate::generate_id(),
        satellite_id: c.satellite_id,
        sensor_id: c.sensor_id,
        aoi_id: c.aoi_id,
        interval: c.window,
        score: c.score,
        priority: c.priority,
        country: c.country,
        continent: c.continent,
        result: ResultCode::NoData,
    }
}

/// Orders one group's candidates by descending score, ties broken by
/// ascending AOI id (then by window start, for full determinism among a
/// single AOI's own access windows), chunks them into score-ordered
/// batches, and solves each batch's MILP against the duty-cycle budget and
/// committed intervals carried forward from the previous one.
fn schedule_group(mut ordered: Vec<ScoredAoi>, config: &SensorConfig) -> Vec<ScheduleActivity> {
    ordered.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.aoi_id.cmp(&b.aoi_id))
            .then_with(|| a.window.start().cmp(&b.window.start()))
    });

    let mut tracker = DutyCycleTracker::new(config.revs, config.duty_cycle_budget_s.clone());
    let mut committed = DateIntervalList::new();
    let mut activities: Vec<ScheduleActivity> = Vec::new();
    let mut scheduled = vec![false; ordered.len()];

    // The LP objective alone can't express "prefer the earlier-ranked
    // candidate when two tie exactly" — a pure max-weighted-duration
    // solver is free to pick either. Perturbing each candidate's solver
    // weight by a rank-proportional epsilon (score order already matches
    // the (desc score, asc id) tie-break) breaks those ties deterministically
    // in favor of the higher-priority candidate without moving any solution
    // whose scores genuinely differ.
    let max_score = ordered.iter().map(|c| c.score).fold(f64::MIN_POSITIVE, f64::max);
    let tie_break_eps = max_score * 1e-12;

    let batch_size = config.batch_size.max(1);
    for (batch_idx, batch) in ordered.chunks(batch_size).enumerate() {
        let base = batch_idx * batch_size;

        // Residual windows after subtracting everything committed by prior
        // batches; a candidate with no residual is left to the bonusing
        // pass below rather than handed an empty problem to solve.
        let mut segments: Vec<ScoredAoi> = Vec::new();
        let mut segment_source: Vec<usize> = Vec::new();
        for (offset, c) in batch.iter().enumerate() {
            let rank = base + offset;
            let residual = DateIntervalList::from(vec![c.window]).subtract(&committed);
            for piece in residual.as_slice() {
                segments.push(ScoredAoi {
                    window: *piece,
                    score: c.score - tie_break_eps * rank as f64,
                    ..c.clone()
                });
                segment_source.push(rank);
            }
        }
        if segments.is_empty() {
            continue;
        }

        let used_snapshot = tracker.used_map().clone();
        let budget_fn = |at: chrono::DateTime<chrono::Utc>| tracker.budget(at);
        match solve_batch(&segments, &config.revs, budget_fn, &used_snapshot) {
            Ok(solved) => {
                for s in &solved {
                    let global = segment_source[s.candidate_index];
                    let c = &ordered[global];
                    tracker.consume(s.interval);
                    committed.push(s.interval);
                    scheduled[global] = true;
                    activities.push(ScheduleActivity {
                        id: crate::generate_id(),
                        satellite_id: c.satellite_id.clone(),
                        sensor_id: c.sensor_id.clone(),
                        aoi_id: c.aoi_id.clone(),
                        interval: s.interval,
                        score: c.score,
                        priority: c.priority,
                        country: c.country.clone(),
                        continent: c.continent.clone(),
                        result: ResultCode::Scheduled,
                    });
                }
            }
            Err(SchedulerError::EmptyBatch) => {}
            Err(err) => {
                tracing::warn!(error = %err, "batch solve failed");
                for (offset, c) in batch.iter().enumerate() {
                    let global = base + offset;
                    scheduled[global] = true;
                    activities.push(ScheduleActivity {
                        id: crate::generate_id(),
                        satellite_id: c.satellite_id.clone(),
                        sensor_id: c.sensor_id.clone(),
                        aoi_id: c.aoi_id.clone(),
                        interval: c.window,
                        score: c.score,
                        priority: c.priority,
                        country: c.country.clone(),
                        continent: c.continent.clone(),
                        result: ResultCode::SolverInfeasibleSolution,
                    });
                }
            }
        }
    }

    // Bonusing pass: a candidate that never got a scheduled activity is
    // ALREADY_SCHEDULED if its original window overlaps the final committed
    // set, otherwise EXCEEDED_PAYLOAD_DUTY_CYCLE — the solver's degenerate
    // outcome doesn't distinguish "lost the mutual-exclusion tie-break"
    // from "ran out of duty-cycle budget", so this pass is what tells them
    // apart after the fact.
    for (i, c) in ordered.iter().enumerate() {
        if scheduled[i] {
            continue;
        }
        let result = if committed.iter().any(|committed_interval| committed_interval.overlaps(&c.window)) {
            ResultCode::AlreadyScheduled
        } else {
            ResultCode::ExceededPayloadDutyCycle
        };
        activities.push(ScheduleActivity {
            id: crate::generate_id(),
            satellite_id: c.satellite_id.clone(),
            sensor_id: c.sensor_id.clone(),
            aoi_id: c.aoi_id.clone(),
            interval: c.window,
            score: c.score,
            priority: c.priority,
            country: c.country.clone(),
            continent: c.continent.clone(),
            result,
        });
    }

    activities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::DateInterval;
    use chrono::{Duration, TimeZone, Utc};

    fn t(secs: i64) -> chrono::DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn candidate(aoi: &str, start: i64, stop: i64, score: f64) -> ScoredAoi {
        ScoredAoi {
            satellite_id: "sat-1".into(),
            sensor_id: "sensor-1".into(),
            aoi_id: aoi.into(),
            window: DateInterval::new(t(start), t(stop)),
            score,
            priority: 1.0,
            country: None,
            continent: None,
        }
    }

    fn config() -> SensorConfig {
        SensorConfig::new(RevSchedule::new(t(0), Duration::seconds(6000)), DateIndexed::new(300.0))
    }

    #[test]
    fn exactly_five_of_ten_equal_accesses_scheduled_in_id_order() {
        // Spec scenario: 10 equal-score, equal-duration (60s) accesses in
        // one rev, duty-cycle budget of 300s. Exactly 5 fit; the surviving
        // 5 are the ones earliest in (score desc, id asc) order.
        let candidates: Vec<ScoredAoi> = (0..10)
            .map(|i| candidate(&format!("aoi-{i}"), i * 100, i * 100 + 60, 1.0))
            .collect();

        let mut configs = HashMap::new();
        configs.insert(("sat-1".to_string(), "sensor-1".to_string()), config());

        let result = schedule_all(&candidates, &configs);
        let scheduled: Vec<_> = result
            .activities
            .iter()
            .filter(|a| a.result == ResultCode::Scheduled)
            .map(|a| a.aoi_id.clone())
            .collect();
        assert_eq!(scheduled.len(), 5);
        for i in 0..5 {
            assert!(scheduled.contains(&format!("aoi-{i}")));
        }
        let exceeded = result.activities.iter().filter(|a| a.result == ResultCode::ExceededPayloadDutyCycle).count();
        assert_eq!(exceeded, 5);

        let key = ("sat-1".to_string(), "sensor-1".to_string());
        let schedule = result.schedules.get(&key).unwrap();
        assert_eq!(schedule.activities().len(), 5);
    }

    #[test]
    fn overlapping_equal_score_candidates_tie_break_by_ascending_id() {
        // Identical windows leave the solver no room to trim around each
        // other: exactly one must go fully degenerate, and the tie-break
        // picks the lower id.
        let candidates = vec![candidate("b", 0, 100, 1.0), candidate("a", 0, 100, 1.0)];

        let mut configs = HashMap::new();
        configs.insert(("sat-1".to_string(), "sensor-1".to_string()), config());

        let result = schedule_all(&candidates, &configs);
        let scheduled: Vec<_> = result.activities.iter().filter(|a| a.result == ResultCode::Scheduled).collect();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].aoi_id, "a");

        let loser = result.activities.iter().find(|a| a.aoi_id == "b").unwrap();
        assert_eq!(loser.result, ResultCode::AlreadyScheduled);
    }

    #[test]
    fn unconfigured_sensor_yields_no_data() {
        let candidates = vec![candidate("a", 0, 100, 1.0)];
        let result = schedule_all(&candidates, &HashMap::new());
        assert_eq!(result.activities.len(), 1);
        assert_eq!(result.activities[0].result, ResultCode::NoData);
    }
}
