//! Per-batch mixed-integer linear program: chooses start/stop times for a
//! set of candidate accesses on one (satellite, sensor) pair.
//!
//! Each candidate gets two continuous decision variables, `start_i` and
//! `stop_i`, bounded within its access window, plus a binary `scheduled_i`
//! indicator tied to its duration (`stop_i - start_i <= max_duration_i *
//! scheduled_i`): when `scheduled_i = 0` the candidate is forced degenerate
//! regardless of where `start_i`/`stop_i` land. Candidates whose windows
//! overlap get a binary ordering variable `b_ij` and a pair of big-M
//! constraints that force one to finish before the other starts — but only
//! when *both* sides are actually scheduled; big-M terms keyed on
//! `(1 - scheduled_i)`/`(1 - scheduled_j)` relax the ordering constraint
//! entirely the moment either side collapses, so a low-scoring candidate
//! nested inside a higher-scoring one's window can drop out without forcing
//! the surviving candidate to trim around where the dropped one used to be.
//! Per-revolution duty-cycle budgets become one linear constraint per rev
//! bucket. The objective maximizes total weighted scheduled duration.

use std::collections::HashMap;

use good_lp::{constraint, variable, Expression, ProblemVariables, Solution, SolverModel, Variable};

use crate::interval::DateInterval;
use crate::satellite::RevSchedule;
use crate::scoring::ScoredAoi;

use super::error::SchedulerError;

/// The resolved `[start, stop)` chosen for one candidate. A zero-duration
/// result means the solver chose not to schedule it.
#[derive(Debug, Clone, Copy)]
pub struct SolvedInterval {
    pub candidate_index: usize,
    pub interval: DateInterval,
}

/// Solves one batch. `duty_cycle_used_s` is the seconds already consumed in
/// each revolution (keyed by [`RevSchedule::rev_index`]) before this batch
/// runs; `duty_cycle_budget_s` is the budget for each such bucket.
///
/// Assumes every candidate's access window lies within a single revolution
/// (pushbroom passes are short relative to an orbital period); a window
/// spanning a revolution boundary is clamped to its first revolution.
pub fn solve_batch(
    candidates: &[ScoredAoi],
    revs: &RevSchedule,
    duty_cycle_budget_s: impl Fn(chrono::DateTime<chrono::Utc>) -> f64,
    duty_cycle_used_s: &HashMap<i64, f64>,
) -> Result<Vec<SolvedInterval>, SchedulerError> {
    if candidates.is_empty() {
        return Err(SchedulerError::EmptyBatch);
    }

    let epoch = candidates
        .iter()
        .map(|c| c.window.start())
        .min()
        .expect("non-empty candidates");
    let to_secs = |t: chrono::DateTime<chrono::Utc>| (t - epoch).num_milliseconds() as f64 / 1000.0;

    let horizon_end = candidates
        .iter()
        .map(|c| c.window.stop())
        .max()
        .expect("non-empty candidates");
    let big_m = to_secs(horizon_end) + 1.0;

    let mut vars = ProblemVariables::new();
    let mut starts = Vec::with_capacity(candidates.len());
    let mut stops = Vec::with_capacity(candidates.len());
    let mut scheduled = Vec::with_capacity(candidates.len());
    let mut max_durations = Vec::with_capacity(candidates.len());

    for c in candidates {
        let lo = to_secs(c.window.start());
        let hi = to_secs(c.window.stop());
        starts.push(vars.add(variable().min(lo).max(hi)));
        stops.push(vars.add(variable().min(lo).max(hi)));
        scheduled.push(vars.add(variable().binary()));
        max_durations.push(hi - lo);
    }

    // Overlapping candidate pairs each get a binary ordering variable,
    // declared up front alongside the continuous start/stop variables.
    let mut overlapping_pairs: Vec<(usize, usize, Variable)> = Vec::new();
    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            if candidates[i].window.overlaps(&candidates[j].window) {
                let b = vars.add(variable().binary());
                overlapping_pairs.push((i, j, b));
            }
        }
    }

    // Objective: maximize total weighted scheduled duration.
    let objective: Expression = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| (stops[i] - starts[i]) * c.score)
        .sum();

    let mut model = vars.maximise(objective).using(good_lp::default_solver);

    for i in 0..candidates.len() {
        model = model.with(constraint!(starts[i] <= stops[i]));
        // scheduled_i = 0 forces this candidate fully degenerate, wherever
        // start_i/stop_i happen to sit within its window.
        model = model.with(constraint!(stops[i] - starts[i] <= max_durations[i] * scheduled[i]));
    }

    // Disjunctive mutual exclusion for overlapping candidate windows: the
    // ordering constraint only binds when both candidates are scheduled.
    // If either collapses (scheduled_i = 0), both sides relax by `big_m`,
    // matching the source's `x_start^I = x_stop^I ∨ x_start^J = x_stop^J`
    // escape clauses alongside the two ordering disjuncts.
    for (i, j, b) in overlapping_pairs {
        let collapse_slack: Expression = (1.0 - scheduled[i]) + (1.0 - scheduled[j]);
        model = model.with(constraint!(
            stops[i] <= starts[j] + big_m * (1.0 - b) + big_m * collapse_slack.clone()
        ));
        model = model.with(constraint!(stops[j] <= starts[i] + big_m * b + big_m * collapse_slack));
    }

    // Per-revolution duty-cycle budgets.
    let mut by_rev: HashMap<i64, Vec<usize>> = HashMap::new();
    for (i, c) in candidates.iter().enumerate() {
        by_rev.entry(revs.rev_index(c.window.start())).or_default().push(i);
    }
    for (rev_idx, members) in &by_rev {
        let rev_start = members
            .iter()
            .map(|&i| revs.rev_bounds(candidates[i].window.start()).start())
            .next()
            .expect("non-empty rev bucket");
        let used = *duty_cycle_used_s.get(rev_idx).unwrap_or(&0.0);
        let budget = duty_cycle_budget_s(rev_start);
        let remaining = (budget - used).max(0.0);
        let expr: Expression = members.iter().map(|&i| stops[i] - starts[i]).sum();
        model = model.with(constraint!(expr <= remaining));
    }

    let solution = model.solve().map_err(|e| SchedulerError::SolverFailure(e.to_string()))?;

    let mut out = Vec::with_capacity(candidates.len());
    for (i, c) in candidates.iter().enumerate() {
        let start_s = solution.value(starts[i]);
        let stop_s = solution.value(stops[i]).max(start_s);
        let start = epoch + chrono::Duration::milliseconds((start_s * 1000.0).round() as i64);
        let stop = epoch + chrono::Duration::milliseconds((stop_s * 1000.0).round() as i64);
        if stop > start {
            out.push(SolvedInterval {
                candidate_index: i,
                interval: DateInterval::new(start.min(c.window.stop()), stop.min(c.window.stop())),
            });
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn single_candidate_schedules_full_window() {
        let revs = RevSchedule::new(t(0), Duration::seconds(10_000));
        let candidates = vec![candidate("a", 0, 100, 1.0)];
        let solved = solve_batch(&candidates, &revs, |_| 10_000.0, &HashMap::new()).unwrap();
        assert_eq!(solved.len(), 1);
        assert_eq!(solved[0].interval, DateInterval::new(t(0), t(100)));
    }

    #[test]
    fn low_scored_nested_candidate_drops_without_trimming_the_host() {
        // J [50,300] scores far higher than I [100,150] nested inside it.
        // The solver should drop I entirely and keep J's full window rather
        // than carving a [100,150] hole out of J to satisfy the ordering
        // disjunct literally.
        let revs = RevSchedule::new(t(0), Duration::seconds(10_000));
        let candidates = vec![candidate("i", 100, 150, 1.0), candidate("j", 50, 300, 100.0)];
        let solved = solve_batch(&candidates, &revs, |_| 10_000.0, &HashMap::new()).unwrap();
        assert_eq!(solved.len(), 1);
        assert_eq!(solved[0].candidate_index, 1);
        assert_eq!(solved[0].interval, DateInterval::new(t(50), t(300)));
    }
}
