use thiserror::Error;

/// Errors raised while inserting into a [`super::schedule::Schedule`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("activity {new_id} overlaps existing activity {existing_id}")]
    OverlapsExisting { new_id: String, existing_id: String },
}

/// Errors raised while building or solving a batch's scheduling model.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("solver failed to produce a solution: {0}")]
    SolverFailure(String),
    #[error("batch contains no access candidates")]
    EmptyBatch,
}
