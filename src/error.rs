//! Top-level error type, composed from each component's own error enum.

use thiserror::Error;

use crate::aoi::AoiError;
use crate::interval::IntervalError;
use crate::preprocessor::PreprocessorError;
use crate::report::ReportError;
use crate::scheduler::{ScheduleError, SchedulerError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Aoi(#[from] AoiError),
    #[error(transparent)]
    Interval(#[from] IntervalError),
    #[error(transparent)]
    Preprocessor(#[from] PreprocessorError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("internal error: {0}")]
    Internal(String),
}
