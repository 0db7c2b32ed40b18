//! Preprocessing outputs: per-AOI access windows and the batch summary.

use crate::interval::DateIntervalList;

use super::error::PreprocessorError;
use super::unit_of_work::UnitOfWork;

/// Access windows computed for one (satellite, sensor, AOI) combination.
#[derive(Debug, Clone)]
pub struct PreprocessedAoi {
    pub satellite_id: String,
    pub sensor_id: String,
    pub aoi_id: String,
    pub access_windows: DateIntervalList,
}

/// The outcome of running the preprocessor over a batch of units of work.
///
/// Successes and failures are both per-unit; a failure for one AOI does not
/// prevent the rest of the batch from completing.
#[derive(Debug, Default)]
pub struct PreprocessingResult {
    pub preprocessed: Vec<PreprocessedAoi>,
    pub failures: Vec<(UnitOfWork, PreprocessorError)>,
}

impl PreprocessingResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, other: PreprocessingResult) {
        self.preprocessed.extend(other.preprocessed);
        self.failures.extend(other.failures);
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
