use thiserror::Error;

/// Errors raised while preprocessing a single unit of work.
///
/// Preprocessing failures are per-unit: one AOI's bad geometry does not
/// abort the batch. The worker pool logs these and continues.
#[derive(Debug, Error, Clone)]
pub enum PreprocessorError {
    #[error("satellite {0} not found")]
    UnknownSatellite(String),
    #[error("sensor {sensor} not found on satellite {satellite}")]
    UnknownSensor { satellite: String, sensor: String },
    #[error("AOI {0} not found")]
    UnknownAoi(String),
    #[error("zone construction failed for AOI {aoi}: {reason}")]
    ZoneConstructionFailed { aoi: String, reason: String },
    #[error("FOV projection unavailable for satellite {satellite} sensor {sensor}")]
    FovProjectionFailed { satellite: String, sensor: String },
}
