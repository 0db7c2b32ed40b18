//! The independent unit the preprocessor's worker pool fans out over.

use crate::interval::DateInterval;

/// One (satellite, sensor, AOI) combination to compute access windows for,
/// over a bounded search horizon. Each `UnitOfWork` is independent of every
/// other, which is what makes the preprocessor safe to parallelize.
#[derive(Debug, Clone)]
pub struct UnitOfWork {
    pub satellite_id: String,
    pub sensor_id: String,
    pub aoi_id: String,
    pub search_window: DateInterval,
}

impl UnitOfWork {
    pub fn new(
        satellite_id: impl Into<String>,
        sensor_id: impl Into<String>,
        aoi_id: impl Into<String>,
        search_window: DateInterval,
    ) -> Self {
        Self {
            satellite_id: satellite_id.into(),
            sensor_id: sensor_id.into(),
            aoi_id: aoi_id.into(),
            search_window,
        }
    }
}
