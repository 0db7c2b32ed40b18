//! Persisted output formats: the access report (CSV) and the schedule (JSON).

use std::io::Write;

use thiserror::Error;

use crate::scheduler::{Schedule, ScheduleActivity};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(serde::Serialize)]
struct AccessRow<'a> {
    aoi_id: &'a str,
    satellite_id: &'a str,
    sensor_id: &'a str,
    continent: &'a str,
    country: &'a str,
    priority: f64,
    start: String,
    stop: String,
    result: u32,
    result_str: &'static str,
    score: f64,
    order_index: usize,
}

/// Writes one CSV row per activity: identifiers, continent/country/priority,
/// the scheduled interval, result code/name, score, and `order_index` (each
/// activity's position in `activities`, so callers wanting the scoring order
/// reflected in the report should pass activities already sorted that way).
pub fn write_access_report<W: Write>(activities: &[ScheduleActivity], writer: W) -> Result<(), ReportError> {
    let mut w = csv::Writer::from_writer(writer);
    for (order_index, a) in activities.iter().enumerate() {
        w.serialize(AccessRow {
            aoi_id: &a.aoi_id,
            satellite_id: &a.satellite_id,
            sensor_id: &a.sensor_id,
            continent: a.continent.as_deref().unwrap_or(""),
            country: a.country.as_deref().unwrap_or(""),
            priority: a.priority,
            start: a.interval.start().to_rfc3339(),
            stop: a.interval.stop().to_rfc3339(),
            result: a.result.code(),
            result_str: a.result.name(),
            score: a.score,
            order_index,
        })?;
    }
    w.flush()?;
    Ok(())
}

/// Writes one schedule as JSON (`{id, intervals, activities}`), with
/// sub-second timestamp precision preserved through `chrono`'s RFC 3339
/// serialization.
#[cfg(feature = "serde")]
pub fn write_schedule_json<W: Write>(schedule: &Schedule, writer: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(writer, schedule)?;
    Ok(())
}
