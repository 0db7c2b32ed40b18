//! Rayon-backed parallel preprocessing over independent units of work.

use rayon::prelude::*;

use crate::aoi::Aoi;
use crate::astro::EventDetector;
use crate::satellite::SatelliteModel;

use super::error::PreprocessorError;
use super::result::{PreprocessedAoi, PreprocessingResult};
use super::unit_of_work::UnitOfWork;

/// Runs the preprocessor over `units`, computing access windows for each
/// independently and in parallel.
///
/// A failure on one unit (unknown satellite/sensor/AOI, zone construction
/// failure) is logged via `tracing` and recorded in
/// [`PreprocessingResult::failures`]; it never aborts the rest of the batch.
pub fn run(
    units: &[UnitOfWork],
    satellites: &[SatelliteModel],
    aois: &[Aoi],
    detector: &dyn EventDetector,
) -> PreprocessingResult {
    let results: Vec<Result<PreprocessedAoi, (UnitOfWork, PreprocessorError)>> = units
        .par_iter()
        .map(|unit| process_one(unit, satellites, aois, detector))
        .collect();

    let mut out = PreprocessingResult::new();
    for result in results {
        match result {
            Ok(preprocessed) => out.preprocessed.push(preprocessed),
            Err((unit, err)) => {
                tracing::warn!(
                    satellite = %unit.satellite_id,
                    sensor = %unit.sensor_id,
                    aoi = %unit.aoi_id,
                    error = %err,
                    "preprocessing unit failed, continuing batch"
                );
                out.failures.push((unit, err));
            }
        }
    }
    out
}

fn process_one(
    unit: &UnitOfWork,
    satellites: &[SatelliteModel],
    aois: &[Aoi],
    detector: &dyn EventDetector,
) -> Result<PreprocessedAoi, (UnitOfWork, PreprocessorError)> {
    let satellite = satellites
        .iter()
        .find(|s| s.id() == unit.satellite_id)
        .ok_or_else(|| {
            (
                unit.clone(),
                PreprocessorError::UnknownSatellite(unit.satellite_id.clone()),
            )
        })?;

    let sensor = satellite.sensor(&unit.sensor_id).ok_or_else(|| {
        (
            unit.clone(),
            PreprocessorError::UnknownSensor {
                satellite: unit.satellite_id.clone(),
                sensor: unit.sensor_id.clone(),
            },
        )
    })?;

    let aoi = aois.iter().find(|a| a.id() == unit.aoi_id).ok_or_else(|| {
        (unit.clone(), PreprocessorError::UnknownAoi(unit.aoi_id.clone()))
    })?;

    let access_windows = detector.find_access_windows(
        satellite.propagator(),
        sensor.fov(),
        aoi.polygon(),
        unit.search_window,
    );

    Ok(PreprocessedAoi {
        satellite_id: unit.satellite_id.clone(),
        sensor_id: unit.sensor_id.clone(),
        aoi_id: unit.aoi_id.clone(),
        access_windows,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::astro::testdouble::{ConstantFov, ConstantPropagator, PeriodicEventDetector};
    use crate::astro::OrbitState;
    use crate::interval::DateInterval;
    use crate::satellite::{RevSchedule, SensorModel};

    fn t(secs: i64) -> chrono::DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn unknown_satellite_is_reported_as_failure_without_aborting_batch() {
        let sat = SatelliteModel::new(
            "sat-1",
            "Sat One",
            Arc::new(ConstantPropagator(OrbitState {
                position_km: [0.0; 3],
                velocity_km_s: [0.0; 3],
            })),
            RevSchedule::new(t(0), Duration::seconds(6000)),
        )
        .with_sensor(SensorModel::new(
            "sensor-1",
            "Sensor One",
            Arc::new(ConstantFov::unit_square()),
            300.0,
            1.0,
        ));

        let aoi = Aoi::new(
            "aoi-1",
            "Test AOI",
            ConstantFov::unit_square().0,
            1.0,
        )
        .unwrap();

        let units = vec![
            UnitOfWork::new("sat-1", "sensor-1", "aoi-1", DateInterval::new(t(0), t(10_000))),
            UnitOfWork::new("missing-sat", "sensor-1", "aoi-1", DateInterval::new(t(0), t(10_000))),
        ];

        let detector = PeriodicEventDetector {
            period: Duration::seconds(1000),
            pass_duration: Duration::seconds(100),
            phase: Duration::zero(),
        };

        let result = run(&units, &[sat], &[aoi], &detector);
        assert_eq!(result.preprocessed.len(), 1);
        assert_eq!(result.failures.len(), 1);
        assert!(matches!(
            result.failures[0].1,
            PreprocessorError::UnknownSatellite(_)
        ));
    }
}
