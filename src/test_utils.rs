//! Deterministic helpers shared by this crate's own tests.

#![cfg(test)]

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use geo::{polygon, Polygon};

use crate::aoi::Aoi;
use crate::astro::testdouble::{ConstantFov, ConstantPropagator};
use crate::astro::OrbitState;
use crate::satellite::{RevSchedule, SatelliteModel, SensorModel};

pub fn t(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

pub fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
    polygon![
        (x: x0, y: y0),
        (x: x1, y: y0),
        (x: x1, y: y1),
        (x: x0, y: y1),
        (x: x0, y: y0),
    ]
}

pub fn test_aoi(id: &str, priority: f64) -> Aoi {
    Aoi::new(id, id, square(0.0, 0.0, 1.0, 1.0), priority).unwrap()
}

pub fn test_satellite(id: &str, sensor_id: &str, duty_cycle_budget_s: f64, rev_period_s: i64) -> SatelliteModel {
    SatelliteModel::new(
        id,
        id,
        Arc::new(ConstantPropagator(OrbitState {
            position_km: [0.0; 3],
            velocity_km_s: [0.0; 3],
        })),
        RevSchedule::new(t(0), Duration::seconds(rev_period_s)),
    )
    .with_sensor(SensorModel::new(
        sensor_id,
        sensor_id,
        Arc::new(ConstantFov::unit_square()),
        duty_cycle_budget_s,
        1.0,
    ))
}
