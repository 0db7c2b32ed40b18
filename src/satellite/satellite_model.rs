//! Satellite fleet-member models: a propagator plus its carried sensors.

use std::sync::Arc;

use crate::astro::Propagator;

use super::rev::RevSchedule;
use super::sensor_model::SensorModel;

/// A single satellite in the fleet.
#[derive(Clone)]
pub struct SatelliteModel {
    id: String,
    name: String,
    propagator: Arc<dyn Propagator>,
    revs: RevSchedule,
    sensors: Vec<SensorModel>,
}

impl SatelliteModel {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        propagator: Arc<dyn Propagator>,
        revs: RevSchedule,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            propagator,
            revs,
            sensors: Vec::new(),
        }
    }

    pub fn with_sensor(mut self, sensor: SensorModel) -> Self {
        self.sensors.push(sensor);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn propagator(&self) -> &dyn Propagator {
        self.propagator.as_ref()
    }

    pub fn revs(&self) -> &RevSchedule {
        &self.revs
    }

    pub fn sensors(&self) -> &[SensorModel] {
        &self.sensors
    }

    pub fn sensor(&self, id: &str) -> Option<&SensorModel> {
        self.sensors.iter().find(|s| s.id() == id)
    }
}

impl std::fmt::Debug for SatelliteModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SatelliteModel")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("sensors", &self.sensors)
            .finish()
    }
}
