//! Payload/sensor models: the unit a duty-cycle budget and a FOV attach to.

use std::sync::Arc;

use crate::astro::FovGeometry;
use crate::interval::DateIndexed;

/// A single instrument aboard a satellite.
///
/// Carries its own field-of-view projector and a per-rev duty-cycle budget
/// (seconds of imaging allowed per revolution), since a satellite may carry
/// several payloads with independent limits.
#[derive(Clone)]
pub struct SensorModel {
    id: String,
    name: String,
    fov: Arc<dyn FovGeometry>,
    duty_cycle_budget_s: DateIndexed<f64>,
    weight: f64,
}

impl SensorModel {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        fov: Arc<dyn FovGeometry>,
        duty_cycle_budget_s: f64,
        weight: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fov,
            duty_cycle_budget_s: DateIndexed::new(duty_cycle_budget_s),
            weight,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fov(&self) -> &dyn FovGeometry {
        self.fov.as_ref()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn duty_cycle_budget(&self) -> &DateIndexed<f64> {
        &self.duty_cycle_budget_s
    }

    pub fn duty_cycle_budget_mut(&mut self) -> &mut DateIndexed<f64> {
        &mut self.duty_cycle_budget_s
    }
}

impl std::fmt::Debug for SensorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorModel")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish()
    }
}
