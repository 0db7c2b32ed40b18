//! Named sub-regions of an [`Aoi`](super::Aoi) that modulate scoring.

use geo::{Contains, Polygon};

/// How a zone's multiplier applies relative to an access footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneMode {
    /// The multiplier applies only when the footprint is **strictly
    /// contained** within the zone polygon.
    StrictContainment,
    /// The multiplier applies whenever the footprint **overlaps** the zone
    /// polygon at all.
    Overlap,
}

/// A weighted sub-region of an AOI.
#[derive(Debug, Clone)]
pub struct Zone {
    name: String,
    polygon: Polygon<f64>,
    multiplier: f64,
    mode: ZoneMode,
}

impl Zone {
    pub fn new(name: impl Into<String>, polygon: Polygon<f64>, multiplier: f64, mode: ZoneMode) -> Self {
        Self {
            name: name.into(),
            polygon,
            multiplier,
            mode,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn mode(&self) -> ZoneMode {
        self.mode
    }

    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    /// Returns this zone's multiplier if `footprint` satisfies the zone's
    /// mode against it, or `1.0` (identity) otherwise.
    pub fn apply(&self, footprint: &Polygon<f64>) -> f64 {
        let applies = match self.mode {
            ZoneMode::StrictContainment => self.polygon.contains(footprint),
            ZoneMode::Overlap => {
                footprint.exterior().points().any(|p| self.polygon.contains(&p))
                    || self.polygon.exterior().points().any(|p| footprint.contains(&p))
            }
        };
        if applies {
            self.multiplier
        } else {
            1.0
        }
    }
}
