//! Access scoring: composes an AOI's priority with its zone multipliers.

use std::collections::HashMap;

use crate::aoi::Aoi;
use crate::interval::DateInterval;
use crate::preprocessor::PreprocessedAoi;

/// A scored access opportunity: one access window with its computed
/// scheduling weight, plus the AOI attributes the access report needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAoi {
    pub satellite_id: String,
    pub sensor_id: String,
    pub aoi_id: String,
    pub window: DateInterval,
    pub score: f64,
    pub priority: f64,
    pub country: Option<String>,
    pub continent: Option<String>,
}

/// Parameters for `S(a) = priority(a)^p · country_mult(a) · continent_mult(a)
/// · Π region_mult_k(a)`. `country_multipliers`/`continent_multipliers` are
/// direct lookup tables rather than a fetched PriorityData table — loading
/// that table from an external source is out of scope for this crate;
/// missing lookups default to `1.0`.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub priority_exponent: f64,
    pub country_multipliers: HashMap<String, f64>,
    pub continent_multipliers: HashMap<String, f64>,
}

impl ScoringConfig {
    pub fn new(priority_exponent: f64) -> Self {
        Self {
            priority_exponent,
            country_multipliers: HashMap::new(),
            continent_multipliers: HashMap::new(),
        }
    }

    pub fn with_country_multiplier(mut self, country: impl Into<String>, multiplier: f64) -> Self {
        self.country_multipliers.insert(country.into(), multiplier);
        self
    }

    pub fn with_continent_multiplier(mut self, continent: impl Into<String>, multiplier: f64) -> Self {
        self.continent_multipliers.insert(continent.into(), multiplier);
        self
    }

    fn country_mult(&self, aoi: &Aoi) -> f64 {
        aoi.country().and_then(|c| self.country_multipliers.get(c)).copied().unwrap_or(1.0)
    }

    fn continent_mult(&self, aoi: &Aoi) -> f64 {
        aoi.continent().and_then(|c| self.continent_multipliers.get(c)).copied().unwrap_or(1.0)
    }
}

/// A composable tree of region multipliers, generalizing the AOI's flat
/// zone list into `All` (product, matching "Π region_mult_k(a)") and `Any`
/// (take the most favorable zone) combinators so multi-zone scoring rules
/// can be expressed and tested node-by-node rather than as one opaque loop.
#[derive(Debug, Clone)]
pub enum MultiplierNode {
    Leaf(f64),
    All(Vec<MultiplierNode>),
    Any(Vec<MultiplierNode>),
}

impl MultiplierNode {
    pub fn evaluate(&self) -> f64 {
        match self {
            MultiplierNode::Leaf(v) => *v,
            MultiplierNode::All(children) => children.iter().map(|c| c.evaluate()).product(),
            MultiplierNode::Any(children) => {
                if children.is_empty() {
                    1.0
                } else {
                    children
                        .iter()
                        .map(|c| c.evaluate())
                        .fold(f64::NEG_INFINITY, f64::max)
                }
            }
        }
    }
}

/// Scores every access window in `preprocessed` against its AOI's priority,
/// country/continent multipliers, and zone multipliers (the zone multipliers
/// are evaluated against the AOI's own polygon, since the per-instant sensor
/// footprint is an astrodynamics concern this crate does not compute).
pub fn score(preprocessed: &PreprocessedAoi, aoi: &Aoi, config: &ScoringConfig) -> Vec<ScoredAoi> {
    let region_multiplier = MultiplierNode::All(
        aoi.zones()
            .iter()
            .map(|z| MultiplierNode::Leaf(z.apply(aoi.polygon())))
            .collect(),
    )
    .evaluate();

    let score_value =
        aoi.priority().powf(config.priority_exponent) * config.country_mult(aoi) * config.continent_mult(aoi) * region_multiplier;

    preprocessed
        .access_windows
        .iter()
        .map(|window| ScoredAoi {
            satellite_id: preprocessed.satellite_id.clone(),
            sensor_id: preprocessed.sensor_id.clone(),
            aoi_id: preprocessed.aoi_id.clone(),
            window: *window,
            score: score_value,
            priority: aoi.priority(),
            country: aoi.country().map(str::to_string),
            continent: aoi.continent().map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::DateIntervalList;
    use chrono::{TimeZone, Utc};
    use geo::polygon;

    fn t(secs: i64) -> chrono::DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn no_zones_yields_bare_priority() {
        let square = polygon![
            (x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0), (x: 0.0, y: 0.0),
        ];
        let aoi = Aoi::new("a1", "A", square, 5.0).unwrap();
        let pre = PreprocessedAoi {
            satellite_id: "s".into(),
            sensor_id: "sn".into(),
            aoi_id: "a1".into(),
            access_windows: DateIntervalList::from(vec![DateInterval::new(t(0), t(100))]),
        };
        let scored = score(&pre, &aoi, &ScoringConfig::new(1.0));
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].score, 5.0);
    }

    #[test]
    fn priority_exponent_scales_the_score_nonlinearly() {
        let square = polygon![
            (x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0), (x: 0.0, y: 0.0),
        ];
        let aoi = Aoi::new("a1", "A", square, 4.0).unwrap();
        let pre = PreprocessedAoi {
            satellite_id: "s".into(),
            sensor_id: "sn".into(),
            aoi_id: "a1".into(),
            access_windows: DateIntervalList::from(vec![DateInterval::new(t(0), t(100))]),
        };
        let scored = score(&pre, &aoi, &ScoringConfig::new(0.5));
        assert_eq!(scored[0].score, 2.0);
    }

    #[test]
    fn country_multiplier_applies_when_configured() {
        let square = polygon![
            (x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0), (x: 0.0, y: 0.0),
        ];
        let aoi = Aoi::new("a1", "A", square, 2.0).unwrap().with_country("Spain");
        let pre = PreprocessedAoi {
            satellite_id: "s".into(),
            sensor_id: "sn".into(),
            aoi_id: "a1".into(),
            access_windows: DateIntervalList::from(vec![DateInterval::new(t(0), t(100))]),
        };
        let config = ScoringConfig::new(1.0).with_country_multiplier("Spain", 3.0);
        let scored = score(&pre, &aoi, &config);
        assert_eq!(scored[0].score, 6.0);
    }

    #[test]
    fn all_node_multiplies() {
        let node = MultiplierNode::All(vec![MultiplierNode::Leaf(2.0), MultiplierNode::Leaf(3.0)]);
        assert_eq!(node.evaluate(), 6.0);
    }

    #[test]
    fn any_node_takes_best() {
        let node = MultiplierNode::Any(vec![MultiplierNode::Leaf(0.5), MultiplierNode::Leaf(2.0)]);
        assert_eq!(node.evaluate(), 2.0);
    }
}
