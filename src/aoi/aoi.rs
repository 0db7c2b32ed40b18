//! Areas of interest: the ground regions a fleet is tasked to observe.

use geo::orient::{Direction, Orient};
use geo::{GeodesicArea, Polygon};

use super::error::AoiError;
use super::zone::Zone;

/// An area of interest: a ground polygon with an intrinsic priority and
/// zero or more weighted sub-zones.
///
/// Construction normalizes the exterior ring winding to counter-clockwise
/// (and any interior rings to clockwise), matching the orientation
/// convention GeoJSON and most downstream geometry tooling expect. A
/// caller-supplied clockwise ring is silently reoriented, never rejected.
/// The polygon's geodesic area (m²) is computed once at construction, since
/// it's a function of the (now-fixed) polygon and doesn't need the loader's
/// equal-area reprojection pipeline to be meaningful.
#[derive(Debug, Clone)]
pub struct Aoi {
    id: String,
    name: String,
    polygon: Polygon<f64>,
    priority: f64,
    area_m2: f64,
    country: Option<String>,
    continent: Option<String>,
    iso_code: Option<String>,
    zones: Vec<Zone>,
}

impl Aoi {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        polygon: Polygon<f64>,
        priority: f64,
    ) -> Result<Self, AoiError> {
        let id = id.into();
        if polygon.exterior().0.len() < 4 {
            return Err(AoiError::DegeneratePolygon { id });
        }
        for coord in polygon.exterior().coords() {
            if !coord.x.is_finite() || !coord.y.is_finite() {
                return Err(AoiError::NonFiniteCoordinate { id });
            }
        }
        let polygon = polygon.orient(Direction::Default);
        let area_m2 = polygon.geodesic_area_unsigned();
        Ok(Self {
            id,
            name: name.into(),
            polygon,
            priority,
            area_m2,
            country: None,
            continent: None,
            iso_code: None,
            zones: Vec::new(),
        })
    }

    pub fn with_zone(mut self, zone: Zone) -> Result<Self, AoiError> {
        if zone.polygon().exterior().0.len() < 4 {
            return Err(AoiError::DegenerateZonePolygon {
                id: self.id.clone(),
                zone: zone.name().to_string(),
            });
        }
        self.zones.push(zone);
        Ok(self)
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_continent(mut self, continent: impl Into<String>) -> Self {
        self.continent = Some(continent.into());
        self
    }

    pub fn with_iso_code(mut self, iso_code: impl Into<String>) -> Self {
        self.iso_code = Some(iso_code.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    pub fn priority(&self) -> f64 {
        self.priority
    }

    /// The polygon's geodesic surface area, in square meters.
    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn continent(&self) -> Option<&str> {
        self.continent.as_deref()
    }

    pub fn iso_code(&self) -> Option<&str> {
        self.iso_code.as_deref()
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Composes all zone multipliers for a given footprint into one factor.
    pub fn zone_multiplier(&self, footprint: &Polygon<f64>) -> f64 {
        self.zones.iter().map(|z| z.apply(footprint)).product()
    }
}
