use thiserror::Error;

/// Errors raised while loading or validating an area of interest.
#[derive(Debug, Error)]
pub enum AoiError {
    #[error("AOI {id} has a degenerate polygon (fewer than 3 vertices)")]
    DegeneratePolygon { id: String },
    #[error("AOI {id} zone {zone} has a degenerate polygon")]
    DegenerateZonePolygon { id: String, zone: String },
    #[error("AOI {id} has a non-finite coordinate")]
    NonFiniteCoordinate { id: String },
}
