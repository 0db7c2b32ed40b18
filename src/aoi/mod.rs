//! Areas of interest and their weighted sub-zones.

mod aoi;
pub mod error;
mod zone;

pub use aoi::Aoi;
pub use error::AoiError;
pub use zone::{Zone, ZoneMode};
