//! Reference frame identifiers used at the astrodynamics boundary.
//!
//! Frame conversions (ECI/ECEF/topocentric, precession/nutation, reference
//! ellipsoid) are entirely the astrodynamics collaborator's responsibility.
//! This crate only needs to label which frame a geometry or state is in.

/// A reference frame tag attached to geometry and orbit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    /// Earth-Centered Inertial.
    Eci,
    /// Earth-Centered Earth-Fixed.
    Ecef,
    /// Geodetic longitude/latitude/altitude on the reference ellipsoid.
    Geodetic,
}
