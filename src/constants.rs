//! # Constants and type definitions for haloweb
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `haloweb` library.
//!
//! ## Overview
//!
//! - Cosmological unit conversions (Mpc ↔ km, inverse-Hubble units ↔ Gyr)
//! - The fixed byte layout of NEXUS+ `.MMF` grid files
//! - Core type aliases used across the crate
//!
//! These definitions are used by the cosmic-time integrator, the voxel decoder, and the
//! halo/voxel cross-referencing layer.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// One megaparsec in kilometers
pub const KM_PER_MPC: f64 = 3.086e19;

/// Number of seconds in a (non-leap) year
pub const SECONDS_PER_YEAR: f64 = 3600.0 * 24.0 * 365.0;

/// Conversion from an inverse-Hubble integral in (km/s/Mpc)⁻¹ units to giga-years
pub const HUBBLE_INVERSE_TO_GYR: f64 = KM_PER_MPC * 1e-9 / SECONDS_PER_YEAR;

/// Comoving side length of the simulation box in Mpc/h
pub const DEFAULT_BOX_LENGTH: f64 = 70.4;

/// Fixed Simpson subdivision count for the cosmic-time integral.
///
/// Non-adaptive: the accuracy of
/// [`Cosmology::cosmic_time`](crate::cosmic_time::Cosmology::cosmic_time) is controlled solely
/// by this resolution.
pub const COSMIC_TIME_PANELS: usize = 1_000_000;

// -------------------------------------------------------------------------------------------------
// NEXUS+ MMF byte layout
// -------------------------------------------------------------------------------------------------

/// Size of the MMF file header in bytes
pub const MMF_HEADER_BYTES: usize = 1048;

/// Size of the MMF trailing checksum in bytes
pub const MMF_FOOTER_BYTES: usize = 8;

/// Width of one voxel flag in bytes (unsigned 16-bit)
pub const MMF_ELEMENT_BYTES: usize = 2;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Cosmological redshift (z = 0 is the present)
pub type Redshift = f64;
/// Dimensionless scale factor, a = 1/(1+z)
pub type ScaleFactor = f64;
/// Time in giga-years
pub type Gyr = f64;
/// Comoving distance in Mpc/h
pub type Mpc = f64;
/// Halo mass in Msun/h
pub type MsunH = f64;
