//! # Cosmic time from redshift
//!
//! Converts a redshift into the age of the universe at that epoch by integrating the
//! Friedmann equation expressed in terms of the scale factor,
//!
//! ```text
//! t(a) = ∫₀ᵃ dx / (H0 · sqrt(Ω_r/x² + Ω_m/x + Ω_Λ·x² + (1 − Ω_total)))
//! ```
//!
//! The density terms are evaluated through [`safe_divide`](crate::integrate::safe_divide), so
//! the integrand takes its analytic limit value at x = 0 instead of raising a floating-point
//! exception; callers must not special-case the lower bound themselves.
//!
//! The integral uses the fixed resolution
//! [`COSMIC_TIME_PANELS`](crate::constants::COSMIC_TIME_PANELS); there is no adaptive
//! refinement.

use serde::{Deserialize, Serialize};

use crate::constants::{Gyr, Redshift, ScaleFactor, COSMIC_TIME_PANELS, HUBBLE_INVERSE_TO_GYR};
use crate::haloweb_errors::HaloWebError;
use crate::integrate::{integrate, safe_divide};

/// Immutable cosmological parameter set.
///
/// Passed by value into the integrand; the derived quantities [`omega_total`](Self::omega_total)
/// and [`curvature`](Self::curvature) are recomputed from the fields on demand, so the struct
/// carries no hidden state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cosmology {
    /// Hubble constant H0 in km/s/Mpc
    pub hubble_constant: f64,
    /// Radiation density parameter Ω_r
    pub omega_radiation: f64,
    /// Matter density parameter Ω_m
    pub omega_matter: f64,
    /// Dark-energy density parameter Ω_Λ
    pub omega_lambda: f64,
}

impl Default for Cosmology {
    /// Flat ΛCDM with H0 = 70 km/s/Mpc, Ω_m = 0.3, Ω_Λ = 0.7 and negligible radiation.
    fn default() -> Self {
        Cosmology {
            hubble_constant: 70.0,
            omega_radiation: 0.0,
            omega_matter: 0.3,
            omega_lambda: 0.7,
        }
    }
}

impl Cosmology {
    /// Total density parameter Ω_r + Ω_m + Ω_Λ.
    pub fn omega_total(&self) -> f64 {
        self.omega_radiation + self.omega_matter + self.omega_lambda
    }

    /// Curvature term 1 − Ω_total (zero for a flat universe).
    pub fn curvature(&self) -> f64 {
        1.0 - self.omega_total()
    }

    /// Scale factor at the given redshift, a = 1/(1+z).
    pub fn scale_factor(&self, z: Redshift) -> ScaleFactor {
        1.0 / (1.0 + z)
    }

    /// The Friedmann integrand dt/da evaluated at scale factor `x`.
    ///
    /// At x = 0 the Ω_m and Ω_r terms diverge, the square root is +∞ and the outer
    /// [`safe_divide`] returns 0, which is the correct limit of dt/da.
    fn dt_da(&self, x: ScaleFactor) -> f64 {
        let density = safe_divide(self.omega_radiation, x * x)
            + safe_divide(self.omega_matter, x)
            + self.omega_lambda * x * x
            + self.curvature();
        safe_divide(1.0, self.hubble_constant * density.sqrt())
    }

    /// Age of the universe at redshift `z`, in giga-years.
    ///
    /// Arguments
    /// ---------------
    /// * `z`: redshift, strictly greater than −1
    ///
    /// Return
    /// ----------
    /// * the cosmic time elapsed between a = 0 and a = 1/(1+z), in Gyr
    ///
    /// Errors
    /// ----------
    /// * [`HaloWebError::InvalidRedshift`] when `z <= -1` (the scale factor would be
    ///   infinite or negative)
    pub fn cosmic_time(&self, z: Redshift) -> Result<Gyr, HaloWebError> {
        if z <= -1.0 {
            return Err(HaloWebError::InvalidRedshift(z));
        }
        let a = self.scale_factor(z);
        let raw = integrate(0.0, a, |x| self.dt_da(x), COSMIC_TIME_PANELS)?;
        Ok(raw * HUBBLE_INVERSE_TO_GYR)
    }
}

/// Age of the universe at redshift `z` under the default cosmology, in giga-years.
pub fn cosmic_time(z: Redshift) -> Result<Gyr, HaloWebError> {
    Cosmology::default().cosmic_time(z)
}
