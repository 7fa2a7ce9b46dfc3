//! # Composite Simpson integration with singularity-safe division
//!
//! A deterministic fixed-subdivision definite-integral evaluator. The interval is split into
//! `n` equal-width panels and Simpson's one-third rule is applied per panel; there is no
//! adaptive refinement and no returned error estimate — accuracy is controlled solely by the
//! caller's choice of `n`.
//!
//! [`safe_divide`] encodes the analytic limits of density terms of the form Ω/aⁿ at a → 0 and
//! a → ∞, so that integrands built from it stay finite-or-infinite (never NaN) at every
//! sampled abscissa.

use crate::haloweb_errors::HaloWebError;

/// Division with explicit analytic limits at a vanishing or infinite denominator.
///
/// * `b == 0` → `+∞` (a vanishing density term, not a computational error)
/// * `b == +∞` → `0` (a term that has decayed to irrelevance)
/// * otherwise → `a / b`
///
/// The `b == 0` case applies regardless of the numerator, so `safe_divide(0.0, 0.0)` is `+∞`.
/// Both special cases are kept explicit rather than left to IEEE semantics: `inf / inf` would
/// otherwise produce NaN inside the Friedmann integrand.
pub fn safe_divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        f64::INFINITY
    } else if b == f64::INFINITY {
        0.0
    } else {
        a / b
    }
}

/// Simpson's one-third rule on a single panel: (h/6)·(f(l) + 4f(m) + f(r)).
fn simpson_panel<F: Fn(f64) -> f64>(left: f64, right: f64, f: &F) -> f64 {
    ((right - left) / 6.0) * (f(left) + 4.0 * f(0.5 * (left + right)) + f(right))
}

/// Composite Simpson estimate of ∫ₐᵇ f(x) dx over `n` equal-width panels.
///
/// Panel boundaries are computed as `a + i·h` rather than accumulated, and the final panel's
/// right edge is snapped exactly to `b`, so the union of panels covers `[a, b]` with no gap
/// and no double count even when `(b - a) / n` is not representable.
///
/// `f` must return a finite or explicitly infinite value (never NaN) at every sampled
/// abscissa; removable singularities are the integrand's responsibility, see [`safe_divide`].
///
/// Arguments
/// ---------------
/// * `a`: lower integration bound
/// * `b`: upper integration bound, `a <= b`
/// * `f`: integrand
/// * `n`: number of panels, `n >= 1`
///
/// Return
/// ----------
/// * the integral estimate; exactly `0.0` when `a == b`
///
/// Errors
/// ----------
/// * [`HaloWebError::InvalidIntegrationBounds`] when `a > b`
/// * [`HaloWebError::InvalidPanelCount`] when `n == 0`
pub fn integrate<F: Fn(f64) -> f64>(a: f64, b: f64, f: F, n: usize) -> Result<f64, HaloWebError> {
    if a > b {
        return Err(HaloWebError::InvalidIntegrationBounds { lower: a, upper: b });
    }
    if n == 0 {
        return Err(HaloWebError::InvalidPanelCount(n));
    }
    if a == b {
        return Ok(0.0);
    }

    let h = (b - a) / n as f64;
    let mut estimate = 0.0;
    for i in 0..n - 1 {
        let left = a + i as f64 * h;
        let right = a + (i + 1) as f64 * h;
        estimate += simpson_panel(left, right, &f);
    }
    // Last panel closes on b itself, never on a + n*h.
    estimate += simpson_panel(a + (n - 1) as f64 * h, b, &f);

    Ok(estimate)
}
