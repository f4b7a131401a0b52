//! Regularized incomplete gamma and beta functions.
//!
//! Thin guards around the `statrs` implementations: parameters outside the
//! mathematical domain become `NaN` and the boundary values are returned
//! directly, so callers never hit a panic path.

use pk_core::Real;
use statrs::function::{beta, gamma};

/// The regularized lower incomplete gamma function P(a, x) = γ(a, x) / Γ(a).
///
/// `NaN` for `a ≤ 0` or non-finite `a`; 0 for `x ≤ 0`; 1 for `x = +∞`.
pub fn regularized_lower_gamma(a: Real, x: Real) -> Real {
    if a.is_nan() || x.is_nan() || a <= 0.0 || !a.is_finite() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x == f64::INFINITY {
        return 1.0;
    }
    gamma::gamma_lr(a, x)
}

/// The regularized incomplete beta function I_x(a, b).
///
/// `NaN` unless `a` and `b` are positive and finite; 0 for `x ≤ 0`;
/// 1 for `x ≥ 1`.
pub fn regularized_beta(a: Real, b: Real, x: Real) -> Real {
    if a.is_nan() || b.is_nan() || x.is_nan() {
        return f64::NAN;
    }
    if a <= 0.0 || b <= 0.0 || !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    beta::beta_reg(a, b, x)
}
