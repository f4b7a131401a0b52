//! Real-valued distributions.
//!
//! Normal, Uniform and Exponential have elementary cdfs. Gamma, Student-t,
//! Fisher F and Chi-Square evaluate their cdf according to a
//! [`CdfMethod`]: the regularized incomplete gamma / beta functions, or a
//! fixed-grid trapezoid integral of the density.

pub mod chi_square;
pub mod exponential;
pub mod fisher_f;
pub mod gamma;
pub mod normal;
pub mod student_t;
pub mod uniform;

pub use chi_square::ChiSquare;
pub use exponential::Exponential;
pub use fisher_f::FisherF;
pub use gamma::Gamma;
pub use normal::Normal;
pub use student_t::StudentT;
pub use uniform::Uniform;

use crate::distribution::is_probability;
use pk_core::{Real, Size};
use pk_math::integrals::{FixedTrapezoidIntegral, Integrator};
use pk_math::solvers1d::solve_increasing_unbounded;

/// Accuracy of numerically inverted quantiles, in `ln x` for positive supports.
const QUANTILE_ACCURACY: Real = 1.0e-12;

/// `∫_from^x density`, clamped to `[0, 1]`.
///
/// Non-finite density values (the integrable singularity at 0 of some
/// shapes) count as 0.
pub(crate) fn trapezoid_cdf<F>(density: F, from: Real, x: Real, steps: Size) -> Real
where
    F: Fn(Real) -> Real,
{
    let integrand = |t: Real| {
        let d = density(t);
        if d.is_finite() {
            d
        } else {
            0.0
        }
    };
    match FixedTrapezoidIntegral::new(steps).integrate(integrand, from, x) {
        Ok(area) => area.clamp(0.0, 1.0),
        Err(e) => {
            tracing::trace!(error = %e, "trapezoid cdf unavailable");
            f64::NAN
        }
    }
}

/// Invert a cdf supported on `[0, ∞)`: 0 at `q = 0`, `+∞` at `q = 1`.
///
/// The root is found in `ln x`, so small quantiles keep full relative
/// accuracy.
pub(crate) fn positive_quantile<F>(cdf: F, q: Real) -> Real
where
    F: Fn(Real) -> Real,
{
    if !is_probability(q) {
        return f64::NAN;
    }
    if q == 0.0 {
        return 0.0;
    }
    if q == 1.0 {
        return f64::INFINITY;
    }
    solve_increasing_unbounded(|y| cdf(y.exp()), q, 0.0, QUANTILE_ACCURACY)
        .map_or(f64::NAN, Real::exp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn trapezoid_cdf_of_exponential() {
        let v = trapezoid_cdf(|t| (-t).exp(), 0.0, 2.0, 1000);
        assert_abs_diff_eq!(v, 1.0 - (-2.0_f64).exp(), epsilon = 1e-6);
    }

    #[test]
    fn trapezoid_cdf_ignores_singularity_and_clamps() {
        let v = trapezoid_cdf(|t| if t == 0.0 { f64::INFINITY } else { 1.0 }, 0.0, 0.5, 10);
        assert_abs_diff_eq!(v, 0.5 - 0.025, epsilon = 1e-12);
        assert_eq!(trapezoid_cdf(|_| 1.0, 0.0, 5.0, 10), 1.0);
        assert_eq!(trapezoid_cdf(|_| 1.0, 0.0, -5.0, 10), 0.0);
        assert!(trapezoid_cdf(|_| 1.0, 0.0, 1.0, 0).is_nan());
    }

    #[test]
    fn positive_quantile_inverts() {
        let cdf = |x: Real| 1.0 - (-x).exp();
        assert_abs_diff_eq!(positive_quantile(cdf, 0.5), 2.0_f64.ln(), epsilon = 1e-10);
        assert_eq!(positive_quantile(cdf, 0.0), 0.0);
        assert_eq!(positive_quantile(cdf, 1.0), f64::INFINITY);
        assert!(positive_quantile(cdf, 1.1).is_nan());
    }
}
