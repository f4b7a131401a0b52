//! Student's t distribution.

use super::trapezoid_cdf;
use crate::distribution::{is_probability, Distribution, Kind, Support};
use num_traits::ToPrimitive;
use pk_core::{CdfMethod, Real};
use pk_math::random_numbers::{standard_normal, sum_of_squared_normals};
use pk_math::solvers1d::solve_increasing_unbounded;
use pk_math::special::{ln_gamma, regularized_beta};
use rand::RngCore;
use std::f64::consts::PI;

/// Lower bound of the trapezoid cdf integral.
const TRAPEZOID_START: Real = -10.0;

/// Student's t distribution with `ν` degrees of freedom.
///
/// The mean exists only for `ν > 1` and the variance only for `ν > 2`; the
/// moments return `NaN` or `∞` outside those ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentT {
    nu: Real,
    cdf_method: CdfMethod,
}

impl StudentT {
    /// Student-t distribution with `nu` degrees of freedom, exact cdf.
    pub fn new(nu: Real) -> Self {
        Self {
            nu,
            cdf_method: CdfMethod::Exact,
        }
    }

    /// Replace the cdf evaluation strategy.
    pub fn with_cdf_method(mut self, method: CdfMethod) -> Self {
        self.cdf_method = method;
        self
    }

    /// Degrees of freedom.
    pub fn degrees_of_freedom(&self) -> Real {
        self.nu
    }

    fn is_valid(&self) -> bool {
        self.nu.is_finite() && self.nu > 0.0
    }

    /// Mass beyond `|x|` on one side, `½ I_{ν/(ν+x²)}(ν/2, ½)`.
    fn tail(&self, x: Real) -> Real {
        let w = self.nu / (self.nu + x * x);
        0.5 * regularized_beta(0.5 * self.nu, 0.5, w)
    }

    /// `1 − tail(x)` for `x > 0`, mirrored below 0.
    fn exact_cdf(&self, x: Real) -> Real {
        if x == 0.0 {
            return 0.5;
        }
        let tail = self.tail(x);
        if x > 0.0 {
            1.0 - tail
        } else {
            tail
        }
    }
}

impl Distribution for StudentT {
    fn name(&self) -> &'static str {
        "t"
    }

    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn density(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        let nu = self.nu;
        let ln_norm = ln_gamma(0.5 * (nu + 1.0)) - ln_gamma(0.5 * nu) - 0.5 * (nu * PI).ln();
        (ln_norm - 0.5 * (nu + 1.0) * (x * x / nu).ln_1p()).exp()
    }

    fn cdf(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        match self.cdf_method {
            CdfMethod::Exact => self.exact_cdf(x),
            CdfMethod::Trapezoid { .. } if x.is_infinite() => self.exact_cdf(x),
            CdfMethod::Trapezoid { steps } => {
                trapezoid_cdf(|t| self.density(t), TRAPEZOID_START, x, steps)
            }
        }
    }

    fn quantile(&self, q: Real) -> Real {
        if !self.is_valid() || !is_probability(q) {
            return f64::NAN;
        }
        if q == 0.5 {
            return 0.0;
        }
        if q == 0.0 {
            return f64::NEG_INFINITY;
        }
        if q == 1.0 {
            return f64::INFINITY;
        }
        // solve -ln tail(e^y) = -ln m, keeping relative precision deep in the tail
        let mass = q.min(1.0 - q);
        let x = solve_increasing_unbounded(
            |y| -self.tail(y.exp()).max(f64::MIN_POSITIVE).ln(),
            -mass.ln(),
            0.0,
            1.0e-12,
        )
        .map_or(f64::NAN, Real::exp);
        if q > 0.5 {
            x
        } else {
            -x
        }
    }

    /// `Z / √(χ²/ν)` with the chi-square built from `⌈ν⌉` normal draws.
    fn sample(&self, rng: &mut dyn RngCore) -> Real {
        if !self.is_valid() {
            return f64::NAN;
        }
        let z = standard_normal(rng);
        let count = self.nu.ceil().to_usize().unwrap_or(0);
        let chi = sum_of_squared_normals(rng, count);
        z / (chi / self.nu).sqrt()
    }

    fn mean(&self) -> Real {
        if self.nu > 1.0 {
            0.0
        } else {
            f64::NAN
        }
    }

    fn variance(&self) -> Real {
        if self.nu > 2.0 {
            self.nu / (self.nu - 2.0)
        } else if self.nu > 1.0 {
            f64::INFINITY
        } else {
            f64::NAN
        }
    }

    fn median(&self) -> Real {
        0.0
    }

    fn display_support(&self) -> Support {
        Support::continuous(-5.0, 5.0)
    }
}
