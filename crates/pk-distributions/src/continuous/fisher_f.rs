//! Fisher–Snedecor F distribution.

use super::{positive_quantile, trapezoid_cdf};
use crate::distribution::{Distribution, Kind, Support};
use num_traits::ToPrimitive;
use pk_core::{CdfMethod, Real};
use pk_math::random_numbers::sum_of_squared_normals;
use pk_math::special::{ln_gamma, regularized_beta};
use rand::RngCore;

/// Ratio of two scaled chi-square variables with `d1` and `d2` degrees of
/// freedom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FisherF {
    d1: Real,
    d2: Real,
    cdf_method: CdfMethod,
}

impl FisherF {
    /// F distribution with `d1` numerator and `d2` denominator degrees of
    /// freedom, exact cdf.
    pub fn new(d1: Real, d2: Real) -> Self {
        Self {
            d1,
            d2,
            cdf_method: CdfMethod::Exact,
        }
    }

    /// Replace the cdf evaluation strategy.
    pub fn with_cdf_method(mut self, method: CdfMethod) -> Self {
        self.cdf_method = method;
        self
    }

    /// Numerator degrees of freedom.
    pub fn d1(&self) -> Real {
        self.d1
    }

    /// Denominator degrees of freedom.
    pub fn d2(&self) -> Real {
        self.d2
    }

    fn is_valid(&self) -> bool {
        self.d1.is_finite() && self.d2.is_finite() && self.d1 > 0.0 && self.d2 > 0.0
    }

    fn exact_cdf(&self, x: Real) -> Real {
        let (d1, d2) = (self.d1, self.d2);
        regularized_beta(0.5 * d1, 0.5 * d2, d1 * x / (d1 * x + d2))
    }
}

impl Distribution for FisherF {
    fn name(&self) -> &'static str {
        "f"
    }

    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn density(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        let (d1, d2) = (self.d1, self.d2);
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            return if d1 < 2.0 {
                f64::INFINITY
            } else if d1 == 2.0 {
                1.0
            } else {
                0.0
            };
        }
        let half_sum = 0.5 * (d1 + d2);
        let ln_norm = ln_gamma(half_sum) - ln_gamma(0.5 * d1) - ln_gamma(0.5 * d2)
            + 0.5 * d1 * (d1 / d2).ln();
        (ln_norm + (0.5 * d1 - 1.0) * x.ln() - half_sum * (d1 * x / d2).ln_1p()).exp()
    }

    fn cdf(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        if x == f64::INFINITY {
            return 1.0;
        }
        match self.cdf_method {
            CdfMethod::Exact => self.exact_cdf(x),
            CdfMethod::Trapezoid { steps } => trapezoid_cdf(|t| self.density(t), 0.0, x, steps),
        }
    }

    fn quantile(&self, q: Real) -> Real {
        if !self.is_valid() {
            return f64::NAN;
        }
        positive_quantile(|x| self.exact_cdf(x), q)
    }

    /// `(χ²₁/d1) / (χ²₂/d2)`, each chi-square built from `⌈d⌉` normal
    /// draws.
    fn sample(&self, rng: &mut dyn RngCore) -> Real {
        if !self.is_valid() {
            return f64::NAN;
        }
        let n1 = self.d1.ceil().to_usize().unwrap_or(0);
        let n2 = self.d2.ceil().to_usize().unwrap_or(0);
        let u1 = sum_of_squared_normals(rng, n1);
        let u2 = sum_of_squared_normals(rng, n2);
        (u1 / self.d1) / (u2 / self.d2)
    }

    /// `d2 / (d2 − 2)` for `d2 > 2`, `NaN` otherwise.
    fn mean(&self) -> Real {
        if self.d2 > 2.0 {
            self.d2 / (self.d2 - 2.0)
        } else {
            f64::NAN
        }
    }

    /// Defined for `d2 > 4`, `NaN` otherwise.
    fn variance(&self) -> Real {
        let (d1, d2) = (self.d1, self.d2);
        if d2 > 4.0 {
            2.0 * d2 * d2 * (d1 + d2 - 2.0) / (d1 * (d2 - 2.0).powi(2) * (d2 - 4.0))
        } else {
            f64::NAN
        }
    }

    /// No closed form; the numerically inverted cdf at 0.5.
    fn median(&self) -> Real {
        self.quantile(0.5)
    }

    fn display_support(&self) -> Support {
        Support::continuous(0.0, 10.0)
    }
}
