//! Chi-square distribution.

use super::{positive_quantile, trapezoid_cdf};
use crate::distribution::{Distribution, Kind, Support};
use num_traits::ToPrimitive;
use pk_core::{CdfMethod, Real};
use pk_math::random_numbers::sum_of_squared_normals;
use pk_math::special::{ln_gamma, regularized_lower_gamma};
use rand::RngCore;
use std::f64::consts::LN_2;

/// Sum of `k` squared independent standard normals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquare {
    k: Real,
    cdf_method: CdfMethod,
}

impl ChiSquare {
    /// Chi-square distribution with `k` degrees of freedom, exact cdf.
    pub fn new(k: Real) -> Self {
        Self {
            k,
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
        self.k
    }

    fn is_valid(&self) -> bool {
        self.k.is_finite() && self.k > 0.0
    }
}

impl Distribution for ChiSquare {
    fn name(&self) -> &'static str {
        "chiSquare"
    }

    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn density(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        let half = 0.5 * self.k;
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            return if half < 1.0 {
                f64::INFINITY
            } else if half == 1.0 {
                0.5
            } else {
                0.0
            };
        }
        ((half - 1.0) * x.ln() - 0.5 * x - half * LN_2 - ln_gamma(half)).exp()
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
            CdfMethod::Exact => regularized_lower_gamma(0.5 * self.k, 0.5 * x),
            CdfMethod::Trapezoid { steps } => trapezoid_cdf(|t| self.density(t), 0.0, x, steps),
        }
    }

    fn quantile(&self, q: Real) -> Real {
        if !self.is_valid() {
            return f64::NAN;
        }
        2.0 * positive_quantile(|z| regularized_lower_gamma(0.5 * self.k, z), q)
    }

    /// Sum of `⌈k⌉` squared standard normal draws.
    fn sample(&self, rng: &mut dyn RngCore) -> Real {
        if !self.is_valid() {
            return f64::NAN;
        }
        let count = self.k.ceil().to_usize().unwrap_or(0);
        sum_of_squared_normals(rng, count)
    }

    fn mean(&self) -> Real {
        self.k
    }

    fn variance(&self) -> Real {
        2.0 * self.k
    }

    /// Wilson–Hilferty: `k (1 − 2/(9k))³`.
    fn median(&self) -> Real {
        self.k * (1.0 - 2.0 / (9.0 * self.k)).powi(3)
    }

    /// `[0, k + 4√(2k)]`.
    fn display_support(&self) -> Support {
        Support::continuous(0.0, self.k + 4.0 * (2.0 * self.k).sqrt())
    }
}
