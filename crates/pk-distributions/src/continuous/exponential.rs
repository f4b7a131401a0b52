//! Exponential distribution.

use crate::distribution::{is_probability, Distribution, Kind, Support};
use pk_core::Real;
use pk_math::random_numbers::standard_exponential;
use rand::RngCore;
use std::f64::consts::LN_2;

/// Waiting time between events of a Poisson process with rate `λ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    lambda: Real,
}

impl Exponential {
    /// Exponential distribution with rate `lambda`.
    pub fn new(lambda: Real) -> Self {
        Self { lambda }
    }

    /// Rate.
    pub fn lambda(&self) -> Real {
        self.lambda
    }

    fn is_valid(&self) -> bool {
        self.lambda.is_finite() && self.lambda > 0.0
    }
}

impl Distribution for Exponential {
    fn name(&self) -> &'static str {
        "exponential"
    }

    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn density(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return 0.0;
        }
        self.lambda * (-self.lambda * x).exp()
    }

    fn cdf(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return 0.0;
        }
        -(-self.lambda * x).exp_m1()
    }

    fn quantile(&self, q: Real) -> Real {
        if !self.is_valid() || !is_probability(q) {
            return f64::NAN;
        }
        -(-q).ln_1p() / self.lambda
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Real {
        if !self.is_valid() {
            return f64::NAN;
        }
        standard_exponential(rng) / self.lambda
    }

    fn mean(&self) -> Real {
        1.0 / self.lambda
    }

    fn variance(&self) -> Real {
        1.0 / (self.lambda * self.lambda)
    }

    fn median(&self) -> Real {
        LN_2 / self.lambda
    }

    /// `[0, 5/λ]`.
    fn display_support(&self) -> Support {
        Support::continuous(0.0, 5.0 / self.lambda)
    }
}
