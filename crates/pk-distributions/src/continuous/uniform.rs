//! Continuous uniform distribution.

use crate::distribution::{is_probability, Distribution, Kind, Support};
use pk_core::Real;
use pk_math::random_numbers::uniform;
use rand::RngCore;

/// Uniform distribution on `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    a: Real,
    b: Real,
}

impl Uniform {
    /// Uniform distribution on `[a, b]`; requires `a < b`.
    pub fn new(a: Real, b: Real) -> Self {
        Self { a, b }
    }

    /// Lower bound.
    pub fn a(&self) -> Real {
        self.a
    }

    /// Upper bound.
    pub fn b(&self) -> Real {
        self.b
    }

    fn is_valid(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.a < self.b
    }
}

impl Distribution for Uniform {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn density(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        if x < self.a || x > self.b {
            0.0
        } else {
            1.0 / (self.b - self.a)
        }
    }

    fn cdf(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        if x < self.a {
            0.0
        } else if x > self.b {
            1.0
        } else {
            (x - self.a) / (self.b - self.a)
        }
    }

    fn quantile(&self, q: Real) -> Real {
        if !self.is_valid() || !is_probability(q) {
            return f64::NAN;
        }
        self.a + q * (self.b - self.a)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Real {
        if !self.is_valid() {
            return f64::NAN;
        }
        self.a + uniform(rng) * (self.b - self.a)
    }

    fn mean(&self) -> Real {
        0.5 * (self.a + self.b)
    }

    fn variance(&self) -> Real {
        let w = self.b - self.a;
        w * w / 12.0
    }

    fn median(&self) -> Real {
        0.5 * (self.a + self.b)
    }

    fn display_support(&self) -> Support {
        Support::continuous(self.a, self.b)
    }
}
