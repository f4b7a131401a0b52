//! Bernoulli distribution.

use crate::distribution::{is_probability, Distribution, Kind, Support};
use pk_core::Real;
use pk_math::random_numbers::uniform;
use rand::RngCore;

/// A single trial that yields 1 with probability `p` and 0 otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bernoulli {
    p: Real,
}

impl Bernoulli {
    /// Bernoulli distribution with success probability `p`.
    pub fn new(p: Real) -> Self {
        Self { p }
    }

    /// Success probability.
    pub fn p(&self) -> Real {
        self.p
    }

    fn is_valid(&self) -> bool {
        is_probability(self.p)
    }
}

impl Distribution for Bernoulli {
    fn name(&self) -> &'static str {
        "bernoulli"
    }

    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn density(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        if x == 0.0 {
            1.0 - self.p
        } else if x == 1.0 {
            self.p
        } else {
            0.0
        }
    }

    fn cdf(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            0.0
        } else if x < 1.0 {
            1.0 - self.p
        } else {
            1.0
        }
    }

    fn quantile(&self, q: Real) -> Real {
        if !self.is_valid() || !is_probability(q) {
            return f64::NAN;
        }
        if q <= 1.0 - self.p {
            0.0
        } else {
            1.0
        }
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Real {
        if !self.is_valid() {
            return f64::NAN;
        }
        if uniform(rng) < self.p {
            1.0
        } else {
            0.0
        }
    }

    fn mean(&self) -> Real {
        self.p
    }

    fn variance(&self) -> Real {
        self.p * (1.0 - self.p)
    }

    /// 0.5 when `p = 0.5`, where 0 and 1 are equally likely.
    fn median(&self) -> Real {
        if self.p < 0.5 {
            0.0
        } else if self.p > 0.5 {
            1.0
        } else if self.p == 0.5 {
            0.5
        } else {
            f64::NAN
        }
    }

    fn display_support(&self) -> Support {
        Support::discrete(0, 1)
    }
}
