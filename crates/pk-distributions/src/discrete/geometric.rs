//! Geometric distribution on `{1, 2, …}`.

use crate::distribution::{is_probability, Distribution, Kind, Support};
use num_traits::ToPrimitive;
use pk_core::Real;
use pk_math::is_integer;
use pk_math::random_numbers::uniform_open;
use rand::RngCore;

/// Number of trials up to and including the first success.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    p: Real,
}

impl Geometric {
    /// Geometric distribution with per-trial success probability `p`.
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

impl Distribution for Geometric {
    fn name(&self) -> &'static str {
        "geometric"
    }

    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn density(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        if !is_integer(x) || x < 1.0 {
            return 0.0;
        }
        (1.0 - self.p).powf(x - 1.0) * self.p
    }

    fn cdf(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        if x < 1.0 {
            return 0.0;
        }
        1.0 - (1.0 - self.p).powf(x.floor())
    }

    fn quantile(&self, q: Real) -> Real {
        if !self.is_valid() || !is_probability(q) {
            return f64::NAN;
        }
        if q == 0.0 || self.p == 1.0 {
            return 1.0;
        }
        if q == 1.0 || self.p == 0.0 {
            return f64::INFINITY;
        }
        ((-q).ln_1p() / (-self.p).ln_1p()).ceil().max(1.0)
    }

    /// Inverse transform `⌈ln U / ln(1 − p)⌉`.
    fn sample(&self, rng: &mut dyn RngCore) -> Real {
        if !self.is_valid() {
            return f64::NAN;
        }
        if self.p == 1.0 {
            return 1.0;
        }
        if self.p == 0.0 {
            return f64::INFINITY;
        }
        (uniform_open(rng).ln() / (-self.p).ln_1p()).ceil().max(1.0)
    }

    fn mean(&self) -> Real {
        1.0 / self.p
    }

    fn variance(&self) -> Real {
        (1.0 - self.p) / (self.p * self.p)
    }

    /// `⌈−1 / log₂(1 − p)⌉`.
    fn median(&self) -> Real {
        if self.p == 0.0 {
            return f64::INFINITY;
        }
        (-1.0 / (1.0 - self.p).log2()).ceil().max(1.0)
    }

    /// `1..=max(⌈3/p⌉, 20)`.
    fn display_support(&self) -> Support {
        let last = (3.0 / self.p).ceil().to_i64().unwrap_or(i64::MAX).max(20);
        Support::discrete(1, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pk_math::random_numbers::MersenneTwisterUniformRng;

    #[test]
    fn geometric_pmf_and_cdf() {
        let d = Geometric::new(0.25);
        assert_abs_diff_eq!(d.density(1.0), 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(d.density(3.0), 0.75 * 0.75 * 0.25, epsilon = 1e-15);
        assert_eq!(d.density(0.0), 0.0);
        assert_eq!(d.density(2.5), 0.0);

        let mut running = 0.0;
        for k in 1..30 {
            running += d.density(k as Real);
            assert_abs_diff_eq!(d.cdf(k as Real), running, epsilon = 1e-12);
        }
        assert_eq!(d.cdf(0.5), 0.0);
    }

    #[test]
    fn geometric_moments() {
        let d = Geometric::new(0.25);
        assert_eq!(d.mean(), 4.0);
        assert_eq!(d.variance(), 12.0);
        assert_eq!(d.median(), 3.0);
        assert_eq!(Geometric::new(1.0).median(), 1.0);
        assert_eq!(Geometric::new(0.5).median(), 1.0);
    }

    #[test]
    fn geometric_quantile_matches_cdf() {
        let d = Geometric::new(0.2);
        for q in [0.05, 0.2, 0.5, 0.9, 0.99] {
            let k = d.quantile(q);
            assert!(d.cdf(k) >= q - 1e-12, "q = {q}, k = {k}");
            assert!(k == 1.0 || d.cdf(k - 1.0) < q, "q = {q}, k = {k}");
        }
        assert_eq!(d.quantile(1.0), f64::INFINITY);
    }

    #[test]
    fn geometric_support() {
        assert_eq!(Geometric::new(0.5).display_support(), Support::Discrete { first: 1, last: 20 });
        assert_eq!(Geometric::new(0.125).display_support(), Support::Discrete { first: 1, last: 24 });
    }

    #[test]
    fn geometric_degenerate_sampling() {
        let mut rng = MersenneTwisterUniformRng::new(2);
        assert_eq!(Geometric::new(1.0).sample(&mut rng), 1.0);
        assert_eq!(Geometric::new(0.0).sample(&mut rng), f64::INFINITY);
        let d = Geometric::new(0.3);
        for _ in 0..1_000 {
            let k = d.sample(&mut rng);
            assert!(k >= 1.0 && is_integer(k));
        }
    }
}
