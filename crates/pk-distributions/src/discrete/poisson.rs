//! Poisson distribution.

use super::{search_quantile, sum_pmf};
use crate::distribution::{is_probability, Distribution, Kind, Support};
use num_traits::ToPrimitive;
use pk_core::Real;
use pk_math::is_integer;
use pk_math::random_numbers::uniform;
use pk_math::special::ln_factorial;
use rand::RngCore;

/// Number of events in a unit interval when events arrive at rate `λ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    lambda: Real,
}

impl Poisson {
    /// Poisson distribution with mean `lambda`.
    pub fn new(lambda: Real) -> Self {
        Self { lambda }
    }

    /// Mean event count.
    pub fn lambda(&self) -> Real {
        self.lambda
    }

    fn is_valid(&self) -> bool {
        self.lambda.is_finite() && self.lambda >= 0.0
    }

    fn pmf(&self, k: Real) -> Real {
        let lambda = self.lambda;
        if !is_integer(k) || k < 0.0 {
            return 0.0;
        }
        if k == 0.0 {
            return (-lambda).exp();
        }
        if lambda == 0.0 {
            return 0.0;
        }
        (k * lambda.ln() - lambda - ln_factorial(k)).exp()
    }

    /// Last integer a quantile search visits; the mass beyond it is far
    /// below double precision.
    fn search_limit(&self) -> Real {
        (self.lambda + 50.0 * self.lambda.sqrt() + 50.0).ceil()
    }
}

impl Distribution for Poisson {
    fn name(&self) -> &'static str {
        "poisson"
    }

    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn density(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        self.pmf(x)
    }

    fn cdf(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return 0.0;
        }
        sum_pmf(|k| self.pmf(k), 0.0, x.floor(), self.lambda)
    }

    fn quantile(&self, q: Real) -> Real {
        if !self.is_valid() || !is_probability(q) {
            return f64::NAN;
        }
        if q == 1.0 {
            return f64::INFINITY;
        }
        search_quantile(|k| self.pmf(k), 0.0, self.search_limit(), q)
    }

    /// Knuth's multiplicative method: count uniforms until their product
    /// drops to `e^{-λ}`. O(λ) per draw, and capped near 745 once `e^{-λ}`
    /// underflows.
    fn sample(&self, rng: &mut dyn RngCore) -> Real {
        if !self.is_valid() {
            return f64::NAN;
        }
        let threshold = (-self.lambda).exp();
        let mut k = 0u64;
        let mut product = 1.0;
        loop {
            k += 1;
            product *= uniform(rng);
            if product <= threshold {
                break;
            }
        }
        (k - 1) as Real
    }

    fn mean(&self) -> Real {
        self.lambda
    }

    fn variance(&self) -> Real {
        self.lambda
    }

    /// `floor(λ + 1/3 − 0.02/λ)`; 0 for `λ = 0`.
    fn median(&self) -> Real {
        if self.lambda == 0.0 {
            return 0.0;
        }
        (self.lambda + 1.0 / 3.0 - 0.02 / self.lambda).floor()
    }

    /// `0..=max(⌈3λ⌉, 10)`.
    fn display_support(&self) -> Support {
        let last = (3.0 * self.lambda).ceil().to_i64().unwrap_or(0).max(10);
        Support::discrete(0, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pk_math::random_numbers::MersenneTwisterUniformRng;

    #[test]
    fn poisson_pmf_reference() {
        let d = Poisson::new(4.0);
        assert_abs_diff_eq!(d.density(4.0), 0.195_366_81, epsilon = 1e-8);
        assert_abs_diff_eq!(d.density(0.0), (-4.0_f64).exp(), epsilon = 1e-15);
        assert_eq!(d.density(1.5), 0.0);
        assert_eq!(d.density(-2.0), 0.0);
        assert_eq!(d.mean(), 4.0);
        assert_eq!(d.variance(), 4.0);
    }

    #[test]
    fn poisson_cdf_is_running_sum() {
        let d = Poisson::new(2.5);
        let mut running = 0.0;
        for k in 0..15 {
            running += d.density(k as Real);
            assert_abs_diff_eq!(d.cdf(k as Real + 0.3), running, epsilon = 1e-12);
        }
        assert!((d.cdf(1.0e9) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn poisson_zero_rate() {
        let d = Poisson::new(0.0);
        assert_eq!(d.density(0.0), 1.0);
        assert_eq!(d.density(1.0), 0.0);
        assert_eq!(d.median(), 0.0);
        assert_eq!(d.quantile(0.5), 0.0);
    }

    #[test]
    fn poisson_median_and_support() {
        assert_eq!(Poisson::new(4.0).median(), 4.0);
        assert_eq!(Poisson::new(3.0).display_support(), Support::Discrete { first: 0, last: 10 });
        assert_eq!(Poisson::new(7.2).display_support(), Support::Discrete { first: 0, last: 22 });
    }

    #[test]
    fn poisson_quantile() {
        let d = Poisson::new(4.0);
        let k = d.quantile(0.5);
        assert!(d.cdf(k) >= 0.5 && d.cdf(k - 1.0) < 0.5);
        assert_eq!(d.quantile(1.0), f64::INFINITY);
        assert!(d.quantile(-0.1).is_nan());
    }

    #[test]
    fn poisson_sample_mean() {
        let d = Poisson::new(3.0);
        let mut rng = MersenneTwisterUniformRng::new(17);
        let mean = (0..10_000).map(|_| d.sample(&mut rng)).sum::<Real>() / 10_000.0;
        assert!((mean - 3.0).abs() < 0.08, "got {mean}");
    }
}
