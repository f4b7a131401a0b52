//! Gamma distribution (shape `k`, scale `θ`).

use super::{positive_quantile, trapezoid_cdf};
use crate::distribution::{Distribution, Kind, Support};
use num_traits::ToPrimitive;
use pk_core::{CdfMethod, Real};
use pk_math::is_integer;
use pk_math::random_numbers::standard_exponential;
use pk_math::special::{ln_gamma, regularized_lower_gamma};
use rand::RngCore;
use rand_distr::Distribution as _;

/// Gamma distribution with shape `k` and scale `θ`.
///
/// [`sample`](Distribution::sample) sums `k` exponential draws when `k` is a
/// positive integer and otherwise returns the mean `kθ` without drawing
/// anything. That fallback is a known limitation kept for compatibility;
/// [`Gamma::sample_exact`] draws a true variate for every shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma {
    k: Real,
    theta: Real,
    cdf_method: CdfMethod,
}

impl Gamma {
    /// Gamma distribution with shape `k` and scale `theta`, exact cdf.
    pub fn new(k: Real, theta: Real) -> Self {
        Self {
            k,
            theta,
            cdf_method: CdfMethod::Exact,
        }
    }

    /// Replace the cdf evaluation strategy.
    pub fn with_cdf_method(mut self, method: CdfMethod) -> Self {
        self.cdf_method = method;
        self
    }

    /// Shape.
    pub fn shape(&self) -> Real {
        self.k
    }

    /// Scale.
    pub fn scale(&self) -> Real {
        self.theta
    }

    /// Cdf evaluation strategy.
    pub fn cdf_method(&self) -> CdfMethod {
        self.cdf_method
    }

    /// A true gamma variate for any positive shape (Marsaglia–Tsang, via
    /// `rand_distr`). `NaN` for invalid parameters.
    pub fn sample_exact(&self, rng: &mut dyn RngCore) -> Real {
        match rand_distr::Gamma::new(self.k, self.theta) {
            Ok(g) if self.is_valid() => g.sample(rng),
            _ => f64::NAN,
        }
    }

    fn is_valid(&self) -> bool {
        self.k.is_finite() && self.theta.is_finite() && self.k > 0.0 && self.theta > 0.0
    }
}

impl Distribution for Gamma {
    fn name(&self) -> &'static str {
        "gamma"
    }

    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn density(&self, x: Real) -> Real {
        if !self.is_valid() || x.is_nan() {
            return f64::NAN;
        }
        let (k, theta) = (self.k, self.theta);
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            return if k < 1.0 {
                f64::INFINITY
            } else if k == 1.0 {
                1.0 / theta
            } else {
                0.0
            };
        }
        ((k - 1.0) * x.ln() - x / theta - k * theta.ln() - ln_gamma(k)).exp()
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
            CdfMethod::Exact => regularized_lower_gamma(self.k, x / self.theta),
            CdfMethod::Trapezoid { steps } => trapezoid_cdf(|t| self.density(t), 0.0, x, steps),
        }
    }

    fn quantile(&self, q: Real) -> Real {
        if !self.is_valid() {
            return f64::NAN;
        }
        self.theta * positive_quantile(|z| regularized_lower_gamma(self.k, z), q)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Real {
        if !self.is_valid() {
            return f64::NAN;
        }
        if !is_integer(self.k) {
            return self.mean();
        }
        let draws = self.k.to_u64().unwrap_or(0);
        self.theta * (0..draws).map(|_| standard_exponential(rng)).sum::<Real>()
    }

    fn mean(&self) -> Real {
        self.k * self.theta
    }

    fn variance(&self) -> Real {
        self.k * self.theta * self.theta
    }

    /// No closed form; the numerically inverted cdf at 0.5.
    fn median(&self) -> Real {
        self.quantile(0.5)
    }

    /// `[0, mean + 4·sd]`.
    fn display_support(&self) -> Support {
        Support::continuous(0.0, self.mean() + 4.0 * self.std_dev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pk_math::random_numbers::MersenneTwisterUniformRng;
    use pk_math::Statistics;

    #[test]
    fn gamma_one_is_exponential() {
        let d = Gamma::new(1.0, 2.0);
        for x in [0.1, 1.0, 3.0, 8.0] {
            assert_abs_diff_eq!(d.density(x), 0.5 * (-x / 2.0).exp(), epsilon = 1e-12);
            assert_abs_diff_eq!(d.cdf(x), 1.0 - (-x / 2.0).exp(), epsilon = 1e-12);
        }
        assert_eq!(d.density(0.0), 0.5);
    }

    #[test]
    fn gamma_density_at_origin() {
        assert_eq!(Gamma::new(0.5, 1.0).density(0.0), f64::INFINITY);
        assert_eq!(Gamma::new(3.0, 1.0).density(0.0), 0.0);
        assert_eq!(Gamma::new(3.0, 1.0).density(-1.0), 0.0);
    }

    #[test]
    fn gamma_trapezoid_tracks_exact() {
        let exact = Gamma::new(3.0, 1.5);
        let trap = exact.with_cdf_method(CdfMethod::trapezoid());
        for x in [0.5, 2.0, 4.5, 9.0] {
            assert!(
                (exact.cdf(x) - trap.cdf(x)).abs() < 1e-5,
                "x = {x}: exact {} vs trapezoid {}",
                exact.cdf(x),
                trap.cdf(x)
            );
        }
    }

    #[test]
    fn gamma_quantile_and_median() {
        let d = Gamma::new(2.5, 2.0);
        for q in [0.01, 0.25, 0.5, 0.9, 0.999] {
            assert_abs_diff_eq!(d.cdf(d.quantile(q)), q, epsilon = 1e-10);
        }
        assert_abs_diff_eq!(d.cdf(d.median()), 0.5, epsilon = 1e-10);
        assert_eq!(d.quantile(0.0), 0.0);
        assert_eq!(d.quantile(1.0), f64::INFINITY);
    }

    #[test]
    fn gamma_non_integer_shape_returns_mean() {
        let d = Gamma::new(2.5, 3.0);
        let mut rng = MersenneTwisterUniformRng::new(1);
        for _ in 0..10 {
            assert_eq!(d.sample(&mut rng), d.mean());
        }
    }

    #[test]
    fn gamma_integer_and_exact_sampling() {
        let mut rng = MersenneTwisterUniformRng::new(8);
        let d = Gamma::new(3.0, 2.0);
        let sum: Statistics = (0..10_000).map(|_| d.sample(&mut rng)).collect();
        assert!((sum.mean().unwrap() - 6.0).abs() < 0.15);

        let d = Gamma::new(2.5, 3.0);
        let exact: Statistics = (0..10_000).map(|_| d.sample_exact(&mut rng)).collect();
        assert!((exact.mean().unwrap() - 7.5).abs() < 0.2);
        assert!(exact.population_variance().unwrap() > 10.0);
        assert!(Gamma::new(-1.0, 1.0).sample_exact(&mut rng).is_nan());
    }
}
