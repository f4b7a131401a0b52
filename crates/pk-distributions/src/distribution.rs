//! The distribution capability set shared by every family.

use num_traits::ToPrimitive;
use pk_core::Real;
use rand::RngCore;
use std::fmt;

/// Upper bound on the number of integers a discrete support may enumerate.
pub const MAX_DISCRETE_POINTS: i64 = 1_000_000;

/// Whether `q` is a usable quantile level (false for `NaN`).
#[inline]
pub(crate) fn is_probability(q: Real) -> bool {
    (0.0..=1.0).contains(&q)
}

/// Whether a distribution has a mass function or a density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Integer-valued; `density` is a probability mass function.
    Discrete,
    /// Real-valued; `density` is a probability density function.
    Continuous,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Discrete => write!(f, "discrete"),
            Kind::Continuous => write!(f, "continuous"),
        }
    }
}

/// The practically relevant range of a distribution.
///
/// A rendering and integration heuristic: the true support of Poisson,
/// Geometric, Exponential, Gamma and Chi-Square is unbounded above, and
/// callers must not treat a truncated support as exhaustive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Support {
    /// Every integer in `first..=last`.
    Discrete {
        /// Smallest integer.
        first: i64,
        /// Largest integer (inclusive).
        last: i64,
    },
    /// The closed interval `[low, high]`.
    Continuous {
        /// Lower bound.
        low: Real,
        /// Upper bound.
        high: Real,
    },
}

impl Support {
    /// A discrete support, truncated to [`MAX_DISCRETE_POINTS`] integers.
    pub fn discrete(first: i64, last: i64) -> Self {
        let last = last.min(first.saturating_add(MAX_DISCRETE_POINTS - 1));
        Support::Discrete { first, last }
    }

    /// A continuous support.
    pub fn continuous(low: Real, high: Real) -> Self {
        Support::Continuous { low, high }
    }

    /// Lower bound as a real number.
    pub fn min(&self) -> Real {
        match *self {
            Support::Discrete { first, .. } => first as Real,
            Support::Continuous { low, .. } => low,
        }
    }

    /// Upper bound as a real number.
    pub fn max(&self) -> Real {
        match *self {
            Support::Discrete { last, .. } => last as Real,
            Support::Continuous { high, .. } => high,
        }
    }

    /// The integers of a discrete support in increasing order; empty for a
    /// continuous support.
    pub fn integers(&self) -> Vec<Real> {
        match *self {
            Support::Discrete { first, last } => (first..=last).map(|k| k as Real).collect(),
            Support::Continuous { .. } => Vec::new(),
        }
    }

    /// Whether `x` lies within the bounds (and is an integer, if discrete).
    pub fn contains(&self, x: Real) -> bool {
        match *self {
            Support::Discrete { first, last } => {
                x.fract() == 0.0 && x >= first as Real && x <= last as Real
            }
            Support::Continuous { low, high } => x >= low && x <= high,
        }
    }

    /// Grow the bounds to include `[low, high]`. Non-finite targets leave
    /// the corresponding bound untouched; bounds are never narrowed.
    pub fn widened(self, low: Real, high: Real) -> Self {
        match self {
            Support::Discrete { first, last } => {
                let first = low.floor().to_i64().map_or(first, |l| l.min(first));
                let last = high.ceil().to_i64().map_or(last, |h| h.max(last));
                Support::discrete(first, last)
            }
            Support::Continuous { low: l, high: h } => Support::Continuous {
                low: if low.is_finite() { l.min(low) } else { l },
                high: if high.is_finite() { h.max(high) } else { h },
            },
        }
    }
}

/// A probability distribution with bound parameters.
///
/// Arithmetic-domain problems never panic or return errors: a density off
/// the support is 0, a moment that does not exist is `NaN` or `∞`, and
/// invalid parameters make `density` and `cdf` return `NaN`.
pub trait Distribution: fmt::Debug + Send + Sync {
    /// Registry name of the family.
    fn name(&self) -> &'static str;

    /// Discrete or continuous.
    fn kind(&self) -> Kind;

    /// Probability mass (discrete) or density (continuous) at `x`.
    fn density(&self, x: Real) -> Real;

    /// Cumulative probability P(X ≤ x).
    fn cdf(&self, x: Real) -> Real;

    /// Smallest `x` with `cdf(x) ≥ q`. `NaN` for `q` outside `[0, 1]`.
    fn quantile(&self, q: Real) -> Real;

    /// One random variate drawn from `rng`.
    fn sample(&self, rng: &mut dyn RngCore) -> Real;

    /// Expected value.
    fn mean(&self) -> Real;

    /// Variance.
    fn variance(&self) -> Real;

    /// Median, or the family's closed-form approximation of it.
    fn median(&self) -> Real;

    /// The family's display heuristic for the relevant range.
    fn display_support(&self) -> Support;

    /// Standard deviation.
    fn std_dev(&self) -> Real {
        self.variance().sqrt()
    }

    /// The display support, widened when `coverage` is set so that it holds
    /// at least the central `coverage` probability mass.
    fn support(&self, coverage: Option<Real>) -> Support {
        let raw = self.display_support();
        match coverage {
            Some(c) if c > 0.0 && c < 1.0 => {
                let tail = 0.5 * (1.0 - c);
                raw.widened(self.quantile(tail), self.quantile(1.0 - tail))
            }
            _ => raw,
        }
    }
}
