//! Binomial distribution.

use super::NEGLIGIBLE_TERM;
use crate::distribution::{is_probability, Distribution, Kind, Support};
use num_traits::ToPrimitive;
use pk_core::Real;
use pk_math::random_numbers::uniform;
use pk_math::special::{combinations, ln_combinations};
use pk_math::is_integer;
use rand::RngCore;

/// Largest `min(k, n − k)` for which the mass is a direct product.
const DIRECT_TERMS: Real = 64.0;

/// Number of successes in `n` independent trials with success probability
/// `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    n: Real,
    p: Real,
}

impl Binomial {
    /// Binomial distribution with `n` trials and success probability `p`.
    pub fn new(n: Real, p: Real) -> Self {
        Self { n, p }
    }

    /// Number of trials.
    pub fn n(&self) -> Real {
        self.n
    }

    /// Success probability.
    pub fn p(&self) -> Real {
        self.p
    }

    fn is_valid(&self) -> bool {
        is_integer(self.n) && self.n >= 0.0 && is_probability(self.p)
    }

    fn pmf(&self, k: Real) -> Real {
        let (n, p) = (self.n, self.p);
        if !is_integer(k) || k < 0.0 || k > n {
            return 0.0;
        }
        if p == 0.0 {
            return if k == 0.0 { 1.0 } else { 0.0 };
        }
        if p == 1.0 {
            return if k == n { 1.0 } else { 0.0 };
        }
        if k.min(n - k) <= DIRECT_TERMS {
            let direct = combinations(n, k) * p.powf(k) * (1.0 - p).powf(n - k);
            if direct.is_finite() && direct > 0.0 {
                return direct;
            }
        }
        // C(n, k) is too long a product, overflowed, or the powers underflowed
        (ln_combinations(n, k) + k * p.ln() + (n - k) * (-p).ln_1p()).exp()
    }

    /// Most likely number of successes.
    fn mode(&self) -> Real {
        ((self.n + 1.0) * self.p).floor().min(self.n)
    }

    /// Sum of the masses from `k` outwards, away from the mode, in steps of
    /// `step` (`±1`). Each term follows from the previous by the ratio
    /// `P(k+1) / P(k) = (n − k) / (k + 1) · p / (1 − p)`.
    fn tail_from(&self, k: Real, step: Real) -> Real {
        let (n, odds) = (self.n, self.p / (1.0 - self.p));
        let mut term = self.pmf(k);
        let mut total = 0.0;
        let mut k = k;
        while term > 0.0 && (0.0..=n).contains(&k) {
            total += term;
            if term <= total * NEGLIGIBLE_TERM {
                break;
            }
            term *= if step > 0.0 {
                (n - k) / (k + 1.0) * odds
            } else {
                k / (n - k + 1.0) / odds
            };
            k += step;
        }
        total
    }

    /// `P(X ≤ k)` for an integer `0 ≤ k < n`, summing whichever tail lies
    /// away from the mode.
    fn lower_sum(&self, k: Real) -> Real {
        if self.p == 0.0 {
            return 1.0;
        }
        if self.p == 1.0 {
            return 0.0;
        }
        if k < self.mode() {
            self.tail_from(k, -1.0).min(1.0)
        } else {
            (1.0 - self.tail_from(k + 1.0, 1.0)).max(0.0)
        }
    }
}

impl Distribution for Binomial {
    fn name(&self) -> &'static str {
        "binomial"
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
        if x >= self.n {
            return 1.0;
        }
        self.lower_sum(x.floor())
    }

    fn quantile(&self, q: Real) -> Real {
        if !self.is_valid() || !is_probability(q) {
            return f64::NAN;
        }
        // smallest k with P(X ≤ k) ≥ q
        let (mut lo, mut hi) = (0.0, self.n);
        while lo < hi {
            let mid = ((lo + hi) / 2.0).floor();
            if self.lower_sum(mid) >= q {
                hi = mid;
            } else {
                lo = mid + 1.0;
            }
        }
        lo
    }

    /// Sum of `n` Bernoulli trials: exact, O(n) uniforms per draw.
    fn sample(&self, rng: &mut dyn RngCore) -> Real {
        if !self.is_valid() {
            return f64::NAN;
        }
        let trials = self.n.to_u64().unwrap_or(0);
        (0..trials).filter(|_| uniform(rng) < self.p).count() as Real
    }

    fn mean(&self) -> Real {
        self.n * self.p
    }

    fn variance(&self) -> Real {
        self.n * self.p * (1.0 - self.p)
    }

    /// `floor(np)` below `p = 0.5`, `floor(np + 1)` otherwise, capped at
    /// `n`. An approximation, not the exact median.
    fn median(&self) -> Real {
        let shift = if self.p < 0.5 { 0.0 } else { 1.0 };
        (self.n * self.p + shift).floor().min(self.n)
    }

    fn display_support(&self) -> Support {
        Support::discrete(0, self.n.to_i64().unwrap_or(0))
    }
}
