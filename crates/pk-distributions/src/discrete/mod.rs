//! Integer-valued distributions.
//!
//! Every mass function returns 0 off the integer support, and every cdf is
//! the running sum of the mass function up to `floor(x)` (or its closed
//! form, where one exists).

pub mod bernoulli;
pub mod binomial;
pub mod geometric;
pub mod poisson;

pub use bernoulli::Bernoulli;
pub use binomial::Binomial;
pub use geometric::Geometric;
pub use poisson::Poisson;

use pk_core::Real;

/// Relative size below which a tail term no longer changes a cdf sum.
const NEGLIGIBLE_TERM: Real = 1.0e-20;

/// Sum `pmf(first), pmf(first + 1), …, pmf(last)`.
///
/// Stops early once past `mode` and the terms have become negligible.
pub(crate) fn sum_pmf<F>(pmf: F, first: Real, last: Real, mode: Real) -> Real
where
    F: Fn(Real) -> Real,
{
    let mut total = 0.0;
    let mut k = first;
    while k <= last {
        let term = pmf(k);
        total += term;
        if k > mode && term <= total * NEGLIGIBLE_TERM {
            break;
        }
        k += 1.0;
    }
    total.min(1.0)
}

/// Smallest integer `k` in `first..=last` whose running pmf sum reaches
/// `q`; `last` if rounding keeps the sum below `q`.
pub(crate) fn search_quantile<F>(pmf: F, first: Real, last: Real, q: Real) -> Real
where
    F: Fn(Real) -> Real,
{
    let mut total = 0.0;
    let mut k = first;
    while k < last {
        total += pmf(k);
        if total >= q {
            return k;
        }
        k += 1.0;
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_sum_and_search_agree() {
        let pmf = |k: Real| if (0.0..=3.0).contains(&k) { 0.25 } else { 0.0 };
        assert_eq!(sum_pmf(pmf, 0.0, 1.0, 1.5), 0.5);
        assert_eq!(search_quantile(pmf, 0.0, 3.0, 0.5), 1.0);
        assert_eq!(search_quantile(pmf, 0.0, 3.0, 0.0), 0.0);
        assert_eq!(search_quantile(pmf, 0.0, 3.0, 1.0), 3.0);
    }
}
