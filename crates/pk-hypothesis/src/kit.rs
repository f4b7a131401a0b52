//! Critical values, p-values and rejection regions of the standard normal.
//!
//! All lookups go through [`normal_cdf`] (A&S 26.2.17) and
//! [`normal_cdf_inverse`] (Acklam) from `pk-math`.

use crate::tail::Tail;
use pk_core::{Probability, Real, Result};
use pk_math::normal::{normal_cdf, normal_cdf_inverse};

/// Critical value(s) for a significance level and tail direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CriticalValue {
    /// Single boundary of a one-tailed test.
    One(Real),
    /// `(lower, upper)` boundaries of a two-tailed test.
    Two(Real, Real),
}

impl CriticalValue {
    /// Distance of the boundary from 0, used as the confidence-interval
    /// half-width in standard errors.
    pub fn margin(&self) -> Real {
        match *self {
            CriticalValue::One(c) => c.abs(),
            CriticalValue::Two(_, hi) => hi.abs(),
        }
    }
}

/// The set of standardized statistics that reject the null hypothesis.
///
/// Boundaries belong to the region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RejectionRegion {
    /// `z ≤ c`.
    Below(Real),
    /// `z ≥ c`.
    Above(Real),
    /// `z ≤ lower` or `z ≥ upper`.
    Outside(Real, Real),
}

impl RejectionRegion {
    /// The region of a test with the given tail at level `alpha`.
    pub fn new(alpha: Probability, tail: Tail) -> Self {
        match critical_value(alpha, tail) {
            CriticalValue::Two(lo, hi) => RejectionRegion::Outside(lo, hi),
            CriticalValue::One(c) if tail == Tail::Left => RejectionRegion::Below(c),
            CriticalValue::One(c) => RejectionRegion::Above(c),
        }
    }

    /// Whether `z` falls in the region. `NaN` never does.
    pub fn contains(&self, z: Real) -> bool {
        match *self {
            RejectionRegion::Below(c) => z <= c,
            RejectionRegion::Above(c) => z >= c,
            RejectionRegion::Outside(lo, hi) => z <= lo || z >= hi,
        }
    }
}

/// Critical value(s) of the standard normal at significance `alpha`.
///
/// Left: `Φ⁻¹(α)`; right: `Φ⁻¹(1 − α)`; two: `(Φ⁻¹(α/2), Φ⁻¹(1 − α/2))`.
///
/// # Example
/// ```
/// use pk_hypothesis::{critical_value, CriticalValue, Tail};
///
/// let CriticalValue::Two(lo, hi) = critical_value(0.05, Tail::Two) else {
///     unreachable!()
/// };
/// assert!((hi - 1.959_96).abs() < 1e-5 && (lo + hi).abs() < 1e-12);
/// ```
pub fn critical_value(alpha: Probability, tail: Tail) -> CriticalValue {
    match tail {
        Tail::Left => CriticalValue::One(normal_cdf_inverse(alpha)),
        Tail::Right => CriticalValue::One(normal_cdf_inverse(1.0 - alpha)),
        Tail::Two => CriticalValue::Two(
            normal_cdf_inverse(alpha / 2.0),
            normal_cdf_inverse(1.0 - alpha / 2.0),
        ),
    }
}

/// P-value of the standardized statistic `z`.
///
/// Left: `Φ(z)`; right: `1 − Φ(z)`; two: `2·min(Φ(z), 1 − Φ(z))`.
pub fn p_value(z: Real, tail: Tail) -> Probability {
    let lower = normal_cdf(z);
    match tail {
        Tail::Left => lower,
        Tail::Right => 1.0 - lower,
        Tail::Two => 2.0 * lower.min(1.0 - lower),
    }
}

/// [`critical_value`] with the tail given as text.
///
/// Fails with `InvalidTail` for anything but `left`, `right` or `two`.
pub fn critical_value_for(alpha: Probability, tail: &str) -> Result<CriticalValue> {
    Ok(critical_value(alpha, tail.parse()?))
}

/// [`p_value`] with the tail given as text.
pub fn p_value_for(z: Real, tail: &str) -> Result<Probability> {
    Ok(p_value(z, tail.parse()?))
}
