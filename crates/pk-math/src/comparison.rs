//! Comparison utilities.

use pk_core::Real;

/// Return `true` if `x` is a finite whole number.
///
/// This is the integrality test used for discrete arguments: `3.0` is an
/// integer, `3.5`, `NaN` and `∞` are not.
#[inline]
pub fn is_integer(x: Real) -> bool {
    x.is_finite() && x.fract() == 0.0
}
