//! # pk-math
//!
//! Numerical primitives for probkit: special functions (gamma, factorial,
//! combinations, error function, regularized incomplete gamma/beta), the
//! standard-normal cdf and its inverse, fixed-grid trapezoid integration,
//! a bracketing Brent root finder, uniform and normal random sources, and a
//! running statistics accumulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Integrality test for discrete arguments.
pub mod comparison;

/// Numerical integration.
pub mod integrals;

/// Standard-normal density, cdf, and inverse cdf approximations.
pub mod normal;

/// Random number generators and elementary samplers.
pub mod random_numbers;

/// One-dimensional root finding.
pub mod solvers1d;

/// Special functions.
pub mod special;

/// Statistics accumulator.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::is_integer;
pub use normal::{normal_cdf, normal_cdf_inverse, normal_pdf};
pub use solvers1d::{brent, solve_increasing_unbounded};
pub use special::{combinations, erf, erfc, factorial, gamma, ln_gamma};
pub use statistics::Statistics;
