//! Special functions.
//!
//! These are the numerically sensitive primitives every density and
//! cumulative function is built on. The coefficient tables are kept
//! verbatim from their published sources; changing one requires
//! re-verifying the accuracy tests in each submodule.

pub mod erf;
pub mod gamma;
pub mod incomplete;

pub use erf::{erf, erfc};
pub use gamma::{combinations, factorial, gamma, ln_combinations, ln_factorial, ln_gamma};
pub use incomplete::{regularized_beta, regularized_lower_gamma};
