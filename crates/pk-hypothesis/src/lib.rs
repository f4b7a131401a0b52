//! # pk-hypothesis
//!
//! Normal-theory hypothesis testing for probkit: tail directions, critical
//! values and p-values of the standard normal, rejection regions, and a
//! one-sample z-test that reports the critical-value, p-value and
//! confidence-interval decisions side by side.
//!
//! ```
//! use pk_hypothesis::{critical_value, p_value, CriticalValue, Tail};
//!
//! assert!(matches!(critical_value(0.05, Tail::Left), CriticalValue::One(c) if c < -1.64));
//! assert!(p_value(-2.0, Tail::Left) < 0.05);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The z-test and its decision rules.
pub mod decision;

/// Critical values, p-values and rejection regions.
pub mod kit;

/// Tail direction and decision method.
pub mod tail;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use decision::{ConfidenceInterval, Decisions, TestOutcome, TestParameters, ZTest};
pub use kit::{
    critical_value, critical_value_for, p_value, p_value_for, CriticalValue, RejectionRegion,
};
pub use pk_math::normal::{normal_cdf, normal_cdf_inverse, normal_density, normal_pdf};
pub use tail::{Method, Tail};
