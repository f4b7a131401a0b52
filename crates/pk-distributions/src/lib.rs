//! # pk-distributions
//!
//! Discrete (Bernoulli, Binomial, Poisson, Geometric) and continuous
//! (Normal, Uniform, Exponential, Gamma, Student-t, Fisher F, Chi-Square)
//! probability distributions behind one object-safe [`Distribution`]
//! trait, a name-indexed registry with parameter metadata, and plotting
//! and simulation helpers.
//!
//! ```
//! use pk_core::EngineConfig;
//! use pk_distributions::{distribution, Kind};
//!
//! let d = distribution("binomial", &[10.0, 0.5], &EngineConfig::default()).unwrap();
//! assert_eq!(d.kind(), Kind::Discrete);
//! assert!((d.density(5.0) - 0.246_093_75).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Real-valued distribution families.
pub mod continuous;

/// Density and cumulative curves.
pub mod curve;

/// Integer-valued distribution families.
pub mod discrete;

/// The [`Distribution`] trait, [`Kind`] and [`Support`].
pub mod distribution;

/// Parameter declarations and named parameter values.
pub mod params;

/// Registry lookup and binding.
pub mod registry;

/// Sampling, summary statistics and histograms.
pub mod sampling;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use continuous::{ChiSquare, Exponential, FisherF, Gamma, Normal, StudentT, Uniform};
pub use curve::{curve, curve_over, curve_with, CurveKind};
pub use discrete::{Bernoulli, Binomial, Geometric, Poisson};
pub use distribution::{Distribution, Kind, Support};
pub use params::{ParamSpec, ParameterSet};
pub use registry::{all, distribution, get_distribution, DistributionSpec};
pub use sampling::{draw, histogram, Bin, Histogram, SampleSummary};
