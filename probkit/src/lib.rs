//! # probkit
//!
//! Probability distributions and normal-theory hypothesis testing.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `pk-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use probkit::core::EngineConfig;
//! use probkit::distributions::distribution;
//! use probkit::hypothesis::{critical_value, Tail};
//!
//! let poisson = distribution("poisson", &[4.0], &EngineConfig::default()).unwrap();
//! assert!((poisson.density(4.0) - 0.195_366_81).abs() < 1e-8);
//!
//! let c = critical_value(0.05, Tail::Two);
//! assert!((c.margin() - 1.959_96).abs() < 1e-5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and engine configuration.
pub use pk_core as core;

/// Special functions, normal approximations, integration, root finding, RNG.
pub use pk_math as math;

/// Discrete and continuous distributions, the registry, curves and sampling.
pub use pk_distributions as distributions;

/// Critical values, p-values and the z-test.
pub use pk_hypothesis as hypothesis;
