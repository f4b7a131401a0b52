//! # pk-core
//!
//! Core types, error definitions, and engine configuration for probkit.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace: type aliases, the error hierarchy with its
//! `ensure!` / `fail!` macros, and the [`EngineConfig`] context that callers
//! pass explicitly into the distribution engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Engine configuration (cdf evaluation method, curve resolution, support
/// coverage).
pub mod config;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for sizes, counts, and indices.
pub type Size = usize;

/// A probability in `[0, 1]`.
pub type Probability = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use config::{CdfMethod, EngineConfig};
pub use errors::{Error, Result};
