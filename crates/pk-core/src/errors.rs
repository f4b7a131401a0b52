//! Error types for probkit.
//!
//! Numerical domain problems (a pmf evaluated off its support, a moment that
//! does not exist) never surface here: they resolve to `0`, `NaN` or
//! `±Infinity` at the call site. This enum only covers malformed *control*
//! inputs such as unknown distribution names, unparseable tail directions,
//! wrong parameter-vector lengths, and invalid configuration.

use thiserror::Error;

/// The top-level error type used throughout probkit.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No distribution is registered under the requested name.
    #[error("unknown distribution: {0}")]
    NotFound(String),

    /// A hypothesis-test tail direction other than left, right, or two.
    #[error("invalid tail direction: {0:?} (expected \"left\", \"right\" or \"two\")")]
    InvalidTail(String),

    /// A hypothesis-test decision method that is not recognised.
    #[error("invalid decision method: {0:?} (expected \"critical\", \"p-value\" or \"ci\")")]
    InvalidMethod(String),

    /// A parameter vector of the wrong length was bound to a distribution.
    #[error("{distribution} takes {expected} parameter(s), got {got}")]
    ArityMismatch {
        /// Registry name of the distribution.
        distribution: &'static str,
        /// Number of declared parameters.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },
}

/// Shorthand `Result` type used throughout probkit.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pk_core::{ensure, errors::Error};
/// fn positive(x: f64) -> pk_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use pk_core::{fail, errors::Error};
/// fn always_err() -> pk_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
