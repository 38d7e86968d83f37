//! Error types for heston-esg.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below. Precondition
//! checks go through the [`ensure!`](crate::ensure) macro and unconditional
//! failures through [`fail!`](crate::fail).

use thiserror::Error;

/// The top-level error type used throughout heston-esg.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A matrix factorisation failed, e.g. a correlation matrix that is not
    /// positive-definite.
    #[error("decomposition failed: {0}")]
    Decomposition(String),

    /// A simulated variance left the domain `[0, ∞)`.
    #[error("negative variance {value} in scenario {scenario} at step {step}")]
    NegativeVariance {
        /// Scenario (row) in which the variance went negative.
        scenario: usize,
        /// Time step (column) of the offending entry.
        step: usize,
        /// The offending value (negative or NaN).
        value: f64,
    },

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },
}

/// Shorthand `Result` type used throughout heston-esg.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use esg_core::ensure;
/// fn positive(x: f64) -> esg_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
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
/// use esg_core::fail;
/// fn always_err() -> esg_core::Result<()> {
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
