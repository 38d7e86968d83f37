//! # esg-math
//!
//! Mathematical building blocks for the scenario generator: `Array` and
//! `Matrix` newtypes over nalgebra, Cholesky factorisation, the two-factor
//! correlation transform, Gaussian random sources, the normal distribution
//! (via statrs) and a statistics accumulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// One-dimensional array of reals.
pub mod array;

/// Correlation transform for a pair of Brownian drivers.
pub mod correlation;

/// Probability distributions.
pub mod distributions;

/// Two-dimensional matrix of reals.
pub mod matrix;

/// Matrix decompositions.
pub mod matrix_utilities;

/// Gaussian random sources.
pub mod random_numbers;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use correlation::CorrelationTransform;
pub use distributions::{normal_cdf, normal_cdf_inverse};
pub use matrix::Matrix;
pub use matrix_utilities::cholesky_decomposition;
pub use random_numbers::{
    GaussianSequence, InverseCumulativeNormalRng, MersenneTwisterUniformRng, SequenceRng,
    StandardNormalRng,
};
pub use statistics::Statistics;
