//! # esg-core
//!
//! Core types and error definitions for heston-esg.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace: scalar type aliases and the error
//! hierarchy together with the `ensure!` / `fail!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A time measurement in years.
pub type Time = Real;

/// A price or value.
pub type Price = Real;

/// An instantaneous variance (squared volatility).
pub type Variance = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
