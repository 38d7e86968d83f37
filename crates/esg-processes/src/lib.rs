//! # esg-processes
//!
//! The Heston stochastic volatility process used by the scenario generator:
//! model parameters, the correlated Euler step, and the policy applied when
//! the discretised variance leaves `[0, ∞)`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Heston process and variance floor policies.
pub mod heston_process;

pub use heston_process::{HestonParams, HestonProcess, VarianceFloor};
