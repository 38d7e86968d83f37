//! # esg-methods
//!
//! Monte Carlo scenario generation for the Heston model.
//!
//! # Modules
//!
//! * [`monte_carlo`]: simulation grid, scenario generator, scenario
//!   ensemble, path views and path pricers

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Monte Carlo simulation: scenario generation, path pricing, statistics.
pub mod monte_carlo;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use monte_carlo::{
    AsianArithmeticPathPricer, EuropeanPathPricer, Path, PathPricer, ScenarioGenerator,
    ScenarioSet, SimulationGrid, StepStatistics,
};
