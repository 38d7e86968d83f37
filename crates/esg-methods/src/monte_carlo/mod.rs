//! Monte Carlo scenario generation under the Heston model.
//!
//! # Overview
//!
//! * [`SimulationGrid`]: scenario count, time points and step size
//! * [`ScenarioGenerator`]: runs the Euler recursion for every scenario
//! * [`ScenarioSet`]: the resulting `(scenario, step)` variance and price
//!   matrices
//! * [`Path`]: a single scenario viewed as times + values
//! * [`PathPricer`]: payoffs evaluated on a [`Path`]

/// Simulation grid.
pub mod grid;
/// Euler scenario generator.
pub mod scenario_generator;
/// Generated scenario ensemble.
pub mod scenario_set;

pub use grid::SimulationGrid;
pub use scenario_generator::ScenarioGenerator;
pub use scenario_set::{ScenarioSet, StepStatistics};

use esg_core::{
    errors::{Error, Result},
    Real, Time,
};

// ─── Path ─────────────────────────────────────────────────────────────────────

/// One scenario of one state variable on the simulation grid.
///
/// Always holds at least one point.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    times: Vec<Time>,
    values: Vec<Real>,
}

impl Path {
    /// Pair `times` with `values`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the lengths differ or the
    /// path is empty.
    pub fn new(times: Vec<Time>, values: Vec<Real>) -> Result<Self> {
        if times.len() != values.len() {
            return Err(Error::InvalidArgument(format!(
                "path has {} times but {} values",
                times.len(),
                values.len()
            )));
        }
        if values.is_empty() {
            return Err(Error::InvalidArgument("path must not be empty".into()));
        }
        Ok(Self { times, values })
    }

    /// Time points, starting at 0.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// State value at each time point.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Number of increments, one less than the number of points.
    pub fn steps(&self) -> usize {
        self.values.len() - 1
    }

    /// The final value.
    pub fn back(&self) -> Real {
        self.values[self.values.len() - 1]
    }

    /// Value at time 0.
    pub fn front(&self) -> Real {
        self.values[0]
    }

    /// Number of points including the initial one.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` for a path with no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ─── PathPricer ───────────────────────────────────────────────────────────────

/// Discounted payoff of a single price path.
pub trait PathPricer: Send + Sync {
    /// Discounted payoff realised along `path`.
    fn value(&self, path: &Path) -> Real;
}

/// European payoff: `payoff(S_T) * discount`.
pub struct EuropeanPathPricer<F> {
    payoff: F,
    discount: Real,
}

impl<F: Fn(Real) -> Real + Send + Sync> EuropeanPathPricer<F> {
    /// `payoff` is applied to the terminal value and scaled by `discount`.
    pub fn new(payoff: F, discount: Real) -> Self {
        Self { payoff, discount }
    }
}

impl<F: Fn(Real) -> Real + Send + Sync> PathPricer for EuropeanPathPricer<F> {
    fn value(&self, path: &Path) -> Real {
        (self.payoff)(path.back()) * self.discount
    }
}

/// Arithmetic-average Asian payoff over every point after the first.
///
/// A single-point path has no fixings and is priced on its initial value.
pub struct AsianArithmeticPathPricer<F> {
    payoff: F,
    discount: Real,
}

impl<F: Fn(Real) -> Real + Send + Sync> AsianArithmeticPathPricer<F> {
    /// `payoff` is applied to the average fixing and scaled by `discount`.
    pub fn new(payoff: F, discount: Real) -> Self {
        Self { payoff, discount }
    }
}

impl<F: Fn(Real) -> Real + Send + Sync> PathPricer for AsianArithmeticPathPricer<F> {
    fn value(&self, path: &Path) -> Real {
        let fixings = &path.values()[1..];
        let average = if fixings.is_empty() {
            path.front()
        } else {
            fixings.iter().sum::<Real>() / fixings.len() as Real
        };
        (self.payoff)(average) * self.discount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn path(values: &[Real]) -> Path {
        let times = (0..values.len()).map(|j| j as Real).collect();
        Path::new(times, values.to_vec()).unwrap()
    }

    #[test]
    fn path_accessors() {
        let p = path(&[100.0, 101.0, 99.5]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), 2);
        assert_eq!(p.front(), 100.0);
        assert_eq!(p.back(), 99.5);
        assert_eq!(p.times(), &[0.0, 1.0, 2.0]);
        assert!(!p.is_empty());
    }

    #[test]
    fn path_rejects_bad_input() {
        assert!(matches!(
            Path::new(vec![0.0], vec![1.0, 2.0]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Path::new(Vec::new(), Vec::new()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn european_uses_terminal_value() {
        let pricer = EuropeanPathPricer::new(|s: Real| (s - 100.0).max(0.0), 0.5);
        assert_abs_diff_eq!(pricer.value(&path(&[100.0, 150.0, 110.0])), 5.0);
        assert_eq!(pricer.value(&path(&[100.0, 150.0, 90.0])), 0.0);
    }

    #[test]
    fn asian_averages_fixings_only() {
        let pricer = AsianArithmeticPathPricer::new(|avg: Real| (avg - 100.0).max(0.0), 1.0);
        // (110 + 120) / 2 = 115, initial 0 ignored
        assert_abs_diff_eq!(pricer.value(&path(&[0.0, 110.0, 120.0])), 15.0);
        assert_abs_diff_eq!(pricer.value(&path(&[104.0])), 4.0);
    }
}
