//! A generated ensemble of variance and price scenarios.

use super::{Path, PathPricer};
use esg_core::{
    errors::{Error, Result},
    Size, Time,
};
use esg_math::{Array, Matrix, Statistics};

/// Variance and price matrices indexed `(scenario, step)`.
///
/// Both matrices share the shape `(N, T)` fixed by the
/// [`SimulationGrid`](super::SimulationGrid) they were generated on.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSet {
    times: Vec<Time>,
    variance: Matrix,
    price: Matrix,
}

/// Cross-sectional statistics of one time column.
#[derive(Debug, Clone)]
pub struct StepStatistics {
    /// Statistics of the variance column.
    pub variance: Statistics,
    /// Statistics of the price column.
    pub price: Statistics,
}

impl ScenarioSet {
    pub(crate) fn new(times: Vec<Time>, variance: Matrix, price: Matrix) -> Self {
        debug_assert_eq!(variance.shape(), price.shape());
        debug_assert_eq!(variance.cols(), times.len());
        Self {
            times,
            variance,
            price,
        }
    }

    /// Number of scenarios (rows).
    pub fn scenarios(&self) -> Size {
        self.variance.rows()
    }

    /// Number of time points (columns).
    pub fn steps(&self) -> Size {
        self.variance.cols()
    }

    /// Time of every column.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Variance paths, `(scenario, step)`.
    pub fn variance(&self) -> &Matrix {
        &self.variance
    }

    /// Price paths, `(scenario, step)`.
    pub fn price(&self) -> &Matrix {
        &self.price
    }

    /// Give up ownership of `(variance, price)`.
    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.variance, self.price)
    }

    /// Price path of scenario `i`.
    pub fn price_path(&self, i: Size) -> Result<Path> {
        self.path(&self.price, i)
    }

    /// Variance path of scenario `i`.
    pub fn variance_path(&self, i: Size) -> Result<Path> {
        self.path(&self.variance, i)
    }

    fn path(&self, m: &Matrix, i: Size) -> Result<Path> {
        if i >= m.rows() {
            return Err(Error::IndexOutOfRange {
                index: i,
                size: m.rows(),
            });
        }
        Ok(self.row_path(m, i))
    }

    // rows always match the time axis
    fn row_path(&self, m: &Matrix, i: Size) -> Path {
        Path {
            times: self.times.clone(),
            values: m.row(i).as_slice().to_vec(),
        }
    }

    /// Price of every scenario at the last time point.
    pub fn terminal_prices(&self) -> Array {
        self.price.column(self.steps() - 1)
    }

    /// Mean, dispersion and range of column `j` across scenarios.
    pub fn step_statistics(&self, j: Size) -> Result<StepStatistics> {
        if j >= self.steps() {
            return Err(Error::IndexOutOfRange {
                index: j,
                size: self.steps(),
            });
        }
        Ok(StepStatistics {
            variance: self.variance.column(j).iter().copied().collect(),
            price: self.price.column(j).iter().copied().collect(),
        })
    }

    /// Scenarios holding a NaN in either matrix.
    ///
    /// Only the `Propagate` variance floor can produce them.
    pub fn contaminated_scenarios(&self) -> Vec<Size> {
        (0..self.scenarios())
            .filter(|&i| {
                (0..self.steps())
                    .any(|j| self.variance[(i, j)].is_nan() || self.price[(i, j)].is_nan())
            })
            .collect()
    }

    /// Run `pricer` over every price path and collect the payoffs.
    pub fn price_with<P: PathPricer + ?Sized>(&self, pricer: &P) -> Statistics {
        (0..self.scenarios())
            .map(|i| pricer.value(&self.row_path(&self.price, i)))
            .collect()
    }
}
