//! Simulation grid: how many scenarios, how many time points, how far apart.

use esg_core::{
    errors::{Error, Result},
    Real, Size, Time,
};

/// Shape and spacing of a scenario ensemble.
///
/// `steps` counts time *points*, the initial one included, so a grid with
/// `steps = T` yields `(N, T)` matrices spanning `[0, (T − 1)·dt]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridFields"))]
pub struct SimulationGrid {
    scenarios: Size,
    steps: Size,
    dt: Time,
}

impl SimulationGrid {
    /// Validate and build a grid.
    ///
    /// Fails with [`Error::InvalidArgument`] when `scenarios` or `steps` is
    /// zero, or when `dt` is not a positive finite number.
    pub fn new(scenarios: Size, steps: Size, dt: Time) -> Result<Self> {
        if scenarios == 0 {
            return Err(Error::InvalidArgument(
                "scenario count must be at least 1".into(),
            ));
        }
        if steps == 0 {
            return Err(Error::InvalidArgument("step count must be at least 1".into()));
        }
        if !(dt.is_finite() && dt > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "time step must be positive and finite, got {dt}"
            )));
        }
        Ok(Self {
            scenarios,
            steps,
            dt,
        })
    }

    /// Number of scenarios (matrix rows).
    pub fn scenarios(&self) -> Size {
        self.scenarios
    }

    /// Number of time points (matrix columns).
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Spacing between consecutive time points.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Time of the last column.
    pub fn horizon(&self) -> Time {
        (self.steps - 1) as Real * self.dt
    }

    /// `j · dt` for every column `j`.
    pub fn times(&self) -> Vec<Time> {
        (0..self.steps).map(|j| j as Real * self.dt).collect()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridFields {
    scenarios: Size,
    steps: Size,
    dt: Time,
}

#[cfg(feature = "serde")]
impl TryFrom<GridFields> for SimulationGrid {
    type Error = Error;

    fn try_from(f: GridFields) -> Result<Self> {
        SimulationGrid::new(f.scenarios, f.steps, f.dt)
    }
}
