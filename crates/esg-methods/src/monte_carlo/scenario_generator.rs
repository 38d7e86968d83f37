//! Euler scenario generator for the Heston process.

use super::{ScenarioSet, SimulationGrid};
use esg_core::{
    errors::{Error, Result},
    Real, Size,
};
use esg_math::{GaussianSequence, Matrix};
use esg_processes::{HestonProcess, VarianceFloor};
use tracing::{debug, warn};

/// Generates `(scenario, step)` variance and price matrices for a
/// [`HestonProcess`] on a [`SimulationGrid`].
///
/// Column 0 holds `(v0, p0)` for every scenario. Column `j` is computed from
/// column `j − 1` and one pair of standard-normal draws per scenario. Draws
/// are consumed step-major, then by scenario, price factor first:
///
/// ```text
/// step 1: (s0, z_p) (s0, z_v) (s1, z_p) (s1, z_v) ...
/// step 2: (s0, z_p) (s0, z_v) ...
/// ```
///
/// With antithetic variates enabled, scenario `2k + 1` reuses the draws of
/// scenario `2k` negated and consumes nothing.
#[derive(Debug, Clone)]
pub struct ScenarioGenerator<'a> {
    process: &'a HestonProcess,
    grid: SimulationGrid,
    antithetic: bool,
}

impl<'a> ScenarioGenerator<'a> {
    /// Generator for `process` on `grid`, without antithetic variates.
    pub fn new(process: &'a HestonProcess, grid: SimulationGrid) -> Self {
        Self {
            process,
            grid,
            antithetic: false,
        }
    }

    /// Enable or disable antithetic pairing of scenarios.
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// The process being simulated.
    pub fn process(&self) -> &HestonProcess {
        self.process
    }

    /// The grid the ensemble is generated on.
    pub fn grid(&self) -> &SimulationGrid {
        &self.grid
    }

    /// Number of standard-normal deviates one call to
    /// [`generate`](Self::generate) consumes.
    pub fn draws_required(&self) -> Size {
        (self.grid.steps() - 1) * 2 * self.fresh_scenarios()
    }

    fn fresh_scenarios(&self) -> Size {
        let n = self.grid.scenarios();
        if self.antithetic {
            (n + 1) / 2
        } else {
            n
        }
    }

    /// Run the recursion over the whole grid.
    ///
    /// Fails with [`Error::NegativeVariance`] under
    /// [`VarianceFloor::Reject`] as soon as a variance entry (`v0`
    /// included) is negative or NaN. No partial output is returned.
    pub fn generate<G>(&self, rng: &mut G) -> Result<ScenarioSet>
    where
        G: GaussianSequence + ?Sized,
    {
        let n = self.grid.scenarios();
        let steps = self.grid.steps();
        let dt = self.grid.dt();
        let floor = self.process.variance_floor();
        let v0 = self.process.v0();
        let p0 = self.process.p0();

        debug!(
            scenarios = n,
            steps,
            dt,
            policy = %floor,
            antithetic = self.antithetic,
            "generating Heston scenarios"
        );
        if !floor.keeps_paths_finite() && !self.process.satisfies_feller() {
            warn!(
                kappa = self.process.kappa(),
                theta = self.process.theta(),
                xi = self.process.xi(),
                policy = %floor,
                "Feller condition 2κθ > ξ² does not hold; variance may turn negative"
            );
        }
        if floor == VarianceFloor::Reject {
            check_variance(v0, 0, 0)?;
        }

        let mut variance = Matrix::from_element(n, steps, v0);
        let mut price = Matrix::from_element(n, steps, p0);
        let mut draws = vec![[0.0; 2]; n];

        for j in 1..steps {
            self.draw_step(rng, &mut draws);
            for (i, dw) in draws.iter().enumerate() {
                let (v, p) = self
                    .process
                    .evolve(variance[(i, j - 1)], price[(i, j - 1)], dt, *dw);
                if floor == VarianceFloor::Reject {
                    check_variance(v, i, j)?;
                }
                variance[(i, j)] = v;
                price[(i, j)] = p;
            }
        }

        let set = ScenarioSet::new(self.grid.times(), variance, price);
        if floor == VarianceFloor::Propagate {
            let contaminated = set.contaminated_scenarios().len();
            if contaminated > 0 {
                warn!(
                    contaminated,
                    scenarios = n,
                    "scenarios ended NaN after a negative variance"
                );
            }
        }
        debug!(scenarios = n, steps, "generated Heston scenarios");
        Ok(set)
    }

    fn draw_step<G>(&self, rng: &mut G, draws: &mut [[Real; 2]])
    where
        G: GaussianSequence + ?Sized,
    {
        for i in 0..draws.len() {
            draws[i] = if self.antithetic && i % 2 == 1 {
                let [z0, z1] = draws[i - 1];
                [-z0, -z1]
            } else {
                let z0 = rng.next_gaussian();
                let z1 = rng.next_gaussian();
                [z0, z1]
            };
        }
    }
}

fn check_variance(value: Real, scenario: Size, step: Size) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(Error::NegativeVariance {
            scenario,
            step,
            value,
        })
    }
}
