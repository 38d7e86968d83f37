//! # heston-esg
//!
//! Monte Carlo economic scenario generation under the Heston stochastic
//! volatility model.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! the one-call [`heston_esg`] entry point. Application code should depend
//! on this crate rather than the individual `esg-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! heston-esg = "0.1"
//! ```
//!
//! ```rust
//! use heston_esg::{heston_esg, VarianceFloor};
//! use heston_esg::math::InverseCumulativeNormalRng;
//!
//! let mut rng = InverseCumulativeNormalRng::new(42);
//! let (variance, price) = heston_esg(
//!     1_000, 13, 1.0 / 12.0,
//!     1.5, 0.04, 0.3, 0.03, -0.7, 0.04, 100.0,
//!     VarianceFloor::FullTruncation,
//!     &mut rng,
//! )?;
//! assert_eq!(variance.shape(), (1_000, 13));
//! assert_eq!(price[(0, 0)], 100.0);
//! # Ok::<(), heston_esg::core::Error>(())
//! ```
//!
//! For more control (antithetic variates, path views, pricing) build a
//! [`ScenarioGenerator`] directly.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use esg_core as core;

/// Matrices, correlation transform, random sources, statistics.
pub use esg_math as math;

/// The Heston process and variance floor policies.
pub use esg_processes as processes;

/// Scenario generation and path pricing.
pub use esg_methods as methods;

pub use esg_core::{Error, Real, Result, Size, Time};
pub use esg_math::{GaussianSequence, Matrix};
pub use esg_methods::{ScenarioGenerator, ScenarioSet, SimulationGrid};
pub use esg_processes::{HestonParams, HestonProcess, VarianceFloor};

/// Simulate `nscens` Heston scenarios over `nsteps` time points spaced `dt`
/// apart.
///
/// Returns `(variance_paths, price_paths)`, both shaped `(nscens, nsteps)`
/// with column 0 equal to `v0` / `p0`.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] for a zero `nscens` or `nsteps`, or a
///   non-positive or non-finite `dt`.
/// * [`Error::Decomposition`] when `rho` lies outside `[-1, 1]`.
/// * [`Error::NegativeVariance`] under [`VarianceFloor::Reject`].
#[allow(clippy::too_many_arguments)]
pub fn heston_esg<G>(
    nscens: Size,
    nsteps: Size,
    dt: Time,
    kappa: Real,
    theta: Real,
    xi: Real,
    mu: Real,
    rho: Real,
    v0: Real,
    p0: Real,
    floor: VarianceFloor,
    rng: &mut G,
) -> Result<(Matrix, Matrix)>
where
    G: GaussianSequence + ?Sized,
{
    let grid = SimulationGrid::new(nscens, nsteps, dt)?;
    let process = HestonProcess::new(HestonParams {
        p0,
        v0,
        kappa,
        theta,
        xi,
        mu,
        rho,
    })?
    .with_variance_floor(floor);
    let set = ScenarioGenerator::new(&process, grid).generate(rng)?;
    Ok(set.into_parts())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use esg_math::SequenceRng;

    #[test]
    fn returns_variance_then_price() {
        let (v, p) = heston_esg(
            2,
            3,
            1.0,
            0.2,
            0.3,
            0.2,
            0.03,
            0.0,
            0.2,
            2000.0,
            VarianceFloor::Propagate,
            &mut SequenceRng::zeros(),
        )
        .unwrap();
        assert_eq!(v.shape(), (2, 3));
        assert_eq!(p.shape(), (2, 3));
        for i in 0..2 {
            assert_abs_diff_eq!(v[(i, 2)], 0.236, epsilon = 1e-12);
            assert_relative_eq!(p[(i, 2)], 2121.8, max_relative = 1e-12);
        }
    }

    #[test]
    fn argument_errors_surface() {
        let mut rng = SequenceRng::zeros();
        let run = |n, t, dt, rho, rng: &mut SequenceRng| {
            heston_esg(
                n,
                t,
                dt,
                0.2,
                0.3,
                0.2,
                0.03,
                rho,
                0.2,
                2000.0,
                VarianceFloor::default(),
                rng,
            )
        };
        assert!(matches!(run(0, 3, 1.0, 0.0, &mut rng), Err(Error::InvalidArgument(_))));
        assert!(matches!(run(2, 0, 1.0, 0.0, &mut rng), Err(Error::InvalidArgument(_))));
        assert!(matches!(run(2, 3, 0.0, 0.0, &mut rng), Err(Error::InvalidArgument(_))));
        assert!(matches!(run(2, 3, 1.0, -1.01, &mut rng), Err(Error::Decomposition(_))));
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn reject_policy_fails_on_negative_initial_variance() {
        let result = heston_esg(
            1,
            2,
            1.0,
            0.2,
            0.3,
            0.2,
            0.03,
            0.0,
            -0.05,
            2000.0,
            VarianceFloor::Reject,
            &mut SequenceRng::zeros(),
        );
        assert!(matches!(
            result,
            Err(Error::NegativeVariance { scenario: 0, step: 0, .. })
        ));
    }
}
