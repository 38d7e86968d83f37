//! Correlation transform for two Brownian drivers.
//!
//! Turns a scalar correlation coefficient `ρ` into the lower-triangular
//! Cholesky factor `L` of
//!
//! ```text
//! C = [[1, ρ],
//!      [ρ, 1]]
//! ```
//!
//! so that for a pair `z = (z₀, z₁)` of independent standard normals the
//! product `L·z = (z₀, ρ·z₀ + √(1−ρ²)·z₁)` is a pair of standard normals with
//! correlation `ρ`.

use crate::matrix::Matrix;
use crate::matrix_utilities::{cholesky_decomposition, correlation_matrix_2x2};
use esg_core::{
    errors::{Error, Result},
    Real,
};
use tracing::trace;

/// Cholesky factor of a 2×2 correlation matrix.
///
/// Computed once per simulation and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationTransform {
    rho: Real,
    l10: Real,
    l11: Real,
}

impl CorrelationTransform {
    /// Factor `[[1, rho], [rho, 1]]`.
    ///
    /// Fails with [`Error::Decomposition`] when `|rho| > 1` or `rho` is not
    /// finite. The singular cases `rho = ±1` are accepted: the factor is
    /// then `[[1, 0], [rho, 0]]` and both shocks are perfectly (anti-)
    /// correlated. A strict Cholesky routine (LAPACK, `numpy.linalg.cholesky`)
    /// rejects these matrices as not positive definite, so results at
    /// `|rho| = 1` have no counterpart there.
    pub fn new(rho: Real) -> Result<Self> {
        if !rho.is_finite() {
            return Err(Error::Decomposition(format!(
                "correlation must be finite, got {rho}"
            )));
        }
        let (l10, l11) = if rho.abs() == 1.0 {
            (rho, 0.0)
        } else {
            let l = cholesky_decomposition(&correlation_matrix_2x2(rho)).map_err(|e| match e {
                Error::Decomposition(msg) => {
                    Error::Decomposition(format!("correlation {rho} outside [-1, 1]: {msg}"))
                }
                other => other,
            })?;
            (l[(1, 0)], l[(1, 1)])
        };
        trace!(rho, l10, l11, "built correlation transform");
        Ok(Self { rho, l10, l11 })
    }

    /// The identity transform (`rho = 0`).
    pub fn independent() -> Self {
        Self {
            rho: 0.0,
            l10: 0.0,
            l11: 1.0,
        }
    }

    /// The correlation coefficient this transform reproduces.
    pub fn rho(&self) -> Real {
        self.rho
    }

    /// The lower-triangular factor `L`.
    pub fn matrix(&self) -> Matrix {
        Matrix::from_row_slice(2, 2, &[1.0, 0.0, self.l10, self.l11])
    }

    /// `L·Lᵀ`, which reproduces the target correlation matrix.
    pub fn correlation_matrix(&self) -> Matrix {
        let l = self.matrix();
        &l * &l.transpose()
    }

    /// Map independent draws `(z0, z1)` to a correlated pair.
    ///
    /// The first component is returned unchanged; the second carries the
    /// correlation.
    #[inline]
    pub fn apply(&self, z0: Real, z1: Real) -> (Real, Real) {
        (z0, self.l10 * z0 + self.l11 * z1)
    }
}
