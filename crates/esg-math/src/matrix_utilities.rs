//! Matrix decompositions.
//!
//! Wraps nalgebra's Cholesky factorisation into the workspace error model.

use crate::matrix::Matrix;
use esg_core::{
    errors::{Error, Result},
    Real,
};

/// Absolute tolerance used when checking a matrix for symmetry.
const SYMMETRY_TOLERANCE: Real = 1e-12;

/// Cholesky decomposition of a symmetric positive-definite matrix.
///
/// Returns the lower-triangular factor `L` such that `A = L * Lᵀ`.
///
/// Fails with [`Error::InvalidArgument`] for a non-square or asymmetric
/// input and with [`Error::Decomposition`] when the matrix is not
/// positive-definite (or contains non-finite entries).
pub fn cholesky_decomposition(m: &Matrix) -> Result<Matrix> {
    if !m.is_square() {
        return Err(Error::InvalidArgument(format!(
            "matrix must be square, got {}×{}",
            m.rows(),
            m.cols()
        )));
    }
    if m.iter().any(|x| !x.is_finite()) {
        return Err(Error::Decomposition(
            "matrix contains non-finite entries".into(),
        ));
    }
    if !is_symmetric(m, SYMMETRY_TOLERANCE) {
        return Err(Error::InvalidArgument("matrix must be symmetric".into()));
    }
    match m.inner().clone().cholesky() {
        Some(chol) => Ok(Matrix::from(chol.l())),
        None => Err(Error::Decomposition(
            "Cholesky factorisation failed: matrix is not positive-definite".into(),
        )),
    }
}

/// Return `true` if `|m[i,j] - m[j,i]| <= tolerance` for every pair.
pub fn is_symmetric(m: &Matrix, tolerance: Real) -> bool {
    if !m.is_square() {
        return false;
    }
    let n = m.rows();
    (0..n).all(|i| (i + 1..n).all(|j| (m[(i, j)] - m[(j, i)]).abs() <= tolerance))
}

/// The 2×2 correlation matrix `[[1, rho], [rho, 1]]`.
pub fn correlation_matrix_2x2(rho: Real) -> Matrix {
    Matrix::from_row_slice(2, 2, &[1.0, rho, rho, 1.0])
}
