//! `Matrix`: scenario ensembles and small factor matrices.
//!
//! Wraps `nalgebra::DMatrix<f64>`. Ensembles are laid out `(scenario, step)`.

use crate::array::Array;
use esg_core::Real;
use nalgebra::DMatrix;
use std::fmt;
use std::ops::{Index, IndexMut, Mul};

/// A dynamically-sized matrix of reals, indexed `(row, col)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// `rows × cols` zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// `rows × cols` copies of `value`.
    pub fn from_element(rows: usize, cols: usize, value: Real) -> Self {
        Self(DMatrix::from_element(rows, cols, value))
    }

    /// Build from row-major `data`.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[Real]) -> Self {
        Self(DMatrix::from_row_slice(rows, cols, data))
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.0.shape()
    }

    /// `rows == cols`.
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// The wrapped nalgebra matrix.
    pub fn inner(&self) -> &DMatrix<Real> {
        &self.0
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Copy of row `i`, e.g. one scenario's path.
    pub fn row(&self, i: usize) -> Array {
        Array::from_vec(self.0.row(i).iter().copied().collect())
    }

    /// Copy of column `j`, e.g. every scenario at one step.
    pub fn column(&self, j: usize) -> Array {
        Array::from_vec(self.0.column(j).iter().copied().collect())
    }

    /// All elements, column by column.
    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.0.iter()
    }
}

impl From<DMatrix<Real>> for Matrix {
    fn from(m: DMatrix<Real>) -> Self {
        Self(m)
    }
}

impl From<Matrix> for DMatrix<Real> {
    fn from(m: Matrix) -> Self {
        m.0
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Real;
    fn index(&self, ij: (usize, usize)) -> &Real {
        &self.0[ij]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, ij: (usize, usize)) -> &mut Real {
        &mut self.0[ij]
    }
}

impl Mul for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        Matrix(&self.0 * &rhs.0)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = (0..self.rows()).map(|i| self.row(i).to_string()).collect();
        f.write_str(&rows.join("\n"))
    }
}
