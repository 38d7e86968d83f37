//! `Array`: one row or one column of a scenario matrix.
//!
//! Wraps `nalgebra::DVector<f64>`.

use esg_core::Real;
use nalgebra::DVector;
use std::fmt;
use std::ops::Index;

/// A dynamically-sized vector of reals, e.g. all scenarios at one step.
#[derive(Debug, Clone, PartialEq)]
pub struct Array(DVector<Real>);

impl Array {
    /// Take ownership of `data`.
    pub fn from_vec(data: Vec<Real>) -> Self {
        Self(DVector::from_vec(data))
    }

    /// Copy `data`.
    pub fn from_slice(data: &[Real]) -> Self {
        Self(DVector::from_column_slice(data))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when there are no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Contiguous view of the elements.
    pub fn as_slice(&self) -> &[Real] {
        self.0.as_slice()
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.0.iter()
    }

    /// Sum of the elements.
    pub fn sum(&self) -> Real {
        self.0.sum()
    }

    /// Arithmetic mean; `None` when empty.
    pub fn mean(&self) -> Option<Real> {
        (!self.0.is_empty()).then(|| self.0.mean())
    }
}

impl From<Vec<Real>> for Array {
    fn from(v: Vec<Real>) -> Self {
        Self::from_vec(v)
    }
}

impl Index<usize> for Array {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        &self.0[i]
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.0.iter().map(|x| x.to_string()).collect();
        write!(f, "[{}]", items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_section_summary() {
        let a = Array::from_slice(&[1.0, 2.0, 6.0]);
        assert_eq!(a.len(), 3);
        assert_eq!(a[2], 6.0);
        assert_eq!(a.sum(), 9.0);
        assert_eq!(a.mean(), Some(3.0));
    }

    #[test]
    fn empty_has_no_mean() {
        let a = Array::from_vec(Vec::new());
        assert!(a.is_empty());
        assert_eq!(a.mean(), None);
    }

    #[test]
    fn display() {
        let a: Array = vec![2000.0, 2060.5].into();
        assert_eq!(a.to_string(), "[2000, 2060.5]");
    }
}
