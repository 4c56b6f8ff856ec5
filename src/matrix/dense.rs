//! Dense‐matrix API on top of Faer.
//!
//! This module provides the `DenseMatrix` trait for building a `faer::Mat<T>` from raw
//! or row-wise storage, and the validated [`LinearSystem`] pair (A, b) the solvers consume.

use crate::core::traits::{Indexing, MatVec};
use crate::error::KError;
use faer::Mat;

/// Blanket impl so any Faer Mat<T> is a DenseMatrix.
pub trait DenseMatrix<T>: MatVec<Vec<T>> + Indexing + Sized {
    /// Construct from raw column-major storage.
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self;
    /// Construct from a slice of rows. Fails on ragged input.
    fn from_rows(rows: &[Vec<T>]) -> Result<Self, KError>;
}

impl<T: Copy + num_traits::Float> DenseMatrix<T> for Mat<T> {
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i])
    }

    fn from_rows(rows: &[Vec<T>]) -> Result<Self, KError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if let Some(i) = rows.iter().position(|r| r.len() != ncols) {
            return Err(KError::MalformedInput(format!(
                "row {i} has {} entries, expected {ncols}",
                rows[i].len()
            )));
        }
        Ok(Mat::from_fn(nrows, ncols, |i, j| rows[i][j]))
    }
}

/// An immutable square system A·x = b.
///
/// Construction checks that A is square with n ≥ 1 and that `b` has n entries.
/// Nonzero pivots are not checked here; that is the iteration builder's job.
#[derive(Clone, Debug)]
pub struct LinearSystem {
    a: Mat<f64>,
    b: Vec<f64>,
}

impl LinearSystem {
    pub fn new(a: Mat<f64>, b: Vec<f64>) -> Result<Self, KError> {
        if a.nrows() == 0 {
            return Err(KError::MalformedInput("empty coefficient matrix".into()));
        }
        if a.nrows() != a.ncols() {
            return Err(KError::MalformedInput(format!(
                "coefficient matrix is {}x{}, expected square",
                a.nrows(),
                a.ncols()
            )));
        }
        if b.len() != a.nrows() {
            return Err(KError::MalformedInput(format!(
                "right-hand side has {} entries, expected {}",
                b.len(),
                a.nrows()
            )));
        }
        Ok(Self { a, b })
    }

    /// Convenience constructor from row-major nested vectors.
    pub fn from_rows(rows: &[Vec<f64>], b: Vec<f64>) -> Result<Self, KError> {
        Self::new(Mat::from_rows(rows)?, b)
    }

    /// System dimension n.
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    pub fn a(&self) -> &Mat<f64> {
        &self.a
    }

    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Checks that an initial guess matches the system dimension.
    pub fn check_guess(&self, x0: &[f64]) -> Result<(), KError> {
        if x0.len() != self.dim() {
            return Err(KError::MalformedInput(format!(
                "initial guess has {} entries, expected {}",
                x0.len(),
                self.dim()
            )));
        }
        Ok(())
    }
}
