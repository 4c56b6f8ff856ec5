//! Convergence tracking & tolerance checks for stationary solvers.

use crate::error::KError;
use crate::core::traits::InnerProduct;
use crate::utils::norms::{diff_inf_norm, inf_norm};

/// How the distance between two successive iterates is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// ‖x_{k+1} − x_k‖_∞
    #[default]
    Absolute,
    /// ‖(x_{k+1} − x_k) / x_{k+1}‖_∞, element-wise
    Relative,
    /// ‖x_{k+1} − x_k‖₂
    Euclidean,
}

/// Stopping criteria.
#[derive(Clone, Debug)]
pub struct Convergence {
    pub tol: f64,
    pub max_iters: usize,
    pub mode: ErrorMode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats {
    pub iterations: usize,
    /// Last computed error; `None` when no iteration ran.
    pub final_error: Option<f64>,
    pub converged: bool,
}

/// Append-only (iteration, error) pairs, one per completed iteration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorTrace {
    entries: Vec<(usize, f64)>,
}

impl ErrorTrace {
    pub fn push(&mut self, iteration: usize, error: f64) {
        debug_assert_eq!(iteration, self.entries.len() + 1);
        self.entries.push((iteration, error));
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn errors(&self) -> Vec<f64> {
        self.entries.iter().map(|&(_, e)| e).collect()
    }

    pub fn last(&self) -> Option<f64> {
        self.entries.last().map(|&(_, e)| e)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Convergence {
    pub fn new(tol: f64, max_iters: usize, mode: ErrorMode) -> Self {
        Self { tol, max_iters, mode }
    }

    /// Error between `x_old` and `x_new`, the iterate produced at step `iteration`.
    ///
    /// In relative mode a zero component of `x_new` is reported as
    /// [`KError::RelativeErrorDivByZero`] instead of producing inf/NaN.
    pub fn measure(&self, x_new: &[f64], x_old: &[f64], iteration: usize) -> Result<f64, KError> {
        match self.mode {
            ErrorMode::Absolute => Ok(diff_inf_norm(x_new, x_old)),
            ErrorMode::Euclidean => {
                let d: Vec<f64> = x_new.iter().zip(x_old).map(|(n, o)| n - o).collect();
                Ok(().norm(&d))
            }
            ErrorMode::Relative => {
                if let Some(component) = x_new.iter().position(|&v| v == 0.0) {
                    return Err(KError::RelativeErrorDivByZero { iteration, component });
                }
                let rel: Vec<f64> = x_new
                    .iter()
                    .zip(x_old)
                    .map(|(n, o)| (n - o) / n)
                    .collect();
                Ok(inf_norm(&rel))
            }
        }
    }

    /// True once `error` is within tolerance.
    pub fn check(&self, error: f64) -> bool {
        error <= self.tol
    }
}
