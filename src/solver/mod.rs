//! Stationary solver interfaces.
//!
//! All three methods share one engine, [`StationarySolver`], specialized by the
//! [`IterationScheme`] that builds the iteration matrix. The free functions at the
//! bottom are the plain entry points taking (x0, A, b, tol, max_iter, ...).

use crate::error::KError;
use crate::matrix::LinearSystem;
use crate::utils::convergence::ErrorMode;
use faer::Mat;
use std::fmt;

/// Common interface for any stationary solver.
pub trait LinearSolver<M, V> {
    type Error;
    /// Solve A·x = b starting from `x0`.
    /// Returns the full run: status, iterate history, error trace and spectral radius.
    fn solve(&mut self, a: &M, b: &V, x0: &V) -> Result<SolveResult, Self::Error>;
}

/// The available stationary methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Jacobi,
    GaussSeidel,
    Sor,
}

impl MethodKind {
    pub const ALL: [MethodKind; 3] = [MethodKind::Jacobi, MethodKind::GaussSeidel, MethodKind::Sor];
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MethodKind::Jacobi => "Jacobi",
            MethodKind::GaussSeidel => "Gauss-Seidel",
            MethodKind::Sor => "SOR",
        })
    }
}

pub mod iteration;
pub use iteration::{GaussSeidel, IterationMatrix, IterationScheme, Jacobi, Sor};

pub mod result;
pub use result::{IterationState, SolveResult, Status};

pub mod spectral;
pub use spectral::{SpectralRadius, spectral_radius};

pub mod stationary;
pub use stationary::{GaussSeidelSolver, JacobiSolver, SorSolver, StationarySolver};

/// Jacobi iteration on A·x = b from `x0`.
pub fn solve_jacobi(
    x0: &[f64],
    a: &Mat<f64>,
    b: &[f64],
    tol: f64,
    max_iter: usize,
    error_mode: ErrorMode,
) -> Result<SolveResult, KError> {
    let system = LinearSystem::new(a.clone(), b.to_vec())?;
    JacobiSolver::new(tol, max_iter, error_mode).run(&system, x0)
}

/// Gauss-Seidel iteration on A·x = b from `x0`.
pub fn solve_gauss_seidel(
    x0: &[f64],
    a: &Mat<f64>,
    b: &[f64],
    tol: f64,
    max_iter: usize,
    error_mode: ErrorMode,
) -> Result<SolveResult, KError> {
    let system = LinearSystem::new(a.clone(), b.to_vec())?;
    GaussSeidelSolver::new(tol, max_iter, error_mode).run(&system, x0)
}

/// SOR iteration with relaxation factor `omega` on A·x = b from `x0`.
pub fn solve_sor(
    x0: &[f64],
    a: &Mat<f64>,
    b: &[f64],
    tol: f64,
    max_iter: usize,
    omega: f64,
    error_mode: ErrorMode,
) -> Result<SolveResult, KError> {
    let system = LinearSystem::new(a.clone(), b.to_vec())?;
    SorSolver::new(omega, tol, max_iter, error_mode).run(&system, x0)
}
