//! The aggregate handed back to callers when a run terminates.

use crate::solver::MethodKind;
use crate::solver::spectral::SpectralRadius;
use crate::utils::convergence::{ErrorTrace, SolveStats};

/// Why the convergence loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// A computed error fell to or below the tolerance.
    Converged,
    /// The iteration budget ran out first. Not an error.
    ExhaustedIterations,
}

/// One recorded iterate x_k, k ≥ 1.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationState {
    pub k: usize,
    pub x: Vec<f64>,
}

/// Outcome of a single stationary solve. Immutable once built.
#[derive(Clone, Debug)]
pub struct SolveResult {
    pub method: MethodKind,
    pub status: Status,
    pub x_final: Vec<f64>,
    pub history: Vec<IterationState>,
    pub trace: ErrorTrace,
    pub spectral_radius: SpectralRadius,
    pub tol: f64,
    pub max_iter: usize,
}

impl SolveResult {
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Human-readable summary: the approximation and tolerance on success,
    /// otherwise the exhausted iteration budget.
    pub fn final_message(&self) -> String {
        match self.status {
            Status::Converged => format!(
                "{:?} is an approximation of the solution of the system with tolerance = {}",
                self.x_final, self.tol
            ),
            Status::ExhaustedIterations => format!("Failed after {} iterations", self.max_iter),
        }
    }

    /// 1, 2, ..., number of completed iterations.
    pub fn iteration_indices(&self) -> Vec<usize> {
        self.history.iter().map(|s| s.k).collect()
    }

    /// Iterates x_1..x_k, excluding the initial guess.
    pub fn iterates(&self) -> Vec<Vec<f64>> {
        self.history.iter().map(|s| s.x.clone()).collect()
    }

    pub fn errors(&self) -> Vec<f64> {
        self.trace.errors()
    }

    pub fn iterations(&self) -> usize {
        self.history.len()
    }

    pub fn stats(&self) -> SolveStats {
        SolveStats {
            iterations: self.iterations(),
            final_error: self.trace.last(),
            converged: self.converged(),
        }
    }
}
