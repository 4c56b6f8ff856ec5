//! API options for the stationary solvers.
//!
//! `SolverOptions` gathers everything a run needs besides the system itself: the
//! method, the stopping tolerance, the iteration budget, the relaxation factor ω
//! (only read by SOR) and the error measure.

use crate::error::KError;
use crate::solver::MethodKind;
use crate::utils::convergence::ErrorMode;

/// Solver types & parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOptions {
    /// Stationary method (jacobi, gauss-seidel, sor)
    pub method: MethodKind,

    /// Stop once the error is ≤ tol
    pub tol: f64,

    /// Iteration budget
    pub max_iter: usize,

    /// Relaxation factor ω for SOR
    pub omega: f64,

    /// Error measure between successive iterates
    pub error_mode: ErrorMode,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            method: MethodKind::Jacobi,
            tol: 1e-3,
            max_iter: 100,
            omega: 1.2,
            error_mode: ErrorMode::Absolute,
        }
    }
}

impl SolverOptions {
    pub fn with_method(mut self, method: MethodKind) -> Self {
        self.method = method;
        self
    }

    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn with_omega(mut self, omega: f64) -> Self {
        self.omega = omega;
        self
    }

    pub fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }

    /// Rejects a NaN tolerance and a non-finite ω.
    pub fn validate(&self) -> Result<(), KError> {
        if self.tol.is_nan() {
            return Err(KError::MalformedInput("tolerance is NaN".into()));
        }
        if !self.omega.is_finite() {
            return Err(KError::MalformedInput(format!(
                "relaxation factor {} is not finite",
                self.omega
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let opts = SolverOptions::default()
            .with_method(MethodKind::Sor)
            .with_omega(1.1)
            .with_tol(1e-6)
            .with_max_iter(0)
            .with_error_mode(ErrorMode::Relative);
        assert_eq!(opts.method, MethodKind::Sor);
        assert_eq!(opts.omega, 1.1);
        assert_eq!(opts.max_iter, 0);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_floats() {
        assert!(SolverOptions::default().with_tol(f64::NAN).validate().is_err());
        assert!(SolverOptions::default().with_omega(f64::INFINITY).validate().is_err());
    }
}
