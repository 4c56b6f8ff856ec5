//! Factory for stationary methods.
//!
//! `StationaryContext` pairs a [`MethodKind`] with [`SolverOptions`] and dispatches
//! a solve to the matching solver, so callers can pick the method at runtime.
//!
//! # Usage
//!
//! 1. Build a `StationaryContext` from `SolverOptions` (the method is part of them).
//! 2. Call `solve_context` with a validated [`LinearSystem`] and an initial guess.
//!
//! # References
//! - Saad, Y. (2003). Iterative Methods for Sparse Linear Systems, ch. 4. SIAM.

use crate::config::SolverOptions;
use crate::error::KError;
use crate::matrix::LinearSystem;
use crate::solver::{GaussSeidelSolver, JacobiSolver, MethodKind, SolveResult, SorSolver};

/// Context and configuration for a stationary solve.
#[derive(Debug, Clone, Default)]
pub struct StationaryContext {
    pub options: SolverOptions,
}

impl StationaryContext {
    pub fn new(options: SolverOptions) -> Self {
        Self { options }
    }

    pub fn kind(&self) -> MethodKind {
        self.options.method
    }

    /// Same options with a different method.
    pub fn with_kind(&self, kind: MethodKind) -> Self {
        Self { options: self.options.clone().with_method(kind) }
    }

    /// Solve `system` from `x0` with the configured method and options.
    pub fn solve_context(&self, system: &LinearSystem, x0: &[f64]) -> Result<SolveResult, KError> {
        self.options.validate()?;
        let o = &self.options;
        match o.method {
            MethodKind::Jacobi => JacobiSolver::new(o.tol, o.max_iter, o.error_mode).run(system, x0),
            MethodKind::GaussSeidel => {
                GaussSeidelSolver::new(o.tol, o.max_iter, o.error_mode).run(system, x0)
            }
            MethodKind::Sor => SorSolver::new(o.omega, o.tol, o.max_iter, o.error_mode).run(system, x0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_reports_selected_method() {
        let system = LinearSystem::from_rows(&[vec![4.0, 1.0], vec![2.0, 3.0]], vec![1.0, 2.0]).unwrap();
        let ctx = StationaryContext::new(SolverOptions::default().with_tol(1e-8));
        for kind in MethodKind::ALL {
            let res = ctx.with_kind(kind).solve_context(&system, &[0.0, 0.0]).unwrap();
            assert_eq!(res.method, kind);
            assert!(res.converged(), "{kind} did not converge");
        }
    }

    #[test]
    fn invalid_options_fail_before_solving() {
        let system = LinearSystem::from_rows(&[vec![1.0]], vec![1.0]).unwrap();
        let ctx = StationaryContext::new(SolverOptions::default().with_omega(f64::NAN));
        assert!(matches!(
            ctx.solve_context(&system, &[0.0]),
            Err(KError::MalformedInput(_))
        ));
    }
}
