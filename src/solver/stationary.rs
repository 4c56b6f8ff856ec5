//! Generic stationary iteration x_{k+1} = T·x_k + c.
//!
//! [`StationarySolver`] owns the convergence loop; the method-specific part is the
//! [`IterationScheme`] that turns the splitting into (T, c). T and c are built once
//! per run since they only depend on A, b and the fixed ω.
//!
//! The loop is a two-state machine: it keeps running while the last error is above
//! the tolerance and fewer than `max_iters` steps have run. Every completed step
//! appends one iterate and one error, so the history and the error trace always have
//! the same length. When `max_iters == 0` nothing runs and the status is
//! [`Status::ExhaustedIterations`].

use crate::error::KError;
use crate::matrix::{LinearSystem, Splitting};
use crate::solver::LinearSolver;
use crate::solver::iteration::{GaussSeidel, IterationScheme, Jacobi, Sor};
use crate::solver::result::{IterationState, SolveResult, Status};
use crate::solver::spectral::spectral_radius;
use crate::utils::convergence::{Convergence, ErrorMode, ErrorTrace};
use faer::Mat;

pub struct StationarySolver<S> {
    pub scheme: S,
    pub conv: Convergence,
}

pub type JacobiSolver = StationarySolver<Jacobi>;
pub type GaussSeidelSolver = StationarySolver<GaussSeidel>;
pub type SorSolver = StationarySolver<Sor>;

impl<S: IterationScheme> StationarySolver<S> {
    pub fn with_scheme(scheme: S, tol: f64, max_iters: usize, mode: ErrorMode) -> Self {
        Self { scheme, conv: Convergence::new(tol, max_iters, mode) }
    }

    /// Runs the iteration on a validated system from the initial guess `x0`.
    pub fn run(&self, system: &LinearSystem, x0: &[f64]) -> Result<SolveResult, KError> {
        system.check_guess(x0)?;
        if self.conv.tol.is_nan() {
            return Err(KError::MalformedInput("tolerance is NaN".into()));
        }
        let kind = self.scheme.kind();
        let split = Splitting::new(system.a());
        let iter = self.scheme.build(&split, system.b())?;
        log::debug!("{kind}: built {n}x{n} iteration matrix", n = system.dim());

        let mut x = x0.to_vec();
        let mut history = Vec::new();
        let mut trace = ErrorTrace::default();
        let mut status = Status::ExhaustedIterations;

        for k in 1..=self.conv.max_iters {
            let x_new = iter.apply(&x);
            let e = self.conv.measure(&x_new, &x, k)?;
            log::trace!("{kind} iter {k}: error = {e:e}");
            if !e.is_finite() {
                log::warn!("{kind}: non-finite error at iteration {k}");
            }
            trace.push(k, e);
            history.push(IterationState { k, x: x_new.clone() });
            x = x_new;
            if self.conv.check(e) {
                status = Status::Converged;
                break;
            }
        }

        let rho = spectral_radius(&iter.t)?;
        match status {
            Status::Converged => log::debug!(
                "{kind}: converged in {} iterations ({rho})",
                history.len()
            ),
            Status::ExhaustedIterations => log::warn!(
                "{kind}: no convergence within {} iterations ({rho})",
                self.conv.max_iters
            ),
        }

        Ok(SolveResult {
            method: kind,
            status,
            x_final: x,
            history,
            trace,
            spectral_radius: rho,
            tol: self.conv.tol,
            max_iter: self.conv.max_iters,
        })
    }
}

impl JacobiSolver {
    pub fn new(tol: f64, max_iters: usize, mode: ErrorMode) -> Self {
        Self::with_scheme(Jacobi, tol, max_iters, mode)
    }
}

impl GaussSeidelSolver {
    pub fn new(tol: f64, max_iters: usize, mode: ErrorMode) -> Self {
        Self::with_scheme(GaussSeidel, tol, max_iters, mode)
    }
}

impl SorSolver {
    pub fn new(omega: f64, tol: f64, max_iters: usize, mode: ErrorMode) -> Self {
        Self::with_scheme(Sor::new(omega), tol, max_iters, mode)
    }
}

impl<S: IterationScheme> LinearSolver<Mat<f64>, Vec<f64>> for StationarySolver<S> {
    type Error = KError;

    fn solve(&mut self, a: &Mat<f64>, b: &Vec<f64>, x0: &Vec<f64>) -> Result<SolveResult, KError> {
        let system = LinearSystem::new(a.clone(), b.clone())?;
        self.run(&system, x0)
    }
}
