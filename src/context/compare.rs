//! Simultaneous execution of every method on one system.
//!
//! Each method runs with the same options and initial guess and is timed. The
//! comparison then ranks the converged runs: fewest iterations decides the best
//! method, with the fastest and lowest-final-error runs reported alongside.
//! With the `rayon` feature the independent runs execute concurrently.

use crate::config::SolverOptions;
use crate::context::StationaryContext;
use crate::error::KError;
use crate::matrix::LinearSystem;
use crate::solver::{MethodKind, SolveResult};
use std::fmt;
use std::time::{Duration, Instant};

/// One timed run inside a comparison.
#[derive(Clone, Debug)]
pub struct MethodRun {
    pub method: MethodKind,
    pub result: SolveResult,
    pub elapsed: Duration,
}

#[derive(Clone, Debug)]
pub struct Comparison {
    pub runs: Vec<MethodRun>,
}

fn timed_run(ctx: &StationaryContext, system: &LinearSystem, x0: &[f64]) -> Result<MethodRun, KError> {
    let start = Instant::now();
    let result = ctx.solve_context(system, x0)?;
    Ok(MethodRun { method: ctx.kind(), result, elapsed: start.elapsed() })
}

/// Runs Jacobi, Gauss-Seidel and SOR on `system` with the same options.
///
/// `options.method` is ignored. The first failing run aborts the comparison.
pub fn compare_methods(
    system: &LinearSystem,
    x0: &[f64],
    options: &SolverOptions,
) -> Result<Comparison, KError> {
    let base = StationaryContext::new(options.clone());
    #[cfg(feature = "rayon")]
    let runs = {
        use rayon::prelude::*;
        MethodKind::ALL[..]
            .par_iter()
            .map(|&kind| timed_run(&base.with_kind(kind), system, x0))
            .collect::<Result<Vec<_>, KError>>()?
    };
    #[cfg(not(feature = "rayon"))]
    let runs = MethodKind::ALL
        .iter()
        .map(|&kind| timed_run(&base.with_kind(kind), system, x0))
        .collect::<Result<Vec<_>, KError>>()?;
    Ok(Comparison { runs })
}

impl Comparison {
    fn converged(&self) -> impl Iterator<Item = &MethodRun> {
        self.runs.iter().filter(|r| r.result.converged())
    }

    /// Converged run with the fewest iterations; ties keep method order.
    pub fn best_by_iterations(&self) -> Option<&MethodRun> {
        self.converged().min_by_key(|r| r.result.iterations())
    }

    pub fn fastest(&self) -> Option<&MethodRun> {
        self.converged().min_by_key(|r| r.elapsed)
    }

    pub fn lowest_error(&self) -> Option<&MethodRun> {
        self.converged().min_by(|a, b| {
            let ea = a.result.trace.last().unwrap_or(f64::INFINITY);
            let eb = b.result.trace.last().unwrap_or(f64::INFINITY);
            ea.total_cmp(&eb)
        })
    }

    pub fn get(&self, method: MethodKind) -> Option<&MethodRun> {
        self.runs.iter().find(|r| r.method == method)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            let stats = run.result.stats();
            writeln!(
                f,
                "{}: {} after {} iterations, error = {}, {:.3} ms, {}",
                run.method,
                if stats.converged { "converged" } else { "not converged" },
                stats.iterations,
                stats.final_error.map_or_else(|| "n/a".to_string(), |e| format!("{e:e}")),
                run.elapsed.as_secs_f64() * 1e3,
                run.result.spectral_radius,
            )?;
        }
        match (self.best_by_iterations(), self.fastest(), self.lowest_error()) {
            (Some(best), Some(fast), Some(low)) => {
                writeln!(
                    f,
                    "Best method: {} (fewest iterations: {})",
                    best.method,
                    best.result.iterations()
                )?;
                writeln!(f, "Fastest: {}", fast.method)?;
                write!(f, "Lowest error: {}", low.method)
            }
            _ => write!(f, "Best method: none (no method converged)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LinearSystem {
        LinearSystem::from_rows(&[vec![4.0, 1.0], vec![2.0, 3.0]], vec![1.0, 2.0]).unwrap()
    }

    #[test]
    fn runs_every_method_in_order() {
        let opts = SolverOptions::default().with_tol(1e-6).with_omega(1.1);
        let cmp = compare_methods(&sample(), &[0.0, 0.0], &opts).unwrap();
        let kinds: Vec<_> = cmp.runs.iter().map(|r| r.method).collect();
        assert_eq!(kinds, MethodKind::ALL.to_vec());
        // ρ: Jacobi ≈ 0.408, Gauss-Seidel = 1/6, SOR(1.1) = 0.1
        assert_eq!(cmp.best_by_iterations().unwrap().method, MethodKind::Sor);
        assert!(cmp.fastest().is_some());
        assert!(cmp.to_string().contains("Best method: SOR"));
    }

    #[test]
    fn no_convergence_is_reported() {
        let opts = SolverOptions::default().with_tol(1e-12).with_max_iter(1);
        let cmp = compare_methods(&sample(), &[0.0, 0.0], &opts).unwrap();
        assert!(cmp.best_by_iterations().is_none());
        assert!(cmp.to_string().ends_with("no method converged)"));
    }
}
