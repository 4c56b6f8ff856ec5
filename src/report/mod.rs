//! Result sinks.
//!
//! The solvers never write files or render anything; callers hand a finished
//! [`SolveResult`] to a [`ResultReporter`]. Two reporters are provided:
//!
//! - [`TableReporter`]: the iteration table as CSV (`Iteration`/`N`, `x1..xn`, `E`);
//! - [`EquationReporter`]: a plain-text rendering of `A * xn = b`.

use crate::error::KError;
use crate::matrix::LinearSystem;
use crate::solver::SolveResult;

pub mod equation;
pub mod table;

pub use equation::{EquationReporter, render_equation};
pub use table::TableReporter;

/// Consumes the output of a finished run.
pub trait ResultReporter {
    fn report(&mut self, system: &LinearSystem, result: &SolveResult) -> Result<(), KError>;
}

/// Fixed-width number format used for solution components.
///
/// Eight decimals, or scientific notation with four mantissa decimals and a signed
/// two-digit exponent (`1.2346e+06`) once |v| ≥ 1e6.
pub fn format_number(v: f64) -> String {
    if v.abs() < 1e6 {
        return format!("{v:.8}");
    }
    let s = format!("{v:.4e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(e) => format!("{mantissa}e{}{:02}", if e < 0 { '-' } else { '+' }, e.abs()),
            Err(_) => s.clone(),
        },
        None => s.clone(),
    }
}
