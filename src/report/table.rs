//! Iteration table as CSV.

use crate::error::KError;
use crate::matrix::LinearSystem;
use crate::report::ResultReporter;
use crate::solver::{MethodKind, SolveResult};
use std::io::Write;

/// Writes one CSV row per iteration: index, every component of x_k, and the error.
///
/// The index column is labelled `Iteration` for Jacobi and `N` for the
/// Gauss-Seidel/SOR family unless overridden.
pub struct TableReporter<W: Write> {
    out: W,
    index_label: Option<String>,
}

impl<W: Write> TableReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, index_label: None }
    }

    pub fn with_index_label(mut self, label: impl Into<String>) -> Self {
        self.index_label = Some(label.into());
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn label_for(&self, method: MethodKind) -> &str {
        match (&self.index_label, method) {
            (Some(l), _) => l.as_str(),
            (None, MethodKind::Jacobi) => "Iteration",
            (None, _) => "N",
        }
    }
}

impl<W: Write> ResultReporter for TableReporter<W> {
    fn report(&mut self, system: &LinearSystem, result: &SolveResult) -> Result<(), KError> {
        let n = system.dim();
        let mut header = vec![self.label_for(result.method).to_string()];
        header.extend((1..=n).map(|i| format!("x{i}")));
        header.push("E".into());
        writeln!(self.out, "{}", header.join(","))?;

        for (state, &(_, e)) in result.history.iter().zip(result.trace.entries()) {
            let mut row = vec![state.k.to_string()];
            row.extend(state.x.iter().map(|v| format!("{v:?}")));
            row.push(format!("{e:?}"));
            writeln!(self.out, "{}", row.join(","))?;
        }
        self.out.flush()?;
        Ok(())
    }
}
