//! Plain-text rendering of A · xn = b.

use crate::error::KError;
use crate::matrix::LinearSystem;
use crate::report::{ResultReporter, format_number};
use crate::solver::SolveResult;
use faer::Mat;
use std::io::Write;

/// Lays out the system next to the final iterate:
///
/// ```text
/// A                xn            b
/// 4.00    1.00  *  0.10000000 =  1.00
/// 2.00    3.00     0.60000000    2.00
/// ```
///
/// A and b use two decimals, xn uses [`format_number`]. The operators sit on the
/// first row.
pub fn render_equation(a: &Mat<f64>, x: &[f64], b: &[f64]) -> String {
    let n = b.len();
    let a_rows: Vec<String> = (0..n)
        .map(|i| {
            (0..a.ncols())
                .map(|j| format!("{:.2}", a[(i, j)]))
                .collect::<Vec<_>>()
                .join("    ")
        })
        .collect();
    let x_cells: Vec<String> = x.iter().map(|&v| format_number(v)).collect();
    let b_cells: Vec<String> = b.iter().map(|v| format!("{v:.2}")).collect();

    let wa = a_rows.iter().map(String::len).max().unwrap_or(0).max(1);
    let wx = x_cells.iter().map(String::len).max().unwrap_or(0).max(2);

    let mut out = format!("{:<wa$}     {:<wx$}    b\n", "A", "xn");
    for i in 0..n {
        let (times, equals) = if i == 0 { ('*', '=') } else { (' ', ' ') };
        let xi = x_cells.get(i).map_or("", String::as_str);
        out.push_str(&format!(
            "{:<wa$}  {times}  {:<wx$} {equals}  {}\n",
            a_rows[i], xi, b_cells[i]
        ));
    }
    out
}

/// Writes [`render_equation`] for the final iterate of a run.
pub struct EquationReporter<W: Write> {
    out: W,
}

impl<W: Write> EquationReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultReporter for EquationReporter<W> {
    fn report(&mut self, system: &LinearSystem, result: &SolveResult) -> Result<(), KError> {
        let text = render_equation(system.a(), &result.x_final, system.b());
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_part_with_its_format() {
        let a = Mat::from_fn(2, 2, |i, j| [[4.0, 1.0], [2.0, 3.0]][i][j]);
        let text = render_equation(&a, &[0.1, 2.0e6], &[1.0, 2.0]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("A "));
        assert!(lines[1].starts_with("4.00    1.00  *  0.10000000"));
        assert!(lines[1].trim_end().ends_with("=  1.00"));
        assert!(lines[2].contains("2.0000e+06"));
        assert!(lines[2].trim_end().ends_with("2.00"));
        assert!(!lines[2].contains('*'));
    }
}
