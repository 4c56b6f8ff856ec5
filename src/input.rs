//! Text input for matrices and vectors.
//!
//! This sits in front of the solvers and turns user-typed text into numeric data:
//!
//! - matrices as rows separated by newlines or `;` with `,` between entries
//!   (`"4, 1\n2, 3"`), or bracketed like `[[4, 1], [2, 3]]`;
//! - vectors as `1, 2` or `[1, 2]`.
//!
//! Ragged rows, empty input and entries that are not numbers are rejected with
//! [`KError::Parse`].

use crate::error::KError;
use crate::matrix::DenseMatrix;
use faer::Mat;

pub fn parse_vector(text: &str) -> Result<Vec<f64>, KError> {
    let t = text.trim();
    let body = strip_brackets(t).unwrap_or(t);
    if body.is_empty() {
        return Err(KError::Parse("empty vector".into()));
    }
    parse_row(body)
}

pub fn parse_matrix(text: &str) -> Result<Mat<f64>, KError> {
    let t = text.trim();
    let rows = match strip_brackets(t) {
        Some(inner) => bracketed_rows(inner)?
            .into_iter()
            .map(parse_row)
            .collect::<Result<Vec<_>, _>>()?,
        None => t
            .split(['\n', ';'])
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(parse_row)
            .collect::<Result<Vec<_>, _>>()?,
    };
    if rows.is_empty() {
        return Err(KError::Parse("empty matrix".into()));
    }
    Mat::from_rows(&rows).map_err(|e| KError::Parse(e.to_string()))
}

fn strip_brackets(s: &str) -> Option<&str> {
    s.strip_prefix('[')?.strip_suffix(']').map(str::trim)
}

fn bracketed_rows(inner: &str) -> Result<Vec<&str>, KError> {
    let mut rows = Vec::new();
    let mut rest = inner;
    loop {
        rest = rest.trim_start().trim_start_matches(',').trim_start();
        if rest.is_empty() {
            return Ok(rows);
        }
        let body = rest
            .strip_prefix('[')
            .ok_or_else(|| KError::Parse(format!("expected '[' before {rest:?}")))?;
        let end = body
            .find(']')
            .ok_or_else(|| KError::Parse("unclosed row bracket".into()))?;
        rows.push(&body[..end]);
        rest = &body[end + 1..];
    }
}

fn parse_row(row: &str) -> Result<Vec<f64>, KError> {
    row.split(',')
        .map(str::trim)
        .map(|v| {
            v.parse::<f64>()
                .map_err(|_| KError::Parse(format!("invalid number {v:?}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_bracketed_matrices_agree() {
        let a = parse_matrix("4, 1\n2, 3").unwrap();
        let b = parse_matrix("[[4,1],[2,3]]").unwrap();
        let c = parse_matrix("4,1; 2,3").unwrap();
        for m in [&b, &c] {
            for i in 0..2 {
                for j in 0..2 {
                    assert_eq!(a[(i, j)], m[(i, j)]);
                }
            }
        }
        assert_eq!(a[(1, 0)], 2.0);
    }

    #[test]
    fn vectors() {
        assert_eq!(parse_vector("1, 2.5").unwrap(), vec![1.0, 2.5]);
        assert_eq!(parse_vector(" [ -1e-3 ,4 ] ").unwrap(), vec![-0.001, 4.0]);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(parse_vector(""), Err(KError::Parse(_))));
        assert!(matches!(parse_vector("1,,2"), Err(KError::Parse(_))));
        assert!(matches!(parse_matrix("1,2\n3"), Err(KError::Parse(_))));
        assert!(matches!(parse_matrix("[[1,2],[3,x]]"), Err(KError::Parse(_))));
        assert!(matches!(parse_matrix("[[1,2],[3,4"), Err(KError::Parse(_))));
        assert!(matches!(parse_matrix("  \n "), Err(KError::Parse(_))));
    }
}
