use thiserror::Error;

// Unified error type for relax

#[derive(Error, Debug)]
pub enum KError {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("zero pivot at row {0}")]
    ZeroPivot(usize),
    #[error("relative error divides by zero: component {component} of iterate {iteration} is 0")]
    RelativeErrorDivByZero { iteration: usize, component: usize },
    #[error("eigenvalue computation failed: {0}")]
    EigenSolve(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
