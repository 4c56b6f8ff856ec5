//! Shared helpers: stopping criteria, error traces and vector norms.

pub mod convergence;
pub mod norms;

pub use convergence::{Convergence, ErrorMode, ErrorTrace, SolveStats};
pub use norms::residual_inf_norm;
