//! relax: stationary iterative solvers over Faer
//!
//! This crate solves dense linear systems A·x = b with the Jacobi, Gauss-Seidel and
//! SOR methods. Each run returns its full iterate history, the per-iteration error
//! trace and the spectral radius of the iteration matrix. Parsing text input and
//! writing tables or equation renderings are kept in separate modules.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod input;
pub mod matrix;
pub mod report;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::context::*;
pub use crate::core::*;
pub use crate::error::*;
pub use crate::matrix::*;
pub use crate::report::*;
pub use crate::solver::*;
pub use crate::utils::*;

// Re-export SolveStats at the crate root for convenience
pub use utils::convergence::SolveStats;
