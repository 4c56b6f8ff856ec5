//! Context module: runtime method selection and method comparison.
//!
//! Modules:
//! - [`stationary_context`]: `StationaryContext`, which dispatches a solve to the configured method.
//! - [`compare`]: runs every method on the same system and ranks the results.
//!
//! # Example
//! ```rust
//! use relax::{LinearSystem, MethodKind, SolverOptions, StationaryContext};
//! let system = LinearSystem::from_rows(&[vec![4.0, 1.0], vec![2.0, 3.0]], vec![1.0, 2.0]).unwrap();
//! let ctx = StationaryContext::new(SolverOptions::default().with_method(MethodKind::Sor).with_omega(1.1));
//! let result = ctx.solve_context(&system, &[0.0, 0.0]).unwrap();
//! assert!(result.converged());
//! ```

pub mod stationary_context;
pub use stationary_context::StationaryContext;
pub mod compare;
pub use compare::{Comparison, MethodRun, compare_methods};
