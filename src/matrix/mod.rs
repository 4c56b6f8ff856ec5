//! Matrix module: dense construction, validated systems and the D − L − U splitting.

pub mod dense;
pub use dense::{DenseMatrix, LinearSystem};
pub mod split;
pub use split::Splitting;
