//! Core traits and their faer/`Vec` implementations.

pub mod traits;
pub mod wrappers;

pub use traits::{Indexing, InnerProduct, MatVec};
