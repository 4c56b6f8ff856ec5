//! Vector norms used by the stopping test and the residual diagnostic.

use crate::core::traits::MatVec;
use faer::Mat;
use num_traits::Float;

/// ‖v‖_∞. Returns zero for an empty slice; NaN entries propagate.
pub fn inf_norm<T: Float>(v: &[T]) -> T {
    v.iter().fold(T::zero(), |acc, x| {
        let a = x.abs();
        if a.is_nan() || acc.is_nan() { T::nan() } else { acc.max(a) }
    })
}

/// ‖x − y‖_∞.
pub fn diff_inf_norm<T: Float>(x: &[T], y: &[T]) -> T {
    debug_assert_eq!(x.len(), y.len());
    let d: Vec<T> = x.iter().zip(y).map(|(a, b)| *a - *b).collect();
    inf_norm(&d)
}

/// ‖A·x − b‖_∞.
pub fn residual_inf_norm(a: &Mat<f64>, x: &[f64], b: &[f64]) -> f64 {
    let mut ax = vec![0.0; a.nrows()];
    a.matvec(&x.to_vec(), &mut ax);
    diff_inf_norm(&ax, b)
}
