//! Iteration-matrix builders.
//!
//! Every stationary method rewrites A·x = b as the fixed point x = T·x + c. The
//! methods differ only in how `T` and `c` come out of the splitting A = D − L − U:
//!
//! | method        | T                                   | c                  |
//! |---------------|-------------------------------------|--------------------|
//! | Jacobi        | D⁻¹(L + U)                          | D⁻¹ b              |
//! | Gauss-Seidel  | (D − L)⁻¹ U                         | (D − L)⁻¹ b        |
//! | SOR(ω)        | (D − ωL)⁻¹((1 − ω)D + ωU)           | ω (D − ωL)⁻¹ b     |
//!
//! `D − ωL` is lower triangular with the diagonal of A, so the "inverse" is a
//! forward substitution per column and the only failure is a zero pivot.

use crate::core::traits::MatVec;
use crate::error::KError;
use crate::matrix::Splitting;
use crate::solver::MethodKind;
use faer::Mat;
use std::fmt;

/// Fixed-point operator x ↦ T·x + c for one solver run.
#[derive(Clone, Debug)]
pub struct IterationMatrix {
    pub t: Mat<f64>,
    pub c: Vec<f64>,
}

impl IterationMatrix {
    /// One step: returns T·x + c.
    pub fn apply(&self, x: &[f64]) -> Vec<f64> {
        let mut y = vec![0.0; self.c.len()];
        self.t.matvec(&x.to_vec(), &mut y);
        for (yi, ci) in y.iter_mut().zip(&self.c) {
            *yi += *ci;
        }
        y
    }
}

/// Builds the iteration matrix of a stationary method from a splitting.
pub trait IterationScheme {
    fn kind(&self) -> MethodKind;
    fn build(&self, split: &Splitting, b: &[f64]) -> Result<IterationMatrix, KError>;
}

/// Jacobi: T = D⁻¹(L + U), c = D⁻¹b.
#[derive(Clone, Copy, Debug, Default)]
pub struct Jacobi;

impl IterationScheme for Jacobi {
    fn kind(&self) -> MethodKind {
        MethodKind::Jacobi
    }

    fn build(&self, split: &Splitting, b: &[f64]) -> Result<IterationMatrix, KError> {
        let diag = split.diag();
        if let Some(i) = diag.iter().position(|&d| d == 0.0) {
            return Err(KError::ZeroPivot(i));
        }
        let n = split.dim();
        let t = Mat::from_fn(n, n, |i, j| (split.l[(i, j)] + split.u[(i, j)]) / diag[i]);
        let c = b.iter().zip(&diag).map(|(bi, di)| bi / di).collect();
        Ok(IterationMatrix { t, c })
    }
}

/// Successive over-relaxation with a fixed relaxation factor ω.
///
/// ω outside (0, 2) is accepted; the run simply may not converge.
#[derive(Clone, Copy, Debug)]
pub struct Sor {
    pub omega: f64,
}

impl Sor {
    pub fn new(omega: f64) -> Self {
        Self { omega }
    }
}

impl fmt::Display for Sor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SOR(omega={})", self.omega)
    }
}

impl IterationScheme for Sor {
    fn kind(&self) -> MethodKind {
        MethodKind::Sor
    }

    fn build(&self, split: &Splitting, b: &[f64]) -> Result<IterationMatrix, KError> {
        if !self.omega.is_finite() {
            return Err(KError::MalformedInput(format!("relaxation factor {} is not finite", self.omega)));
        }
        relaxed(split, b, self.omega)
    }
}

/// Gauss-Seidel: SOR with ω = 1, i.e. T = (D − L)⁻¹U, c = (D − L)⁻¹b.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussSeidel;

impl IterationScheme for GaussSeidel {
    fn kind(&self) -> MethodKind {
        MethodKind::GaussSeidel
    }

    fn build(&self, split: &Splitting, b: &[f64]) -> Result<IterationMatrix, KError> {
        relaxed(split, b, 1.0)
    }
}

fn relaxed(split: &Splitting, b: &[f64], omega: f64) -> Result<IterationMatrix, KError> {
    let n = split.dim();
    let lower = Mat::from_fn(n, n, |i, j| split.d[(i, j)] - omega * split.l[(i, j)]);
    let rhs = Mat::from_fn(n, n, |i, j| (1.0 - omega) * split.d[(i, j)] + omega * split.u[(i, j)]);

    let mut t = Mat::<f64>::zeros(n, n);
    let mut col = vec![0.0; n];
    for j in 0..n {
        for (i, ci) in col.iter_mut().enumerate() {
            *ci = rhs[(i, j)];
        }
        forward_substitute(&lower, &mut col)?;
        for (i, ci) in col.iter().enumerate() {
            t[(i, j)] = *ci;
        }
    }
    let mut c: Vec<f64> = b.iter().map(|bi| omega * bi).collect();
    forward_substitute(&lower, &mut c)?;
    Ok(IterationMatrix { t, c })
}

/// Solves `lower · y = rhs` in place, reading only the lower triangle.
pub fn forward_substitute(lower: &Mat<f64>, rhs: &mut [f64]) -> Result<(), KError> {
    let n = lower.nrows();
    assert_eq!(rhs.len(), n, "right-hand side has incorrect length");
    for i in 0..n {
        let pivot = lower[(i, i)];
        if pivot == 0.0 {
            return Err(KError::ZeroPivot(i));
        }
        let mut sigma = 0.0;
        for j in 0..i {
            sigma += lower[(i, j)] * rhs[j];
        }
        rhs[i] = (rhs[i] - sigma) / pivot;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample() -> Mat<f64> {
        Mat::from_fn(2, 2, |i, j| [[4.0, 1.0], [2.0, 3.0]][i][j])
    }

    #[test]
    fn jacobi_matrix_by_hand() {
        let split = Splitting::new(&sample());
        let it = Jacobi.build(&split, &[1.0, 2.0]).unwrap();
        assert_abs_diff_eq!(it.t[(0, 0)], 0.0);
        assert_abs_diff_eq!(it.t[(0, 1)], -0.25);
        assert_abs_diff_eq!(it.t[(1, 0)], -2.0 / 3.0);
        assert_abs_diff_eq!(it.c[0], 0.25);
        assert_abs_diff_eq!(it.c[1], 2.0 / 3.0);
    }

    #[test]
    fn gauss_seidel_matrix_by_hand() {
        // (D - L) = [[4,0],[2,3]], U = [[0,-1],[0,0]]
        let split = Splitting::new(&sample());
        let it = GaussSeidel.build(&split, &[1.0, 2.0]).unwrap();
        assert_abs_diff_eq!(it.t[(0, 1)], -0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(it.t[(1, 1)], 1.0 / 6.0, epsilon = 1e-15);
        assert_abs_diff_eq!(it.t[(0, 0)], 0.0);
        assert_abs_diff_eq!(it.c[0], 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(it.c[1], 0.5, epsilon = 1e-15);
    }

    #[test]
    fn sor_with_unit_omega_is_gauss_seidel() {
        let split = Splitting::new(&sample());
        let a = Sor::new(1.0).build(&split, &[1.0, 2.0]).unwrap();
        let b = GaussSeidel.build(&split, &[1.0, 2.0]).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(a.t[(i, j)], b.t[(i, j)]);
            }
        }
        assert_eq!(a.c, b.c);
    }

    #[test]
    fn exact_solution_is_fixed_point() {
        let split = Splitting::new(&sample());
        let it = Sor::new(1.3).build(&split, &[1.0, 2.0]).unwrap();
        let x = it.apply(&[0.1, 0.6]);
        assert_abs_diff_eq!(x[0], 0.1, epsilon = 1e-14);
        assert_abs_diff_eq!(x[1], 0.6, epsilon = 1e-14);
    }

    #[test]
    fn zero_pivot_is_reported() {
        let a = Mat::from_fn(2, 2, |i, j| if i == j { 0.0 } else { 1.0 });
        let split = Splitting::new(&a);
        assert!(matches!(Jacobi.build(&split, &[1.0, 1.0]), Err(KError::ZeroPivot(0))));
        assert!(matches!(Sor::new(1.1).build(&split, &[1.0, 1.0]), Err(KError::ZeroPivot(0))));
    }

    #[test]
    fn sor_display() {
        assert!(format!("{}", Sor::new(1.5)).contains("SOR(omega=1.5"));
    }
}
