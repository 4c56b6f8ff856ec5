//! Additive splitting A = D − L − U.
//!
//! `D` is the diagonal of A, `L` the negated strictly-lower part and `U` the negated
//! strictly-upper part, so that every stationary method can be written in terms of
//! these three matrices.

use faer::Mat;

/// The three parts of a square matrix under the A = D − L − U convention.
#[derive(Clone, Debug)]
pub struct Splitting {
    pub d: Mat<f64>,
    pub l: Mat<f64>,
    pub u: Mat<f64>,
}

impl Splitting {
    /// Split a square matrix. The caller guarantees `a` is square.
    pub fn new(a: &Mat<f64>) -> Self {
        let n = a.nrows();
        debug_assert_eq!(n, a.ncols(), "splitting needs a square matrix");
        let d = Mat::from_fn(n, n, |i, j| if i == j { a[(i, j)] } else { 0.0 });
        let l = Mat::from_fn(n, n, |i, j| if i > j { -a[(i, j)] } else { 0.0 });
        let u = Mat::from_fn(n, n, |i, j| if i < j { -a[(i, j)] } else { 0.0 });
        Self { d, l, u }
    }

    pub fn dim(&self) -> usize {
        self.d.nrows()
    }

    /// Diagonal entries of D.
    pub fn diag(&self) -> Vec<f64> {
        (0..self.dim()).map(|i| self.d[(i, i)]).collect()
    }

    /// Rebuilds D − L − U.
    pub fn recombine(&self) -> Mat<f64> {
        let n = self.dim();
        Mat::from_fn(n, n, |i, j| self.d[(i, j)] - self.l[(i, j)] - self.u[(i, j)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs_follow_d_minus_l_minus_u() {
        let a = Mat::from_fn(3, 3, |i, j| (1 + i * 3 + j) as f64);
        let s = Splitting::new(&a);
        assert_eq!(s.diag(), vec![1.0, 5.0, 9.0]);
        // a[(1,0)] = 4 lands in L negated
        assert_eq!(s.l[(1, 0)], -4.0);
        assert_eq!(s.l[(0, 1)], 0.0);
        assert_eq!(s.u[(0, 2)], -3.0);
        assert_eq!(s.u[(2, 0)], 0.0);
        let back = s.recombine();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(back[(i, j)], a[(i, j)]);
            }
        }
    }
}
