//! Spectral radius of an iteration matrix.
//!
//! A stationary method converges for every starting guess iff ρ(T) < 1, so the
//! radius is reported next to every run as a diagnostic. It never gates termination.

use crate::error::KError;
use faer::Mat;
use std::fmt;

/// ρ(T) = max |λᵢ(T)|.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpectralRadius {
    pub value: f64,
}

impl SpectralRadius {
    /// Fixed label used when displaying the value.
    pub const LABEL: &'static str = "Spectral radius";

    /// True when the iteration is guaranteed to converge.
    pub fn converges(&self) -> bool {
        self.value < 1.0
    }
}

impl fmt::Display for SpectralRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::LABEL, self.value)
    }
}

/// Computes all (possibly complex) eigenvalues of `t` and returns the largest modulus.
pub fn spectral_radius(t: &Mat<f64>) -> Result<SpectralRadius, KError> {
    let eigs = t
        .as_ref()
        .eigenvalues()
        .map_err(|e| KError::EigenSolve(format!("{e:?}")))?;
    let value = eigs
        .iter()
        .map(|z| z.re.hypot(z.im))
        .fold(0.0_f64, f64::max);
    Ok(SpectralRadius { value })
}
