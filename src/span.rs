use std::error::Error as StdError;
use std::fmt;

use nalgebra::DMatrix;
use num_traits::Float;

use crate::input::VectorSet;

// Iteration cap for the SVD; exceeding it surfaces as `SpanError::Svd`
// instead of looping forever on a pathological matrix.
const SVD_MAX_ITERATIONS: usize = 1024;

/// Failure inside the span test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanError {
    /// The singular value decomposition did not converge.
    Svd,
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::Svd => write!(f, "singular value decomposition did not converge"),
        }
    }
}

impl StdError for SpanError {}

impl<F: Float> VectorSet<F> {
    /// Numerical rank of the `d × k` matrix whose columns are the vectors.
    ///
    /// Computed from the singular values: σ counts toward the rank when it
    /// exceeds `σ_max · max(d, k) · ε`, the usual relative cutoff, so
    /// floating-point noise near zero does not inflate the rank. Components
    /// are widened to `f64` before decomposing.
    ///
    /// # Errors
    /// [`SpanError::Svd`] if the decomposition fails to converge.
    pub fn rank(&self) -> Result<usize, SpanError> {
        let (d, k) = (self.dim, self.len());
        let columns: Vec<f64> = self
            .vectors
            .iter()
            .flatten()
            .map(|x| x.to_f64().unwrap_or(f64::NAN))
            .collect();
        let matrix = DMatrix::from_vec(d, k, columns);

        let svd = matrix
            .try_svd(false, false, f64::EPSILON, SVD_MAX_ITERATIONS)
            .ok_or(SpanError::Svd)?;
        log::trace!("sigma = {}", svd.singular_values);

        let largest = svd.singular_values.iter().fold(0.0_f64, |a, &s| a.max(s));
        let tolerance = largest * d.max(k) as f64 * f64::EPSILON;
        Ok(svd
            .singular_values
            .iter()
            .filter(|&&s| s > tolerance)
            .count())
    }

    /// Whether the vectors span `R^n`: true iff [`rank`](Self::rank) equals
    /// `n`.
    ///
    /// The comparison is against `n` alone, never against the vectors'
    /// own dimension `d` — with `d ≠ n` the verdict still follows the rank.
    /// Fewer than `n` vectors can never reach rank `n`, so that case is
    /// false without special handling.
    ///
    /// # Errors
    /// [`SpanError::Svd`] if the decomposition fails to converge.
    pub fn spans(&self, n: usize) -> Result<bool, SpanError> {
        Ok(self.rank()? == n)
    }
}
