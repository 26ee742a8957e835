use num_traits::Float;

use crate::input::VectorSet;

impl<F: Float> VectorSet<F> {
    /// Weighted sum of the set's vectors: `Σ cᵢ · vᵢ`, computed component-wise
    /// across the shared dimension.
    ///
    /// Uses **Kahan summation** per component to keep floating-point error
    /// accumulation down. Pure and deterministic; NaN and infinity propagate
    /// through the arithmetic untouched.
    ///
    /// # Panics
    /// Panics if `coefficients.len()` differs from the vector count. The
    /// parse boundary ([`crate::parse_request`]) rules that case out.
    pub fn combine(&self, coefficients: &[F]) -> Vec<F> {
        assert!(
            coefficients.len() == self.len(),
            "coefficient count {} does not match vector count {}",
            coefficients.len(),
            self.len()
        );

        let mut sum = vec![F::zero(); self.dim];
        let mut compensation = vec![F::zero(); self.dim];

        for (&coefficient, vector) in coefficients.iter().zip(&self.vectors) {
            let terms = vector.iter().map(|&component| coefficient * component);
            for ((s, c), term) in sum.iter_mut().zip(compensation.iter_mut()).zip(terms) {
                let y = term - *c;
                let t = *s + y;
                *c = (t - *s) - y;
                *s = t;
            }
        }

        sum
    }
}
