mod read;

pub use read::{ParseError, parse_coefficients, parse_request};

use std::fmt::Display;

use num_traits::Float;

/// A set of real vectors sharing one dimension.
///
/// Invariants, enforced at construction: at least one vector, and every
/// vector has the same component count `d >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSet<F> {
    pub(crate) vectors: Vec<Vec<F>>,
    pub(crate) dim: usize,
}

impl<F: Float> VectorSet<F> {
    /// Build a set from raw rows, validating the shared-dimension invariant.
    ///
    /// # Errors
    /// [`ParseError::Empty`] when `vectors` is empty or the first row has no
    /// components; [`ParseError::DimensionMismatch`] when any row's length
    /// differs from the first row's.
    pub fn new(vectors: Vec<Vec<F>>) -> Result<Self, ParseError> {
        let dim = vectors.first().map_or(0, Vec::len);
        if dim == 0 {
            return Err(ParseError::Empty);
        }
        for (i, v) in vectors.iter().enumerate() {
            if v.len() != dim {
                return Err(ParseError::DimensionMismatch {
                    expected: dim,
                    found: v.len(),
                    vector: i + 1,
                });
            }
        }
        Ok(Self { vectors, dim })
    }

    /// Number of vectors in the set.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the set holds no vectors. Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// The shared dimension `d` of every vector.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The vectors, in input order.
    pub fn vectors(&self) -> &[Vec<F>] {
        &self.vectors
    }

    /// Iterate over the vectors as component slices.
    pub fn iter(&self) -> impl Iterator<Item = &[F]> {
        self.vectors.iter().map(Vec::as_slice)
    }
}

impl<F: Float + Display> VectorSet<F> {
    /// Canonical text form: one vector per line, components joined by `", "`.
    ///
    /// Re-parsing this text yields an equal set.
    pub fn to_text(&self) -> String {
        self.vectors
            .iter()
            .map(|v| {
                v.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_input() {
        assert!(matches!(
            VectorSet::<f64>::new(vec![]),
            Err(ParseError::Empty)
        ));
        assert!(matches!(
            VectorSet::<f64>::new(vec![vec![]]),
            Err(ParseError::Empty)
        ));
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let err = VectorSet::new(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]).unwrap_err();
        match err {
            ParseError::DimensionMismatch {
                expected,
                found,
                vector,
            } => {
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
                assert_eq!(vector, 2);
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn accessors_report_shape() {
        let set = VectorSet::new(vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.dim(), 3);
        assert!(!set.is_empty());
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn to_text_round_trips() {
        let set = VectorSet::new(vec![vec![1.5, -2.0], vec![0.25, 4.0]]).unwrap();
        let reparsed: VectorSet<f64> = VectorSet::parse(&set.to_text()).unwrap();
        assert_eq!(reparsed, set);
    }
}
