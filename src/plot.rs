use std::error::Error as StdError;
use std::fmt;

use num_traits::Float;
use serde::Serialize;

use crate::input::VectorSet;

// Trace colors of the original tool: input vectors cycle through the
// palette, the result is drawn black and dashed.
const PALETTE: [&str; 6] = ["red", "green", "blue", "cyan", "magenta", "yellow"];
const RESULT_COLOR: &str = "black";

/// Diagram data is only defined for 2- and 3-dimensional vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedDimension(pub usize);

impl fmt::Display for UnsupportedDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot draw {}-dimensional vectors: only 2 and 3 are supported", self.0)
    }
}

impl StdError for UnsupportedDimension {}

/// One arrow from the origin, ready for a charting widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arrow<F> {
    /// Legend label: `v1..vk` for inputs, `result` for the combination.
    pub label: String,
    /// Tip of the arrow; the tail is the origin.
    pub components: Vec<F>,
    /// Trace color.
    pub color: &'static str,
    /// Whether the trace is dashed (the result arrow is).
    pub dashed: bool,
}

/// Everything a 2D/3D charting widget needs to draw one request: the input
/// vectors, the result vector and a shared axis range. The crate does no
/// rendering itself; this is the hand-off contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram<F> {
    /// Shared dimension of every arrow, 2 or 3.
    pub dim: usize,
    /// Input arrows in order, then the result arrow last.
    pub arrows: Vec<Arrow<F>>,
    /// Lower bound for every axis: data minimum minus one unit.
    pub axis_min: F,
    /// Upper bound for every axis: data maximum plus one unit.
    pub axis_max: F,
}

impl<F: Float> Diagram<F> {
    /// Assemble diagram data for a vector set and its combination result.
    ///
    /// # Errors
    /// [`UnsupportedDimension`] unless `set.dim()` is 2 or 3.
    ///
    /// # Panics
    /// Panics if `result.len()` differs from `set.dim()`; the result always
    /// comes from [`VectorSet::combine`], which guarantees the length.
    pub fn new(set: &VectorSet<F>, result: &[F]) -> Result<Self, UnsupportedDimension> {
        let dim = set.dim();
        if dim != 2 && dim != 3 {
            return Err(UnsupportedDimension(dim));
        }
        assert!(
            result.len() == dim,
            "result has {} components but the set is {dim}-dimensional",
            result.len()
        );

        let mut arrows: Vec<Arrow<F>> = set
            .iter()
            .zip(PALETTE.iter().cycle())
            .enumerate()
            .map(|(i, (vector, &color))| Arrow {
                label: format!("v{}", i + 1),
                components: vector.to_vec(),
                color,
                dashed: false,
            })
            .collect();
        arrows.push(Arrow {
            label: "result".to_string(),
            components: result.to_vec(),
            color: RESULT_COLOR,
            dashed: true,
        });

        let (low, high) = arrows
            .iter()
            .flat_map(|arrow| arrow.components.iter().copied())
            .fold((F::infinity(), F::neg_infinity()), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });

        Ok(Self {
            dim,
            arrows,
            axis_min: low - F::one(),
            axis_max: high + F::one(),
        })
    }
}
