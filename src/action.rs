use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::input::{ParseError, VectorSet, parse_request};
use crate::plot::Diagram;
use crate::span::SpanError;

/// Top-level failure of a user-triggered action.
///
/// Parse failures carry their own user-facing message; anything past the
/// parse boundary is reported under the "unexpected error" heading. Either
/// way the action aborts and produces no partial result.
#[derive(Debug)]
pub enum Error {
    /// The raw input failed validation.
    Parse(ParseError),
    /// The span computation itself failed.
    Span(SpanError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "{e}"),
            Error::Span(e) => write!(f, "unexpected error: {e}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Span(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<SpanError> for Error {
    fn from(e: SpanError) -> Self {
        Error::Span(e)
    }
}

/// Outcome of the "compute linear combination" action.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination<F> {
    /// The parsed input vectors.
    pub vectors: VectorSet<F>,
    /// The parsed coefficients, one per vector.
    pub coefficients: Vec<F>,
    /// The weighted sum, `set.dim()` components.
    pub result: Vec<F>,
    /// Diagram data, present exactly when the dimension is 2 or 3.
    pub diagram: Option<Diagram<F>>,
}

/// Outcome of the "determine spanning" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanVerdict {
    /// The requested target dimension.
    pub n: usize,
    /// Numerical rank of the vector set.
    pub rank: usize,
    /// Whether the vectors span `R^n`.
    pub spans: bool,
}

/// Parse both inputs, compute the linear combination and, for 2- and
/// 3-dimensional sets, the diagram data.
///
/// # Errors
/// Any [`ParseError`], wrapped in [`Error::Parse`]; nothing downstream runs
/// after a parse failure.
pub fn combine_request<F>(vector_text: &str, coefficient_text: &str) -> Result<Combination<F>, Error>
where
    F: Float + FromStr,
{
    let (vectors, coefficients) = parse_request(vector_text, coefficient_text)?;
    let result = vectors.combine(&coefficients);
    let diagram = if matches!(vectors.dim(), 2 | 3) {
        Some(Diagram::new(&vectors, &result).expect("dimension is 2 or 3"))
    } else {
        None
    };
    Ok(Combination {
        vectors,
        coefficients,
        result,
        diagram,
    })
}

/// Parse the vector block and test whether the vectors span `R^n`.
///
/// The coefficient field plays no part here and may be left empty by the
/// caller.
///
/// # Errors
/// [`Error::Parse`] on invalid vector text, [`Error::Span`] if the rank
/// computation fails.
pub fn span_request<F>(vector_text: &str, n: usize) -> Result<SpanVerdict, Error>
where
    F: Float + FromStr,
{
    let vectors: VectorSet<F> = VectorSet::parse(vector_text)?;
    let rank = vectors.rank()?;
    Ok(SpanVerdict {
        n,
        rank,
        spans: rank == n,
    })
}
