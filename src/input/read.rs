use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;

use csv::{ReaderBuilder, Trim};
use num_traits::Float;

use super::VectorSet;

/// Failure while turning raw text into vectors and coefficients.
#[derive(Debug)]
pub enum ParseError {
    /// The underlying reader failed (malformed quoting and the like).
    Csv(csv::Error),
    /// A token did not parse as a real number.
    NonNumeric {
        /// 1-based index of the non-blank row holding the token.
        row: usize,
        /// The offending token, as written.
        token: String,
    },
    /// A vector's length differs from the first vector's.
    DimensionMismatch {
        /// Component count of the first vector.
        expected: usize,
        /// Component count of the offending vector.
        found: usize,
        /// 1-based index of the offending vector.
        vector: usize,
    },
    /// Coefficient count does not equal the vector count.
    CoefficientCountMismatch {
        /// Number of vectors supplied.
        vectors: usize,
        /// Number of coefficients supplied.
        coefficients: usize,
    },
    /// No vector data was supplied.
    Empty,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Csv(e) => write!(f, "input could not be read: {e}"),
            ParseError::NonNumeric { row, token } => write!(
                f,
                "row {row} has a non-numeric entry {token:?}: ensure all values are numeric and comma-separated"
            ),
            ParseError::DimensionMismatch {
                expected,
                found,
                vector,
            } => write!(
                f,
                "vector {vector} has {found} components but {expected} were expected: every vector must have the same number of dimensions"
            ),
            ParseError::CoefficientCountMismatch {
                vectors,
                coefficients,
            } => write!(
                f,
                "{coefficients} coefficients supplied for {vectors} vectors: the counts must match"
            ),
            ParseError::Empty => write!(f, "no vectors supplied"),
        }
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ParseError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for ParseError {
    fn from(e: csv::Error) -> Self {
        ParseError::Csv(e)
    }
}

/// Tokenize comma-separated rows, skipping blank ones, and parse every token.
///
/// Tokens are parsed one by one so a failure names the exact row and token.
fn parse_rows<F>(text: &str) -> Result<Vec<Vec<F>>, ParseError>
where
    F: Float + FromStr,
{
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let row = record
            .iter()
            .map(|token| {
                token.parse::<F>().map_err(|_| ParseError::NonNumeric {
                    row: rows.len() + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<F>, ParseError>>()?;
        rows.push(row);
    }
    Ok(rows)
}

impl<F> VectorSet<F>
where
    F: Float + FromStr,
{
    /// Parse a multi-line vector block, one comma-separated vector per
    /// non-blank line.
    ///
    /// # Errors
    /// [`ParseError::NonNumeric`] on an unparseable token,
    /// [`ParseError::DimensionMismatch`] on ragged rows,
    /// [`ParseError::Empty`] when no non-blank line exists.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::new(parse_rows(text)?)
    }
}

/// Parse the coefficient field: every comma-separated token is one
/// coefficient. Blank input yields an empty list.
///
/// # Errors
/// [`ParseError::NonNumeric`] on an unparseable token.
pub fn parse_coefficients<F>(text: &str) -> Result<Vec<F>, ParseError>
where
    F: Float + FromStr,
{
    Ok(parse_rows(text)?.into_iter().flatten().collect())
}

/// Parse and cross-validate both raw inputs of a request.
///
/// This is the entry point a form front end calls: it yields a validated
/// [`VectorSet`] plus a coefficient list of matching length, or the first
/// validation failure.
///
/// # Errors
/// Any [`ParseError`] from the individual fields, plus
/// [`ParseError::CoefficientCountMismatch`] when the counts disagree.
pub fn parse_request<F>(
    vector_text: &str,
    coefficient_text: &str,
) -> Result<(VectorSet<F>, Vec<F>), ParseError>
where
    F: Float + FromStr,
{
    let set = VectorSet::parse(vector_text)?;
    let coefficients = parse_coefficients(coefficient_text)?;
    if coefficients.len() != set.len() {
        return Err(ParseError::CoefficientCountMismatch {
            vectors: set.len(),
            coefficients: coefficients.len(),
        });
    }
    Ok((set, coefficients))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn parses_trimmed_lines_and_skips_blanks() {
        let set: VectorSet<f64> = VectorSet::parse("  1, 2 \n\n 3 ,4\n   \n").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.dim(), 2);
        let rows: Vec<&[f64]> = set.iter().collect();
        for (actual, expected) in rows[0].iter().zip(&[1.0, 2.0]) {
            assert_abs_diff_eq!(*actual, *expected, epsilon = 1e-12);
        }
        for (actual, expected) in rows[1].iter().zip(&[3.0, 4.0]) {
            assert_abs_diff_eq!(*actual, *expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn ragged_lines_are_a_dimension_mismatch() {
        // "1,2" and "3,4,5" together must be rejected outright.
        let err = VectorSet::<f64>::parse("1,2\n3,4,5").unwrap_err();
        assert!(matches!(
            err,
            ParseError::DimensionMismatch {
                expected: 2,
                found: 3,
                vector: 2
            }
        ));
    }

    #[test]
    fn non_numeric_token_names_row_and_token() {
        let err = VectorSet::<f64>::parse("1,2\n3,oops").unwrap_err();
        match err {
            ParseError::NonNumeric { row, token } => {
                assert_eq!(row, 2);
                assert_eq!(token, "oops");
            }
            other => panic!("expected NonNumeric, got {other:?}"),
        }
        let msg = VectorSet::<f64>::parse("x").unwrap_err().to_string();
        assert!(msg.contains("numeric and comma-separated"));
    }

    #[test]
    fn blank_vector_block_is_empty() {
        assert!(matches!(
            VectorSet::<f64>::parse("\n  \n"),
            Err(ParseError::Empty)
        ));
    }

    #[test]
    fn coefficients_parse_and_tolerate_blank_input() {
        let coefficients: Vec<f64> = parse_coefficients("0.5, 2").unwrap();
        assert_eq!(coefficients.len(), 2);
        assert_abs_diff_eq!(coefficients[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(coefficients[1], 2.0, epsilon = 1e-12);
        let none: Vec<f64> = parse_coefficients("").unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn coefficient_count_must_match_vector_count() {
        // Three well-formed vectors, two coefficients.
        let err = parse_request::<f64>("1,0\n0,1\n1,1", "1, 2").unwrap_err();
        assert!(matches!(
            err,
            ParseError::CoefficientCountMismatch {
                vectors: 3,
                coefficients: 2
            }
        ));
    }

    #[test]
    fn request_yields_matching_shapes() {
        let (set, coefficients) = parse_request::<f64>("1,0\n0,1", "3,4").unwrap();
        assert_eq!(set.len(), coefficients.len());
        assert_eq!(set.dim(), 2);
    }
}
