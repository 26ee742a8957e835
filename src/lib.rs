//! Linear combinations and span testing for small real vector sets.
//!
//! The crate is the computational core of an educational tool: raw text goes
//! in (one comma-separated vector per line, plus a coefficient line), and out
//! come the weighted sum, a numerical-rank span verdict for `R^n`, and the
//! structured data a 2D/3D charting widget needs to draw the vectors as
//! arrows from the origin. Everything is a pure, synchronous function over
//! freshly parsed input; no state survives a request.
//!
//! ```rust
//! use lincomb::{combine_request, span_request};
//!
//! let outcome = combine_request::<f64>("1, 0\n0, 1", "3, 4").unwrap();
//! assert_eq!(outcome.result, vec![3.0, 4.0]);
//!
//! let verdict = span_request::<f64>("1, 0\n0, 1", 2).unwrap();
//! assert!(verdict.spans);
//! ```

mod action;
mod combine;
mod display;
mod input;
mod plot;
mod span;

pub use action::{Combination, Error, SpanVerdict, combine_request, span_request};
pub use input::{ParseError, VectorSet, parse_coefficients, parse_request};
pub use plot::{Arrow, Diagram, UnsupportedDimension};
pub use span::SpanError;
