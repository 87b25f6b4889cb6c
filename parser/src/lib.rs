//! Recognisers for the numeric text accepted by string literals.
//!
//! Both entry points match the whole input: surrounding whitespace,
//! separators, and trailing garbage are a syntax error.

use common::error::NumericError;

pub mod parser;

/// Parses a strict base-10 integer: an optional leading `-` followed by
/// ASCII digits.
///
/// Well-formed text that does not fit in an `i64` is reported as
/// [`NumericError::Range`], everything else that fails as
/// [`NumericError::Syntax`].
#[inline]
pub fn parse_int(text: &str) -> Result<i64, NumericError> {
    parser::parser::int(text).unwrap_or(Err(NumericError::Syntax))
}

/// Parses a decimal or scientific-notation float, or one of the words
/// `inf`, `infinity`, `nan` (any ASCII case, optionally signed).
///
/// Finite text whose value overflows the `f64` range is rejected with
/// [`NumericError::Range`] rather than rounded to infinity.
#[inline]
pub fn parse_float(text: &str) -> Result<f64, NumericError> {
    parser::parser::float(text).unwrap_or(Err(NumericError::Syntax))
}
