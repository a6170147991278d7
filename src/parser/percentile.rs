//! Percentile token parsing: `p(<float>)`
//!
//! The percentile is kept as a number. Its canonical token is rendered with
//! the shortest float formatting, so `p(99)`, `p(99.0)` and `p(099)` all
//! canonicalize to `p(99)`.

use nom::{
    Parser, bytes::complete::tag, character::complete::char, combinator::map, error::context,
    sequence::delimited,
};

use crate::ast::TrendStat;
use crate::error::PResult;
use crate::lexer::number::unsigned_float;

/// Parse a percentile token and return the percentile value.
///
/// A failure points at the innermost component that did not match.
///
/// # Examples
///
/// ```
/// use thresholds_parser::parser::percentile::percentile;
///
/// assert_eq!(percentile("p(99.9)<300"), Ok(("<300", 99.9)));
/// assert!(percentile("p(abc)").is_err());
/// ```
pub fn percentile(input: &str) -> PResult<'_, f64> {
    context(
        "percentile",
        delimited(tag("p("), unsigned_float, char(')')),
    )
    .parse(input)
}

/// Parse a percentile token and return its canonical rendering.
pub fn percentile_token(input: &str) -> PResult<'_, String> {
    map(percentile, |p| TrendStat::Percentile(p).to_string()).parse(input)
}
