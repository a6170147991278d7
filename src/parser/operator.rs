//! Comparison operator parsing
//!
//! Operators, in the order they are tried:
//! `>=`, `<=`, `>`, `<`, `===`, `==`, `!=`
//!
//! Longer operators sharing a prefix with a shorter one come first, so
//! `>=` is never read as `>` followed by `=`.

use nom::{
    Parser, branch::alt, bytes::complete::tag, combinator::value, error::context,
};

use crate::ast::Operator;
use crate::error::PResult;

/// Parse a comparison operator
///
/// # Examples
///
/// ```
/// use thresholds_parser::parser::operator::operator;
/// use thresholds_parser::Operator;
///
/// let (rest, op) = operator(">=300").unwrap();
/// assert_eq!(op, Operator::GreaterOrEqual);
/// assert_eq!(rest, "300");
/// ```
pub fn operator(input: &str) -> PResult<'_, Operator> {
    context(
        "operator",
        alt((
            value(Operator::GreaterOrEqual, tag(">=")),
            value(Operator::LessOrEqual, tag("<=")),
            value(Operator::Greater, tag(">")),
            value(Operator::Less, tag("<")),
            value(Operator::StrictEqual, tag("===")),
            value(Operator::LooseEqual, tag("==")),
            value(Operator::NotEqual, tag("!=")),
        )),
    )
    .parse(input)
}
