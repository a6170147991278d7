//! Assertion parsing: `<aggregation><operator><threshold>`
//!
//! The aggregation grammar is supplied by the caller, either the grammar of
//! a known metric kind or the combined
//! [`aggregation_method`](crate::parser::aggregation::aggregation_method).
//! The three parts are read in sequence with nothing between them; the first
//! part that fails ends the parse and its error is returned unchanged.
//!
//! Examples:
//! - `p(99.9)<300` (trend)
//! - `rate>0.95` (rate)
//! - `count<100` (counter)
//! - `value>=-5` (gauge)

use nom::{Parser, combinator::map, error::context};

use crate::ast::{AggregationMethod, Assertion};
use crate::error::{GrammarError, PResult};
use crate::lexer::number::float;
use crate::parser::operator::operator;

/// Parse the right-hand side of an assertion
pub fn threshold(input: &str) -> PResult<'_, f64> {
    context("threshold", float).parse(input)
}

/// Build an assertion parser around an aggregation-method grammar
///
/// # Examples
///
/// ```
/// use nom::Parser;
/// use thresholds_parser::parser::{assertion::assertion, metric::counter};
/// use thresholds_parser::{AggregationMethod, CounterStat, Operator};
///
/// let (rest, parsed) = assertion(counter).parse("count<100").unwrap();
/// assert!(rest.is_empty());
/// assert_eq!(parsed.aggregation, AggregationMethod::Counter(CounterStat::Count));
/// assert_eq!(parsed.operator, Operator::Less);
/// assert_eq!(parsed.threshold, 100.0);
/// ```
pub fn assertion<'a, P>(
    aggregation: P,
) -> impl Parser<&'a str, Output = Assertion, Error = GrammarError<'a>>
where
    P: Parser<&'a str, Output = AggregationMethod, Error = GrammarError<'a>>,
{
    map(
        (aggregation, operator, threshold),
        |(aggregation, operator, threshold)| Assertion {
            aggregation,
            operator,
            threshold,
        },
    )
}
