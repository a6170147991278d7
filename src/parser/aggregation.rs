//! The combined aggregation-method grammar
//!
//! Tries every metric-kind grammar in [`KIND_PRECEDENCE`] order and keeps
//! the first success. Names shared between kinds resolve to the kind tried
//! first:
//! - `rate` is a counter statistic (counter before rate)
//! - `min`, `max` are gauge statistics (gauge before trend)
//!
//! Callers that know the metric kind should use [`MetricKind::grammar`]
//! instead, which never crosses kinds.

use nom::{
    Parser,
    error::{ErrorKind, ParseError, context},
};

use crate::ast::{AggregationMethod, MetricKind};
use crate::error::{GrammarError, PResult};
use crate::parser::metric::{counter, gauge, rate, trend};

/// Order in which the combined grammar tries the metric kinds
pub const KIND_PRECEDENCE: [MetricKind; 4] = [
    MetricKind::Counter,
    MetricKind::Gauge,
    MetricKind::Rate,
    MetricKind::Trend,
];

/// Signature shared by every aggregation-method grammar
pub type AggregationGrammar = for<'a> fn(&'a str) -> PResult<'a, AggregationMethod>;

impl MetricKind {
    /// The aggregation-method grammar of this metric kind
    ///
    /// ```
    /// use thresholds_parser::{AggregationMethod, MetricKind};
    ///
    /// let grammar = MetricKind::Rate.grammar();
    /// assert_eq!(grammar("rate"), Ok(("", AggregationMethod::Rate)));
    /// ```
    pub fn grammar(self) -> AggregationGrammar {
        match self {
            MetricKind::Counter => counter,
            MetricKind::Gauge => gauge,
            MetricKind::Rate => rate,
            MetricKind::Trend => trend,
        }
    }
}

/// Parse an aggregation method of any metric kind
///
/// # Examples
///
/// ```
/// use thresholds_parser::parser::aggregation::aggregation_method;
/// use thresholds_parser::{AggregationMethod, CounterStat, GaugeStat};
///
/// let (_, method) = aggregation_method("rate").unwrap();
/// assert_eq!(method, AggregationMethod::Counter(CounterStat::Rate));
///
/// let (_, method) = aggregation_method("min").unwrap();
/// assert_eq!(method, AggregationMethod::Gauge(GaugeStat::Min));
/// ```
pub fn aggregation_method(input: &str) -> PResult<'_, AggregationMethod> {
    context("aggregation method", first_matching_kind).parse(input)
}

fn first_matching_kind(input: &str) -> PResult<'_, AggregationMethod> {
    let mut failure: Option<GrammarError<'_>> = None;
    for kind in KIND_PRECEDENCE {
        match kind.grammar()(input) {
            Err(nom::Err::Error(e)) => {
                failure = Some(match failure {
                    Some(previous) => previous.or(e),
                    None => e,
                });
            }
            result => return result,
        }
    }
    let failure = failure.unwrap_or_else(|| GrammarError::from_error_kind(input, ErrorKind::Alt));
    Err(nom::Err::Error(GrammarError::append(
        input,
        ErrorKind::Alt,
        failure,
    )))
}
