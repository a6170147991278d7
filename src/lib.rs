//! # Thresholds Parser
//!
//! A parser for threshold assertions, the short pass/fail criteria declared
//! against metrics collected at runtime, built on the
//! [nom](https://github.com/rust-bakery/nom) parser combinator library.
//!
//! An assertion is written `<aggregation><operator><threshold>` with no
//! whitespace, for example `p(95)<300`, `rate>0.95` or `count<100`.
//!
//! ## Quick Start
//!
//! When the metric kind is known, pass it so only that kind's statistics are
//! accepted:
//!
//! ```rust
//! use thresholds_parser::{parse_assertion, AggregationMethod, MetricKind, Operator, TrendStat};
//!
//! let assertion = parse_assertion("p(99.9)<300", Some(MetricKind::Trend)).unwrap();
//! assert_eq!(assertion.aggregation, AggregationMethod::Trend(TrendStat::Percentile(99.9)));
//! assert_eq!(assertion.operator, Operator::Less);
//! assert_eq!(assertion.threshold, 300.0);
//! ```
//!
//! Without a metric kind, every kind is tried in a fixed order (counter,
//! gauge, rate, trend), so shared names resolve to the first kind:
//!
//! ```rust
//! use thresholds_parser::{AggregationMethod, Assertion, CounterStat};
//!
//! let assertion: Assertion = "rate>0.95".parse().unwrap();
//! assert_eq!(assertion.aggregation, AggregationMethod::Counter(CounterStat::Rate));
//! ```
//!
//! ## Errors
//!
//! A failed parse reports what was expected and where:
//!
//! ```rust
//! use thresholds_parser::{parse_assertion, MetricKind};
//!
//! let err = parse_assertion("count>=abc", Some(MetricKind::Counter)).unwrap_err();
//! assert_eq!(err.to_string(), "expected threshold at position 7");
//! ```
//!
//! ## Modules
//!
//! - [`ast`] - Operators, statistics and assertions
//! - [`error`] - Grammar errors and [`ParseFailure`]
//! - [`lexer`] - Float literals
//! - [`parser`] - The grammar rules, usable as nom parsers

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types and parsers
pub use ast::{
    AggregationMethod, Assertion, CounterStat, GaugeStat, MetricKind, Operator, TrendStat,
};
pub use error::{GrammarError, PResult, ParseFailure};
pub use parser::aggregation::{KIND_PRECEDENCE, aggregation_method};
pub use parser::assertion::assertion;

/// Parse a complete threshold assertion.
///
/// `kind` selects the statistics grammar of a known metric kind; `None`
/// uses the combined grammar. Input left over after the threshold is an
/// error.
pub fn parse_assertion(input: &str, kind: Option<MetricKind>) -> Result<Assertion, ParseFailure> {
    let grammar = match kind {
        Some(kind) => kind.grammar(),
        None => aggregation_method,
    };
    error::complete(input, assertion(grammar))
}
