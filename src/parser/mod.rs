//! Threshold grammar rules.
//!
//! Every rule is a function from the remaining input to a
//! [`PResult`](crate::error::PResult): on success the parsed value and the
//! unconsumed remainder, on failure a labeled [`GrammarError`](crate::error::GrammarError).
//! No rule skips whitespace; `p(99) < 300` is not a valid assertion.
//!
//! # Submodules
//!
//! - [`operator`] - Comparison operators (`>=`, `===`, ...)
//! - [`percentile`] - The `p(<float>)` percentile token
//! - [`metric`] - Per-kind statistic names (counter, gauge, rate, trend)
//! - [`aggregation`] - The ordered union of all metric kinds
//! - [`assertion`] - `<aggregation><operator><threshold>`
//!
//! # Example
//!
//! ```rust
//! use nom::Parser;
//! use thresholds_parser::parser::{assertion::assertion, metric::trend};
//!
//! let (rest, parsed) = assertion(trend).parse("p(95)<300").unwrap();
//! assert!(rest.is_empty());
//! assert_eq!(parsed.to_string(), "p(95)<300");
//! ```

pub mod aggregation;
pub mod assertion;
pub mod metric;
pub mod operator;
pub mod percentile;

pub use aggregation::aggregation_method;
pub use assertion::{assertion, threshold};
pub use metric::{counter, gauge, rate, trend};
pub use operator::operator;
pub use percentile::percentile;
