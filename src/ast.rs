//! Value types produced by the threshold grammars
//!
//! An [`Assertion`] is the triple `(aggregation method, operator, threshold)`.
//! The aggregation method is a tagged value whose variant records which
//! metric-kind grammar recognized it, so `rate` parsed by the counter grammar
//! and `rate` parsed by the rate grammar are distinct values.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseFailure;

/// Comparison operator of an assertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    GreaterOrEqual, // >=
    LessOrEqual,    // <=
    Greater,        // >
    Less,           // <
    StrictEqual,    // ===
    LooseEqual,     // ==
    NotEqual,       // !=
}

impl Operator {
    /// All operators, in the order the operator grammar tries them
    pub const ALL: [Operator; 7] = [
        Operator::GreaterOrEqual,
        Operator::LessOrEqual,
        Operator::Greater,
        Operator::Less,
        Operator::StrictEqual,
        Operator::LooseEqual,
        Operator::NotEqual,
    ];

    /// Get the operator as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::GreaterOrEqual => ">=",
            Operator::LessOrEqual => "<=",
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::StrictEqual => "===",
            Operator::LooseEqual => "==",
            Operator::NotEqual => "!=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::error::complete(s, crate::parser::operator::operator)
    }
}

/// Statistics available on a counter metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterStat {
    Count,
    Sum,
    Rate,
}

impl CounterStat {
    /// Get the statistic name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterStat::Count => "count",
            CounterStat::Sum => "sum",
            CounterStat::Rate => "rate",
        }
    }
}

impl fmt::Display for CounterStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Statistics available on a gauge metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaugeStat {
    Last,
    Min,
    Max,
    Value,
}

impl GaugeStat {
    /// Get the statistic name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            GaugeStat::Last => "last",
            GaugeStat::Min => "min",
            GaugeStat::Max => "max",
            GaugeStat::Value => "value",
        }
    }
}

impl fmt::Display for GaugeStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Statistics available on a trend metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrendStat {
    Mean,
    Min,
    Max,
    Avg,
    /// `p(<value>)`, value is finite and non-negative
    Percentile(f64),
}

impl fmt::Display for TrendStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendStat::Mean => write!(f, "mean"),
            TrendStat::Min => write!(f, "min"),
            TrendStat::Max => write!(f, "max"),
            TrendStat::Avg => write!(f, "avg"),
            TrendStat::Percentile(p) => write!(f, "p({})", p),
        }
    }
}

/// The kind of a metric, which decides which statistics are legal for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Counter,
    Gauge,
    Rate,
    Trend,
}

impl MetricKind {
    /// Get the metric kind as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
            MetricKind::Rate => "rate",
            MetricKind::Trend => "trend",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "counter" => Ok(MetricKind::Counter),
            "gauge" => Ok(MetricKind::Gauge),
            "rate" => Ok(MetricKind::Rate),
            "trend" => Ok(MetricKind::Trend),
            _ => Err(ParseFailure {
                expected: "metric kind",
                position: 0,
            }),
        }
    }
}

/// The statistic an assertion is about, tagged with its metric kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggregationMethod {
    Counter(CounterStat),
    Gauge(GaugeStat),
    /// The single statistic of a rate metric: `rate`
    Rate,
    Trend(TrendStat),
}

impl AggregationMethod {
    /// The metric kind whose grammar produced this value
    pub fn kind(&self) -> MetricKind {
        match self {
            AggregationMethod::Counter(_) => MetricKind::Counter,
            AggregationMethod::Gauge(_) => MetricKind::Gauge,
            AggregationMethod::Rate => MetricKind::Rate,
            AggregationMethod::Trend(_) => MetricKind::Trend,
        }
    }

    /// Surface token of the statistic, with the percentile in canonical form
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AggregationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationMethod::Counter(s) => write!(f, "{}", s),
            AggregationMethod::Gauge(s) => write!(f, "{}", s),
            AggregationMethod::Rate => write!(f, "rate"),
            AggregationMethod::Trend(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for AggregationMethod {
    type Err = ParseFailure;

    /// Parses with the combined grammar, so overlapping names resolve to the
    /// kind tried first (`rate` is a counter statistic, `min` a gauge one).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::error::complete(s, crate::parser::aggregation::aggregation_method)
    }
}

/// A parsed threshold assertion: `<aggregation><operator><threshold>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assertion {
    pub aggregation: AggregationMethod,
    pub operator: Operator,
    /// Right-hand side of the comparison, always finite
    pub threshold: f64,
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.aggregation, self.operator, self.threshold)
    }
}

impl FromStr for Assertion {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_assertion(s, None)
    }
}
