// Statistic names per metric kind

pub const COUNTER_STATS: &[&str] = &["count", "sum", "rate"];
pub const GAUGE_STATS: &[&str] = &["last", "min", "max", "value"];
pub const RATE_STATS: &[&str] = &["rate"];
pub const TREND_STATS: &[&str] = &["mean", "min", "max", "avg", "p(99)", "p(99.9)", "p(0)"];

/// Every statistic name of every kind
pub const ALL_STATS: &[&str] = &[
    "count", "sum", "rate", "last", "min", "max", "value", "mean", "avg", "p(95)",
];

/// Percentile tokens and their canonical rendering
pub const PERCENTILES: &[(&str, &str)] = &[
    ("p(99)", "p(99)"),
    ("p(99.9)", "p(99.9)"),
    ("p(99.0)", "p(99)"),
    ("p(099)", "p(99)"),
    ("p(90.50)", "p(90.5)"),
    ("p(.5)", "p(0.5)"),
    ("p(5.)", "p(5)"),
    ("p(1e1)", "p(10)"),
    ("p(0)", "p(0)"),
];

/// Malformed percentile tokens
pub const INVALID_PERCENTILES: &[&str] = &[
    "p(abc)", "p(99", "p()", "p(", "p", "p99", "P(99)", "p(-1)", "p( 99)", "p(99 )", "p[99]",
];

/// Names that belong to no metric kind
pub const UNKNOWN_STATS: &[&str] = &["", "median", "total", "Count", "MIN", "avg_", "p"];
