//! Statistic names per metric kind
//!
//! | Kind    | Statistics, in try order              |
//! |---------|---------------------------------------|
//! | counter | `count`, `sum`, `rate`                |
//! | gauge   | `last`, `min`, `max`, `value`         |
//! | rate    | `rate`                                |
//! | trend   | `mean`, `min`, `max`, `avg`, `p(<n>)` |
//!
//! The kind of the resulting [`AggregationMethod`] is the kind of the
//! grammar that was invoked, never inferred from the name: `rate` read by
//! [`counter`] is `Counter(Rate)`, read by [`rate`] it is `Rate`.

use nom::{
    Parser,
    branch::alt,
    bytes::complete::tag,
    combinator::{map, value},
    error::context,
};

use crate::ast::{AggregationMethod, CounterStat, GaugeStat, TrendStat};
use crate::error::PResult;
use crate::parser::percentile::percentile;

/// Parse a counter statistic name
pub fn counter_stat(input: &str) -> PResult<'_, CounterStat> {
    context(
        "counter statistic",
        alt((
            value(CounterStat::Count, tag("count")),
            value(CounterStat::Sum, tag("sum")),
            value(CounterStat::Rate, tag("rate")),
        )),
    )
    .parse(input)
}

/// Parse a gauge statistic name
pub fn gauge_stat(input: &str) -> PResult<'_, GaugeStat> {
    context(
        "gauge statistic",
        alt((
            value(GaugeStat::Last, tag("last")),
            value(GaugeStat::Min, tag("min")),
            value(GaugeStat::Max, tag("max")),
            value(GaugeStat::Value, tag("value")),
        )),
    )
    .parse(input)
}

/// Parse a trend statistic name or percentile token
pub fn trend_stat(input: &str) -> PResult<'_, TrendStat> {
    context(
        "trend statistic",
        alt((
            value(TrendStat::Mean, tag("mean")),
            value(TrendStat::Min, tag("min")),
            value(TrendStat::Max, tag("max")),
            value(TrendStat::Avg, tag("avg")),
            map(percentile, TrendStat::Percentile),
        )),
    )
    .parse(input)
}

/// Aggregation method of a counter metric
pub fn counter(input: &str) -> PResult<'_, AggregationMethod> {
    map(counter_stat, AggregationMethod::Counter).parse(input)
}

/// Aggregation method of a gauge metric
pub fn gauge(input: &str) -> PResult<'_, AggregationMethod> {
    map(gauge_stat, AggregationMethod::Gauge).parse(input)
}

/// Aggregation method of a rate metric
pub fn rate(input: &str) -> PResult<'_, AggregationMethod> {
    context("rate statistic", value(AggregationMethod::Rate, tag("rate"))).parse(input)
}

/// Aggregation method of a trend metric
pub fn trend(input: &str) -> PResult<'_, AggregationMethod> {
    map(trend_stat, AggregationMethod::Trend).parse(input)
}
