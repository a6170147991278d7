// Assertion test cases
//
// Each valid case lists the metric kind to parse with (None for the combined
// grammar), the input, and the expected canonical rendering.

use thresholds_parser::MetricKind;

pub const VALID_ASSERTIONS: &[(Option<MetricKind>, &str, &str)] = &[
    // Counter
    (Some(MetricKind::Counter), "count<100", "count<100"),
    (Some(MetricKind::Counter), "sum>=50", "sum>=50"),
    (Some(MetricKind::Counter), "rate==0.99", "rate==0.99"),
    (Some(MetricKind::Counter), "count===0", "count===0"),
    // Gauge
    (Some(MetricKind::Gauge), "value<4000", "value<4000"),
    (Some(MetricKind::Gauge), "last!=0", "last!=0"),
    (Some(MetricKind::Gauge), "min>-10.5", "min>-10.5"),
    (Some(MetricKind::Gauge), "max<=1e3", "max<=1000"),
    // Rate
    (Some(MetricKind::Rate), "rate>0.95", "rate>0.95"),
    (Some(MetricKind::Rate), "rate<.01", "rate<0.01"),
    // Trend
    (Some(MetricKind::Trend), "p(99.9)<300", "p(99.9)<300"),
    (Some(MetricKind::Trend), "p(95.0)<300.0", "p(95)<300"),
    (Some(MetricKind::Trend), "mean<200", "mean<200"),
    (Some(MetricKind::Trend), "avg<=150", "avg<=150"),
    (Some(MetricKind::Trend), "min>=1", "min>=1"),
    // Combined grammar
    (None, "count<100", "count<100"),
    (None, "rate>0.95", "rate>0.95"),
    (None, "min<10", "min<10"),
    (None, "p(90)<100", "p(90)<100"),
];

/// Malformed assertions: (kind, input, expected label, position)
pub const INVALID_ASSERTIONS: &[(Option<MetricKind>, &str, &str, usize)] = &[
    (Some(MetricKind::Counter), "count", "operator", 5),
    (Some(MetricKind::Counter), "count<", "threshold", 6),
    (Some(MetricKind::Counter), "count<abc", "threshold", 6),
    (Some(MetricKind::Counter), "mean<100", "counter statistic", 0),
    (Some(MetricKind::Counter), "count<100ms", "end of input", 9),
    (Some(MetricKind::Counter), "count < 100", "operator", 5),
    (Some(MetricKind::Gauge), "value=1", "operator", 5),
    (Some(MetricKind::Gauge), "count<1", "gauge statistic", 0),
    (Some(MetricKind::Rate), "count<1", "rate statistic", 0),
    (Some(MetricKind::Rate), "rate>0.95 && rate<1", "end of input", 9),
    (Some(MetricKind::Trend), "p(99<300", "trend statistic", 4),
    (Some(MetricKind::Trend), "p(abc)<300", "trend statistic", 2),
    (Some(MetricKind::Trend), "p(99)<", "threshold", 6),
    (Some(MetricKind::Trend), "p(99)<1e999", "threshold", 6),
    (Some(MetricKind::Trend), "rate<1", "trend statistic", 0),
    (None, ">=abc", "aggregation method", 0),
    (None, "", "aggregation method", 0),
    (None, "p(99", "aggregation method", 4),
    (None, "median<1", "aggregation method", 0),
];
