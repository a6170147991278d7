use afl::fuzz;
use thresholds_parser::{MetricKind, parse_assertion};

const KINDS: [Option<MetricKind>; 5] = [
    None,
    Some(MetricKind::Counter),
    Some(MetricKind::Gauge),
    Some(MetricKind::Rate),
    Some(MetricKind::Trend),
];

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(s) = std::str::from_utf8(data) {
            for kind in KINDS {
                if let Ok(assertion) = parse_assertion(s, kind) {
                    // Printed form must parse back to the same assertion
                    let printed = assertion.to_string();
                    assert_eq!(parse_assertion(&printed, kind), Ok(assertion));
                }
            }
        }
    });
}
