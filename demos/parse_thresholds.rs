use thresholds_parser::{MetricKind, parse_assertion};

fn main() {
    let inputs = [
        (Some(MetricKind::Trend), "p(99.9)<300"),
        (Some(MetricKind::Trend), "p(95.0)<=250"),
        (Some(MetricKind::Rate), "rate>0.95"),
        (Some(MetricKind::Counter), "count<100"),
        (Some(MetricKind::Gauge), "value>=-5"),
        (None, "min<10"),
        (None, "p(99"),
        (Some(MetricKind::Counter), "count < 100"),
    ];

    for (kind, input) in inputs {
        let kind_name = kind.map_or("any", |k| k.as_str());
        println!("\nParsing ({}): {}", kind_name, input);
        match parse_assertion(input, kind) {
            Ok(assertion) => {
                println!("  OK! Canonical: '{}'", assertion);
                println!("  Parsed: {:?}", assertion);
            }
            Err(e) => println!("  Error: {}", e),
        }
    }
}
