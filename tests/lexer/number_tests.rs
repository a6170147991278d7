// Float literal test cases
//
// These test cases cover:
// - Integer literals
// - Fractional literals, with and without leading/trailing digits
// - Scientific notation
// - Signed literals (thresholds only)

/// Valid threshold literals
pub const VALID_THRESHOLDS: &[(&str, f64)] = &[
    // Integers
    ("0", 0.0),
    ("1", 1.0),
    ("100", 100.0),
    ("4000", 4000.0),
    // Fractions
    ("0.95", 0.95),
    ("0.99", 0.99),
    (".5", 0.5),
    ("5.", 5.0),
    ("123.4567", 123.4567),
    // Scientific notation
    ("1e3", 1000.0),
    ("5e-3", 0.005),
    ("5e+3", 5000.0),
    ("2.5E-3", 0.0025),
    ("1.e2", 100.0),
    // Signed
    ("-1", -1.0),
    ("+1", 1.0),
    ("-0.5", -0.5),
    ("-1e1", -10.0),
];

/// Inputs that are not threshold literals at all
pub const INVALID_THRESHOLDS: &[&str] = &[
    "", ".", "-", "+", "e5", "abc", "Inf", "-Inf", "NaN", "1e999", " 1",
];

/// Literals followed by other content: (input, value, remaining)
pub const PARTIAL_THRESHOLDS: &[(&str, f64, &str)] = &[
    ("100count", 100.0, "count"),
    ("1.5.3", 1.5, ".3"),
    ("1e", 1.0, "e"),
    ("300 ", 300.0, " "),
    ("0x1F", 0.0, "x1F"),
];
