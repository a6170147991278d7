// Comparison operator test cases

/// Every operator with the remaining input expected after it
pub const VALID_OPERATORS: &[(&str, &str, &str)] = &[
    // (input, operator, remaining)
    (">=", ">=", ""),
    ("<=", "<=", ""),
    (">", ">", ""),
    ("<", "<", ""),
    ("===", "===", ""),
    ("==", "==", ""),
    ("!=", "!=", ""),
    // Shared prefixes: the longest operator wins
    (">=1", ">=", "1"),
    ("<=1", "<=", "1"),
    ("===1", "===", "1"),
    ("==1", "==", "1"),
    // Leftovers stay in the input
    (">>", ">", ">"),
    ("<>", "<", ">"),
    ("====", "===", "="),
    ("!==", "!=", "="),
];

/// Inputs that do not start with an operator
pub const INVALID_OPERATORS: &[&str] = &["", "=", "!", "=>", "=<", "~=", " >", "gt", "≥"];
