// Float literal parsers for threshold expressions
//
// Supports:
// - Integers: 42, 0, 100
// - Floats: 0.95, .5, 5.
// - Scientific notation: 1e3, 2.5E-3
// - Signed numbers (thresholds only): -5, +0.5
//
// There are no special values: Inf and NaN are not thresholds.

use nom::{
    Parser,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, one_of},
    combinator::{map, map_res, opt, recognize, verify},
    sequence::pair,
};

use crate::error::PResult;

/// Parse an unsigned decimal float literal and return its f64 value.
///
/// Overflowing literals such as `1e999` are rejected so that every
/// parsed value is finite.
pub fn unsigned_float(input: &str) -> PResult<'_, f64> {
    verify(
        map_res(recognize(decimal_float_inner), |s: &str| s.parse::<f64>()),
        |v: &f64| v.is_finite(),
    )
    .parse(input)
}

/// Parse a float literal with an optional `+`/`-` sign.
pub fn float(input: &str) -> PResult<'_, f64> {
    map(
        pair(opt(one_of("+-")), unsigned_float),
        |(sign, value)| match sign {
            Some('-') => -value,
            _ => value,
        },
    )
    .parse(input)
}

/// Inner recognizer for decimal floats - captures the string representation
fn decimal_float_inner(input: &str) -> PResult<'_, &str> {
    alt((
        // .5 or .5e3
        recognize((char('.'), decimal_digits, opt(exponent))),
        // 42, 42., 42.5, each with an optional exponent
        recognize((
            decimal_digits,
            opt(pair(char('.'), opt(decimal_digits))),
            opt(exponent),
        )),
    ))
    .parse(input)
}

/// Parse decimal digits (one or more)
fn decimal_digits(input: &str) -> PResult<'_, &str> {
    take_while1(|c: char| c.is_ascii_digit())(input)
}

/// Parse the exponent part: e10, E-3, e+5
fn exponent(input: &str) -> PResult<'_, &str> {
    recognize((one_of("eE"), opt(one_of("+-")), decimal_digits)).parse(input)
}
