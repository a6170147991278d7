//! Error types for the threshold grammars.
//!
//! Grammar rules fail with a [`GrammarError`], a nom error that remembers
//! where in the input the failure happened and the outermost label attached
//! with [`nom::error::context`]. Complete-input entry points turn it into a
//! [`ParseFailure`], which reports the label and a character offset.

use nom::{
    IResult, Parser,
    error::{ContextError, ErrorKind, FromExternalError, ParseError},
};

/// Result type of every grammar rule in this crate
pub type PResult<'a, O> = IResult<&'a str, O, GrammarError<'a>>;

/// Error produced by the grammar rules
#[derive(Debug, Clone, PartialEq)]
pub struct GrammarError<'a> {
    /// Remaining input at the point of failure
    pub input: &'a str,
    /// Innermost nom combinator that failed
    pub kind: ErrorKind,
    /// Outermost `context` label, if any rule on the path had one
    pub label: Option<&'static str>,
}

impl<'a> ParseError<&'a str> for GrammarError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        GrammarError {
            input,
            kind,
            label: None,
        }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    /// Keep the alternative that got furthest; on a tie the later one wins.
    fn or(self, other: Self) -> Self {
        if self.input.len() < other.input.len() {
            self
        } else {
            other
        }
    }
}

impl<'a> ContextError<&'a str> for GrammarError<'a> {
    fn add_context(_input: &'a str, ctx: &'static str, mut other: Self) -> Self {
        other.label = Some(ctx);
        other
    }
}

impl<'a, E> FromExternalError<&'a str, E> for GrammarError<'a> {
    fn from_external_error(input: &'a str, kind: ErrorKind, _e: E) -> Self {
        GrammarError::from_error_kind(input, kind)
    }
}

/// A failed parse of a complete threshold expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} at position {position}")]
pub struct ParseFailure {
    /// What the grammar expected, e.g. `operator` or `trend statistic`
    pub expected: &'static str,
    /// Character offset into the input
    pub position: usize,
}

impl ParseFailure {
    fn at(source: &str, rest: &str, expected: &'static str) -> Self {
        let consumed = &source[..source.len() - rest.len()];
        ParseFailure {
            expected,
            position: consumed.chars().count(),
        }
    }

    /// Convert a grammar error raised while parsing `source`
    pub fn from_grammar(source: &str, err: nom::Err<GrammarError<'_>>) -> Self {
        match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                ParseFailure::at(source, e.input, e.label.unwrap_or("valid input"))
            }
            // Only complete parsers are used, kept for exhaustiveness
            nom::Err::Incomplete(_) => ParseFailure::at(source, "", "more input"),
        }
    }
}

/// Run `parser` over the whole of `source`, rejecting trailing input.
pub(crate) fn complete<'a, O, P>(source: &'a str, mut parser: P) -> Result<O, ParseFailure>
where
    P: Parser<&'a str, Output = O, Error = GrammarError<'a>>,
{
    let (rest, output) = parser
        .parse(source)
        .map_err(|e| ParseFailure::from_grammar(source, e))?;
    if !rest.is_empty() {
        return Err(ParseFailure::at(source, rest, "end of input"));
    }
    Ok(output)
}
