// Lexer module for the threshold grammars
// Contains parsers for individual tokens/lexemes

pub mod number;

pub use number::*;
