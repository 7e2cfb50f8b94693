/// Lexical errors.
///
/// Raised while splitting the input into tokens: characters outside the
/// grammar, malformed numeric literals and identifiers that are neither the
/// variable nor a keyword.
pub mod lex_error;
/// Unified parse errors.
///
/// Combines lexical and syntax errors into the single error type returned by
/// [`crate::parse_expression`], and renders a caret under the offending
/// character for display.
pub mod parse_error;
/// Syntax errors.
///
/// Raised by the parser when the token sequence does not form an expression,
/// plus the internal category for builder inconsistencies.
pub mod syntax_error;

pub use lex_error::LexError;
pub use parse_error::{ErrorCategory, ParseError};
pub use syntax_error::SyntaxError;
