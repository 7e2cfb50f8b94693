use crate::engine::{
    grammar::VARIABLE_NAME,
    lexer::{Token, TokenKind},
};

/// Renders a token list in canonical form: every token except the end
/// marker, separated by single spaces.
///
/// Numbers are printed through `f64`'s `Display`, so literals that denote the
/// same value (`1.50`, `15e-1`) print the same. The result is meant for
/// display and comparison, not for feeding back into the parser.
///
/// # Example
/// ```
/// use plotexpr::engine::{lexer::tokenize, printer::to_canonical_string};
///
/// let tokens = tokenize("  2.50*sin(x)+pi").unwrap();
/// assert_eq!(to_canonical_string(&tokens), "2.5 * sin ( x ) + pi");
/// ```
#[must_use]
pub fn to_canonical_string(tokens: &[Token]) -> String {
    let mut out = String::new();

    for token in tokens {
        if !out.is_empty() && token.kind != TokenKind::End {
            out.push(' ');
        }
        match token.kind {
            TokenKind::Number(value) => out.push_str(&value.to_string()),
            TokenKind::Variable => out.push_str(VARIABLE_NAME),
            TokenKind::Keyword(keyword) => out.push_str(keyword.name()),
            TokenKind::Symbol(symbol) => out.push(symbol.as_char()),
            TokenKind::End => {},
        }
    }

    out
}
