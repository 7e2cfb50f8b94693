use logos::Logos;

use crate::{
    engine::grammar::{Keyword, Symbol, VARIABLE_NAME, lookup_keyword},
    error::LexError,
};

/// Raw character classes recognized by the scanner.
///
/// The number class deliberately accepts any run of digits and dots, so
/// `1.2.3` scans as one candidate literal; the text is validated only when
/// the token is emitted. Identifiers are lowercase only.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+")]
enum Lexeme {
    /// Significand, optional exponent marker, optional sign, exponent digits.
    #[regex(r"[0-9.]+([eE][+-]?[0-9]*)?")]
    Number,
    /// The variable or a keyword.
    #[regex(r"[a-z]+")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `\`
    #[token("\\")]
    Backslash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Represents a lexical token of a formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// Zero-based character offset of the first character of the token.
    pub offset: usize,
}

/// The classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A numeric literal, already converted.
    Number(f64),
    /// The free variable `x`.
    Variable,
    /// A function name or named constant.
    Keyword(Keyword),
    /// An operator or parenthesis.
    Symbol(Symbol),
    /// Sentinel following the last real token.
    End,
}

impl Token {
    const fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// Splits a formula into tokens.
///
/// The returned list always ends with exactly one [`TokenKind::End`], placed
/// one past the last consumed character. Scanning stops at the first error.
///
/// All characters the grammar accepts are ASCII, and scanning stops at the
/// first character it rejects, so the byte offsets reported by the scanner
/// are also character offsets.
///
/// # Errors
/// - [`LexError::IllegalCharacter`] for characters outside every class.
/// - [`LexError::InvalidNumber`] when a number candidate does not convert.
/// - [`LexError::UnrecognizedToken`] for unknown identifiers.
///
/// # Example
/// ```
/// use plotexpr::{
///     engine::{
///         grammar::Symbol,
///         lexer::{TokenKind, tokenize},
///     },
///     error::LexError,
/// };
///
/// let tokens = tokenize("2*x").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number(2.0),
///             TokenKind::Symbol(Symbol::Star),
///             TokenKind::Variable,
///             TokenKind::End]);
/// assert_eq!(tokens[3].offset, 3);
///
/// assert_eq!(tokenize("1 + 1.2.3"),
///            Err(LexError::InvalidNumber { literal: "1.2.3".to_string(),
///                                          offset:  4, }));
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(text);

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();

        let Ok(lexeme) = lexeme else {
            let character = text[span.start..].chars().next().unwrap_or('\u{FFFD}');
            return Err(LexError::IllegalCharacter { character,
                                                    offset: span.start });
        };

        let kind = match lexeme {
            Lexeme::Number => TokenKind::Number(parse_number(slice, span.start)?),
            Lexeme::Identifier => classify_identifier(slice, span.start)?,
            Lexeme::Plus => TokenKind::Symbol(Symbol::Plus),
            Lexeme::Minus => TokenKind::Symbol(Symbol::Minus),
            Lexeme::Star => TokenKind::Symbol(Symbol::Star),
            Lexeme::Slash => TokenKind::Symbol(Symbol::Slash),
            Lexeme::Percent => TokenKind::Symbol(Symbol::Percent),
            Lexeme::Backslash => TokenKind::Symbol(Symbol::Backslash),
            Lexeme::Caret => TokenKind::Symbol(Symbol::Caret),
            Lexeme::LParen => TokenKind::Symbol(Symbol::LParen),
            Lexeme::RParen => TokenKind::Symbol(Symbol::RParen),
        };
        tokens.push(Token::new(kind, span.start));
    }

    tokens.push(Token::new(TokenKind::End, text.len()));

    Ok(tokens)
}

/// Converts the text of a number candidate.
///
/// Rust's float parser rejects several dots and a bare exponent marker, and
/// rounds to nearest-even at the edge of `f64` precision.
fn parse_number(literal: &str, offset: usize) -> Result<f64, LexError> {
    literal.parse()
           .map_err(|_| LexError::InvalidNumber { literal: literal.to_string(),
                                                  offset })
}

/// Resolves an identifier to the variable or a keyword.
fn classify_identifier(text: &str, offset: usize) -> Result<TokenKind, LexError> {
    if text == VARIABLE_NAME {
        return Ok(TokenKind::Variable);
    }
    lookup_keyword(text).map(TokenKind::Keyword)
                        .ok_or_else(|| LexError::UnrecognizedToken { token: text.to_string(),
                                                                     offset })
}
