#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a formula.
///
/// Every variant carries the zero-based character offset of the first
/// offending character.
pub enum LexError {
    /// A character that belongs to no character class of the grammar.
    IllegalCharacter {
        /// The rejected character.
        character: char,
        /// Offset of the character.
        offset:    usize,
    },
    /// Text lexed as a number that does not convert to a float, such as
    /// `1.2.3` or `4e`.
    InvalidNumber {
        /// The literal text.
        literal: String,
        /// Offset of the first character of the literal.
        offset:  usize,
    },
    /// An identifier that is neither the variable nor a keyword.
    UnrecognizedToken {
        /// The identifier text.
        token:  String,
        /// Offset of the first character of the identifier.
        offset: usize,
    },
}

impl LexError {
    /// Returns the offset the error points at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::IllegalCharacter { offset, .. }
            | Self::InvalidNumber { offset, .. }
            | Self::UnrecognizedToken { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, offset } => {
                write!(f, "Error at offset {offset}: Illegal character '{character}'.")
            },
            Self::InvalidNumber { literal, offset } => {
                write!(f, "Error at offset {offset}: Invalid number '{literal}'.")
            },
            Self::UnrecognizedToken { token, offset } => {
                write!(f, "Error at offset {offset}: Unrecognized token '{token}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
