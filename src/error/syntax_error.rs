#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building the expression tree.
///
/// Every variant carries the offset of the token that triggered it.
pub enum SyntaxError {
    /// A number, variable, constant, function or `(` was required.
    OperandExpected {
        /// Offset of the offending token.
        offset: usize,
    },
    /// Two operands appeared next to each other.
    BinaryOperationExpected {
        /// Offset of the offending token.
        offset: usize,
    },
    /// A `)` without a matching `(`.
    UnexpectedClosingParen {
        /// Offset of the `)`.
        offset: usize,
    },
    /// The input ended inside parentheses.
    ExpectedClosingParen {
        /// Offset of the end of input.
        offset: usize,
    },
    /// Parentheses, prefixes or operator chains nest deeper than the parser
    /// accepts.
    TooDeep {
        /// Offset of the first token past the limit.
        offset: usize,
    },
    /// The tree builder reached an inconsistent state. This is a defect in
    /// the parser, not in the formula.
    Internal {
        /// What went wrong.
        message: String,
        /// Offset of the token being processed.
        offset:  usize,
    },
}

impl SyntaxError {
    /// Returns the offset the error points at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::OperandExpected { offset }
            | Self::BinaryOperationExpected { offset }
            | Self::UnexpectedClosingParen { offset }
            | Self::ExpectedClosingParen { offset }
            | Self::TooDeep { offset }
            | Self::Internal { offset, .. } => *offset,
        }
    }

    /// Returns `true` for parser defects.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperandExpected { offset } => {
                write!(f, "Error at offset {offset}: Operand expected.")
            },
            Self::BinaryOperationExpected { offset } => {
                write!(f, "Error at offset {offset}: Binary operation expected.")
            },
            Self::UnexpectedClosingParen { offset } => {
                write!(f, "Error at offset {offset}: Unexpected closing parenthesis ')'.")
            },
            Self::ExpectedClosingParen { offset } => write!(f,
                                                            "Error at offset {offset}: Expected closing parenthesis ')' but none found."),
            Self::TooDeep { offset } => {
                write!(f, "Error at offset {offset}: Expression is nested too deeply.")
            },
            Self::Internal { message, offset } => {
                write!(f, "Error at offset {offset}: Internal parser error: {message}.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
