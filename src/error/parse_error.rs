use crate::error::{LexError, SyntaxError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every error [`crate::parse_expression`] can return.
pub enum ParseError {
    /// The formula could not be split into tokens.
    Lex(LexError),
    /// The tokens do not form an expression.
    Syntax(SyntaxError),
}

/// Coarse classification of a [`ParseError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Bad characters, literals or identifiers.
    Lexical,
    /// Misplaced operands, operators or parentheses.
    Syntax,
    /// A parser defect; the formula itself may be fine.
    Internal,
}

impl ParseError {
    /// Returns the zero-based character offset of the offending token.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Lex(e) => e.offset(),
            Self::Syntax(e) => e.offset(),
        }
    }

    /// Returns the category of the error.
    ///
    /// ```
    /// use plotexpr::{error::ErrorCategory, parse_expression};
    ///
    /// let err = parse_expression("2 $ 3").unwrap_err();
    /// assert_eq!(err.category(), ErrorCategory::Lexical);
    ///
    /// let err = parse_expression("2 3").unwrap_err();
    /// assert_eq!(err.category(), ErrorCategory::Syntax);
    /// ```
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Lex(_) => ErrorCategory::Lexical,
            Self::Syntax(e) if e.is_internal() => ErrorCategory::Internal,
            Self::Syntax(_) => ErrorCategory::Syntax,
        }
    }

    /// Renders `source` with a `^` marker under the error offset, followed by
    /// the error message.
    ///
    /// Tabs before the offset are kept so the marker lines up in a terminal.
    ///
    /// ```
    /// use plotexpr::parse_expression;
    ///
    /// let source = "2 ++";
    /// let err = parse_expression(source).unwrap_err();
    ///
    /// assert_eq!(err.show(source), "2 ++\n    ^\nError at offset 4: Operand expected.");
    /// ```
    #[must_use]
    pub fn show(&self, source: &str) -> String {
        let offset = self.offset();
        let mut out = String::with_capacity(2 * source.len() + 48);

        out.push_str(source.trim_end_matches(['\r', '\n']));
        out.push('\n');
        out.extend(source.chars()
                         .chain(std::iter::repeat(' '))
                         .take(offset)
                         .map(|c| if c == '\t' { '\t' } else { ' ' }));
        out.push('^');
        out.push('\n');
        out.push_str(&self.to_string());

        out
    }
}

impl From<LexError> for ParseError {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(value: SyntaxError) -> Self {
        Self::Syntax(value)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
        }
    }
}
