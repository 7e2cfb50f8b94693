use crate::ast::{BinaryOperator, UnaryOperator};

/// Spelling of the single free variable.
pub const VARIABLE_NAME: &str = "x";

/// A reserved word: either a function applied to one operand or a named
/// constant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// A named function such as `sin`.
    Function(UnaryOperator),
    /// A named constant such as `pi`.
    Constant(Constant),
}

impl Keyword {
    /// Returns the spelling of the keyword.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Function(op) => spelling(op),
            Self::Constant(c) => c.name(),
        }
    }
}

/// Named constants, substituted by their value while parsing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Constant {
    /// Euler's number.
    E,
    /// The circle constant.
    Pi,
}

impl Constant {
    /// Returns the value the constant stands for.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::E => std::f64::consts::E,
            Self::Pi => std::f64::consts::PI,
        }
    }

    /// Returns the spelling of the constant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::E => "e",
            Self::Pi => "pi",
        }
    }
}

/// Single-character operator and punctuation symbols.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `\`
    Backslash,
    /// `^`
    Caret,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Symbol {
    /// Returns the character the symbol is written with.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
            Self::Percent => '%',
            Self::Backslash => '\\',
            Self::Caret => '^',
            Self::LParen => '(',
            Self::RParen => ')',
        }
    }

    /// Maps the symbol to the binary operator it denotes in infix position.
    ///
    /// ```
    /// use plotexpr::{ast::BinaryOperator, engine::grammar::Symbol};
    ///
    /// assert_eq!(Symbol::Backslash.binary_operator(), Some(BinaryOperator::IeeeRemainder));
    /// assert_eq!(Symbol::LParen.binary_operator(), None);
    /// ```
    #[must_use]
    pub const fn binary_operator(self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Add),
            Self::Minus => Some(BinaryOperator::Subtract),
            Self::Star => Some(BinaryOperator::Multiply),
            Self::Slash => Some(BinaryOperator::Divide),
            Self::Percent => Some(BinaryOperator::Remainder),
            Self::Backslash => Some(BinaryOperator::IeeeRemainder),
            Self::Caret => Some(BinaryOperator::Power),
            Self::LParen | Self::RParen => None,
        }
    }

    /// Maps the symbol to the unary operator it denotes in prefix position.
    /// Only `+` and `-` may be used as prefixes.
    #[must_use]
    pub const fn prefix_operator(self) -> Option<UnaryOperator> {
        match self {
            Self::Plus => Some(UnaryOperator::Plus),
            Self::Minus => Some(UnaryOperator::Minus),
            _ => None,
        }
    }
}

/// Declares the function keyword table.
///
/// The macro produces:
/// - `FUNCTION_TABLE` (static spelling-to-operator lookup),
/// - `FUNCTION_NAMES` (public list of function spellings),
/// - `spelling` (exhaustive operator-to-spelling match, so adding an operator
///   without a spelling does not compile).
macro_rules! function_keywords {
    (
        $(
            $name:literal => $op:ident
        ),* $(,)?
    ) => {
        static FUNCTION_TABLE: &[(&str, UnaryOperator)] = &[
            $(
                ($name, UnaryOperator::$op),
            )*
        ];
        /// Spellings of every function keyword.
        pub const FUNCTION_NAMES: &[&str] = &[
            $($name,)*
        ];
        /// Returns how a unary operator is written: its symbol for the
        /// prefixes `+` and `-`, its keyword for functions.
        ///
        /// ```
        /// use plotexpr::{ast::UnaryOperator, engine::grammar::spelling};
        ///
        /// assert_eq!(spelling(UnaryOperator::Minus), "-");
        /// assert_eq!(spelling(UnaryOperator::Atanh), "atanh");
        /// ```
        #[must_use]
        pub const fn spelling(op: UnaryOperator) -> &'static str {
            match op {
                UnaryOperator::Plus => "+",
                UnaryOperator::Minus => "-",
                $(
                    UnaryOperator::$op => $name,
                )*
            }
        }
    };
}

function_keywords! {
    "sin"   => Sin,
    "cos"   => Cos,
    "tan"   => Tan,
    "cot"   => Cot,
    "sec"   => Sec,
    "csc"   => Csc,
    "asin"  => Asin,
    "acos"  => Acos,
    "atan"  => Atan,
    "acot"  => Acot,
    "asec"  => Asec,
    "acsc"  => Acsc,
    "sinh"  => Sinh,
    "cosh"  => Cosh,
    "tanh"  => Tanh,
    "asinh" => Asinh,
    "acosh" => Acosh,
    "atanh" => Atanh,
    "exp"   => Exp,
    "ln"    => Ln,
    "lg"    => Lg,
    "sqrt"  => Sqrt,
    "ceil"  => Ceil,
    "floor" => Floor,
    "round" => Round,
    "abs"   => Abs,
}

static CONSTANT_TABLE: &[Constant] = &[Constant::E, Constant::Pi];

/// Resolves an identifier to a keyword.
///
/// Lookup is case-sensitive; the variable name is not a keyword.
///
/// ```
/// use plotexpr::{
///     ast::UnaryOperator,
///     engine::grammar::{Constant, Keyword, lookup_keyword},
/// };
///
/// assert_eq!(lookup_keyword("lg"), Some(Keyword::Function(UnaryOperator::Lg)));
/// assert_eq!(lookup_keyword("pi"), Some(Keyword::Constant(Constant::Pi)));
/// assert_eq!(lookup_keyword("Sin"), None);
/// assert_eq!(lookup_keyword("x"), None);
/// ```
#[must_use]
pub fn lookup_keyword(text: &str) -> Option<Keyword> {
    if let Some(&(_, op)) = FUNCTION_TABLE.iter().find(|(name, _)| *name == text) {
        return Some(Keyword::Function(op));
    }
    CONSTANT_TABLE.iter()
                  .find(|c| c.name() == text)
                  .map(|&c| Keyword::Constant(c))
}
