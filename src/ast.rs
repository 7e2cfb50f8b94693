use ordered_float::OrderedFloat;

/// A node of a finished expression tree.
///
/// Trees are built once by the parser and never mutated afterwards. Children
/// are owned, so a tree has no back edges and can be shared freely between
/// threads. Equality and hashing compare the shape of the tree and the values
/// of its leaves; constants are wrapped in [`OrderedFloat`] so that a tree can
/// be `Eq` and `Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// A numeric leaf, either a literal or a named constant such as `pi`.
    Constant(OrderedFloat<f64>),
    /// The free variable `x`.
    Variable,
    /// A prefix operation or named function applied to one operand.
    Unary {
        /// The operation to apply.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
    },
    /// An infix operation.
    Binary {
        /// The operation to apply.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Node {
    /// Creates a constant leaf.
    ///
    /// ## Example
    /// ```
    /// use plotexpr::ast::Node;
    ///
    /// let node = Node::constant(2.5);
    /// assert!(node.is_leaf());
    /// assert_eq!(node.to_string(), "2.5");
    /// ```
    #[must_use]
    pub const fn constant(value: f64) -> Self {
        Self::Constant(OrderedFloat(value))
    }

    /// Returns `true` for `Constant` and `Variable` nodes.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Constant(_) | Self::Variable)
    }

    /// Counts the nodes of the tree rooted at `self`.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Constant(_) | Self::Variable => 1,
            Self::Unary { operand, .. } => 1 + operand.size(),
            Self::Binary { left, right, .. } => 1 + left.size() + right.size(),
        }
    }

    /// Returns the height of the tree; a single leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Constant(_) | Self::Variable => 1,
            Self::Unary { operand, .. } => 1 + operand.depth(),
            Self::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Prints the tree fully parenthesized, which makes the grouping chosen by
/// the parser visible.
///
/// ```
/// use plotexpr::parse_expression;
///
/// let expr = parse_expression("2^3^2").unwrap();
/// assert_eq!(expr.tree().to_string(), "((2 ^ 3) ^ 2)");
/// ```
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Variable => write!(f, "x"),
            Self::Unary { op, operand } => match op {
                UnaryOperator::Plus | UnaryOperator::Minus => write!(f, "{op}{operand}"),
                _ => write!(f, "{op}({operand})"),
            },
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Represents an operation applied to a single operand.
///
/// `Plus` and `Minus` come from the `+`/`-` symbols in prefix position; every
/// other variant is spelled as a function keyword.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Prefix `+`.
    Plus,
    /// Prefix `-`.
    Minus,
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
    Asin,
    Acos,
    Atan,
    Acot,
    Asec,
    Acsc,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Exp,
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm.
    Lg,
    Sqrt,
    Ceil,
    Floor,
    /// Rounds to the nearest integer, ties to even.
    Round,
    Abs,
}

/// Represents an infix operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Truncating remainder (`%`), the sign follows the dividend.
    Remainder,
    /// IEEE-754 remainder (`\`), the quotient is rounded to nearest even.
    IeeeRemainder,
    /// Exponentiation (`^`)
    Power,
}

impl BinaryOperator {
    /// Returns the precedence tier; higher binds tighter.
    ///
    /// ```
    /// use plotexpr::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Power.precedence() > BinaryOperator::Multiply.precedence());
    /// assert_eq!(BinaryOperator::Add.precedence(), BinaryOperator::Subtract.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 0,
            Self::Multiply | Self::Divide | Self::Remainder | Self::IeeeRemainder => 1,
            Self::Power => 2,
        }
    }

    /// Returns the symbol the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Remainder => '%',
            Self::IeeeRemainder => '\\',
            Self::Power => '^',
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::engine::grammar::spelling(*self))
    }
}
