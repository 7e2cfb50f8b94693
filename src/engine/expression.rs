use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::{
    ast::Node,
    engine::{
        evaluator::evaluate,
        lexer::{Token, tokenize},
        parser::core::parse,
        printer::to_canonical_string,
    },
    error::ParseError,
};

/// A parsed formula, ready to be evaluated any number of times.
///
/// An `Expression` owns the token list it was parsed from and the tree built
/// from it; both are created together and never change. Two expressions are
/// equal when their trees are, regardless of spacing or of how literals were
/// spelled.
///
/// The type is plain data, so a shared reference can be evaluated from
/// several threads at once.
#[derive(Debug, Clone)]
pub struct Expression {
    tokens: Vec<Token>,
    tree:   Node,
}

/// Parses a formula in the free variable `x`.
///
/// # Errors
/// Returns the first lexical or syntax error, with the zero-based character
/// offset of the token that caused it.
///
/// # Example
/// ```
/// use plotexpr::parse_expression;
///
/// let expr = parse_expression("2 + 3 * x").unwrap();
/// assert_eq!(expr.evaluate(4.0), 14.0);
///
/// let err = parse_expression("(2+3").unwrap_err();
/// assert_eq!(err.offset(), 4);
/// ```
pub fn parse_expression(text: &str) -> Result<Expression, ParseError> {
    let tokens = tokenize(text)?;
    let tree = parse(&tokens)?;

    Ok(Expression { tokens, tree })
}

impl Expression {
    /// Evaluates the formula at `x`.
    ///
    /// Never fails: values outside a function's domain give `NaN`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        evaluate(&self.tree, x)
    }

    /// Returns the canonical, single-space-separated rendering of the tokens.
    ///
    /// ```
    /// use plotexpr::parse_expression;
    ///
    /// let expr = parse_expression("-x^2+1.0").unwrap();
    /// assert_eq!(expr.to_canonical_string(), "- x ^ 2 + 1");
    /// ```
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        to_canonical_string(&self.tokens)
    }

    /// Returns the expression tree.
    #[must_use]
    pub const fn tree(&self) -> &Node {
        &self.tree
    }

    /// Returns the tokens the expression was parsed from, including the end
    /// marker.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Evaluates the formula at `steps + 1` evenly spaced points from `from`
    /// to `to`, both included, yielding `(x, y)` pairs.
    ///
    /// With `steps == 0` only `from` is sampled.
    ///
    /// ```
    /// use plotexpr::parse_expression;
    ///
    /// let expr = parse_expression("2*x").unwrap();
    /// let points: Vec<_> = expr.sample(0.0, 1.0, 4).collect();
    ///
    /// assert_eq!(points, [(0.0, 0.0), (0.25, 0.5), (0.5, 1.0), (0.75, 1.5), (1.0, 2.0)]);
    /// ```
    pub fn sample(&self, from: f64, to: f64, steps: u32) -> impl Iterator<Item = (f64, f64)> + '_ {
        let width = to - from;
        (0..=steps).map(move |i| {
                       let x = if i == steps && steps > 0 {
                           to
                       } else {
                           f64::from(i).mul_add(width / f64::from(steps.max(1)), from)
                       };
                       (x, self.evaluate(x))
                   })
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl Eq for Expression {}

impl Hash for Expression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tree.hash(state);
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_expression(s)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}
