use crate::{
    ast::Node,
    engine::evaluator::{binary::apply_binary, unary::apply_unary},
};

/// Evaluates a tree with the free variable bound to `x`.
///
/// The walk is pure: it reads the tree, allocates nothing and never fails.
/// Operations outside their domain produce `NaN` (or an infinity), following
/// IEEE-754 arithmetic, so a plotter can evaluate every pixel column without
/// checking for errors.
///
/// # Example
/// ```
/// use plotexpr::{engine::evaluator::evaluate, parse_expression};
///
/// let expr = parse_expression("x^2 - 1").unwrap();
///
/// assert_eq!(evaluate(expr.tree(), 3.0), 8.0);
/// assert_eq!(evaluate(expr.tree(), -2.0), 3.0);
///
/// let expr = parse_expression("ln x").unwrap();
/// assert!(evaluate(expr.tree(), -1.0).is_nan());
/// ```
#[must_use]
pub fn evaluate(tree: &Node, x: f64) -> f64 {
    match tree {
        Node::Constant(value) => value.into_inner(),
        Node::Variable => x,
        Node::Unary { op, operand } => apply_unary(*op, evaluate(operand, x)),
        Node::Binary { op, left, right } => {
            apply_binary(*op, evaluate(left, x), evaluate(right, x))
        },
    }
}
