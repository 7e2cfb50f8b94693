use crate::ast::BinaryOperator;

/// Applies a binary operator to two evaluated operands.
///
/// `%` truncates the quotient, so the result has the sign of the dividend;
/// `\` rounds the quotient to nearest even (IEEE-754 `remainder`).
///
/// # Example
/// ```
/// use plotexpr::{ast::BinaryOperator, engine::evaluator::binary::apply_binary};
///
/// assert_eq!(apply_binary(BinaryOperator::Remainder, -7.0, 3.0), -1.0);
/// assert_eq!(apply_binary(BinaryOperator::IeeeRemainder, 7.0, 3.0), 1.0);
/// assert_eq!(apply_binary(BinaryOperator::IeeeRemainder, 7.0, 2.0), -1.0);
/// assert!(apply_binary(BinaryOperator::IeeeRemainder, 1.0, 0.0).is_nan());
/// assert_eq!(apply_binary(BinaryOperator::Power, 2.0, 10.0), 1024.0);
/// assert!(apply_binary(BinaryOperator::Divide, 0.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Subtract => left - right,
        BinaryOperator::Multiply => left * right,
        BinaryOperator::Divide => left / right,
        BinaryOperator::Remainder => left % right,
        BinaryOperator::IeeeRemainder => libm::remainder(left, right),
        BinaryOperator::Power => left.powf(right),
    }
}
