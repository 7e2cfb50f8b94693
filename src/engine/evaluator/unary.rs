use crate::ast::UnaryOperator;

/// Applies a unary operator to an evaluated operand.
///
/// Functions without a direct `f64` method use these formulas:
/// - `cot v = 1 / tan v`, `sec v = 1 / cos v`, `csc v = 1 / sin v`
/// - `acot v = atan(1 / v)`, `asec v = acos(1 / v)`, `acsc v = asin(1 / v)`
/// - `sinh`, `cosh` and `tanh` from their exponential definitions
/// - `asinh v = ln(v + sqrt(v² + 1))`
/// - `acosh v = ln(v + sqrt(v² - 1))` for `v >= 1`, `NaN` otherwise
/// - `atanh v = ln((1 + v) / (1 - v)) / 2` for `-1 <= v <= 1`, `NaN`
///   otherwise
///
/// # Example
/// ```
/// use plotexpr::{ast::UnaryOperator, engine::evaluator::unary::apply_unary};
///
/// assert_eq!(apply_unary(UnaryOperator::Minus, 2.0), -2.0);
/// assert!((apply_unary(UnaryOperator::Lg, 1000.0) - 3.0).abs() < 1e-12);
/// assert_eq!(apply_unary(UnaryOperator::Round, 0.5), 0.0);
/// assert_eq!(apply_unary(UnaryOperator::Round, 2.5), 2.0);
/// assert_eq!(apply_unary(UnaryOperator::Round, 3.5), 4.0);
/// assert!(apply_unary(UnaryOperator::Acosh, 0.5).is_nan());
/// assert!(apply_unary(UnaryOperator::Sqrt, -1.0).is_nan());
/// ```
#[must_use]
pub fn apply_unary(op: UnaryOperator, v: f64) -> f64 {
    match op {
        UnaryOperator::Plus => v,
        UnaryOperator::Minus => -v,
        UnaryOperator::Sin => v.sin(),
        UnaryOperator::Cos => v.cos(),
        UnaryOperator::Tan => v.tan(),
        UnaryOperator::Cot => v.tan().recip(),
        UnaryOperator::Sec => v.cos().recip(),
        UnaryOperator::Csc => v.sin().recip(),
        UnaryOperator::Asin => v.asin(),
        UnaryOperator::Acos => v.acos(),
        UnaryOperator::Atan => v.atan(),
        UnaryOperator::Acot => v.recip().atan(),
        UnaryOperator::Asec => v.recip().acos(),
        UnaryOperator::Acsc => v.recip().asin(),
        UnaryOperator::Sinh => (v.exp() - (-v).exp()) / 2.0,
        UnaryOperator::Cosh => (v.exp() + (-v).exp()) / 2.0,
        UnaryOperator::Tanh => {
            let (up, down) = (v.exp(), (-v).exp());
            (up - down) / (up + down)
        },
        UnaryOperator::Asinh => (v + v.mul_add(v, 1.0).sqrt()).ln(),
        UnaryOperator::Acosh => acosh(v),
        UnaryOperator::Atanh => atanh(v),
        UnaryOperator::Exp => v.exp(),
        UnaryOperator::Ln => v.ln(),
        UnaryOperator::Lg => v.log10(),
        UnaryOperator::Sqrt => v.sqrt(),
        UnaryOperator::Ceil => v.ceil(),
        UnaryOperator::Floor => v.floor(),
        UnaryOperator::Round => v.round_ties_even(),
        UnaryOperator::Abs => v.abs(),
    }
}

fn acosh(v: f64) -> f64 {
    if v >= 1.0 {
        (v + v.mul_add(v, -1.0).sqrt()).ln()
    } else {
        f64::NAN
    }
}

fn atanh(v: f64) -> f64 {
    if (-1.0..=1.0).contains(&v) {
        0.5 * ((1.0 + v) / (1.0 - v)).ln()
    } else {
        f64::NAN
    }
}
