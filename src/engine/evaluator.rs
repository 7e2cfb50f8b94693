/// Tree walk.
///
/// Contains the recursive evaluation of a finished tree at a given value of
/// the free variable.
pub mod core;

/// Unary operation formulas.
///
/// Implements the prefix signs and every named function, including the
/// reciprocal trigonometric and the hyperbolic families.
pub mod unary;

/// Binary operation formulas.
///
/// Implements the arithmetic operators, both remainders and power.
pub mod binary;

pub use self::core::evaluate;
