//! # plotexpr
//!
//! plotexpr is the expression engine of a function plotter written in Rust.
//! It turns a formula in one free variable `x` into an immutable tree that
//! can be evaluated thousands of times without re-parsing.
//!
//! ```
//! use plotexpr::parse_expression;
//!
//! let expr = parse_expression("sin(x)^2 + cos(x)^2").unwrap();
//! assert!((expr.evaluate(0.7) - 1.0).abs() < 1e-12);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed formulas.
///
/// This module declares the `Node` enum and the operator enums that make up
/// an expression tree. Trees are built by the parser and read by the
/// evaluator.
///
/// # Responsibilities
/// - Defines leaves (constants and the variable) and operation nodes.
/// - Provides structural equality and hashing over tree shape and values.
/// - Records operator precedence and spelling.
pub mod ast;
/// The engine: lexing, grammar tables, parsing, evaluation and printing.
///
/// Data flows one way through the engine: text becomes tokens, tokens become
/// a tree, and the tree is evaluated as often as needed.
pub mod engine;
/// Provides the error types for lexing and parsing.
///
/// Every error carries the zero-based character offset of the offending
/// token, so callers can place a caret under it.
///
/// # Responsibilities
/// - Defines lexical, syntax and internal error kinds.
/// - Unifies them in `ParseError` for the public entry point.
/// - Renders errors with a marker under the source text.
pub mod error;

pub use crate::{
    engine::expression::{Expression, parse_expression},
    error::ParseError,
};
