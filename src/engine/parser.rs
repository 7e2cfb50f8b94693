/// Parser entry point and state machine.
///
/// Walks the token list once, alternating between expecting an operand and
/// expecting an operation, and reports syntax errors at the offending token.
pub mod core;

/// Arena-backed tree builder.
///
/// Holds nodes under construction together with their parent links, attaches
/// operands at the active node, splices binary operators according to
/// precedence, and converts the result into an owned tree.
mod builder;
