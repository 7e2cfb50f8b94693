/// The evaluator module computes numeric results from expression trees.
///
/// The evaluator walks a finished tree, binds the free variable and applies
/// every operation with IEEE-754 semantics. It never fails and never
/// allocates, so it can run once per pixel column.
///
/// # Responsibilities
/// - Evaluates constants, the variable, unary and binary nodes.
/// - Implements the named functions, including those without a standard
///   library counterpart.
/// - Maps undefined results to `NaN` instead of reporting errors.
pub mod evaluator;
/// The expression module ties the phases together.
///
/// It defines [`Expression`](crate::engine::expression::Expression), which
/// owns the tokens and the tree of one parsed formula, and
/// [`parse_expression`](crate::engine::expression::parse_expression), the
/// entry point used by the rest of the application.
pub mod expression;
/// The grammar module holds the static tables of the formula language.
///
/// # Responsibilities
/// - Lists function keywords and named constants.
/// - Describes the operator symbols and what they mean in prefix and infix
///   position.
pub mod grammar;
/// The lexer module tokenizes formulas.
///
/// The lexer reads the raw text and produces tokens with their source
/// offsets: numbers, the variable, keywords, symbols and a final end marker.
///
/// # Responsibilities
/// - Classifies characters and rejects those outside the grammar.
/// - Converts numeric literals, reporting malformed ones.
/// - Resolves identifiers to the variable or a keyword.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// The parser makes a single pass over the tokens, attaching operands at an
/// active node and splicing each binary operator into the tree according to
/// its precedence.
///
/// # Responsibilities
/// - Enforces the alternation of operands and operations.
/// - Reports syntax errors with the offset of the offending token.
/// - Produces an owned tree with no parent links.
pub mod parser;
/// The printer module renders the canonical form of a formula.
pub mod printer;
