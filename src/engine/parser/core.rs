use crate::{
    ast::Node,
    engine::{
        grammar::{Keyword, Symbol},
        lexer::{Token, TokenKind},
        parser::builder::{Cursor, NodeId, Shape, TreeBuilder, internal},
    },
    error::SyntaxError,
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// What the parser accepts next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// A value, a prefix operator, a function or `(`.
    Operand,
    /// A binary operator, `)` or the end of input.
    Operation,
}

/// Longest accepted path from the root of a tree to a leaf, and the deepest
/// accepted parenthesis nesting. Trees are walked recursively after parsing,
/// so both are bounded.
pub const MAX_DEPTH: usize = 1000;

/// Whether the level being parsed is enclosed in parentheses, and how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nesting {
    Outermost,
    Parenthesized(usize),
}

impl Nesting {
    /// The nesting of a group opened at this level by the `(` at `offset`.
    const fn enter(self, offset: usize) -> ParseResult<Self> {
        let depth = match self {
            Self::Outermost => 1,
            Self::Parenthesized(depth) => depth + 1,
        };
        if depth > MAX_DEPTH {
            return Err(SyntaxError::TooDeep { offset });
        }
        Ok(Self::Parenthesized(depth))
    }
}

/// Builds an expression tree from a token list in a single pass.
///
/// The list must end with [`TokenKind::End`], as produced by
/// [`crate::engine::lexer::tokenize`]. Operands are attached at an active
/// node; each binary operator is spliced into the tree at the position its
/// precedence dictates, so no operator stack is kept. Operators of equal
/// precedence associate to the left, including `^`.
///
/// # Errors
/// - [`SyntaxError::OperandExpected`] when a value is missing.
/// - [`SyntaxError::BinaryOperationExpected`] for adjacent operands.
/// - [`SyntaxError::UnexpectedClosingParen`] for an unmatched `)`.
/// - [`SyntaxError::ExpectedClosingParen`] when the input ends inside
///   parentheses.
/// - [`SyntaxError::TooDeep`] when parentheses nest, or the tree grows,
///   deeper than [`MAX_DEPTH`].
/// - [`SyntaxError::Internal`] for builder inconsistencies, including a token
///   list that does not end with exactly one end marker.
///
/// # Example
/// ```
/// use plotexpr::engine::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("2-3-4").unwrap();
/// let tree = parse(&tokens).unwrap();
/// assert_eq!(tree.to_string(), "((2 - 3) - 4)");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Node> {
    let (end_offset, body) = match tokens.split_last() {
        Some((Token { kind: TokenKind::End,
                      offset, },
              body)) => (*offset, body),
        last => {
            return Err(internal("token list does not end with an end marker",
                                last.map_or(0, |(t, _)| t.offset)));
        },
    };
    if let Some(stray) = body.iter().find(|t| t.kind == TokenKind::End) {
        return Err(internal("tokens after end marker", stray.offset));
    }

    let mut builder = TreeBuilder::default();
    let mut stream = tokens.iter();
    let root = parse_level(&mut builder, &mut stream, Nesting::Outermost, end_offset)?;
    builder.check_depth(root, MAX_DEPTH)?;
    let tree = builder.finish(root, end_offset)?;

    tracing::debug!(tokens = tokens.len(), nodes = builder.len(), "parsed expression");

    Ok(tree)
}

/// Parses one nesting level: the whole input, or the inside of one pair of
/// parentheses. Returns the root of the level once its terminator (end of
/// input or `)`) has been consumed.
fn parse_level<'a, I>(builder: &mut TreeBuilder,
                      tokens: &mut I,
                      nesting: Nesting,
                      end_offset: usize)
                      -> ParseResult<NodeId>
    where I: Iterator<Item = &'a Token>
{
    let mut cursor = Cursor::default();
    let mut state = State::Operand;

    loop {
        let token = tokens.next()
                          .ok_or_else(|| internal("read past the end marker", end_offset))?;
        let offset = token.offset;

        state = match state {
            State::Operand => operand(builder, &mut cursor, tokens, token, nesting, end_offset)?,
            State::Operation => match token.kind {
                TokenKind::Number(_)
                | TokenKind::Variable
                | TokenKind::Keyword(_)
                | TokenKind::Symbol(Symbol::LParen) => {
                    return Err(SyntaxError::BinaryOperationExpected { offset });
                },
                TokenKind::Symbol(Symbol::RParen) => match nesting {
                    Nesting::Parenthesized(_) => return level_root(&cursor, offset),
                    Nesting::Outermost => {
                        return Err(SyntaxError::UnexpectedClosingParen { offset });
                    },
                },
                TokenKind::Symbol(symbol) => {
                    let op = symbol.binary_operator()
                                   .ok_or_else(|| internal("symbol is not a binary operator",
                                                           offset))?;
                    builder.splice(&mut cursor, op, offset)?;
                    State::Operand
                },
                TokenKind::End => match nesting {
                    Nesting::Outermost => return level_root(&cursor, offset),
                    Nesting::Parenthesized(_) => {
                        return Err(SyntaxError::ExpectedClosingParen { offset });
                    },
                },
            },
        };
    }
}

/// Handles one token while an operand is expected and returns the next
/// state.
///
/// Leaves switch to [`State::Operation`]. Unary operators keep the parser in
/// [`State::Operand`], so prefixes and functions chain (`--x`,
/// `sin cos x`). A `(` parses a whole nested level and attaches its root as
/// if it were a leaf.
fn operand<'a, I>(builder: &mut TreeBuilder,
                  cursor: &mut Cursor,
                  tokens: &mut I,
                  token: &Token,
                  nesting: Nesting,
                  end_offset: usize)
                  -> ParseResult<State>
    where I: Iterator<Item = &'a Token>
{
    let offset = token.offset;

    let (shape, next) = match token.kind {
        TokenKind::Number(value) => (Shape::Constant(value), State::Operation),
        TokenKind::Variable => (Shape::Variable, State::Operation),
        TokenKind::Keyword(Keyword::Constant(constant)) => {
            (Shape::Constant(constant.value()), State::Operation)
        },
        TokenKind::Keyword(Keyword::Function(op)) => (Shape::Unary(op), State::Operand),
        TokenKind::Symbol(Symbol::LParen) => {
            let group = parse_level(builder, tokens, nesting.enter(offset)?, end_offset)?;
            builder.attach(cursor, group, offset)?;
            return Ok(State::Operation);
        },
        TokenKind::Symbol(Symbol::RParen) if nesting == Nesting::Outermost => {
            return Err(SyntaxError::UnexpectedClosingParen { offset });
        },
        TokenKind::Symbol(symbol) => match symbol.prefix_operator() {
            Some(op) => (Shape::Unary(op), State::Operand),
            None => return Err(SyntaxError::OperandExpected { offset }),
        },
        TokenKind::End => return Err(SyntaxError::OperandExpected { offset }),
    };

    let node = builder.push(shape, offset);
    builder.attach(cursor, node, offset)?;

    Ok(next)
}

/// Returns the root of a completed level.
fn level_root(cursor: &Cursor, offset: usize) -> ParseResult<NodeId> {
    cursor.root
          .ok_or_else(|| internal("completed level has no root", offset))
}
