use crate::{
    ast::{BinaryOperator, Node, UnaryOperator},
    error::SyntaxError,
};

/// Index of a node in the builder's arena.
pub(in crate::engine::parser) type NodeId = usize;

/// The payload of a node under construction.
#[derive(Debug, Clone, Copy)]
pub(in crate::engine::parser) enum Shape {
    Constant(f64),
    Variable,
    Unary(UnaryOperator),
    Binary(BinaryOperator),
}

impl Shape {
    const fn arity(self) -> usize {
        match self {
            Self::Constant(_) | Self::Variable => 0,
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }
}

/// A node under construction. Parent links exist only here; they are
/// dropped when the arena is converted into an owned [`Node`] tree.
#[derive(Debug)]
struct Slot {
    shape:    Shape,
    offset:   usize,
    parent:   Option<NodeId>,
    children: [Option<NodeId>; 2],
}

/// Insertion state of one nesting level: the root of the (sub)expression
/// built so far and the active node new operands are attached to.
#[derive(Debug, Default)]
pub(in crate::engine::parser) struct Cursor {
    pub(in crate::engine::parser) root: Option<NodeId>,
    active:                             Option<NodeId>,
}

/// Arena in which the parser assembles a tree by attaching and splicing.
///
/// All nesting levels share one arena; a parenthesized group is built with
/// its own [`Cursor`] and later attached to the enclosing level like a leaf.
#[derive(Debug, Default)]
pub(in crate::engine::parser) struct TreeBuilder {
    nodes: Vec<Slot>,
}

/// Builds an internal error and reports it, since it indicates a parser
/// defect rather than a bad formula.
pub(in crate::engine::parser) fn internal(message: &str, offset: usize) -> SyntaxError {
    tracing::error!(offset, "internal parser error: {message}");
    SyntaxError::Internal { message: message.to_string(),
                            offset }
}

impl TreeBuilder {
    /// Number of nodes allocated so far.
    pub(in crate::engine::parser) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Allocates a detached node for the token at `offset`.
    pub(in crate::engine::parser) fn push(&mut self, shape: Shape, offset: usize) -> NodeId {
        self.nodes.push(Slot { shape,
                               offset,
                               parent: None,
                               children: [None, None] });
        self.nodes.len() - 1
    }

    /// Attaches `node` to the next free operand slot of the active node, or
    /// makes it the root of an empty level, and moves the cursor onto it.
    ///
    /// # Errors
    /// `SyntaxError::Internal` when the active node has no free slot, or the
    /// level already has a root but no active node.
    pub(in crate::engine::parser) fn attach(&mut self,
                                            cursor: &mut Cursor,
                                            node: NodeId,
                                            offset: usize)
                                            -> Result<(), SyntaxError> {
        match cursor.active {
            None if cursor.root.is_none() => cursor.root = Some(node),
            None => return Err(internal("no insertion point for operand", offset)),
            Some(active) => {
                let arity = self.nodes[active].shape.arity();
                let free = self.nodes[active].children[..arity].iter()
                                                               .position(Option::is_none)
                                                               .ok_or_else(|| {
                                                                   internal("no free operand slot",
                                                                            offset)
                                                               })?;
                self.nodes[active].children[free] = Some(node);
                self.nodes[node].parent = Some(active);
            },
        }
        cursor.active = Some(node);
        Ok(())
    }

    /// Inserts a binary node for `op` above the active node.
    ///
    /// Starting at the active node, the builder climbs parent links until the
    /// parent is a binary node of strictly lower precedence, or until it
    /// reaches the root of the level. The subtree found there becomes the
    /// left operand of the new node, which takes its place. Stopping at equal
    /// precedence is what makes every tier left-associative.
    ///
    /// # Errors
    /// `SyntaxError::Internal` when there is no active node or the parent does
    /// not reference the subtree being replaced.
    pub(in crate::engine::parser) fn splice(&mut self,
                                            cursor: &mut Cursor,
                                            op: BinaryOperator,
                                            offset: usize)
                                            -> Result<(), SyntaxError> {
        let mut current = cursor.active
                                .ok_or_else(|| internal("binary operation without left operand",
                                                        offset))?;
        while let Some(parent) = self.nodes[current].parent {
            if let Shape::Binary(parent_op) = self.nodes[parent].shape
               && parent_op.precedence() < op.precedence()
            {
                break;
            }
            current = parent;
        }

        let spliced = self.push(Shape::Binary(op), offset);
        let parent = self.nodes[current].parent;

        match parent {
            Some(parent) => {
                let slot = self.nodes[parent].children
                                             .iter()
                                             .position(|&child| child == Some(current))
                                             .ok_or_else(|| {
                                                 internal("parent does not own spliced subtree",
                                                          offset)
                                             })?;
                self.nodes[parent].children[slot] = Some(spliced);
            },
            None => cursor.root = Some(spliced),
        }

        self.nodes[spliced].parent = parent;
        self.nodes[spliced].children[0] = Some(current);
        self.nodes[current].parent = Some(spliced);
        cursor.active = Some(spliced);

        Ok(())
    }

    /// Walks the subtree at `root` without recursion and rejects it when a
    /// path from the root to a leaf has more than `limit` nodes.
    ///
    /// # Errors
    /// `SyntaxError::TooDeep` pointing at the token of the first node found
    /// past the limit.
    pub(in crate::engine::parser) fn check_depth(&self,
                                                 root: NodeId,
                                                 limit: usize)
                                                 -> Result<(), SyntaxError> {
        let mut pending = vec![(root, 1)];

        while let Some((id, depth)) = pending.pop() {
            let slot = &self.nodes[id];
            if depth > limit {
                return Err(SyntaxError::TooDeep { offset: slot.offset });
            }
            pending.extend(slot.children.iter().flatten().map(|&child| (child, depth + 1)));
        }

        Ok(())
    }

    /// Converts the subtree at `root` into an owned tree, discarding parent
    /// links. The recursion follows the tree, so callers check its depth
    /// first.
    ///
    /// # Errors
    /// `SyntaxError::Internal` when a node is missing an operand.
    pub(in crate::engine::parser) fn finish(&self,
                                            root: NodeId,
                                            offset: usize)
                                            -> Result<Node, SyntaxError> {
        let slot = &self.nodes[root];
        let child = |index: usize| -> Result<Box<Node>, SyntaxError> {
            let id = slot.children[index].ok_or_else(|| internal("operand missing", offset))?;
            Ok(Box::new(self.finish(id, offset)?))
        };

        Ok(match slot.shape {
            Shape::Constant(value) => Node::constant(value),
            Shape::Variable => Node::Variable,
            Shape::Unary(op) => Node::Unary { op,
                                              operand: child(0)? },
            Shape::Binary(op) => Node::Binary { op,
                                                left: child(0)?,
                                                right: child(1)? },
        })
    }
}
