use std::fmt;

use crate::ast::{AstNode, AstVisitor, Binary, Block, Conditional, Literal, Unary};
use crate::utils::errors::{AstError, AstResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Literal,
    Unary,
    Binary,
    Block,
    Conditional,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Literal => "Literal",
            NodeKind::Unary => "Unary",
            NodeKind::Binary => "Binary",
            NodeKind::Block => "Block",
            NodeKind::Conditional => "Conditional",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tree node. Children are owned by value, so dropping a node drops its
/// whole subtree.
#[derive(Debug, PartialEq)]
pub enum Node {
    Literal(Literal),
    Unary(Unary),
    Binary(Binary),
    Block(Block),
    Conditional(Conditional),
}

impl Node {
    pub fn new_literal(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Literal(Literal::new(id, label, value))
    }

    pub fn new_unary(id: impl Into<String>, label: impl Into<String>) -> Self {
        Node::Unary(Unary::new(id, label))
    }

    pub fn new_binary(id: impl Into<String>, label: impl Into<String>) -> Self {
        Node::Binary(Binary::new(id, label))
    }

    pub fn new_block(id: impl Into<String>) -> Self {
        Node::Block(Block::new(id))
    }

    pub fn new_conditional(id: impl Into<String>) -> Self {
        Node::Conditional(Conditional::new(id))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Literal(_) => NodeKind::Literal,
            Node::Unary(_) => NodeKind::Unary,
            Node::Binary(_) => NodeKind::Binary,
            Node::Block(_) => NodeKind::Block,
            Node::Conditional(_) => NodeKind::Conditional,
        }
    }

    fn mismatch(&self, expected: NodeKind) -> AstError {
        AstError::unexpected_variant(self.id(), expected.name(), self.kind().name())
    }

    pub fn as_literal(&self) -> AstResult<&Literal> {
        match self {
            Node::Literal(node) => Ok(node),
            _ => Err(self.mismatch(NodeKind::Literal)),
        }
    }

    pub fn as_unary(&self) -> AstResult<&Unary> {
        match self {
            Node::Unary(node) => Ok(node),
            _ => Err(self.mismatch(NodeKind::Unary)),
        }
    }

    pub fn as_unary_mut(&mut self) -> AstResult<&mut Unary> {
        match self {
            Node::Unary(node) => Ok(node),
            _ => Err(self.mismatch(NodeKind::Unary)),
        }
    }

    pub fn as_binary(&self) -> AstResult<&Binary> {
        match self {
            Node::Binary(node) => Ok(node),
            _ => Err(self.mismatch(NodeKind::Binary)),
        }
    }

    pub fn as_binary_mut(&mut self) -> AstResult<&mut Binary> {
        match self {
            Node::Binary(node) => Ok(node),
            _ => Err(self.mismatch(NodeKind::Binary)),
        }
    }

    pub fn as_block(&self) -> AstResult<&Block> {
        match self {
            Node::Block(node) => Ok(node),
            _ => Err(self.mismatch(NodeKind::Block)),
        }
    }

    pub fn as_block_mut(&mut self) -> AstResult<&mut Block> {
        match self {
            Node::Block(node) => Ok(node),
            _ => Err(self.mismatch(NodeKind::Block)),
        }
    }

    pub fn as_conditional(&self) -> AstResult<&Conditional> {
        match self {
            Node::Conditional(node) => Ok(node),
            _ => Err(self.mismatch(NodeKind::Conditional)),
        }
    }

    pub fn as_conditional_mut(&mut self) -> AstResult<&mut Conditional> {
        match self {
            Node::Conditional(node) => Ok(node),
            _ => Err(self.mismatch(NodeKind::Conditional)),
        }
    }

    fn inner(&self) -> &dyn AstNode {
        match self {
            Node::Literal(node) => node,
            Node::Unary(node) => node,
            Node::Binary(node) => node,
            Node::Block(node) => node,
            Node::Conditional(node) => node,
        }
    }
}

impl AstNode for Node {
    fn id(&self) -> &str {
        self.inner().id()
    }

    fn label(&self) -> &str {
        self.inner().label()
    }

    fn accept(&self, visitor: &mut dyn AstVisitor) -> AstResult<()> {
        self.inner().accept(visitor)
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.inner().children()
    }
}

impl From<Literal> for Node {
    fn from(node: Literal) -> Self {
        Node::Literal(node)
    }
}

impl From<Unary> for Node {
    fn from(node: Unary) -> Self {
        Node::Unary(node)
    }
}

impl From<Binary> for Node {
    fn from(node: Binary) -> Self {
        Node::Binary(node)
    }
}

impl From<Block> for Node {
    fn from(node: Block) -> Self {
        Node::Block(node)
    }
}

impl From<Conditional> for Node {
    fn from(node: Conditional) -> Self {
        Node::Conditional(node)
    }
}

impl TryFrom<Node> for Block {
    type Error = AstError;

    fn try_from(node: Node) -> AstResult<Self> {
        match node {
            Node::Block(block) => Ok(block),
            other => Err(other.mismatch(NodeKind::Block)),
        }
    }
}

impl TryFrom<Node> for Binary {
    type Error = AstError;

    fn try_from(node: Node) -> AstResult<Self> {
        match node {
            Node::Binary(binary) => Ok(binary),
            other => Err(other.mismatch(NodeKind::Binary)),
        }
    }
}
