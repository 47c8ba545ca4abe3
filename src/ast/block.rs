use crate::ast::naming::indexed_name;
use crate::ast::{AstNode, AstVisitor, Node};
use crate::utils::config::naming::BLOCK_LABEL;
use crate::utils::errors::{AstError, AstResult};

/// Ordered statement list. Statement order is preserved on output.
#[derive(Debug, PartialEq)]
pub struct Block {
    id: String,
    children: Vec<Node>,
}

impl Block {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn statements(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Id the next pushed child should take: `<block id>_<index>`.
    pub fn next_child_id(&self) -> String {
        indexed_name(&self.id, self.children.len())
    }

    pub fn push_child(&mut self, node: impl Into<Node>) -> &mut Node {
        self.children.push(node.into());
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn child(&self, index: usize) -> AstResult<&Node> {
        self.children.get(index).ok_or_else(|| AstError::NoSuchChild {
            node: self.id.clone(),
            index,
        })
    }

    pub fn child_mut(&mut self, index: usize) -> AstResult<&mut Node> {
        self.children.get_mut(index).ok_or_else(|| AstError::NoSuchChild {
            node: self.id.clone(),
            index,
        })
    }
}

impl AstNode for Block {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        BLOCK_LABEL
    }

    fn accept(&self, visitor: &mut dyn AstVisitor) -> AstResult<()> {
        visitor.visit_block(self)
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.children.iter().map(|c| c as &dyn AstNode).collect()
    }
}
