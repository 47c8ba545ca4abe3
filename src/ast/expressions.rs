use crate::ast::naming::slots;
use crate::ast::{AstNode, AstVisitor, Node};
use crate::utils::errors::{AstError, AstResult};

/// Moves `node` into an empty slot and hands back the attached child.
pub(crate) fn attach<'a, T>(
    slot: &'a mut Option<Box<T>>,
    owner: &str,
    name: &'static str,
    node: T,
) -> AstResult<&'a mut T> {
    if slot.is_some() {
        return Err(AstError::conflict(owner, name));
    }
    Ok(&mut **slot.insert(Box::new(node)))
}

#[derive(Debug, PartialEq)]
pub struct Unary {
    id: String,
    label: String,
    child: Option<Box<Node>>,
}

impl Unary {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            child: None,
        }
    }

    pub fn child(&self) -> Option<&Node> {
        self.child.as_deref()
    }

    pub fn child_mut(&mut self) -> Option<&mut Node> {
        self.child.as_deref_mut()
    }

    pub fn set_child(&mut self, node: impl Into<Node>) -> AstResult<&mut Node> {
        attach(&mut self.child, &self.id, slots::CHILD, node.into())
    }
}

impl AstNode for Unary {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn accept(&self, visitor: &mut dyn AstVisitor) -> AstResult<()> {
        visitor.visit_unary(self)
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.child().map(|c| c as &dyn AstNode).into_iter().collect()
    }
}

/// Two-operand node, also used for assignments and comparisons.
#[derive(Debug, PartialEq)]
pub struct Binary {
    id: String,
    label: String,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Binary {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            left: None,
            right: None,
        }
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut Node> {
        self.left.as_deref_mut()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn right_mut(&mut self) -> Option<&mut Node> {
        self.right.as_deref_mut()
    }

    pub fn set_left(&mut self, node: impl Into<Node>) -> AstResult<&mut Node> {
        attach(&mut self.left, &self.id, slots::LEFT, node.into())
    }

    pub fn set_right(&mut self, node: impl Into<Node>) -> AstResult<&mut Node> {
        attach(&mut self.right, &self.id, slots::RIGHT, node.into())
    }
}

impl AstNode for Binary {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn accept(&self, visitor: &mut dyn AstVisitor) -> AstResult<()> {
        visitor.visit_binary(self)
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        [self.left(), self.right()]
            .into_iter()
            .flatten()
            .map(|c| c as &dyn AstNode)
            .collect()
    }
}
