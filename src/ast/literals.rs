use crate::ast::{AstNode, AstVisitor};
use crate::utils::errors::AstResult;

/// Leaf node such as an identifier or an integer constant.
#[derive(Debug, PartialEq)]
pub struct Literal {
    id: String,
    label: String,
    value: String,
}

impl Literal {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl AstNode for Literal {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn accept(&self, visitor: &mut dyn AstVisitor) -> AstResult<()> {
        visitor.visit_literal(self)
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        Vec::new()
    }
}
