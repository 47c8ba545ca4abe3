use crate::ast::expressions::attach;
use crate::ast::naming::slots;
use crate::ast::{AstNode, AstVisitor, Binary, Block, Node};
use crate::utils::config::naming::CONDITIONAL_LABEL;
use crate::utils::errors::{AstError, AstResult};

/// `if` statement. `condition` and `then_block` must be set before the tree
/// is serialized; `elif` and `else_block` are optional alternatives.
#[derive(Debug, PartialEq)]
pub struct Conditional {
    id: String,
    condition: Option<Box<Node>>,
    then_block: Option<Box<Block>>,
    elif: Option<Box<Binary>>,
    else_block: Option<Box<Block>>,
}

impl Conditional {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            condition: None,
            then_block: None,
            elif: None,
            else_block: None,
        }
    }

    pub fn condition(&self) -> Option<&Node> {
        self.condition.as_deref()
    }

    pub fn condition_mut(&mut self) -> Option<&mut Node> {
        self.condition.as_deref_mut()
    }

    pub fn then_block(&self) -> Option<&Block> {
        self.then_block.as_deref()
    }

    pub fn then_block_mut(&mut self) -> Option<&mut Block> {
        self.then_block.as_deref_mut()
    }

    pub fn elif(&self) -> Option<&Binary> {
        self.elif.as_deref()
    }

    pub fn elif_mut(&mut self) -> Option<&mut Binary> {
        self.elif.as_deref_mut()
    }

    pub fn else_block(&self) -> Option<&Block> {
        self.else_block.as_deref()
    }

    pub fn else_block_mut(&mut self) -> Option<&mut Block> {
        self.else_block.as_deref_mut()
    }

    pub fn set_condition(&mut self, node: impl Into<Node>) -> AstResult<&mut Node> {
        attach(&mut self.condition, &self.id, slots::CONDITION, node.into())
    }

    pub fn set_then(&mut self, block: Block) -> AstResult<&mut Block> {
        attach(&mut self.then_block, &self.id, slots::THEN, block)
    }

    pub fn set_elif(&mut self, elif: Binary) -> AstResult<&mut Binary> {
        attach(&mut self.elif, &self.id, slots::ELIF, elif)
    }

    pub fn set_else(&mut self, block: Block) -> AstResult<&mut Block> {
        attach(&mut self.else_block, &self.id, slots::ELSE, block)
    }

    /// Fails with `MalformedTree` when a mandatory slot is still unset.
    pub fn check_complete(&self) -> AstResult<()> {
        if self.condition.is_none() {
            return Err(AstError::malformed(&self.id, slots::CONDITION));
        }
        if self.then_block.is_none() {
            return Err(AstError::malformed(&self.id, slots::THEN));
        }
        Ok(())
    }
}

impl AstNode for Conditional {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        CONDITIONAL_LABEL
    }

    fn accept(&self, visitor: &mut dyn AstVisitor) -> AstResult<()> {
        visitor.visit_conditional(self)
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        let mut children: Vec<&dyn AstNode> = Vec::with_capacity(4);
        if let Some(condition) = self.condition() {
            children.push(condition);
        }
        if let Some(then_block) = self.then_block() {
            children.push(then_block);
        }
        if let Some(elif) = self.elif() {
            children.push(elif);
        }
        if let Some(else_block) = self.else_block() {
            children.push(else_block);
        }
        children
    }
}
