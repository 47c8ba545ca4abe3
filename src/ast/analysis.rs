use std::collections::HashSet;

use crate::ast::{AstNode, AstVisitor, Binary, Block, Conditional, Literal, Program, Unary};
use crate::utils::config::naming::is_dot_identifier;
use crate::utils::errors::{AstError, AstResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub edges: usize,
    pub depth: usize,
}

/// Counts nodes, leaves and parent-child edges, and records the tree depth.
#[derive(Debug, Default)]
pub struct NodeCounter {
    stats: NodeStats,
    level: usize,
}

impl NodeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> NodeStats {
        self.stats
    }

    fn count(&mut self, node: &dyn AstNode) -> AstResult<()> {
        self.level += 1;
        self.stats.nodes += 1;
        self.stats.depth = self.stats.depth.max(self.level);
        let children = node.children();
        if children.is_empty() {
            self.stats.leaves += 1;
        }
        for child in children {
            self.stats.edges += 1;
            child.accept(self)?;
        }
        self.level -= 1;
        Ok(())
    }
}

impl AstVisitor for NodeCounter {
    fn visit_literal(&mut self, node: &Literal) -> AstResult<()> {
        self.count(node)
    }

    fn visit_unary(&mut self, node: &Unary) -> AstResult<()> {
        self.count(node)
    }

    fn visit_binary(&mut self, node: &Binary) -> AstResult<()> {
        self.count(node)
    }

    fn visit_block(&mut self, node: &Block) -> AstResult<()> {
        self.count(node)
    }

    fn visit_conditional(&mut self, node: &Conditional) -> AstResult<()> {
        self.count(node)
    }

    fn visit_program(&mut self, program: &Program) -> AstResult<()> {
        program.root()?.accept(self)
    }
}

/// Fails on the first repeated id or the first id that would need quoting
/// in DOT output.
#[derive(Debug, Default)]
pub struct IdentifierCheck {
    seen: HashSet<String>,
}

impl IdentifierCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self) -> usize {
        self.seen.len()
    }

    fn check(&mut self, node: &dyn AstNode) -> AstResult<()> {
        let id = node.id();
        if !is_dot_identifier(id) {
            return Err(AstError::InvalidIdentifier { id: id.to_string() });
        }
        if !self.seen.insert(id.to_string()) {
            return Err(AstError::DuplicateIdentifier { id: id.to_string() });
        }
        for child in node.children() {
            child.accept(self)?;
        }
        Ok(())
    }
}

impl AstVisitor for IdentifierCheck {
    fn visit_literal(&mut self, node: &Literal) -> AstResult<()> {
        self.check(node)
    }

    fn visit_unary(&mut self, node: &Unary) -> AstResult<()> {
        self.check(node)
    }

    fn visit_binary(&mut self, node: &Binary) -> AstResult<()> {
        self.check(node)
    }

    fn visit_block(&mut self, node: &Block) -> AstResult<()> {
        self.check(node)
    }

    fn visit_conditional(&mut self, node: &Conditional) -> AstResult<()> {
        self.check(node)
    }

    fn visit_program(&mut self, program: &Program) -> AstResult<()> {
        program.root()?.accept(self)
    }
}
