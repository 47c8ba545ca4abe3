use std::io;

use tracing::debug;

use crate::ast::naming::slots;
use crate::ast::{AstVisitor, Block, IdentifierCheck, Node, NodeCounter, NodeStats};
use crate::dot::DotWriter;
use crate::utils::config::naming::ROOT_ID;
use crate::utils::errors::{AstError, AstResult};

const PROGRAM_ID: &str = "program";

/// Owns the root of a tree. Dropping the program drops every node.
#[derive(Debug, PartialEq)]
pub struct Program {
    root: Option<Node>,
}

impl Program {
    pub fn from_root(root: impl Into<Node>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn root(&self) -> AstResult<&Node> {
        self.root
            .as_ref()
            .ok_or_else(|| AstError::malformed(PROGRAM_ID, slots::ROOT))
    }

    pub fn root_mut(&mut self) -> AstResult<&mut Node> {
        self.root
            .as_mut()
            .ok_or_else(|| AstError::malformed(PROGRAM_ID, slots::ROOT))
    }

    /// Releases the root; the program is empty afterwards.
    pub fn take_root(&mut self) -> Option<Node> {
        self.root.take()
    }

    pub fn accept(&self, visitor: &mut dyn AstVisitor) -> AstResult<()> {
        visitor.visit_program(self)
    }

    /// Renders the whole tree as a Graphviz `digraph`.
    pub fn serialize(&self) -> AstResult<String> {
        DotWriter::new().write_program(self)
    }

    /// Serializes first, so a malformed tree leaves `out` untouched.
    pub fn write_dot<W: io::Write>(&self, out: &mut W) -> AstResult<()> {
        let dot = self.serialize()?;
        out.write_all(dot.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    pub fn stats(&self) -> AstResult<NodeStats> {
        let mut counter = NodeCounter::new();
        self.accept(&mut counter)?;
        Ok(counter.stats())
    }

    /// Opt-in check that every id is unique and usable as a bare DOT
    /// identifier. `serialize` does not run it.
    pub fn check_identifiers(&self) -> AstResult<()> {
        let mut check = IdentifierCheck::new();
        self.accept(&mut check)?;
        debug!(ids = check.seen(), "identifier check passed");
        Ok(())
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::from_root(Block::new(ROOT_ID))
    }
}
