use std::borrow::Cow;

use tracing::{debug, trace};

use crate::ast::{AstNode, AstVisitor, Binary, Block, Conditional, Literal, Program, Unary};
use crate::utils::config::dot::{
    BUFFER_CAPACITY, EDGE_ARROW, EDGE_TERMINATOR, LEAF_SHAPE, LINE_PREFIX, POSTAMBLE, PREAMBLE,
};
use crate::utils::errors::AstResult;
use crate::utils::write_line;

/// Builds the DOT document into a private buffer that is only handed out
/// once the whole tree has been written.
pub struct DotWriter {
    output: String,
    nodes: usize,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self::new()
    }
}

// Quotes and backslashes would otherwise end the label string early.
fn escape(text: &str) -> Cow<'_, str> {
    if text.contains(['"', '\\']) {
        Cow::Owned(text.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        Cow::Borrowed(text)
    }
}

impl DotWriter {
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(BUFFER_CAPACITY),
            nodes: 0,
        }
    }

    pub fn write_program(mut self, program: &Program) -> AstResult<String> {
        program.accept(&mut self)?;
        debug!(nodes = self.nodes, bytes = self.output.len(), "serialized tree to DOT");
        Ok(self.output)
    }

    fn label_line(&mut self, node: &dyn AstNode) -> AstResult<()> {
        trace!(id = node.id(), "emit node");
        self.nodes += 1;
        write_line(
            &mut self.output,
            format_args!("{}{} [label=\"{}\"]", LINE_PREFIX, node.id(), escape(node.label())),
        )
    }

    fn edge_line(&mut self, parent: &str, child: &str) -> AstResult<()> {
        write_line(
            &mut self.output,
            format_args!("{}{}{}{}{}", LINE_PREFIX, parent, EDGE_ARROW, child, EDGE_TERMINATOR),
        )
    }

    /// Emits the node's label, then every present child as an edge followed
    /// by that child's subtree.
    fn branch(&mut self, node: &dyn AstNode) -> AstResult<()> {
        self.label_line(node)?;
        for child in node.children() {
            self.edge_line(node.id(), child.id())?;
            child.accept(self)?;
        }
        Ok(())
    }
}

impl AstVisitor for DotWriter {
    fn visit_literal(&mut self, node: &Literal) -> AstResult<()> {
        trace!(id = node.id(), "emit leaf");
        self.nodes += 1;
        write_line(
            &mut self.output,
            format_args!(
                "{}{} [shape={},label=\"{}: {}\"]",
                LINE_PREFIX,
                node.id(),
                LEAF_SHAPE,
                escape(node.label()),
                escape(node.value())
            ),
        )
    }

    fn visit_unary(&mut self, node: &Unary) -> AstResult<()> {
        self.branch(node)
    }

    fn visit_binary(&mut self, node: &Binary) -> AstResult<()> {
        self.branch(node)
    }

    fn visit_block(&mut self, node: &Block) -> AstResult<()> {
        self.branch(node)
    }

    fn visit_conditional(&mut self, node: &Conditional) -> AstResult<()> {
        node.check_complete()?;
        self.branch(node)
    }

    fn visit_program(&mut self, program: &Program) -> AstResult<()> {
        let root = program.root()?;
        write_line(&mut self.output, format_args!("{}", PREAMBLE))?;
        root.accept(self)?;
        write_line(&mut self.output, format_args!("{}", POSTAMBLE))
    }
}
