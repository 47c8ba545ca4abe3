//! Graphviz DOT output for a [`Program`](crate::ast::Program).
//!
//! The writer walks the tree once, depth first and pre-order. Each node
//! produces a label line; each present child produces an edge line that is
//! immediately followed by the child's own output:
//!
//! ```text
//! digraph G {
//! 	root [label="Block"]
//! 	root -> root_0;
//! 	root_0 [shape=box,label="Identifier: pi"]
//! }
//! ```

mod writer;

pub use writer::DotWriter;

use crate::ast::Program;
use crate::utils::errors::AstResult;

pub fn serialize(program: &Program) -> AstResult<String> {
    DotWriter::new().write_program(program)
}
