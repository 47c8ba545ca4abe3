// Abstract Syntax Tree definitions for the toy imperative language.
// This module contains the node variants, the owning program container
// and the visitor trait used to walk them.

mod traits;
pub use traits::{AstNode, AstVisitor};

// AST node modules
mod node;
mod literals;
mod expressions;
mod block;
mod statements;
mod program;
mod analysis;
pub mod naming;

pub use node::{Node, NodeKind};
pub use literals::Literal;
pub use expressions::{Binary, Unary};
pub use block::Block;
pub use statements::Conditional;
pub use program::Program;
pub use analysis::{IdentifierCheck, NodeCounter, NodeStats};
