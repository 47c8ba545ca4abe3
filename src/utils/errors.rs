use std::fmt;
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AstError {
    // File and I/O errors
    #[error("File read error: {0}")]
    FileReadError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("fmt error: {0}")]
    FmtError(#[from] fmt::Error),

    // Tree construction errors
    #[error("Ownership conflict: slot '{slot}' of node '{node}' is already occupied")]
    OwnershipConflict { node: String, slot: &'static str },
    #[error("Node '{id}' is a {found} node, expected {expected}")]
    UnexpectedVariant {
        id: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("Node '{node}' has no child at index {index}")]
    NoSuchChild { node: String, index: usize },

    // Serialization errors
    #[error("Malformed tree: mandatory slot '{slot}' of node '{node}' is unset")]
    MalformedTree { node: String, slot: &'static str },

    // Identifier checks
    #[error("Duplicate node identifier '{id}'")]
    DuplicateIdentifier { id: String },
    #[error("Node identifier '{id}' is not a valid DOT identifier")]
    InvalidIdentifier { id: String },

    // Code generation errors
    #[error("Invalid symbol name '{0}'")]
    InvalidSymbol(String),
}

impl AstError {
    /// Create a malformed tree error for a mandatory slot
    pub fn malformed(node: impl Into<String>, slot: &'static str) -> Self {
        AstError::MalformedTree {
            node: node.into(),
            slot,
        }
    }

    /// Create an ownership conflict error for an occupied slot
    pub fn conflict(node: impl Into<String>, slot: &'static str) -> Self {
        AstError::OwnershipConflict {
            node: node.into(),
            slot,
        }
    }

    pub fn unexpected_variant(id: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        AstError::UnexpectedVariant {
            id: id.into(),
            expected,
            found,
        }
    }
}

// Type alias for Result with AstError
pub type AstResult<T> = Result<T, AstError>;
