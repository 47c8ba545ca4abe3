//! Identifier conventions used when building a tree.
//!
//! Every child is named after its parent: `parent_id + "_" + suffix`, where
//! the suffix is a slot name or the child's index inside a block. Ids built
//! this way are unique across the tree and valid DOT identifiers as long as
//! every suffix is alphanumeric.

use crate::utils::config::naming::SEPARATOR;

/// Suffixes for the named child slots.
pub mod slots {
    pub const CHILD: &str = "child";
    pub const LEFT: &str = "left";
    pub const RIGHT: &str = "right";
    pub const CONDITION: &str = "cond";
    pub const THEN: &str = "if";
    pub const ELIF: &str = "elif";
    pub const ELSE: &str = "else";
    pub const ROOT: &str = "root";
}

pub fn make_name(parent: &str, suffix: &str) -> String {
    let mut name = String::with_capacity(parent.len() + SEPARATOR.len() + suffix.len());
    name.push_str(parent);
    name.push_str(SEPARATOR);
    name.push_str(suffix);
    name
}

/// Name for the `index`-th child of a block.
pub fn indexed_name(parent: &str, index: usize) -> String {
    make_name(parent, &index.to_string())
}
