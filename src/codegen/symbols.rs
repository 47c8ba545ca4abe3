use std::collections::BTreeSet;

use crate::utils::config::cpp::is_identifier;
use crate::utils::{AstError, AstResult};

/// Sorted set of program variables. Each one becomes a `double` in the
/// generated program and is printed once the program has run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSet {
    names: BTreeSet<String>,
}

impl SymbolSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> AstResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for name in names {
            set.insert(name)?;
        }
        Ok(set)
    }

    /// Returns `false` when the symbol was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> AstResult<bool> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(AstError::InvalidSymbol(name));
        }
        Ok(self.names.insert(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
