//! Type table: the parser's registry of known type names.
//!
//! The grammar is not context-free without this table. A statement whose first token names a known type is a
//! definition; anything else is an expression statement. The table is seeded with primitive names and grows by one
//! entry per class declaration. Entries are never removed.
//!
//! ## Notes
//! - A variable spelled like a type name is indistinguishable from the start of a definition. This is a known
//!   limitation of the greedy disambiguation, not something the table tries to fix.

use std::collections::HashSet;

/// Primitive type names every parse starts with unless a different seed is supplied.
pub const DEFAULT_PRIMITIVES: &[&str] = &["float", "void"];

/// Set of known type names for one parse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTable {
    names: HashSet<String>,
    primitives: HashSet<String>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    /// Create a table seeded with [`DEFAULT_PRIMITIVES`].
    pub fn new() -> Self {
        Self::with_primitives(DEFAULT_PRIMITIVES.iter().copied())
    }

    /// Create a table seeded with an explicit primitive set.
    pub fn with_primitives<I, S>(primitives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let primitives: HashSet<String> = primitives.into_iter().map(Into::into).collect();
        Self {
            names: primitives.clone(),
            primitives,
        }
    }

    /// Return `true` if `name` is a known type.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Return `true` if `name` was part of the primitive seed.
    pub fn is_primitive(&self, name: &str) -> bool {
        self.primitives.contains(name)
    }

    /// Register a type name. Idempotent; returns `true` if the name was new.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All known names, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
