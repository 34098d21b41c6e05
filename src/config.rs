//! Front end configuration
//!
//! Where sources are read from and which primitive type names seed the parser's type table.

use std::path::PathBuf;

use cinder_core::lang::keywords;
use cinder_syntax::types::{DEFAULT_PRIMITIVES, TypeTable};
use thiserror::Error;

/// Largest source file read by default (1 MiB).
pub const DEFAULT_MAX_SOURCE_SIZE: u64 = 1024 * 1024;

/// Errors raised by [`FrontendConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one primitive type is required")]
    NoPrimitives,
    #[error("primitive type name '{0}' is not a valid identifier")]
    InvalidPrimitive(String),
    #[error("primitive type name '{0}' is a reserved word")]
    ReservedPrimitive(String),
    #[error("primitive type '{0}' is listed twice")]
    DuplicatePrimitive(String),
    #[error("maximum source size must be greater than zero")]
    ZeroMaxSourceSize,
}

/// Front end configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Directory source names are resolved against
    pub source_dir: PathBuf,
    /// Type names every parse starts with
    pub primitive_types: Vec<String>,
    /// Files larger than this many bytes are refused
    pub max_source_size: u64,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            primitive_types: DEFAULT_PRIMITIVES.iter().map(|s| s.to_string()).collect(),
            max_source_size: DEFAULT_MAX_SOURCE_SIZE,
        }
    }
}

impl FrontendConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source directory
    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    /// Replace the primitive type seed
    pub fn with_primitive_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primitive_types = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the maximum source size in bytes
    pub fn with_max_source_size(mut self, bytes: u64) -> Self {
        self.max_source_size = bytes;
        self
    }

    /// Check that the primitive seed is usable.
    ///
    /// Primitive names must be identifier-shaped, unique, and must not collide with a keyword or the `class` word:
    /// a primitive the lexer never emits as an identifier could never start a definition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.primitive_types.is_empty() {
            return Err(ConfigError::NoPrimitives);
        }
        if self.max_source_size == 0 {
            return Err(ConfigError::ZeroMaxSourceSize);
        }
        for (i, name) in self.primitive_types.iter().enumerate() {
            if !is_identifier(name) {
                return Err(ConfigError::InvalidPrimitive(name.clone()));
            }
            if keywords::from_str(name).is_some() || name == keywords::CLASS_WORD {
                return Err(ConfigError::ReservedPrimitive(name.clone()));
            }
            if self.primitive_types[..i].contains(name) {
                return Err(ConfigError::DuplicatePrimitive(name.clone()));
            }
        }
        Ok(())
    }

    /// Fresh type table seeded with the configured primitives.
    pub fn type_table(&self) -> TypeTable {
        TypeTable::with_primitives(self.primitive_types.iter().cloned())
    }
}

/// Same shape the lexer accepts for identifiers: an ASCII letter, then letters, digits or `_`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
    }
}
