//! Cinder language vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings and metadata via the
//! registry tables instead of comparing raw strings all over the front end.
//!
//! ## Notes
//! - Registries are `const` tables: built once at compile time, shared read-only by every lexer/parser.
//! - Each table is ordered by its id enum so `info_for` is a plain index; the guardrail tests enforce this.
//!
//! ## Examples
//! ```rust
//! use cinder_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::as_str(KeywordId::While), "while");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
