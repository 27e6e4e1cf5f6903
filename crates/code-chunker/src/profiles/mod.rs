//! Per-language chunking policies.
//!
//! Each module builds the [`LanguageProfile`](crate::profile::LanguageProfile)
//! for one language: its boundary node kinds (or keyword set for
//! value-based grammars), which of those kinds stay open for nested
//! definitions, and the metadata extractor.

pub(crate) mod elixir;
pub(crate) mod go;
pub(crate) mod javascript;
pub(crate) mod python;
pub(crate) mod rust;
pub(crate) mod typescript;
