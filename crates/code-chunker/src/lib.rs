//! # Code Chunker
//!
//! Tree-sitter based extraction of semantic code chunks (functions,
//! methods, classes, modules) for indexing and embedding retrieval.
//!
//! ## Architecture
//!
//! ```text
//! Source Code + Language
//!     │
//!     ├──> Tree-sitter Parsing → concrete syntax tree
//!     │
//!     ├──> LanguageProfile (per-language policy)
//!     │    ├─> Boundary test (node kinds, or keyword set for Elixir)
//!     │    ├─> Metadata extraction (name, parameters, ...)
//!     │    └─> Container classification (descend for nested defs)
//!     │
//!     └──> ChunkExtractor traversal
//!          ├─> Pre-order walk, parent linkage for nested chunks
//!          ├─> Whole-file fallback when nothing matches
//!          └─> Emit ChunkRecord[] in document order
//! ```
//!
//! ## Example
//!
//! ```rust
//! use code_chunker::{chunk_source, Language};
//!
//! let code = r#"
//! class Greeter:
//!     def greet(self, name):
//!         return f"hello {name}"
//! "#;
//!
//! let chunks = chunk_source(code, Language::Python).unwrap();
//! assert_eq!(chunks[0].name(), Some("Greeter"));
//! assert_eq!(chunks[1].parent_name(), Some("Greeter"));
//! ```

mod error;
mod extractor;
mod language;
mod profile;
mod profiles;
mod registry;
mod types;

pub use error::{ChunkerError, Result};
pub use extractor::{chunk_source, ChunkExtractor};
pub use language::Language;
pub use profile::{BoundaryRule, Container, LanguageProfile};
pub use registry::ProfileRegistry;
pub use types::{ChunkRecord, Metadata};
