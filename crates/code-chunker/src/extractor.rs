use crate::error::{ChunkerError, Result};
use crate::language::Language;
use crate::profile::LanguageProfile;
use crate::registry::ProfileRegistry;
use crate::types::{ChunkRecord, Metadata};
use tree_sitter::{Node, Parser};

/// Nearest enclosing matched container, carried down the walk.
struct ParentInfo {
    name: Option<String>,
    parent_type: &'static str,
}

/// Generic chunk-extraction engine for one language.
///
/// Owns a tree-sitter parser and delegates every language-specific
/// decision to the [`LanguageProfile`]. Extraction is synchronous and
/// purely computational; separate extractors can run concurrently with
/// no coordination.
pub struct ChunkExtractor<'r> {
    parser: Parser,
    profile: &'r LanguageProfile,
    language: Language,
}

impl ChunkExtractor<'static> {
    /// Create an extractor backed by the process-wide profile registry.
    ///
    /// Fails here, not mid-traversal, when the language has no profile
    /// or its grammar cannot be loaded.
    pub fn new(language: Language) -> Result<Self> {
        Self::with_registry(language, ProfileRegistry::global())
    }
}

impl<'r> ChunkExtractor<'r> {
    /// Create an extractor using an explicit registry
    pub fn with_registry(language: Language, registry: &'r ProfileRegistry) -> Result<Self> {
        let profile = registry
            .profile(language)
            .ok_or_else(|| ChunkerError::unsupported_language(language.as_str()))?;

        let ts_language = language.tree_sitter_language()?;
        let mut parser = Parser::new();
        parser
            .set_language(&ts_language)
            .map_err(|e| ChunkerError::tree_sitter(format!("Failed to set language: {e}")))?;

        Ok(Self {
            parser,
            profile,
            language,
        })
    }

    /// Language this extractor was built for
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Parse `source` and extract its chunks in document order.
    ///
    /// Container chunks precede their nested chunks, siblings come out
    /// left to right. If no boundary matches and the source is not
    /// blank, a single whole-file `module` chunk is emitted instead.
    pub fn chunk(&mut self, source: &str) -> Result<Vec<ChunkRecord>> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ChunkerError::parse("Failed to parse source code"))?;

        let mut chunks = Vec::new();
        self.traverse(tree.root_node(), source, None, &mut chunks);

        if chunks.is_empty() && !source.trim().is_empty() {
            chunks.push(self.module_fallback(source));
        }

        Ok(chunks)
    }

    /// Depth-first pre-order walk. Non-boundary nodes are transparent;
    /// boundary nodes emit a chunk, and container kinds keep descending
    /// with updated parent info.
    fn traverse(
        &self,
        node: Node<'_>,
        source: &str,
        parent: Option<&ParentInfo>,
        chunks: &mut Vec<ChunkRecord>,
    ) {
        if !self.profile.is_boundary(node, source.as_bytes()) {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                self.traverse(child, source, parent, chunks);
            }
            return;
        }

        // Tree-sitter rows are 0-based, the output contract is 1-based.
        let start_line = node.start_position().row + 1;
        let end_line = node.end_position().row + 1;

        // Error-recovered trees can hand back a span that is not a char
        // boundary; the chunk is dropped, its siblings are not.
        let Some(content) = source.get(node.start_byte()..node.end_byte()) else {
            log::warn!(
                "dropping {} chunk at lines {start_line}-{end_line}: byte span is not valid UTF-8",
                node.kind()
            );
            return;
        };

        let mut metadata = self.profile.metadata(node, source.as_bytes());
        if let Some(parent) = parent {
            // Profile-extracted fields win over inherited linkage.
            if let Some(name) = &parent.name {
                metadata
                    .entry("parent_name".to_string())
                    .or_insert_with(|| name.clone());
            }
            metadata
                .entry("parent_type".to_string())
                .or_insert_with(|| parent.parent_type.to_string());
        }

        let container_type = self.profile.container_type(node.kind());
        let name = metadata.get("name").cloned();

        chunks.push(ChunkRecord::new(
            content.to_string(),
            start_line,
            end_line,
            node.kind().to_string(),
            self.language.as_str().to_string(),
            metadata,
        ));

        if let Some(parent_type) = container_type {
            let info = ParentInfo { name, parent_type };
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                self.traverse(child, source, Some(&info), chunks);
            }
        }
    }

    /// Whole-file fallback for sources with no boundary match.
    /// Line count matches `split('\n')`, so a trailing newline counts.
    fn module_fallback(&self, source: &str) -> ChunkRecord {
        let mut metadata = Metadata::new();
        metadata.insert("type".to_string(), "module".to_string());

        ChunkRecord::new(
            source.to_string(),
            1,
            source.split('\n').count(),
            "module".to_string(),
            self.language.as_str().to_string(),
            metadata,
        )
    }
}

/// Convenience: one-shot extraction for a single source string
pub fn chunk_source(source: &str, language: Language) -> Result<Vec<ChunkRecord>> {
    let mut extractor = ChunkExtractor::new(language)?;
    extractor.chunk(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rust_functions_and_struct() {
        let code = r#"
fn main() {
    println!("Hello");
}

struct Point {
    x: i32,
    y: i32,
}
"#;
        let chunks = chunk_source(code, Language::Rust).unwrap();
        assert_eq!(chunks.len(), 2);

        assert_eq!(chunks[0].node_kind, "function_item");
        assert_eq!(chunks[0].name(), Some("main"));
        assert_eq!(chunks[1].node_kind, "struct_item");
        assert_eq!(chunks[1].name(), Some("Point"));

        for chunk in &chunks {
            assert!(chunk.start_line >= 1);
            assert!(chunk.start_line <= chunk.end_line);
            assert!(chunk.end_line <= code.split('\n').count());
            assert!(code.contains(&chunk.content));
            assert!(chunk.parent_name().is_none());
        }
    }

    #[test]
    fn test_content_matches_byte_span() {
        let code = "fn tiny() -> u8 { 42 }\n";
        let chunks = chunk_source(code, Language::Rust).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "fn tiny() -> u8 { 42 }");
        assert_eq!(chunks[0].start_line, 1);
        assert_eq!(chunks[0].end_line, 1);
    }

    #[test]
    fn test_empty_source_yields_no_chunks() {
        assert!(chunk_source("", Language::Rust).unwrap().is_empty());
        assert!(chunk_source("  \n\t\n", Language::Python).unwrap().is_empty());
    }

    #[test]
    fn test_module_fallback_without_boundaries() {
        let code = "package main\n\nimport \"fmt\"\n";
        let chunks = chunk_source(code, Language::Go).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].node_kind, "module");
        assert_eq!(chunks[0].start_line, 1);
        assert_eq!(chunks[0].end_line, code.split('\n').count());
        assert_eq!(chunks[0].content, code);
        assert_eq!(chunks[0].metadata.get("type").map(String::as_str), Some("module"));
    }

    #[test]
    fn test_deterministic_output() {
        let code = "class A:\n    def m(self):\n        pass\n";
        let first = chunk_source(code, Language::Python).unwrap();
        let second = chunk_source(code, Language::Python).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_syntax_still_extracts() {
        // Error-recovered tree: the valid function is still found.
        let code = "fn ok() {}\n\nfn broken( {{{\n";
        let chunks = chunk_source(code, Language::Rust).unwrap();
        assert!(chunks.iter().any(|c| c.name() == Some("ok")));
    }

    #[test]
    fn test_unsupported_language_fails_at_construction() {
        let result = ChunkExtractor::new(Language::Unknown);
        assert!(matches!(result, Err(ChunkerError::UnsupportedLanguage(_))));
    }

    #[test]
    fn test_extractor_is_reusable() {
        let mut extractor = ChunkExtractor::new(Language::Rust).unwrap();
        let a = extractor.chunk("fn a() {}\n").unwrap();
        let b = extractor.chunk("fn b() {}\n").unwrap();
        assert_eq!(a[0].name(), Some("a"));
        assert_eq!(b[0].name(), Some("b"));
    }

    #[test]
    fn test_profile_metadata_wins_over_parent_linkage() {
        use crate::profile::{child_text, BoundaryRule, Container};

        // A profile whose extractor claims the linkage keys for itself;
        // inherited container linkage must not overwrite them.
        fn claim_linkage(node: Node<'_>, source: &[u8]) -> Metadata {
            let mut metadata = Metadata::new();
            if let Some(name) = child_text(node, &["identifier"], source) {
                metadata.insert("name".to_string(), name);
            }
            if node.kind() == "function_definition" {
                metadata.insert("parent_name".to_string(), "declared".to_string());
                metadata.insert("parent_type".to_string(), "declared_type".to_string());
            }
            metadata
        }

        static CONTAINERS: &[Container] = &[Container {
            kind: "class_definition",
            parent_type: "class",
        }];
        let profile = LanguageProfile::new(
            Language::Python,
            BoundaryRule::Kinds(&["function_definition", "class_definition"]),
            CONTAINERS,
            claim_linkage,
        );

        let ts_language = Language::Python.tree_sitter_language().unwrap();
        let mut parser = Parser::new();
        parser.set_language(&ts_language).unwrap();
        let mut extractor = ChunkExtractor {
            parser,
            profile: &profile,
            language: Language::Python,
        };

        let chunks = extractor
            .chunk("class C:\n    def m(self):\n        pass\n")
            .unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].name(), Some("C"));
        assert_eq!(chunks[1].parent_name(), Some("declared"));
        assert_eq!(
            chunks[1].metadata.get("parent_type").map(String::as_str),
            Some("declared_type")
        );
    }

    #[test]
    fn test_with_registry_injection() {
        let registry = ProfileRegistry::new();
        let mut extractor =
            ChunkExtractor::with_registry(Language::Python, &registry).unwrap();
        let chunks = extractor.chunk("def f():\n    pass\n").unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].name(), Some("f"));
    }
}
