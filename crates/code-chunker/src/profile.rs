use crate::language::Language;
use crate::types::Metadata;
use tree_sitter::Node;

/// Metadata extractor: inspects a boundary node (and its descendants)
/// and returns a key/value record describing it. Fields that do not
/// apply are omitted.
pub type MetadataFn = fn(Node<'_>, &[u8]) -> Metadata;

/// Boundary test shape for a language profile.
#[derive(Debug, Clone, Copy)]
pub enum BoundaryRule {
    /// Node kind is a member of a fixed set (most languages)
    Kinds(&'static [&'static str]),

    /// The grammar collapses all definitions into one call-like kind;
    /// the node's leading identifier child must match a closed keyword
    /// set (Elixir `defmodule`, `def`, ...)
    CallKeywords {
        call_kind: &'static str,
        keywords: &'static [&'static str],
    },
}

/// A boundary kind that is descended into after matching, to surface
/// nested definitions linked back to it.
#[derive(Debug, Clone, Copy)]
pub struct Container {
    /// Node kind that stays open for nested boundaries
    pub kind: &'static str,
    /// `parent_type` recorded on nested chunks
    pub parent_type: &'static str,
}

/// Per-language chunking policy: boundary test, metadata extraction and
/// container classification.
///
/// Profiles are built once (see [`crate::registry::ProfileRegistry`])
/// and immutable thereafter; the traversal engine stays fully
/// language-agnostic by delegating every policy decision here.
pub struct LanguageProfile {
    language: Language,
    boundary: BoundaryRule,
    containers: &'static [Container],
    extract_metadata: MetadataFn,
}

impl LanguageProfile {
    pub(crate) const fn new(
        language: Language,
        boundary: BoundaryRule,
        containers: &'static [Container],
        extract_metadata: MetadataFn,
    ) -> Self {
        Self {
            language,
            boundary,
            containers,
            extract_metadata,
        }
    }

    /// Language this profile applies to
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Check whether `node` starts a chunk
    #[must_use]
    pub fn is_boundary(&self, node: Node<'_>, source: &[u8]) -> bool {
        match self.boundary {
            BoundaryRule::Kinds(kinds) => kinds.contains(&node.kind()),
            BoundaryRule::CallKeywords { call_kind, keywords } => {
                if node.kind() != call_kind {
                    return false;
                }
                // The first identifier child is the definition keyword.
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    if child.kind() == "identifier" {
                        return node_text(child, source)
                            .is_some_and(|text| keywords.contains(&text));
                    }
                }
                false
            }
        }
    }

    /// Parent type recorded on nested chunks if `kind` is a container,
    /// `None` for leaf boundaries
    #[must_use]
    pub fn container_type(&self, kind: &str) -> Option<&'static str> {
        self.containers
            .iter()
            .find(|c| c.kind == kind)
            .map(|c| c.parent_type)
    }

    /// Run the profile's metadata extractor on a boundary node
    #[must_use]
    pub fn metadata(&self, node: Node<'_>, source: &[u8]) -> Metadata {
        (self.extract_metadata)(node, source)
    }
}

impl std::fmt::Debug for LanguageProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("language", &self.language)
            .field("boundary", &self.boundary)
            .field("containers", &self.containers)
            .finish_non_exhaustive()
    }
}

/// Text of a node's byte span, if it is valid UTF-8
pub(crate) fn node_text<'a>(node: Node<'_>, source: &'a [u8]) -> Option<&'a str> {
    source
        .get(node.start_byte()..node.end_byte())
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
}

/// First child whose kind is one of `kinds`, searched in source order
pub(crate) fn find_child<'tree>(
    node: Node<'tree>,
    kinds: &[&str],
) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if kinds.contains(&child.kind()) {
            return Some(child);
        }
    }
    None
}

/// Text of the first child matching one of `kinds`
pub(crate) fn child_text(node: Node<'_>, kinds: &[&str], source: &[u8]) -> Option<String> {
    find_child(node, kinds).and_then(|child| node_text(child, source).map(str::to_string))
}
