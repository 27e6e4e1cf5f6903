use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// String-keyed metadata attached to a chunk.
///
/// Always present on a record, empty at minimum. Populated by the
/// language profile; nested chunks additionally carry `parent_name` and
/// `parent_type` linking them to the enclosing container.
pub type Metadata = BTreeMap<String, String>;

/// One extracted fragment of source code with its location and metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkRecord {
    /// The exact source text spanned by the node's byte range
    pub content: String,

    /// Start line (1-indexed)
    pub start_line: usize,

    /// End line (1-indexed, inclusive)
    pub end_line: usize,

    /// Syntax-tree node kind that triggered extraction.
    /// Serialized as `type` for downstream consumers.
    #[serde(rename = "type")]
    pub node_kind: String,

    /// Language identifier the chunk was extracted under
    pub language: String,

    /// Profile-provided metadata plus parent linkage for nested chunks
    pub metadata: Metadata,
}

impl ChunkRecord {
    /// Create a new chunk record
    #[must_use]
    pub const fn new(
        content: String,
        start_line: usize,
        end_line: usize,
        node_kind: String,
        language: String,
        metadata: Metadata,
    ) -> Self {
        Self {
            content,
            start_line,
            end_line,
            node_kind,
            language,
            metadata,
        }
    }

    /// Get the number of lines in this chunk
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }

    /// Symbol name extracted by the profile, if any
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.metadata.get("name").map(String::as_str)
    }

    /// Name of the nearest enclosing container, if this chunk is nested
    #[must_use]
    pub fn parent_name(&self) -> Option<&str> {
        self.metadata.get("parent_name").map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ChunkRecord {
        ChunkRecord::new(
            "fn foo() {}".to_string(),
            10,
            12,
            "function_item".to_string(),
            "rust".to_string(),
            Metadata::new(),
        )
    }

    #[test]
    fn test_line_count() {
        assert_eq!(record().line_count(), 3);
    }

    #[test]
    fn test_serializes_node_kind_as_type() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["type"], "function_item");
        assert!(json.get("node_kind").is_none());
        assert_eq!(json["start_line"], 10);
        assert_eq!(json["end_line"], 12);
        assert_eq!(json["language"], "rust");
        assert!(json["metadata"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_roundtrip() {
        let mut rec = record();
        rec.metadata
            .insert("name".to_string(), "foo".to_string());
        let json = serde_json::to_string(&rec).unwrap();
        let back: ChunkRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
        assert_eq!(back.name(), Some("foo"));
    }
}
