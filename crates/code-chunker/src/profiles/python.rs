use crate::language::Language;
use crate::profile::{child_text, BoundaryRule, Container, LanguageProfile};
use crate::types::Metadata;
use tree_sitter::Node;

const BOUNDARY_KINDS: &[&str] = &["function_definition", "class_definition"];

const CONTAINERS: &[Container] = &[Container {
    kind: "class_definition",
    parent_type: "class",
}];

pub(crate) const fn profile() -> LanguageProfile {
    LanguageProfile::new(
        Language::Python,
        BoundaryRule::Kinds(BOUNDARY_KINDS),
        CONTAINERS,
        extract_metadata,
    )
}

fn extract_metadata(node: Node<'_>, source: &[u8]) -> Metadata {
    let mut metadata = Metadata::new();

    if let Some(name) = child_text(node, &["identifier"], source) {
        metadata.insert("name".to_string(), name);
    }

    if let Some(params) = child_text(node, &["parameters"], source) {
        metadata.insert("parameters".to_string(), params);
    }

    metadata
}
