use crate::language::Language;
use crate::profile::{child_text, BoundaryRule, Container, LanguageProfile};
use crate::types::Metadata;
use tree_sitter::Node;

// JavaScript's declaration kinds plus the TypeScript-only ones.
const BOUNDARY_KINDS: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "class_declaration",
    "abstract_class_declaration",
    "method_definition",
    "interface_declaration",
    "enum_declaration",
];

const CONTAINERS: &[Container] = &[
    Container {
        kind: "class_declaration",
        parent_type: "class",
    },
    Container {
        kind: "abstract_class_declaration",
        parent_type: "class",
    },
];

pub(crate) const fn profile() -> LanguageProfile {
    LanguageProfile::new(
        Language::TypeScript,
        BoundaryRule::Kinds(BOUNDARY_KINDS),
        CONTAINERS,
        extract_metadata,
    )
}

fn extract_metadata(node: Node<'_>, source: &[u8]) -> Metadata {
    let mut metadata = Metadata::new();

    // Interfaces and enums name themselves with a type identifier.
    if let Some(name) = child_text(
        node,
        &["identifier", "property_identifier", "type_identifier"],
        source,
    ) {
        metadata.insert("name".to_string(), name);
    }

    if let Some(params) = child_text(node, &["formal_parameters"], source) {
        metadata.insert("parameters".to_string(), params);
    }

    metadata
}
