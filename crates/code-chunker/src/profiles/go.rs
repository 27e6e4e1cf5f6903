use crate::language::Language;
use crate::profile::{child_text, BoundaryRule, LanguageProfile};
use crate::types::Metadata;
use tree_sitter::Node;

const BOUNDARY_KINDS: &[&str] = &["function_declaration", "method_declaration"];

pub(crate) const fn profile() -> LanguageProfile {
    LanguageProfile::new(
        Language::Go,
        BoundaryRule::Kinds(BOUNDARY_KINDS),
        // Go has no nesting construct that holds further definitions.
        &[],
        extract_metadata,
    )
}

fn extract_metadata(node: Node<'_>, source: &[u8]) -> Metadata {
    let mut metadata = Metadata::new();

    if let Some(name) = child_text(node, &["identifier", "field_identifier"], source) {
        metadata.insert("name".to_string(), name);
    }

    // In a method declaration the first parameter list is the receiver.
    if node.kind() == "method_declaration" {
        if let Some(receiver) = child_text(node, &["parameter_list"], source) {
            metadata.insert("receiver".to_string(), receiver);
        }
    }

    metadata
}
