use crate::language::Language;
use crate::profile::{child_text, node_text, BoundaryRule, Container, LanguageProfile};
use crate::types::Metadata;
use tree_sitter::Node;

const BOUNDARY_KINDS: &[&str] = &[
    "function_item",
    "struct_item",
    "enum_item",
    "trait_item",
    "impl_item",
    "mod_item",
    "const_item",
    "static_item",
];

// Impl blocks, traits and inline modules still hold nested definitions;
// everything else is a leaf.
const CONTAINERS: &[Container] = &[
    Container {
        kind: "impl_item",
        parent_type: "impl",
    },
    Container {
        kind: "trait_item",
        parent_type: "trait",
    },
    Container {
        kind: "mod_item",
        parent_type: "module",
    },
];

pub(crate) const fn profile() -> LanguageProfile {
    LanguageProfile::new(
        Language::Rust,
        BoundaryRule::Kinds(BOUNDARY_KINDS),
        CONTAINERS,
        extract_metadata,
    )
}

fn extract_metadata(node: Node<'_>, source: &[u8]) -> Metadata {
    let mut metadata = Metadata::new();

    let name = if node.kind() == "impl_item" {
        impl_target(node, source)
    } else {
        child_text(node, &["identifier", "type_identifier"], source)
    };
    if let Some(name) = name {
        metadata.insert("name".to_string(), name);
    }

    if let Some(vis) = child_text(node, &["visibility_modifier"], source) {
        metadata.insert("visibility".to_string(), vis);
    }

    metadata
}

/// Name of the type (or trait) an impl block targets.
/// `impl Foo`, `impl<T> Foo<T>` and `impl mod::Foo` all resolve to the
/// first type identifier found.
fn impl_target(node: Node<'_>, source: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "type_identifier" => {
                return node_text(child, source).map(str::to_string);
            }
            "generic_type" | "scoped_type_identifier" => {
                return child_text(child, &["type_identifier"], source);
            }
            _ => {}
        }
    }
    None
}
