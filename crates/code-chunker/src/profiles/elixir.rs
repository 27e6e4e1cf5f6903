use crate::language::Language;
use crate::profile::{child_text, find_child, node_text, BoundaryRule, Container, LanguageProfile};
use crate::types::Metadata;
use tree_sitter::Node;

/// Definition keywords that produce `call` nodes in the Elixir grammar.
/// A `call` whose leading identifier is anything else (a plain function
/// call) is not a boundary.
const DEF_KEYWORDS: &[&str] = &[
    "defmodule",
    "def",
    "defp",
    "defmacro",
    "defmacrop",
    "defimpl",
    "defprotocol",
    "defstruct",
    "defguard",
    "defguardp",
    "defdelegate",
    "defoverridable",
];

// Every matched definition stays open: defmodule bodies hold def/defp,
// and the grammar gives no cheaper way to tell them apart.
const CONTAINERS: &[Container] = &[Container {
    kind: "call",
    parent_type: "module",
}];

pub(crate) const fn profile() -> LanguageProfile {
    LanguageProfile::new(
        Language::Elixir,
        BoundaryRule::CallKeywords {
            call_kind: "call",
            keywords: DEF_KEYWORDS,
        },
        CONTAINERS,
        extract_metadata,
    )
}

fn extract_metadata(node: Node<'_>, source: &[u8]) -> Metadata {
    let mut metadata = Metadata::new();

    if let Some(keyword) = child_text(node, &["identifier"], source) {
        metadata.insert("keyword".to_string(), keyword);
    }

    if let Some(name) = definition_name(node, source) {
        metadata.insert("name".to_string(), name);
    }

    metadata
}

/// Recover the defined name from the call's argument list.
///
/// The arguments take several shapes depending on the definition form;
/// the first argument matching one of them wins, and a miss is
/// non-fatal (the chunk is emitted without a name).
fn definition_name(node: Node<'_>, source: &[u8]) -> Option<String> {
    let args = find_child(node, &["arguments"])?;
    let mut cursor = args.walk();
    for arg in args.children(&mut cursor) {
        match arg.kind() {
            // defmodule MyApp.Foo
            "alias" => return node_text(arg, source).map(str::to_string),
            // def my_func (argument-less definition)
            "identifier" => return node_text(arg, source).map(str::to_string),
            // def my_func(a, b) parses as a nested call
            "call" => return child_text(arg, &["identifier"], source),
            // defimpl My.Protocol, for: MyStruct
            "dot" => return node_text(arg, source).map(str::to_string),
            _ => {}
        }
    }
    None
}
