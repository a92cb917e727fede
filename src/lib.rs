pub mod constants;
pub mod error;
pub mod format;
pub mod num;
pub mod options;
pub mod parse;
pub mod query;
pub mod render;
mod ser;
pub mod text;
pub mod types;

use serde_json::Value;

pub use crate::error::ParseError;
pub use crate::options::{FormatOptions, Indent, ParseOptions};
pub use crate::parse::{Document, Wrapper};
pub use crate::render::{walk, Walk, WalkItem};
pub use crate::types::{
    ArrayNode, BoolNode, Entry, Node, NodeKind, NullNode, NumberNode, ObjectNode, Span, StringNode,
};

pub type Result<T> = std::result::Result<T, ParseError>;

pub fn parse(input: &str) -> Result<Node<'_>> {
    parse_with_options(input, &ParseOptions::default())
}

pub fn parse_with_options<'a>(input: &'a str, options: &ParseOptions) -> Result<Node<'a>> {
    parse::from_str(input, options)
}

/// Parse a buffer that may be either plain JSON or a JSONP-style
/// `callback({...});` payload. The plain reader runs first; its error is
/// reported when the callback unwrap does not apply either.
pub fn parse_document(input: &str) -> Result<Document<'_>> {
    parse_document_with_options(input, &ParseOptions::default())
}

pub fn parse_document_with_options<'a>(
    input: &'a str,
    options: &ParseOptions,
) -> Result<Document<'a>> {
    parse::document_from_str(input, options)
}

pub fn validate_str(input: &str) -> Result<()> {
    validate_str_with_options(input, &ParseOptions::default())
}

pub fn validate_str_with_options(input: &str, options: &ParseOptions) -> Result<()> {
    parse::from_str(input, options).map(|_| ())
}

/// Pretty-print raw text at the configured indent. Falls back to the
/// unchanged input when it is neither JSON nor a JSONP-wrapped payload.
pub fn pretty(raw: &str) -> String {
    pretty_with_options(raw, &FormatOptions::default())
}

pub fn pretty_with_options(raw: &str, options: &FormatOptions) -> String {
    format::pretty(raw, options)
}

pub fn to_string_pretty(node: &Node<'_>, options: &FormatOptions) -> String {
    render::to_string_pretty(node, options)
}

/// Convert a parsed tree into a `serde_json::Value`. Duplicate object keys
/// collapse to the last occurrence; the tree itself retains all of them.
pub fn to_value(node: &Node<'_>) -> Value {
    match node {
        Node::String(string) => Value::String(string.source.to_string()),
        Node::Number(number) => number_value(number),
        Node::Bool(node) => Value::Bool(node.value),
        Node::Null(_) => Value::Null,
        Node::Array(array) => Value::Array(array.items.iter().map(to_value).collect()),
        Node::Object(object) => {
            let mut map = serde_json::Map::with_capacity(object.entries.len());
            for entry in &object.entries {
                map.insert(entry.key.source.to_string(), to_value(&entry.value));
            }
            Value::Object(map)
        }
    }
}

// Derived from the f64, not the source spelling, so relaxed spellings like
// `007` or `1E+2` canonicalize and agree with the `Serialize` impl:
// integer-valued numbers become integers.
fn number_value(node: &NumberNode<'_>) -> Value {
    let value = node.value;
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        return Value::Number(serde_json::Number::from(value as i64));
    }
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
