use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "boolean",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte-offset range `[start, end)` a node occupies in the original buffer.
/// Spans include the token's delimiters: string spans cover both quotes,
/// container spans cover the brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn slice<'a>(&self, input: &'a str) -> Option<&'a str> {
        input.get(self.start..self.end)
    }
}

/// A string literal. `source` is the raw text between the quotes with no
/// escape decoding performed, so it equals `input[span.start+1..span.end-1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringNode<'a> {
    pub source: &'a str,
    /// True when the source matches a CSS hex color like `#1e90ff`.
    pub color: bool,
    pub span: Span,
}

impl<'a> StringNode<'a> {
    pub fn value(&self) -> &'a str {
        self.source
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberNode<'a> {
    pub source: &'a str,
    pub value: f64,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolNode {
    pub value: bool,
    pub span: Span,
}

impl BoolNode {
    pub fn source(&self) -> &'static str {
        if self.value {
            "true"
        } else {
            "false"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullNode {
    pub span: Span,
}

impl NullNode {
    pub fn source(&self) -> &'static str {
        "null"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayNode<'a> {
    pub items: Vec<Node<'a>>,
    pub span: Span,
}

/// One `key: value` pair. Entries stay in source order and duplicate keys
/// are all retained.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<'a> {
    pub key: StringNode<'a>,
    pub value: Node<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectNode<'a> {
    pub entries: Vec<Entry<'a>>,
    pub span: Span,
}

/// One parsed JSON value with its source span. The tree is immutable once
/// built; re-formatting re-parses from scratch.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    String(StringNode<'a>),
    Number(NumberNode<'a>),
    Bool(BoolNode),
    Null(NullNode),
    Array(ArrayNode<'a>),
    Object(ObjectNode<'a>),
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::String(_) => NodeKind::String,
            Node::Number(_) => NodeKind::Number,
            Node::Bool(_) => NodeKind::Bool,
            Node::Null(_) => NodeKind::Null,
            Node::Array(_) => NodeKind::Array,
            Node::Object(_) => NodeKind::Object,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Node::String(node) => node.span,
            Node::Number(node) => node.span,
            Node::Bool(node) => node.span,
            Node::Null(node) => node.span,
            Node::Array(node) => node.span,
            Node::Object(node) => node.span,
        }
    }

    pub fn start(&self) -> usize {
        self.span().start
    }

    pub fn end(&self) -> usize {
        self.span().end
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Node::String(node) => Some(node.source),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(node) => Some(node.value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(node) => Some(node.value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null(_))
    }

    /// Child count: items for arrays, entries for objects, zero for leaves.
    pub fn len(&self) -> usize {
        match self {
            Node::Array(node) => node.items.len(),
            Node::Object(node) => node.entries.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&Node<'a>> {
        match self {
            Node::Array(node) => node.items.get(index),
            _ => None,
        }
    }

    /// First entry with a matching key.
    pub fn get_key(&self, key: &str) -> Option<&Node<'a>> {
        match self {
            Node::Object(node) => node
                .entries
                .iter()
                .find(|entry| entry.key.source == key)
                .map(|entry| &entry.value),
            _ => None,
        }
    }
}
