mod node;

pub use node::{
    ArrayNode, BoolNode, Entry, Node, NodeKind, NullNode, NumberNode, ObjectNode, Span, StringNode,
};
