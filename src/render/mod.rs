use std::collections::VecDeque;

use crate::num::format_f64;
use crate::options::FormatOptions;
use crate::types::{Node, StringNode};

/// One visited node: its breadth-first depth and, for object members, the
/// key it hangs off. Display layers use the depth for collapse-to-level.
#[derive(Debug, Clone, Copy)]
pub struct WalkItem<'t, 'a> {
    pub depth: usize,
    pub key: Option<&'t StringNode<'a>>,
    pub node: &'t Node<'a>,
}

/// Breadth-first traversal over a tree, the order the original display
/// built its output in: a work queue seeded with the root, children
/// appended as containers are dequeued.
pub struct Walk<'t, 'a> {
    queue: VecDeque<WalkItem<'t, 'a>>,
}

pub fn walk<'t, 'a>(root: &'t Node<'a>) -> Walk<'t, 'a> {
    let mut queue = VecDeque::new();
    queue.push_back(WalkItem {
        depth: 0,
        key: None,
        node: root,
    });
    Walk { queue }
}

impl<'t, 'a> Iterator for Walk<'t, 'a> {
    type Item = WalkItem<'t, 'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.queue.pop_front()?;
        match item.node {
            Node::Array(array) => {
                for child in &array.items {
                    self.queue.push_back(WalkItem {
                        depth: item.depth + 1,
                        key: None,
                        node: child,
                    });
                }
            }
            Node::Object(object) => {
                for entry in &object.entries {
                    self.queue.push_back(WalkItem {
                        depth: item.depth + 1,
                        key: Some(&entry.key),
                        node: &entry.value,
                    });
                }
            }
            _ => {}
        }
        Some(item)
    }
}

/// Re-emit a tree as indented text. Every leaf keeps its literal source
/// token (strings re-quoted verbatim), so formatting never rewrites a
/// value; `normalize_numbers` is the one opt-in exception.
pub fn to_string_pretty(node: &Node<'_>, options: &FormatOptions) -> String {
    let writer = Writer {
        indent: options.indent.width(),
        normalize_numbers: options.normalize_numbers,
    };
    let mut out = String::new();
    writer.write_node(&mut out, node, 0);
    out
}

struct Writer {
    indent: usize,
    normalize_numbers: bool,
}

impl Writer {
    fn write_node(&self, out: &mut String, node: &Node<'_>, depth: usize) {
        match node {
            Node::String(string) => {
                out.push('"');
                out.push_str(string.source);
                out.push('"');
            }
            Node::Number(number) => {
                if self.normalize_numbers {
                    out.push_str(&format_f64(number.value));
                } else {
                    out.push_str(number.source);
                }
            }
            Node::Bool(node) => out.push_str(node.source()),
            Node::Null(_) => out.push_str("null"),
            Node::Array(array) => {
                if array.items.is_empty() {
                    out.push_str("[]");
                    return;
                }
                out.push('[');
                for (index, item) in array.items.iter().enumerate() {
                    if index > 0 {
                        out.push(',');
                    }
                    out.push('\n');
                    self.push_indent(out, depth + 1);
                    self.write_node(out, item, depth + 1);
                }
                out.push('\n');
                self.push_indent(out, depth);
                out.push(']');
            }
            Node::Object(object) => {
                if object.entries.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push('{');
                for (index, entry) in object.entries.iter().enumerate() {
                    if index > 0 {
                        out.push(',');
                    }
                    out.push('\n');
                    self.push_indent(out, depth + 1);
                    out.push('"');
                    out.push_str(entry.key.source);
                    out.push_str("\": ");
                    self.write_node(out, &entry.value, depth + 1);
                }
                out.push('\n');
                self.push_indent(out, depth);
                out.push('}');
            }
        }
    }

    fn push_indent(&self, out: &mut String, depth: usize) {
        out.extend(std::iter::repeat(' ').take(self.indent * depth));
    }
}
