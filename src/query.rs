use std::borrow::Cow;

use smallvec::SmallVec;

use crate::types::Node;

type SegmentBuf<'p> = SmallVec<[Cow<'p, str>; 8]>;

impl<'a> Node<'a> {
    /// Look up a descendant by a JSON-Pointer-style path: `""` is the node
    /// itself, segments are separated by `/`, array indices are decimal,
    /// object lookup takes the first matching key. `~1` and `~0` escape
    /// `/` and `~` inside a segment.
    pub fn pointer(&self, pointer: &str) -> Option<&Node<'a>> {
        if pointer.is_empty() {
            return Some(self);
        }
        let segments = split_pointer(pointer)?;
        let mut current = self;
        for segment in &segments {
            current = match current {
                Node::Object(object) => object
                    .entries
                    .iter()
                    .find(|entry| entry.key.source == segment.as_ref())
                    .map(|entry| &entry.value)?,
                Node::Array(array) => {
                    let index: usize = segment.parse().ok()?;
                    array.items.get(index)?
                }
                _ => return None,
            };
        }
        Some(current)
    }
}

fn split_pointer(pointer: &str) -> Option<SegmentBuf<'_>> {
    let rest = pointer.strip_prefix('/')?;
    let mut segments = SegmentBuf::new();
    for raw in rest.split('/') {
        segments.push(unescape(raw));
    }
    Some(segments)
}

fn unescape(segment: &str) -> Cow<'_, str> {
    if !segment.contains('~') {
        return Cow::Borrowed(segment);
    }
    Cow::Owned(segment.replace("~1", "/").replace("~0", "~"))
}
