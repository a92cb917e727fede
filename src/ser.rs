use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::parse::Document;
use crate::types::Node;

/// Serializes the value tree, not the source metadata: strings emit their
/// raw source, integer-valued numbers emit as integers. Duplicate object
/// keys are written as-is; map-based consumers keep the last one.
impl Serialize for Node<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::String(string) => serializer.serialize_str(string.source),
            Node::Number(number) => {
                let value = number.value;
                if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
                    serializer.serialize_i64(value as i64)
                } else {
                    serializer.serialize_f64(value)
                }
            }
            Node::Bool(node) => serializer.serialize_bool(node.value),
            Node::Null(_) => serializer.serialize_unit(),
            Node::Array(array) => {
                let mut seq = serializer.serialize_seq(Some(array.items.len()))?;
                for item in &array.items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.entries.len()))?;
                for entry in &object.entries {
                    map.serialize_entry(entry.key.source, &entry.value)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for Document<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}
