//! Serde serialization of raw values, nodes and views.
//!
//! Mappings are written in insertion order, so a document parsed into a
//! [`RawValue`] and written back keeps its field order.

use serde::{
    Serialize, Serializer,
    ser::{SerializeMap, SerializeSeq},
};

use crate::{FrozenView, Mapping, Node, RawValue, Scalar};

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(v) => serializer.serialize_bool(*v),
            Scalar::Int(v) => serializer.serialize_i64(*v),
            Scalar::UInt(v) => serializer.serialize_u64(*v),
            Scalar::Float(v) => serializer.serialize_f64(*v),
            Scalar::String(v) => serializer.serialize_str(v),
        }
    }
}

fn serialize_mapping<S: Serializer>(mapping: &Mapping, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(mapping.len()))?;
    for (key, value) in mapping {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

fn serialize_sequence<S: Serializer, T: Serialize>(
    items: &[T],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(items.len()))?;
    for item in items {
        seq.serialize_element(item)?;
    }
    seq.end()
}

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawValue::Mapping(mapping) => serialize_mapping(mapping, serializer),
            RawValue::Sequence(items) => serialize_sequence(items, serializer),
            RawValue::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}

impl Serialize for FrozenView {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_mapping(self.as_mapping(), serializer)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::View(view) => view.serialize(serializer),
            Node::Sequence(items) => serialize_sequence(items, serializer),
            Node::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}
