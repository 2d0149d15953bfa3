//! Serde deserialization into raw values and views.
//!
//! [`RawValue`] can be deserialized from any self-describing format, so a
//! parsed document can be wrapped without going through an intermediate
//! value type of the format crate.
//!
//! ```
//! use frozen_view::{FrozenView, RawValue};
//!
//! let raw: RawValue = serde_json::from_str(r#"{"b": 1, "a": [true, null]}"#).unwrap();
//! let view = FrozenView::try_from(raw).unwrap();
//! assert_eq!(view.field_names().collect::<Vec<_>>(), ["b", "a"]);
//! ```
//!
//! # Format to raw value mapping
//!
//! | Serde data model | Raw value |
//! |------------------|-----------|
//! | `unit`, `none` | `Scalar::Null` |
//! | `bool` | `Scalar::Bool` |
//! | signed integers, unsigned up to `i64::MAX` | `Scalar::Int` |
//! | unsigned above `i64::MAX` | `Scalar::UInt` |
//! | `f32`, `f64` | `Scalar::Float` |
//! | `char`, `str`, `string` | `Scalar::String` |
//! | `seq` | `Sequence` |
//! | `map` with string keys | `Mapping`, entries in document order |
//!
//! Map keys must be strings; anything else is reported through the
//! format's own error type.

use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, SeqAccess, Visitor},
};

use crate::{FrozenView, Mapping, Node, RawValue, Scalar};

struct RawValueVisitor;

impl<'de> Visitor<'de> for RawValueVisitor {
    type Value = RawValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a mapping, sequence or scalar value")
    }

    #[inline]
    fn visit_bool<E: de::Error>(self, v: bool) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    #[inline]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    #[inline]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    #[inline]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    #[inline]
    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    #[inline]
    fn visit_string<E: de::Error>(self, v: String) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    #[inline]
    fn visit_unit<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Scalar(Scalar::Null))
    }

    #[inline]
    fn visit_none<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Scalar(Scalar::Null))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RawValue, D::Error> {
        RawValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(RawValue::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawValue, A::Error> {
        let mut mapping = Mapping::with_capacity(map.size_hint().unwrap_or(0).min(4096));
        while let Some((key, value)) = map.next_entry::<String, RawValue>()? {
            // a repeated key keeps its first position and takes the last value
            mapping.insert(key, value);
        }
        Ok(RawValue::Mapping(mapping))
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawValue::deserialize(deserializer).map(Node::from)
    }
}

impl<'de> Deserialize<'de> for FrozenView {
    /// Fails unless the input is a map.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawValue::deserialize(deserializer)?;
        FrozenView::try_from(raw).map_err(de::Error::custom)
    }
}
