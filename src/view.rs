//! The read-only view over a mapping.
//!
//! A [`FrozenView`] owns a copy of the mapping it was built from and hands
//! out [`Node`]s on field access. Nested mappings stay raw inside the view
//! and are wrapped only when a field is read; nothing is cached, so every
//! access builds a fresh node from the stored value.
//!
//! ```
//! use frozen_view::{FrozenView, Mapping, RawValue};
//!
//! let mut source = Mapping::new();
//! source.insert("a".to_string(), RawValue::from(1));
//! let view = FrozenView::new(&source);
//!
//! source.insert("a".to_string(), RawValue::from(2));
//! assert_eq!(view.get("a").unwrap().as_i64(), Some(1));
//! ```

use std::iter::FusedIterator;

use indexmap::map;

use crate::{
    Error, Kind, Mapping, Node, RawValue, Result, build,
    tracing_macros::{debug, trace},
    util::cold_path,
};

/// Operations of the underlying mapping that [`FrozenView::get`] resolves
/// before falling back to field lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Introspection {
    /// The field names, in insertion order.
    Keys,
    /// The stored values, in insertion order.
    Values,
    /// `[name, value]` pairs, in insertion order.
    Items,
}

impl Introspection {
    pub const ALL: [Introspection; 3] = [
        Introspection::Keys,
        Introspection::Values,
        Introspection::Items,
    ];

    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "keys" => Some(Introspection::Keys),
            "values" => Some(Introspection::Values),
            "items" => Some(Introspection::Items),
            _ => None,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Introspection::Keys => "keys",
            Introspection::Values => "values",
            Introspection::Items => "items",
        }
    }
}

/// A read-only, field-addressable view over an owned copy of a mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrozenView {
    data: Mapping,
}

impl FrozenView {
    /// Creates a view holding its own copy of `mapping`.
    ///
    /// Later changes to `mapping` are not visible through the view.
    #[inline]
    pub fn new(mapping: &Mapping) -> Self {
        Self {
            data: mapping.clone(),
        }
    }

    /// Reads `name` from the view.
    ///
    /// Introspection names (`keys`, `values`, `items`) are answered by the
    /// underlying mapping first; any other name is looked up as a field.
    /// The result is wrapped on demand: a nested mapping becomes a new
    /// [`FrozenView`], a sequence is wrapped element by element, and a
    /// scalar is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `name` is not an introspection name
    /// and no field with that name exists.
    pub fn get(&self, name: &str) -> Result<Node> {
        if let Some(op) = Introspection::from_name(name) {
            trace!(op = op.name(), "answering from the underlying mapping");
            return Ok(Node::from(self.introspect(op)));
        }
        self.field(name)
    }

    /// Looks `name` up as a field, skipping introspection names.
    ///
    /// This is how a stored key such as `"keys"` is reached.
    pub fn field(&self, name: &str) -> Result<Node> {
        match self.data.get(name) {
            Some(value) => Ok(build(value)),
            None => {
                cold_path();
                debug!(name, "field lookup missed");
                Err(Error::KeyNotFound(name.to_owned()))
            }
        }
    }

    /// Evaluates an introspection operation on the stored mapping and
    /// returns the raw, unwrapped result.
    pub fn introspect(&self, op: Introspection) -> RawValue {
        match op {
            Introspection::Keys => self
                .data
                .keys()
                .map(|key| RawValue::from(key.as_str()))
                .collect(),
            Introspection::Values => self.data.values().cloned().collect(),
            Introspection::Items => self
                .data
                .iter()
                .map(|(key, value)| RawValue::Sequence(vec![key.as_str().into(), value.clone()]))
                .collect(),
        }
    }

    /// Returns the field names in insertion order.
    #[inline]
    pub fn field_names(&self) -> FieldNames<'_> {
        FieldNames {
            inner: self.data.keys(),
        }
    }

    /// Returns `(name, node)` pairs in insertion order, wrapping each value
    /// as it is reached.
    #[inline]
    pub fn fields(&self) -> Fields<'_> {
        Fields {
            inner: self.data.iter(),
        }
    }

    #[inline]
    pub fn contains_field(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the view's own copy of the mapping.
    #[inline]
    pub fn as_mapping(&self) -> &Mapping {
        &self.data
    }

    #[inline]
    pub fn to_raw(&self) -> RawValue {
        RawValue::Mapping(self.data.clone())
    }

    #[inline]
    pub fn into_raw(self) -> RawValue {
        RawValue::Mapping(self.data)
    }
}

impl From<Mapping> for FrozenView {
    /// Takes ownership of `mapping` without copying it.
    #[inline]
    fn from(mapping: Mapping) -> Self {
        Self { data: mapping }
    }
}

impl From<&Mapping> for FrozenView {
    #[inline]
    fn from(mapping: &Mapping) -> Self {
        Self::new(mapping)
    }
}

impl TryFrom<RawValue> for FrozenView {
    type Error = Error;

    fn try_from(value: RawValue) -> Result<Self> {
        match value {
            RawValue::Mapping(mapping) => Ok(Self::from(mapping)),
            other => Err(Error::KindMismatch {
                expected: Kind::Mapping,
                actual: other.kind(),
            }),
        }
    }
}

impl TryFrom<&RawValue> for FrozenView {
    type Error = Error;

    fn try_from(value: &RawValue) -> Result<Self> {
        match value {
            RawValue::Mapping(mapping) => Ok(Self::new(mapping)),
            other => Err(Error::KindMismatch {
                expected: Kind::Mapping,
                actual: other.kind(),
            }),
        }
    }
}

/// Iterator over the field names of a [`FrozenView`].
#[derive(Clone)]
pub struct FieldNames<'a> {
    inner: map::Keys<'a, String, RawValue>,
}

impl<'a> Iterator for FieldNames<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for FieldNames<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for FieldNames<'_> {}

impl FusedIterator for FieldNames<'_> {}

/// Iterator over the fields of a [`FrozenView`], wrapping values lazily.
#[derive(Clone)]
pub struct Fields<'a> {
    inner: map::Iter<'a, String, RawValue>,
}

impl<'a> Iterator for Fields<'a> {
    type Item = (&'a str, Node);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), build(value)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Fields<'_> {}

impl FusedIterator for Fields<'_> {}
