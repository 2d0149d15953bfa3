use std::fmt::{self, Display};

use indexmap::IndexMap;

use crate::Scalar;

/// A string-keyed mapping that iterates in insertion order.
///
/// Equality ignores order: two mappings are equal when they hold the same
/// key/value pairs.
pub type Mapping = IndexMap<String, RawValue>;

/// The three shapes a raw value can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Mapping,
    Sequence,
    Scalar,
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Mapping => "mapping",
            Kind::Sequence => "sequence",
            Kind::Scalar => "scalar",
        })
    }
}

/// A nested value built from mappings, sequences and scalars, typically
/// produced by a JSON or YAML parser.
///
/// The classification into mapping, sequence or scalar is decided once,
/// when the value is constructed. Strings are scalars, never sequences.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Mapping(Mapping),
    Sequence(Vec<RawValue>),
    Scalar(Scalar),
}

impl Default for RawValue {
    #[inline]
    fn default() -> Self {
        Self::Scalar(Scalar::Null)
    }
}

impl RawValue {
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            RawValue::Mapping(_) => Kind::Mapping,
            RawValue::Sequence(_) => Kind::Sequence,
            RawValue::Scalar(_) => Kind::Scalar,
        }
    }

    #[inline]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            RawValue::Mapping(m) => Some(m),
            _ => None,
        }
    }

    #[inline]
    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            RawValue::Mapping(m) => Some(m),
            _ => None,
        }
    }

    #[inline]
    pub fn as_sequence(&self) -> Option<&[RawValue]> {
        match self {
            RawValue::Sequence(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            RawValue::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Mapping> for RawValue {
    #[inline]
    fn from(value: Mapping) -> Self {
        RawValue::Mapping(value)
    }
}

impl From<Vec<RawValue>> for RawValue {
    #[inline]
    fn from(value: Vec<RawValue>) -> Self {
        RawValue::Sequence(value)
    }
}

impl From<Scalar> for RawValue {
    #[inline]
    fn from(value: Scalar) -> Self {
        RawValue::Scalar(value)
    }
}

macro_rules! from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RawValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    RawValue::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

from_scalar!(
    (),
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    &str,
    String
);

impl FromIterator<RawValue> for RawValue {
    fn from_iter<I: IntoIterator<Item = RawValue>>(iter: I) -> Self {
        RawValue::Sequence(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, RawValue)> for RawValue {
    fn from_iter<I: IntoIterator<Item = (K, RawValue)>>(iter: I) -> Self {
        RawValue::Mapping(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
