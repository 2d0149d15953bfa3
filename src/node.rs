use crate::{
    Error, FrozenView, Index, Kind, RawValue, Result, Scalar, tracing_macros::trace,
    util::cold_path,
};

/// What [`build`] and [`FrozenView::get`] hand back.
///
/// Mappings become views, sequences become sequences of nodes, and scalars
/// are carried unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    View(FrozenView),
    Sequence(Vec<Node>),
    Scalar(Scalar),
}

/// Wraps a raw value for field-style navigation.
///
/// - a mapping becomes a [`FrozenView`] holding its own copy;
/// - a sequence becomes a sequence of the same length, each element built
///   recursively;
/// - a scalar is returned unchanged.
///
/// Fields of a mapping are not wrapped here; that happens when they are
/// read through [`FrozenView::get`].
///
/// # Example
///
/// ```
/// use frozen_view::{Node, RawValue, build};
///
/// let raw: RawValue = [("name", RawValue::from("PyCon"))].into_iter().collect();
/// let node = build(&raw);
/// assert_eq!(node.get("name").unwrap().as_str(), Some("PyCon"));
/// ```
#[inline]
pub fn build(value: &RawValue) -> Node {
    match value {
        RawValue::Mapping(mapping) => Node::View(FrozenView::new(mapping)),
        RawValue::Sequence(items) => {
            trace!(len = items.len(), "building sequence");
            Node::Sequence(items.iter().map(build).collect())
        }
        RawValue::Scalar(scalar) => Node::Scalar(scalar.clone()),
    }
}

impl From<RawValue> for Node {
    /// Same dispatch as [`build`], consuming the raw value instead of
    /// copying it.
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::Mapping(mapping) => Node::View(FrozenView::from(mapping)),
            RawValue::Sequence(items) => {
                Node::Sequence(items.into_iter().map(Node::from).collect())
            }
            RawValue::Scalar(scalar) => Node::Scalar(scalar),
        }
    }
}

impl From<FrozenView> for Node {
    #[inline]
    fn from(view: FrozenView) -> Self {
        Node::View(view)
    }
}

impl From<Scalar> for Node {
    #[inline]
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar)
    }
}

impl Node {
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Node::View(_) => Kind::Mapping,
            Node::Sequence(_) => Kind::Sequence,
            Node::Scalar(_) => Kind::Scalar,
        }
    }

    /// Takes one step into the node.
    ///
    /// A `usize` indexes a sequence node; a `&str` or `String` reads a field
    /// of a view node through [`FrozenView::get`].
    ///
    /// # Errors
    ///
    /// - [`Error::KindMismatch`] if the node is not of the kind the index
    ///   addresses;
    /// - [`Error::IndexOutOfBounds`] if a sequence index is past the end;
    /// - [`Error::KeyNotFound`] if a view has no such field.
    #[inline]
    pub fn get(&self, index: impl Index) -> Result<Node> {
        index.index_into(self)
    }

    pub(crate) fn element(&self, index: usize) -> Result<Node> {
        match self {
            Node::Sequence(items) => items.get(index).cloned().ok_or_else(|| {
                cold_path();
                Error::IndexOutOfBounds {
                    index,
                    len: items.len(),
                }
            }),
            other => {
                cold_path();
                Err(Error::KindMismatch {
                    expected: Kind::Sequence,
                    actual: other.kind(),
                })
            }
        }
    }

    pub(crate) fn field_of_view(&self, name: &str) -> Result<Node> {
        match self {
            Node::View(view) => view.get(name),
            other => {
                cold_path();
                Err(Error::KindMismatch {
                    expected: Kind::Mapping,
                    actual: other.kind(),
                })
            }
        }
    }

    #[inline]
    pub fn is_view(&self) -> bool {
        matches!(self, Node::View(_))
    }

    #[inline]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Null))
    }

    #[inline]
    pub fn as_view(&self) -> Option<&FrozenView> {
        match self {
            Node::View(view) => Some(view),
            _ => None,
        }
    }

    #[inline]
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Scalar::as_i64)
    }

    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_scalar().and_then(Scalar::as_u64)
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Scalar::as_f64)
    }

    #[inline]
    pub fn into_view(self) -> Option<FrozenView> {
        match self {
            Node::View(view) => Some(view),
            _ => None,
        }
    }

    #[inline]
    pub fn into_sequence(self) -> Option<Vec<Node>> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn into_scalar(self) -> Option<Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Turns the node back into the raw value it was built from.
    pub fn into_raw(self) -> RawValue {
        match self {
            Node::View(view) => view.into_raw(),
            Node::Sequence(items) => items.into_iter().map(Node::into_raw).collect(),
            Node::Scalar(scalar) => RawValue::Scalar(scalar),
        }
    }
}
