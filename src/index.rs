use crate::{Node, Result};

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// A type that can address one step into a [`Node`].
///
/// `usize` selects an element of a sequence node; `str` and `String`
/// select a field of a view node. This trait is sealed.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into(&self, node: &Node) -> Result<Node>;
}

impl Index for usize {
    #[inline]
    fn index_into(&self, node: &Node) -> Result<Node> {
        node.element(*self)
    }
}

impl Index for str {
    #[inline]
    fn index_into(&self, node: &Node) -> Result<Node> {
        node.field_of_view(self)
    }
}

impl Index for String {
    #[inline]
    fn index_into(&self, node: &Node) -> Result<Node> {
        node.field_of_view(self)
    }
}

impl<T: ?Sized + Index> Index for &T {
    #[inline]
    fn index_into(&self, node: &Node) -> Result<Node> {
        (**self).index_into(node)
    }
}
