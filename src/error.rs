//! Error types for navigating a frozen view.
//!
//! This module contains the [`Error`] type which represents every way a
//! field or element lookup can fail.
//!
//! # Example
//!
//! ```
//! use frozen_view::{Error, Mapping, RawValue, Result, build};
//!
//! fn lookup(value: &RawValue, name: &str) -> Result<()> {
//!     match build(value).get(name) {
//!         Ok(_) => Ok(()),
//!         Err(Error::KeyNotFound(key)) => {
//!             println!("no such field: {key}");
//!             Err(Error::KeyNotFound(key))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//!
//! let raw = RawValue::from(Mapping::from_iter([("a".to_string(), RawValue::from(1))]));
//! assert!(lookup(&raw, "a").is_ok());
//! assert!(matches!(lookup(&raw, "z"), Err(Error::KeyNotFound(_))));
//! ```

use std::fmt::{self, Display};

use crate::Kind;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when reading
/// through a [`FrozenView`](crate::FrozenView) or a [`Node`](crate::Node).
///
/// # Variants
///
/// - [`KeyNotFound`](Error::KeyNotFound) - No field with the requested name exists
/// - [`KindMismatch`](Error::KindMismatch) - The node is not of the kind the operation needs
/// - [`IndexOutOfBounds`](Error::IndexOutOfBounds) - A sequence index is past the end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested name is neither an introspection operation nor a key
    /// of the underlying mapping.
    KeyNotFound(String),

    /// An operation needed one kind of node and found another.
    ///
    /// For example indexing a view with a `usize`, or converting a
    /// sequence into a [`FrozenView`](crate::FrozenView).
    KindMismatch { expected: Kind, actual: Kind },

    IndexOutOfBounds { index: usize, len: usize },
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::KeyNotFound(key) => write!(formatter, "no such field: {key:?}"),
            Error::KindMismatch { expected, actual } => {
                write!(formatter, "kind mismatch: expected {expected}, got {actual}")
            }
            Error::IndexOutOfBounds { index, len } => {
                write!(formatter, "index out of bounds: index {index}, length {len}")
            }
        }
    }
}

impl std::error::Error for Error {}
