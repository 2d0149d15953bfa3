//! A read-only recursive view over nested JSON-like data.
//!
//! Wrap a [`RawValue`] with [`build`] and walk it by field name. Nested
//! mappings are wrapped into [`FrozenView`]s only when a field is read,
//! sequences are wrapped element by element, and scalars pass through
//! unchanged.
//!
//! ```
//! use frozen_view::{RawValue, build};
//!
//! let raw: RawValue = serde_json::from_str(
//!     r#"{"Schedule": {"conferences": [{"name": "PyCon"}]}}"#,
//! ).unwrap();
//!
//! let conferences = build(&raw).get("Schedule").unwrap().get("conferences").unwrap();
//! assert_eq!(conferences.as_sequence().map(<[_]>::len), Some(1));
//! assert_eq!(conferences.get(0).unwrap().get("name").unwrap().as_str(), Some("PyCon"));
//! ```
//!
//! # Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for the value types.
//! - `tracing`: emit `tracing` events on dispatch and failed lookups.

#[cfg(feature = "serde")]
pub mod de;
pub mod error;
mod index;
mod node;
mod raw;
mod scalar;
#[cfg(feature = "serde")]
pub mod ser;
mod tracing_macros;
mod util;
pub mod view;

pub use error::*;
pub use index::*;
pub use node::*;
pub use raw::*;
pub use scalar::*;
pub use view::*;
