//! Holdall: an adaptive array container for opaque elements.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the holdall sub-crates. For most users, adding `holdall` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use holdall::prelude::*;
//!
//! // An array of i64 elements: duplication via Clone, rendering via Display.
//! let mut arr = AdaptiveArray::new(CloneOps::<i64>::new());
//!
//! // Writing past the end grows the array; slots below start empty.
//! arr.set(5, &42).unwrap();
//! assert_eq!(arr.len(), 6);
//! assert_eq!(arr.get(5).unwrap(), 42);
//! assert_eq!(arr.get(0), Err(ArrayError::EmptySlot { index: 0 }));
//!
//! // Reads hand back independent copies; the array keeps its own.
//! let copy = arr.get(5).unwrap();
//! assert_eq!(copy, 42);
//!
//! // Render every occupied slot, one per line.
//! let mut out = String::new();
//! arr.dump(&mut out).unwrap();
//! assert_eq!(out, "42\n");
//! ```
//!
//! Element types without `Clone`/`Display`, or with out-of-band lifecycle
//! requirements, implement [`types::ElementOps`] directly or bind three
//! closures with [`types::FnOps`].
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `holdall-array` | `AdaptiveArray`, `ArrayConfig` |
//! | [`types`] | `holdall-core` | `ElementOps`, adapters, `ArrayError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The adaptive array container and its configuration (`holdall-array`).
pub use holdall_array as array;

/// Element operations, adapters, and error types (`holdall-core`).
pub use holdall_core as types;

/// Common imports for typical holdall usage.
///
/// ```rust
/// use holdall::prelude::*;
/// ```
pub mod prelude {
    pub use holdall_array::{AdaptiveArray, ArrayConfig};
    pub use holdall_core::{ArrayError, CloneOps, ElementOps, FnOps};
}
