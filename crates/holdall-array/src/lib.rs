//! Adaptive array storage for opaque, caller-defined elements.
//!
//! [`AdaptiveArray`] owns a growable sequence of slots, each empty or
//! holding one element. The element type is opaque to the container: all
//! duplication, release, and rendering goes through the
//! [`ElementOps`](holdall_core::ElementOps) set bound at creation.
//!
//! # Ownership model
//!
//! Copy-in/copy-out. A write stores a fresh duplicate of the caller's
//! element (the caller keeps the original); a read hands back a fresh
//! duplicate of the stored element (the array keeps its copy). Ownership
//! of a stored element is never shared with the caller — every element
//! the array holds was produced by `duplicate` and is passed to `release`
//! exactly once, on overwrite or on drop.
//!
//! # Growth
//!
//! Writes past the end grow the array so the target index exists; slots
//! created along the way start empty. The array never shrinks — there is
//! no removal operation, only overwrite and drop.
//!
//! Single-threaded by design: wrap an array in an external lock if it must
//! be shared across threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;

pub use array::AdaptiveArray;
pub use config::ArrayConfig;
pub use holdall_core::ArrayError;
