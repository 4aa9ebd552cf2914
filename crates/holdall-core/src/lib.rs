//! Core types and traits for the holdall adaptive array.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the [`ElementOps`] operation set that parametrizes the container over
//! its element type, ready-made adapters ([`FnOps`], [`CloneOps`]), and
//! the [`ArrayError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod ops;

pub use error::ArrayError;
pub use ops::{CloneOps, ElementOps, FnOps};
