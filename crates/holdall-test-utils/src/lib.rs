//! Test utilities for holdall development.
//!
//! Provides instrumented [`ElementOps`] implementations: [`TrackedOps`]
//! records every operation an array performs in a shared [`OpsLog`], and
//! can be given a duplicate budget to drive the failure paths.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use holdall_core::ElementOps;

/// Call counts for each element operation, shared between a test and the
/// ops value it handed to the array.
///
/// Interior mutability via `Cell` — the library is single-threaded by
/// design, so no synchronization is needed.
#[derive(Debug, Default)]
pub struct OpsLog {
    duplicates: Cell<usize>,
    releases: Cell<usize>,
    renders: Cell<usize>,
}

impl OpsLog {
    /// Number of successful duplicate calls.
    pub fn duplicates(&self) -> usize {
        self.duplicates.get()
    }

    /// Number of release calls.
    pub fn releases(&self) -> usize {
        self.releases.get()
    }

    /// Number of render calls.
    pub fn renders(&self) -> usize {
        self.renders.get()
    }
}

/// An `i64` operation set that records every call in an [`OpsLog`].
///
/// Construct with [`TrackedOps::new`] for always-succeeding duplication,
/// or [`TrackedOps::with_duplicate_budget`] to make `duplicate` start
/// returning `None` after a fixed number of calls.
pub struct TrackedOps {
    log: Rc<OpsLog>,
    /// Remaining duplicate calls before `duplicate` returns `None`.
    /// `None` means unlimited.
    duplicate_budget: Cell<Option<usize>>,
}

impl TrackedOps {
    /// Ops with unlimited duplication. Returns the ops value and a handle
    /// to its log.
    pub fn new() -> (Self, Rc<OpsLog>) {
        let log = Rc::new(OpsLog::default());
        let ops = Self {
            log: Rc::clone(&log),
            duplicate_budget: Cell::new(None),
        };
        (ops, log)
    }

    /// Ops whose `duplicate` succeeds `budget` times, then returns `None`.
    pub fn with_duplicate_budget(budget: usize) -> (Self, Rc<OpsLog>) {
        let (ops, log) = Self::new();
        ops.duplicate_budget.set(Some(budget));
        (ops, log)
    }
}

impl ElementOps for TrackedOps {
    type Element = i64;

    fn duplicate(&self, elem: &i64) -> Option<i64> {
        if let Some(remaining) = self.duplicate_budget.get() {
            if remaining == 0 {
                return None;
            }
            self.duplicate_budget.set(Some(remaining - 1));
        }
        self.log.duplicates.set(self.log.duplicates.get() + 1);
        Some(*elem)
    }

    fn release(&self, _elem: i64) {
        self.log.releases.set(self.log.releases.get() + 1);
    }

    fn render(&self, elem: &i64, out: &mut dyn fmt::Write) -> fmt::Result {
        self.log.renders.set(self.log.renders.get() + 1);
        write!(out, "{elem}")
    }
}
