//! The adaptive array container.
//!
//! [`AdaptiveArray`] stores elements in a `Vec` of slots, growing on
//! demand when a write targets an index past the end. Element lifecycle
//! runs entirely through the injected [`ElementOps`] set:
//!
//! 1. `set()` — duplicate the caller's element into the target slot,
//!    releasing whatever the slot held before
//! 2. `get()` — duplicate the stored element out to the caller
//! 3. drop — release every occupied slot, in index order

use std::fmt;

use holdall_core::{ArrayError, ElementOps};

use crate::config::ArrayConfig;

/// A growable sequence of element slots with copy-in/copy-out semantics.
///
/// Slots are independently empty or occupied. Writing past the end grows
/// the array so `len()` becomes `index + 1`; intermediate slots start
/// empty. The array never shrinks.
///
/// # Slot lifecycle
///
/// ```text
/// empty ──set()──▶ occupied ──set()──▶ occupied (old element released)
///                     │
///                   drop ──▶ released
/// ```
///
/// A slot never transitions back to empty, with one exception: when an
/// overwrite's duplicate step fails, the old element has already been
/// released and the slot is left empty.
pub struct AdaptiveArray<O: ElementOps> {
    /// Element slots. `None` = empty, `Some` = owned by the array.
    slots: Vec<Option<O::Element>>,
    /// The operation set bound at creation.
    ops: O,
    /// Growth ceiling, immutable after creation.
    config: ArrayConfig,
}

impl<O: ElementOps> AdaptiveArray<O> {
    /// Create an empty array bound to `ops`, with the default config.
    pub fn new(ops: O) -> Self {
        Self::with_config(ops, ArrayConfig::default())
    }

    /// Create an empty array bound to `ops` with an explicit config.
    pub fn with_config(ops: O, config: ArrayConfig) -> Self {
        Self {
            slots: Vec::new(),
            ops,
            config,
        }
    }

    /// Number of slots, occupied or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the array has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether the slot at `index` exists and holds an element.
    pub fn contains(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// The array's configuration.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Store a duplicate of `elem` at `index`, growing the array if needed.
    ///
    /// The caller keeps ownership of `elem`; the array stores a fresh
    /// duplicate. If the slot was occupied, the old element is released
    /// first. Growth failure (`CapacityExceeded`) leaves the array
    /// untouched.
    ///
    /// If the duplicate step fails (`DuplicateFailed`), the slot is left
    /// empty — the old element is already gone, and any growth performed
    /// for this call is kept.
    pub fn set(&mut self, index: usize, elem: &O::Element) -> Result<(), ArrayError> {
        if index >= self.slots.len() {
            self.grow_to(index + 1)?;
        }

        // The old element is released before the duplicate is attempted,
        // so a failed duplicate leaves the slot empty rather than keeping
        // a stale element.
        if let Some(old) = self.slots[index].take() {
            self.ops.release(old);
        }

        let dup = self
            .ops
            .duplicate(elem)
            .ok_or(ArrayError::DuplicateFailed { index })?;
        self.slots[index] = Some(dup);
        Ok(())
    }

    /// Duplicate the element at `index` out to the caller.
    ///
    /// The caller receives ownership of an independent copy; the stored
    /// element is untouched and still owned by the array.
    pub fn get(&self, index: usize) -> Result<O::Element, ArrayError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len })?;
        let elem = slot.as_ref().ok_or(ArrayError::EmptySlot { index })?;
        self.ops
            .duplicate(elem)
            .ok_or(ArrayError::DuplicateFailed { index })
    }

    /// Iterate over occupied slots in index order.
    ///
    /// Borrows only — no elements are duplicated or transferred.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &O::Element)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|elem| (i, elem)))
    }

    /// Render every occupied slot into `out`, in index order.
    ///
    /// Empty slots are skipped; each rendered element is followed by a
    /// newline record separator. Does not mutate the array.
    pub fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for (_, elem) in self.occupied() {
            self.ops.render(elem, &mut *out)?;
            out.write_char('\n')?;
        }
        Ok(())
    }

    /// Grow the slot vector to `new_len`, all new slots empty.
    ///
    /// Atomic: on failure the slot vector is exactly as it was.
    fn grow_to(&mut self, new_len: usize) -> Result<(), ArrayError> {
        if new_len > self.config.max_len {
            return Err(ArrayError::CapacityExceeded {
                requested: new_len,
                limit: self.config.max_len,
            });
        }
        let additional = new_len - self.slots.len();
        if self.slots.try_reserve(additional).is_err() {
            return Err(ArrayError::CapacityExceeded {
                requested: new_len,
                limit: self.config.max_len,
            });
        }
        self.slots.resize_with(new_len, || None);
        Ok(())
    }
}

impl<O: ElementOps> Drop for AdaptiveArray<O> {
    fn drop(&mut self) {
        // Release occupied slots in index order; empty slots are skipped.
        for slot in &mut self.slots {
            if let Some(elem) = slot.take() {
                self.ops.release(elem);
            }
        }
    }
}
