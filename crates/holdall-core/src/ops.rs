//! The injected element operation set.
//!
//! An adaptive array never constructs or inspects its elements directly.
//! It stores duplicates produced by [`ElementOps::duplicate`], releases
//! them through [`ElementOps::release`], and renders them for diagnostics
//! through [`ElementOps::render`]. The operation set is bound at array
//! creation and immutable for the array's lifetime.

use std::fmt;
use std::marker::PhantomData;

/// The three per-element-type operations that parametrize an array.
///
/// Implementors decide what "duplicate", "release", and "render" mean for
/// their element type. The container guarantees that every element it
/// stores was produced by [`duplicate`](Self::duplicate) and is passed to
/// [`release`](Self::release) exactly once — on overwrite or when the
/// array is dropped.
pub trait ElementOps {
    /// The element type stored by arrays bound to this operation set.
    type Element;

    /// Produce an independent owned duplicate of `elem`.
    ///
    /// Returns `None` when the element cannot be duplicated. The array
    /// surfaces this as `ArrayError::DuplicateFailed` and never stores a
    /// partial result.
    fn duplicate(&self, elem: &Self::Element) -> Option<Self::Element>;

    /// Release all resources owned by `elem`.
    ///
    /// Must accept any element produced by [`duplicate`](Self::duplicate).
    fn release(&self, elem: Self::Element);

    /// Render `elem` into `out` for diagnostics.
    fn render(&self, elem: &Self::Element, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// An operation set built from three closures.
///
/// The closure-per-operation form mirrors integrations where each
/// operation is supplied independently rather than via a trait impl on
/// the element type.
pub struct FnOps<T, C, D, P> {
    duplicate: C,
    release: D,
    render: P,
    _elem: PhantomData<fn() -> T>,
}

impl<T, C, D, P> FnOps<T, C, D, P>
where
    C: Fn(&T) -> Option<T>,
    D: Fn(T),
    P: Fn(&T, &mut dyn fmt::Write) -> fmt::Result,
{
    /// Bind three closures into an operation set.
    pub fn new(duplicate: C, release: D, render: P) -> Self {
        Self {
            duplicate,
            release,
            render,
            _elem: PhantomData,
        }
    }
}

impl<T, C, D, P> ElementOps for FnOps<T, C, D, P>
where
    C: Fn(&T) -> Option<T>,
    D: Fn(T),
    P: Fn(&T, &mut dyn fmt::Write) -> fmt::Result,
{
    type Element = T;

    fn duplicate(&self, elem: &T) -> Option<T> {
        (self.duplicate)(elem)
    }

    fn release(&self, elem: T) {
        (self.release)(elem)
    }

    fn render(&self, elem: &T, out: &mut dyn fmt::Write) -> fmt::Result {
        (self.render)(elem, out)
    }
}

/// Operation set for element types that are `Clone + Display`.
///
/// Duplication clones, release drops, rendering uses the `Display` impl.
/// Zero-sized; the usual choice for plain value types.
pub struct CloneOps<T> {
    _elem: PhantomData<fn() -> T>,
}

impl<T> CloneOps<T> {
    /// Create the operation set.
    pub fn new() -> Self {
        Self { _elem: PhantomData }
    }
}

impl<T> Default for CloneOps<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + fmt::Display> ElementOps for CloneOps<T> {
    type Element = T;

    fn duplicate(&self, elem: &T) -> Option<T> {
        Some(elem.clone())
    }

    fn release(&self, elem: T) {
        drop(elem);
    }

    fn render(&self, elem: &T, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{elem}")
    }
}
