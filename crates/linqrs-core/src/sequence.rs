//! The `Sequence` capability contract and its implementations for sources.
//!
//! A sequence is an inert description of a forward-only stream. Obtaining a
//! traversal never mutates the description, so a sequence over a borrowed
//! collection can be walked any number of times. The pipeline never owns the
//! collection's storage: the `&'a [T]` *is* the upstream, and the borrow checker
//! keeps every stage built on it from outliving the data.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::plan::Plan;

/// Anything a query pipeline can pull elements from.
///
/// Invariants:
/// - `traverse` performs no work beyond creating the iterator; elements are
///   only produced as the iterator is advanced.
/// - `known_len`, when `Some`, is exact and O(1). It must agree with the number
///   of elements the next traversal yields.
/// - `plan` must not iterate.
pub trait Sequence {
    type Item;

    type Iter<'s>: Iterator<Item = Self::Item>
    where
        Self: 's;

    /// Start a fresh front-to-back traversal.
    fn traverse(&self) -> Self::Iter<'_>;

    /// Exact element count if it can be reported without traversal.
    fn known_len(&self) -> Option<usize> {
        None
    }

    /// Describe the pipeline this sequence is built from, source first.
    fn plan(&self) -> Plan {
        Plan::source(self.known_len())
    }
}

impl<'a, T> Sequence for &'a [T] {
    type Item = &'a T;
    type Iter<'s> = std::slice::Iter<'a, T> where Self: 's;

    fn traverse(&self) -> Self::Iter<'_> {
        let items: &'a [T] = *self;
        items.iter()
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Item = &'a T;
    type Iter<'s> = std::slice::Iter<'a, T> where Self: 's;

    fn traverse(&self) -> Self::Iter<'_> {
        let items: &'a [T; N] = *self;
        items.iter()
    }

    fn known_len(&self) -> Option<usize> {
        Some(N)
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Item = &'a T;
    type Iter<'s> = std::slice::Iter<'a, T> where Self: 's;

    fn traverse(&self) -> Self::Iter<'_> {
        let items: &'a Vec<T> = *self;
        items.iter()
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<'a, T> Sequence for &'a VecDeque<T> {
    type Item = &'a T;
    type Iter<'s> = std::collections::vec_deque::Iter<'a, T> where Self: 's;

    fn traverse(&self) -> Self::Iter<'_> {
        let items: &'a VecDeque<T> = *self;
        items.iter()
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

/// Lends an existing sequence to another pipeline without moving it.
#[derive(Debug)]
pub struct ByRef<'r, S: ?Sized> {
    inner: &'r S,
}

impl<'r, S: ?Sized> ByRef<'r, S> {
    pub fn new(inner: &'r S) -> Self {
        Self { inner }
    }
}

impl<S: ?Sized> Clone for ByRef<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for ByRef<'_, S> {}

impl<'r, S: Sequence + ?Sized> Sequence for ByRef<'r, S> {
    type Item = S::Item;
    type Iter<'s> = S::Iter<'r> where Self: 's;

    fn traverse(&self) -> Self::Iter<'_> {
        self.inner.traverse()
    }

    fn known_len(&self) -> Option<usize> {
        self.inner.known_len()
    }

    fn plan(&self) -> Plan {
        self.inner.plan()
    }
}

/// A single-pass source wrapping an arbitrary iterator.
///
/// The first traversal hands out the wrapped iterator; every later traversal
/// is empty. Stages stacked on a `Once` inherit that limitation.
#[derive(Debug)]
pub struct Once<I> {
    inner: RefCell<Option<I>>,
    exact_len: Option<usize>,
}

impl<I: Iterator> Once<I> {
    pub fn new(iter: I) -> Self {
        let exact_len = match iter.size_hint() {
            (lo, Some(hi)) if lo == hi => Some(lo),
            _ => None,
        };
        Self {
            inner: RefCell::new(Some(iter)),
            exact_len,
        }
    }

    /// Whether the wrapped iterator has already been handed out.
    pub fn is_spent(&self) -> bool {
        self.inner.borrow().is_none()
    }
}

impl<I: Iterator> Sequence for Once<I> {
    type Item = I::Item;
    type Iter<'s> = std::iter::Flatten<std::option::IntoIter<I>> where Self: 's;

    fn traverse(&self) -> Self::Iter<'_> {
        self.inner.borrow_mut().take().into_iter().flatten()
    }

    fn known_len(&self) -> Option<usize> {
        if self.is_spent() {
            Some(0)
        } else {
            self.exact_len
        }
    }

    fn plan(&self) -> Plan {
        Plan::named_source("once", self.known_len())
    }
}
