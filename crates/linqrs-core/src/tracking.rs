//! Access tracking for sources.
//!
//! `Tracked` wraps any sequence and counts how often it is traversed and how
//! many elements are pulled out of it. Counters are shared through
//! [`AccessStats`] handles, so they stay readable after the tracked source has
//! been moved into a pipeline.

use std::cell::Cell;
use std::rc::Rc;

use crate::plan::Plan;
use crate::sequence::Sequence;

#[derive(Debug, Clone, Default)]
pub struct AccessStats {
    traversals: Rc<Cell<usize>>,
    pulls: Rc<Cell<usize>>,
}

impl AccessStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of traversals started on the tracked source.
    pub fn traversals(&self) -> usize {
        self.traversals.get()
    }

    /// Number of elements produced by the tracked source, across traversals.
    pub fn pulls(&self) -> usize {
        self.pulls.get()
    }

    /// True if the tracked source has never been touched.
    pub fn untouched(&self) -> bool {
        self.traversals() == 0 && self.pulls() == 0
    }

    pub fn reset(&self) {
        self.traversals.set(0);
        self.pulls.set(0);
    }

    fn record_traversal(&self) {
        self.traversals.set(self.traversals.get() + 1);
        #[cfg(feature = "tracing")]
        tracing::trace!(traversals = self.traversals.get(), "source traversal");
    }
}

/// A transparent wrapper that records accesses to `S`.
#[derive(Debug)]
pub struct Tracked<S> {
    source: S,
    stats: AccessStats,
}

impl<S: Sequence> Tracked<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            stats: AccessStats::new(),
        }
    }

    /// A handle onto this source's counters.
    pub fn stats(&self) -> AccessStats {
        self.stats.clone()
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: Sequence> Sequence for Tracked<S> {
    type Item = S::Item;
    type Iter<'s> = TrackedIter<'s, S::Iter<'s>> where Self: 's;

    fn traverse(&self) -> Self::Iter<'_> {
        self.stats.record_traversal();
        TrackedIter {
            inner: self.source.traverse(),
            pulls: &self.stats.pulls,
        }
    }

    fn known_len(&self) -> Option<usize> {
        self.source.known_len()
    }

    fn plan(&self) -> Plan {
        self.source.plan()
    }
}

#[derive(Debug)]
pub struct TrackedIter<'s, I> {
    inner: I,
    pulls: &'s Cell<usize>,
}

impl<I: Iterator> Iterator for TrackedIter<'_, I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.pulls.set(self.pulls.get() + 1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_traversals_and_pulls() {
        let data = [1, 2, 3, 4];
        let src = Tracked::new(data.as_slice());
        let stats = src.stats();
        assert!(stats.untouched());

        let mut it = src.traverse();
        assert_eq!(stats.traversals(), 1);
        assert_eq!(stats.pulls(), 0);

        it.next();
        it.next();
        assert_eq!(stats.pulls(), 2);

        let rest: Vec<_> = src.traverse().collect();
        assert_eq!(rest.len(), 4);
        assert_eq!(stats.traversals(), 2);
        assert_eq!(stats.pulls(), 6);

        stats.reset();
        assert!(stats.untouched());
    }

    #[test]
    fn known_len_does_not_count_as_access() {
        let data = vec![7; 3];
        let src = Tracked::new(&data);
        assert_eq!(src.known_len(), Some(3));
        assert!(src.stats().untouched());
    }
}
