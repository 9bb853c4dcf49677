//! Prefix limiting (`take`).

use linqrs_core::prelude::{Plan, Sequence, StageInfo};

/// Yields at most the first `n` upstream elements.
///
/// With `n == 0` a traversal never even starts the upstream one. Once `n`
/// elements have been produced the upstream iterator is dropped, so no
/// further elements are pulled.
#[derive(Debug, Clone)]
pub struct Take<S> {
    source: S,
    n: usize,
}

impl<S: Sequence> Take<S> {
    pub fn new(source: S, n: usize) -> Self {
        Self { source, n }
    }

    pub fn limit(&self) -> usize {
        self.n
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Iter<'s> = TakeIter<S::Iter<'s>> where Self: 's;

    fn traverse(&self) -> Self::Iter<'_> {
        let inner = if self.n == 0 {
            None
        } else {
            Some(self.source.traverse())
        };
        TakeIter {
            inner,
            remaining: self.n,
        }
    }

    fn known_len(&self) -> Option<usize> {
        if self.n == 0 {
            return Some(0);
        }
        self.source.known_len().map(|len| len.min(self.n))
    }

    fn plan(&self) -> Plan {
        self.source.plan().with_stage(
            StageInfo::new("take", self.known_len()).with_detail(self.n.to_string()),
        )
    }
}

#[derive(Debug)]
pub struct TakeIter<I> {
    inner: Option<I>,
    remaining: usize,
}

impl<I: Iterator> Iterator for TakeIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            self.inner = None;
            return None;
        }
        let item = self.inner.as_mut()?.next();
        match item {
            Some(_) => self.remaining -= 1,
            None => self.inner = None,
        }
        if self.remaining == 0 {
            self.inner = None;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            None => (0, Some(0)),
            Some(inner) => {
                let (lo, hi) = inner.size_hint();
                let hi = hi.map_or(self.remaining, |h| h.min(self.remaining));
                (lo.min(self.remaining), Some(hi))
            }
        }
    }
}

/// Build a deferred prefix limit. Performs no iteration.
pub fn take<S: Sequence>(source: S, n: usize) -> Take<S> {
    Take::new(source, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linqrs_core::{ByRef, Once, Tracked};

    #[test]
    fn zero_never_touches_the_source() {
        let numbers = [1, 2, 3];
        let src = Tracked::new(numbers.as_slice());
        let stats = src.stats();
        let none = take(src, 0);
        assert_eq!(none.traverse().count(), 0);
        assert_eq!(none.known_len(), Some(0));
        assert!(stats.untouched());
    }

    #[test]
    fn zero_leaves_single_pass_sources_intact() {
        let src = Once::new(vec![1, 2].into_iter());
        let none = take(ByRef::new(&src), 0);
        assert_eq!(none.traverse().count(), 0);
        assert!(!src.is_spent());
    }

    #[test]
    fn stops_pulling_once_exhausted() {
        let numbers = [1, 2, 3, 4, 5];
        let src = Tracked::new(numbers.as_slice());
        let stats = src.stats();
        let two = take(src, 2);
        let out: Vec<_> = two.traverse().copied().collect();
        assert_eq!(out, vec![1, 2]);
        assert_eq!(stats.pulls(), 2);
    }

    #[test]
    fn oversized_limit_yields_everything() {
        let numbers = [1, 2, 3];
        let all = take(numbers.as_slice(), 100);
        assert_eq!(all.known_len(), Some(3));
        let out: Vec<_> = all.traverse().copied().collect();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn limit_is_exposed() {
        let numbers = [1];
        assert_eq!(take(numbers.as_slice(), 7).limit(), 7);
    }
}
