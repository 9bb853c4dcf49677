//! Deferred projection (`select`) and its copying special case (`cloned`).

use std::marker::PhantomData;

use linqrs_core::prelude::{Plan, Sequence, StageInfo};

/// Maps every upstream element through `projection`, 1:1 and in order.
pub struct Select<S, F, U> {
    source: S,
    projection: F,
    _out: PhantomData<fn() -> U>,
}

impl<S, F, U> Select<S, F, U>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    pub fn new(source: S, projection: F) -> Self {
        Self {
            source,
            projection,
            _out: PhantomData,
        }
    }
}

impl<S: Clone, F: Clone, U> Clone for Select<S, F, U> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            projection: self.projection.clone(),
            _out: PhantomData,
        }
    }
}

impl<S: std::fmt::Debug, F, U> std::fmt::Debug for Select<S, F, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<S, F, U> Sequence for Select<S, F, U>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Iter<'s> = std::iter::Map<S::Iter<'s>, &'s F> where Self: 's;

    fn traverse(&self) -> Self::Iter<'_> {
        self.source.traverse().map(&self.projection)
    }

    fn known_len(&self) -> Option<usize> {
        self.source.known_len()
    }

    fn plan(&self) -> Plan {
        self.source
            .plan()
            .with_stage(StageInfo::new("select", self.known_len()))
    }
}

/// Build a deferred projection. Performs no iteration.
pub fn select<S, F, U>(source: S, projection: F) -> Select<S, F, U>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    Select::new(source, projection)
}

/// Turns borrowed `&T` elements into owned copies.
#[derive(Debug, Clone)]
pub struct Cloned<S> {
    source: S,
}

impl<S> Cloned<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<'a, S, T> Sequence for Cloned<S>
where
    S: Sequence<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;
    type Iter<'s> = std::iter::Cloned<S::Iter<'s>> where Self: 's;

    fn traverse(&self) -> Self::Iter<'_> {
        self.source.traverse().cloned()
    }

    fn known_len(&self) -> Option<usize> {
        self.source.known_len()
    }

    fn plan(&self) -> Plan {
        self.source
            .plan()
            .with_stage(StageInfo::new("cloned", self.known_len()))
    }
}

/// Build a deferred copy stage. Performs no iteration.
pub fn cloned<'a, S, T>(source: S) -> Cloned<S>
where
    S: Sequence<Item = &'a T>,
    T: Clone + 'a,
{
    Cloned::new(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linqrs_core::Tracked;

    #[test]
    fn squares_in_order() {
        let numbers = [1, 3, 5, 2, 8, 6, 7, 4, 10, 9];
        let squares = select(numbers.as_slice(), |n| n * n);
        let out: Vec<i32> = squares.traverse().collect();
        assert_eq!(out, vec![1, 9, 25, 4, 64, 36, 49, 16, 100, 81]);
        assert_eq!(squares.known_len(), Some(10));
    }

    #[test]
    fn projection_runs_once_per_pulled_element() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let words = ["a", "bb", "ccc"];
        let lens = select(words.as_slice(), |w| {
            calls.set(calls.get() + 1);
            w.len()
        });
        assert_eq!(calls.get(), 0);

        let mut it = lens.traverse();
        assert_eq!(it.next(), Some(1));
        assert_eq!(calls.get(), 1);
        drop(it);

        assert_eq!(lens.traverse().count(), 3);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn one_upstream_pull_per_element() {
        let numbers = vec![4, 5, 6];
        let src = Tracked::new(&numbers);
        let stats = src.stats();
        let doubled = select(src, |n| n * 2);
        assert!(stats.untouched());

        let mut it = doubled.traverse();
        it.next();
        assert_eq!(stats.pulls(), 1);
        it.next();
        assert_eq!(stats.pulls(), 2);
    }

    #[test]
    fn cloned_yields_owned_values() {
        let names = vec![String::from("x"), String::from("y")];
        let owned: Vec<String> = cloned(&names).traverse().collect();
        assert_eq!(owned, names);
    }
}
