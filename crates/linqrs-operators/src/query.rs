//! Fluent query surface.
//!
//! [`Query`] is implemented for every [`Sequence`], so a pipeline reads
//! left-to-right:
//!
//! ```
//! use linqrs_operators::Query;
//!
//! let numbers = vec![1, 3, 5, 2, 8, 6, 7, 4, 10, 9];
//! let big: Vec<i32> = (&numbers).filter(|n| **n > 5).cloned().to_sequence();
//! assert_eq!(big, vec![8, 6, 7, 10, 9]);
//! ```
//!
//! Deferred stages consume `self` (a stage over a borrowed collection is just
//! a borrow plus a closure); eager operators take `&self` so a pipeline can be
//! evaluated more than once.
//!
//! Borrowed collections keep the methods they already have. On `&[T]`,
//! `&Vec<T>` and `&[T; N]`, `first()`, `last()` and `join()` resolve to the
//! slice's inherent methods, and `min()`/`max()` to `Ord::min`/`Ord::max`
//! (the reference itself is `Ord` whenever `T` is). Use the free functions,
//! or go through a stage such as `filter` or `cloned`, for those operators.

use std::hash::Hash;
use std::iter::Sum;

use linqrs_core::prelude::{ByRef, Plan, QueryConfig, Result, Sequence, Tracked};

use crate::{aggregate, distinct, element, join, map, materialize, sort, take};
use crate::{filter::Where, map::Cloned, map::Select, take::Take};

/// Identity helper marking the start of a pipeline.
pub fn from<S: Sequence>(source: S) -> S {
    source
}

pub trait Query: Sequence + Sized {
    /// Deferred `where`.
    fn filter<P>(self, predicate: P) -> Where<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Where::new(self, predicate)
    }

    /// Deferred projection.
    fn select<U, F>(self, projection: F) -> Select<Self, F, U>
    where
        F: Fn(Self::Item) -> U,
    {
        map::select(self, projection)
    }

    /// Deferred copy of borrowed elements.
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sequence<Item = &'a T>,
        T: Clone + 'a,
    {
        map::cloned(self)
    }

    /// Deferred prefix limit.
    fn take(self, n: usize) -> Take<Self> {
        take::take(self, n)
    }

    /// Wrap in an access counter.
    fn tracked(self) -> Tracked<Self> {
        Tracked::new(self)
    }

    /// Lend this sequence to another pipeline without moving it.
    fn by_ref(&self) -> ByRef<'_, Self> {
        ByRef::new(self)
    }

    /// Describe the pipeline without evaluating it.
    fn explain(&self) -> Plan {
        self.plan()
    }

    fn to_sequence(&self) -> Vec<Self::Item> {
        materialize::to_sequence(self)
    }

    fn to_sequence_with(&self, config: &QueryConfig) -> Vec<Self::Item> {
        materialize::to_sequence_with(config, self)
    }

    fn order_by<K, F>(&self, key: F) -> Vec<Self::Item>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        sort::order_by(self, key)
    }

    fn order_by_descending<K, F>(&self, key: F) -> Vec<Self::Item>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        sort::order_by_descending(self, key)
    }

    fn aggregate<Acc, F>(&self, init: Acc, combiner: F) -> Acc
    where
        F: Fn(Acc, Self::Item) -> Acc,
    {
        aggregate::aggregate(self, init, combiner)
    }

    fn try_aggregate<Acc, E, F>(&self, init: Acc, combiner: F) -> std::result::Result<Acc, E>
    where
        F: Fn(Acc, Self::Item) -> std::result::Result<Acc, E>,
    {
        aggregate::try_aggregate(self, init, combiner)
    }

    fn count(&self) -> usize {
        aggregate::count(self)
    }

    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Self::Item) -> bool,
    {
        aggregate::count_where(self, predicate)
    }

    fn sum<R>(&self) -> R
    where
        R: Sum<Self::Item>,
    {
        aggregate::sum(self)
    }

    fn min(&self) -> Result<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        aggregate::min(self)
    }

    fn max(&self) -> Result<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        aggregate::max(self)
    }

    fn first(&self) -> Option<Self::Item> {
        element::first(self)
    }

    fn first_or(&self, default: Self::Item) -> Self::Item {
        element::first_or(self, default)
    }

    fn first_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        element::first_or_default(self)
    }

    fn last(&self) -> Option<Self::Item> {
        element::last(self)
    }

    fn last_or(&self, default: Self::Item) -> Self::Item {
        element::last_or(self, default)
    }

    fn last_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        element::last_or_default(self)
    }

    fn distinct(&self) -> Vec<Self::Item>
    where
        Self::Item: Hash + Eq + Clone,
    {
        distinct::distinct(self)
    }

    fn distinct_with(&self, config: &QueryConfig) -> Vec<Self::Item>
    where
        Self::Item: Hash + Eq + Clone,
    {
        distinct::distinct_with(config, self)
    }

    fn distinct_by<K, F>(&self, key: F) -> Vec<Self::Item>
    where
        K: Hash + Eq,
        F: Fn(&Self::Item) -> K,
    {
        distinct::distinct_by(self, key)
    }

    fn distinct_by_with<K, F>(&self, config: &QueryConfig, key: F) -> Vec<Self::Item>
    where
        K: Hash + Eq,
        F: Fn(&Self::Item) -> K,
    {
        distinct::distinct_by_with(config, self, key)
    }

    /// Inner equi-join with `self` as the outer side (nested loop).
    fn join<I, K, R, FO, FI, FR>(
        &self,
        inner: &I,
        outer_key: FO,
        inner_key: FI,
        result: FR,
    ) -> Vec<R>
    where
        I: Sequence,
        K: PartialEq,
        FO: Fn(&Self::Item) -> K,
        FI: Fn(&I::Item) -> K,
        FR: Fn(&Self::Item, &I::Item) -> R,
    {
        join::join(self, inner, outer_key, inner_key, result)
    }

    /// Inner equi-join using `config.join_strategy`.
    fn join_with<I, K, R, FO, FI, FR>(
        &self,
        config: &QueryConfig,
        inner: &I,
        outer_key: FO,
        inner_key: FI,
        result: FR,
    ) -> Vec<R>
    where
        I: Sequence,
        K: Hash + Eq,
        FO: Fn(&Self::Item) -> K,
        FI: Fn(&I::Item) -> K,
        FR: Fn(&Self::Item, &I::Item) -> R,
    {
        join::join_with(config, self, inner, outer_key, inner_key, result)
    }
}

impl<S: Sequence> Query for S {}
