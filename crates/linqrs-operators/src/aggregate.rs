//! Terminal reducers: fold, count, sum, min, max.

use std::iter::Sum;

use linqrs_core::prelude::{Error, Result, Sequence};

use crate::metrics;

/// Left fold threading `init` through `combiner`. Empty input returns `init`.
pub fn aggregate<S, Acc, F>(source: &S, init: Acc, combiner: F) -> Acc
where
    S: Sequence,
    F: Fn(Acc, S::Item) -> Acc,
{
    source.traverse().fold(init, combiner)
}

/// Fold with a fallible combiner.
///
/// Stops at the first `Err` and returns it as-is; no further elements are
/// pulled after a failure.
pub fn try_aggregate<S, Acc, E, F>(
    source: &S,
    init: Acc,
    combiner: F,
) -> std::result::Result<Acc, E>
where
    S: Sequence,
    F: Fn(Acc, S::Item) -> std::result::Result<Acc, E>,
{
    let mut acc = init;
    for item in source.traverse() {
        acc = combiner(acc, item)?;
    }
    Ok(acc)
}

/// Number of elements. O(1) when the source knows its length, otherwise one
/// full traversal.
pub fn count<S: Sequence>(source: &S) -> usize {
    match source.known_len() {
        Some(len) => len,
        None => {
            let n = source.traverse().count();
            metrics::emit("count", n, 1);
            n
        }
    }
}

/// Number of elements satisfying `predicate`. Always a full traversal.
pub fn count_where<S, P>(source: &S, predicate: P) -> usize
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let mut pulled = 0usize;
    let mut matched = 0usize;
    for item in source.traverse() {
        pulled += 1;
        if predicate(&item) {
            matched += 1;
        }
    }
    metrics::emit("count_where", pulled, 1);
    matched
}

/// Sum from the zero value of `R`. Empty input yields zero.
///
/// `R` is any type that can sum the element type, e.g. `i32` over `&i32`.
pub fn sum<S, R>(source: &S) -> R
where
    S: Sequence,
    R: Sum<S::Item>,
{
    source.traverse().sum()
}

/// Smallest element; the first one wins on ties.
///
/// Fails with [`Error::EmptySequence`] on empty input.
pub fn min<S>(source: &S) -> Result<S::Item>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    extremum(source, "min", |candidate, best| candidate < best)
}

/// Largest element; the first one wins on ties.
///
/// Fails with [`Error::EmptySequence`] on empty input.
pub fn max<S>(source: &S) -> Result<S::Item>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    extremum(source, "max", |candidate, best| candidate > best)
}

/// Keep the first element and replace it only on a strict improvement, so
/// equal extrema resolve to the earliest occurrence.
fn extremum<S, F>(source: &S, op: &'static str, better: F) -> Result<S::Item>
where
    S: Sequence,
    F: Fn(&S::Item, &S::Item) -> bool,
{
    let mut it = source.traverse();
    let mut best = it.next().ok_or(Error::EmptySequence { op })?;
    let mut pulled = 1usize;
    for candidate in it {
        pulled += 1;
        if better(&candidate, &best) {
            best = candidate;
        }
    }
    metrics::emit(op, pulled, 1);
    Ok(best)
}
