//! Element access: `first`/`last` and their defaulting variants.
//!
//! `first`/`last` report an empty input as `None`; a returned value is always
//! an element of the sequence. The `_or`/`_or_default` variants never fail.

use linqrs_core::prelude::Sequence;

/// The element at position 0, pulling at most one element.
pub fn first<S: Sequence>(source: &S) -> Option<S::Item> {
    source.traverse().next()
}

/// The first element, or `default` when the sequence is empty.
pub fn first_or<S: Sequence>(source: &S, default: S::Item) -> S::Item {
    first(source).unwrap_or(default)
}

/// The first element, or `S::Item::default()` when the sequence is empty.
pub fn first_or_default<S>(source: &S) -> S::Item
where
    S: Sequence,
    S::Item: Default,
{
    first(source).unwrap_or_default()
}

/// The element at the final position.
///
/// Sequences are forward-only, so this walks to the end: O(len).
pub fn last<S: Sequence>(source: &S) -> Option<S::Item> {
    source.traverse().fold(None, |_, item| Some(item))
}

pub fn last_or<S: Sequence>(source: &S, default: S::Item) -> S::Item {
    last(source).unwrap_or(default)
}

pub fn last_or_default<S>(source: &S) -> S::Item
where
    S: Sequence,
    S::Item: Default,
{
    last(source).unwrap_or_default()
}
