//! Stable sort (`order_by`).
//!
//! Both directions materialize first and then sort the owned vector in place.
//! Stability is part of the contract: elements with equal keys keep their
//! traversal order, which is what makes multi-pass tie-break chaining work.

use linqrs_core::prelude::Sequence;

use crate::materialize::to_sequence;
use crate::metrics;

/// Materialize `source` and stable-sort it ascending by `key`.
///
/// Each key is computed once per element.
pub fn order_by<S, K, F>(source: &S, key: F) -> Vec<S::Item>
where
    S: Sequence,
    K: Ord,
    F: Fn(&S::Item) -> K,
{
    let mut sorted = to_sequence(source);
    sorted.sort_by_cached_key(|item| key(item));
    metrics::emit("order_by", sorted.len(), sorted.len());
    sorted
}

/// Materialize `source` and stable-sort it descending by `key`.
///
/// Ties still keep traversal order (this is not `order_by` reversed).
pub fn order_by_descending<S, K, F>(source: &S, key: F) -> Vec<S::Item>
where
    S: Sequence,
    K: Ord,
    F: Fn(&S::Item) -> K,
{
    let mut keyed: Vec<(K, S::Item)> = to_sequence(source)
        .into_iter()
        .map(|item| (key(&item), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));
    let sorted: Vec<S::Item> = keyed.into_iter().map(|(_, item)| item).collect();
    metrics::emit("order_by_descending", sorted.len(), sorted.len());
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_key_sorts_ascending() {
        let numbers = [1, 3, 5, 2, 8, 6, 7, 4, 10, 9];
        let sorted: Vec<i32> = order_by(&numbers.as_slice(), |n| **n)
            .into_iter()
            .copied()
            .collect();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let rows = [("b", 2), ("a", 1), ("c", 2), ("d", 1)];
        let sorted = order_by(&rows.as_slice(), |r| r.1);
        let names: Vec<&str> = sorted.iter().map(|r| r.0).collect();
        assert_eq!(names, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn descending_is_stable_too() {
        let rows = [("b", 2), ("a", 1), ("c", 2), ("d", 1)];
        let sorted = order_by_descending(&rows.as_slice(), |r| r.1);
        let names: Vec<&str> = sorted.iter().map(|r| r.0).collect();
        assert_eq!(names, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn chaining_sorts_gives_secondary_order() {
        // Sort by the secondary key first, then by the primary key.
        let rows = [("x", 2), ("y", 1), ("x", 1), ("y", 2)];
        let by_num = order_by(&rows.as_slice(), |r| r.1);
        let by_name = order_by(&by_num.as_slice(), |r| r.0);
        let out: Vec<(&str, i32)> = by_name.into_iter().map(|r| **r).collect();
        assert_eq!(out, vec![("x", 1), ("x", 2), ("y", 1), ("y", 2)]);
    }

    #[test]
    fn empty_input_sorts_to_empty() {
        let empty: [i32; 0] = [];
        assert!(order_by(&empty.as_slice(), |n| **n).is_empty());
    }
}
