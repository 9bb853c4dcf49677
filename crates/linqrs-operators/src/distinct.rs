//! Deduplication (`distinct`, `distinct_by`).
//!
//! Both keep first-seen order and need a membership set proportional to the
//! number of distinct keys seen so far.

use std::collections::HashSet;
use std::hash::Hash;

use linqrs_core::prelude::{QueryConfig, Sequence};

use crate::metrics;

/// Each value once, in order of first appearance.
pub fn distinct<S>(source: &S) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: Hash + Eq + Clone,
{
    distinct_with(&QueryConfig::default(), source)
}

/// [`distinct`] with explicit configuration.
pub fn distinct_with<S>(config: &QueryConfig, source: &S) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: Hash + Eq + Clone,
{
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(config.capacity_for(source.known_len()));
    let mut pulled = 0usize;
    for item in source.traverse() {
        pulled += 1;
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    metrics::emit("distinct", pulled, out.len());
    out
}

/// The first element observed for each distinct `key`, kept whole.
pub fn distinct_by<S, K, F>(source: &S, key: F) -> Vec<S::Item>
where
    S: Sequence,
    K: Hash + Eq,
    F: Fn(&S::Item) -> K,
{
    distinct_by_with(&QueryConfig::default(), source, key)
}

/// [`distinct_by`] with explicit configuration.
pub fn distinct_by_with<S, K, F>(config: &QueryConfig, source: &S, key: F) -> Vec<S::Item>
where
    S: Sequence,
    K: Hash + Eq,
    F: Fn(&S::Item) -> K,
{
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(config.capacity_for(source.known_len()));
    let mut pulled = 0usize;
    for item in source.traverse() {
        pulled += 1;
        if seen.insert(key(&item)) {
            out.push(item);
        }
    }
    metrics::emit("distinct_by", pulled, out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let numbers = [3, 1, 3, 2, 1, 3];
        let out = distinct(&numbers.as_slice());
        assert_eq!(out, vec![&3, &1, &2]);
    }

    #[test]
    fn idempotent() {
        let numbers = [5, 5, 4, 5, 4, 1];
        let once = distinct(&numbers.as_slice());
        let twice = distinct(&once.as_slice());
        let twice: Vec<&i32> = twice.into_iter().copied().collect();
        assert_eq!(twice, once);
    }

    #[test]
    fn distinct_by_keeps_whole_first_element() {
        let people = [
            ("Alice", 30),
            ("Bob", 25),
            ("Charlie", 35),
            ("Alice", 40),
            ("Eve", 28),
        ];
        let out = distinct_by(&people.as_slice(), |p| p.0);
        let out: Vec<(&str, i32)> = out.into_iter().copied().collect();
        assert_eq!(
            out,
            vec![("Alice", 30), ("Bob", 25), ("Charlie", 35), ("Eve", 28)]
        );
    }

    #[test]
    fn capacity_follows_config() {
        let numbers = [1u32, 2, 2, 3, 3];
        assert_eq!(distinct(&numbers.as_slice()).capacity(), 5);
        assert_eq!(distinct_by(&numbers.as_slice(), |n| **n).capacity(), 5);

        let cfg = QueryConfig {
            preallocate: false,
            ..QueryConfig::default()
        };
        let out = distinct_with(&cfg, &numbers.as_slice());
        assert_eq!(out, vec![&1, &2, &3]);
        assert_ne!(out.capacity(), 5);

        let out = distinct_by_with(&cfg, &numbers.as_slice(), |n| **n % 2);
        assert_eq!(out, vec![&1, &2]);
        assert_ne!(out.capacity(), 5);
    }

    #[test]
    fn empty_input() {
        let empty: [u8; 0] = [];
        assert!(distinct(&empty.as_slice()).is_empty());
        assert!(distinct_by(&empty.as_slice(), |b| **b).is_empty());
    }
}
