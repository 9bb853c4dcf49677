//! Hash join.
//!
//! The inner sequence is walked exactly once to build a key index. Each
//! bucket stores positions in inner traversal order, so probing yields
//! matches in the same order as the nested-loop join.

use std::collections::HashMap;
use std::hash::Hash;

use linqrs_core::prelude::{JoinStrategy, QueryConfig, Sequence};

use crate::metrics;

pub fn hash_join<O, I, K, R, FO, FI, FR>(
    outer: &O,
    inner: &I,
    outer_key: FO,
    inner_key: FI,
    result: FR,
) -> Vec<R>
where
    O: Sequence,
    I: Sequence,
    K: Hash + Eq,
    FO: Fn(&O::Item) -> K,
    FI: Fn(&I::Item) -> K,
    FR: Fn(&O::Item, &I::Item) -> R,
{
    hash_join_with(&QueryConfig::default(), outer, inner, outer_key, inner_key, result)
}

/// [`hash_join`] with explicit configuration.
///
/// `config.preallocate` sizes the buffered inner rows from the inner length.
pub fn hash_join_with<O, I, K, R, FO, FI, FR>(
    config: &QueryConfig,
    outer: &O,
    inner: &I,
    outer_key: FO,
    inner_key: FI,
    result: FR,
) -> Vec<R>
where
    O: Sequence,
    I: Sequence,
    K: Hash + Eq,
    FO: Fn(&O::Item) -> K,
    FI: Fn(&I::Item) -> K,
    FR: Fn(&O::Item, &I::Item) -> R,
{
    let mut rows: Vec<I::Item> = Vec::with_capacity(config.capacity_for(inner.known_len()));
    let mut index: HashMap<K, Vec<usize>> = HashMap::new();
    for (pos, item) in inner.traverse().enumerate() {
        index.entry(inner_key(&item)).or_default().push(pos);
        rows.push(item);
    }

    let mut out = Vec::new();
    let mut outer_seen = 0usize;
    for o in outer.traverse() {
        outer_seen += 1;
        if let Some(bucket) = index.get(&outer_key(&o)) {
            for &pos in bucket {
                out.push(result(&o, &rows[pos]));
            }
        }
    }
    metrics::emit_join(JoinStrategy::Hash, outer_seen, out.len());
    out
}
