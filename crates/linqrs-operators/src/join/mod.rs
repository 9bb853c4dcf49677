//! Inner equi-join.
//!
//! Output order is the same for every strategy: grouped by outer element in
//! outer traversal order, and within a group in inner traversal order.

pub mod hash;
pub mod nested;

use std::hash::Hash;

use linqrs_core::prelude::{JoinStrategy, QueryConfig, Sequence};

pub use hash::{hash_join, hash_join_with};
pub use nested::nested_loop_join;

/// Join with the default (nested-loop) strategy.
///
/// Only needs `K: PartialEq`.
pub fn join<O, I, K, R, FO, FI, FR>(
    outer: &O,
    inner: &I,
    outer_key: FO,
    inner_key: FI,
    result: FR,
) -> Vec<R>
where
    O: Sequence,
    I: Sequence,
    K: PartialEq,
    FO: Fn(&O::Item) -> K,
    FI: Fn(&I::Item) -> K,
    FR: Fn(&O::Item, &I::Item) -> R,
{
    nested_loop_join(outer, inner, outer_key, inner_key, result)
}

/// Join using `config.join_strategy`.
pub fn join_with<O, I, K, R, FO, FI, FR>(
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
    match config.join_strategy {
        JoinStrategy::NestedLoop => nested_loop_join(outer, inner, outer_key, inner_key, result),
        JoinStrategy::Hash => {
            hash_join_with(config, outer, inner, outer_key, inner_key, result)
        }
    }
}
