//! Nested-loop join.
//!
//! The inner sequence is traversed once per outer element. A single-pass
//! inner source therefore only ever matches the first outer element.

use linqrs_core::prelude::{JoinStrategy, Sequence};

use crate::metrics;

pub fn nested_loop_join<O, I, K, R, FO, FI, FR>(
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
    let mut out = Vec::new();
    let mut outer_seen = 0usize;
    for o in outer.traverse() {
        outer_seen += 1;
        let key = outer_key(&o);
        for i in inner.traverse() {
            if key == inner_key(&i) {
                out.push(result(&o, &i));
            }
        }
    }
    metrics::emit_join(JoinStrategy::NestedLoop, outer_seen, out.len());
    out
}
