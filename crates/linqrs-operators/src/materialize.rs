//! Materialization (`to_sequence`).

use linqrs_core::prelude::{QueryConfig, Sequence};

use crate::metrics;

/// Walk `source` once and collect its elements, in traversal order, into a
/// freshly owned vector.
pub fn to_sequence<S: Sequence>(source: &S) -> Vec<S::Item> {
    to_sequence_with(&QueryConfig::default(), source)
}

/// [`to_sequence`] with explicit configuration.
///
/// When `config.preallocate` is set and the source reports its length, the
/// vector is created with exactly that capacity. Otherwise it grows as
/// elements are pushed.
pub fn to_sequence_with<S: Sequence>(config: &QueryConfig, source: &S) -> Vec<S::Item> {
    let mut out = Vec::with_capacity(config.capacity_for(source.known_len()));
    for item in source.traverse() {
        out.push(item);
    }
    metrics::emit("to_sequence", out.len(), out.len());
    out
}
