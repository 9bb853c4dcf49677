//! Tracing hooks for eager operators.
//!
//! The library never prints. With the `tracing` feature enabled each eager
//! operator reports one event; without it these compile to nothing.

#[cfg(feature = "tracing")]
pub(crate) fn emit(op: &'static str, pulled: usize, produced: usize) {
    tracing::trace!(op, pulled, produced, "operator finished");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn emit(_op: &'static str, _pulled: usize, _produced: usize) { /* no-op */
}

#[cfg(feature = "tracing")]
pub(crate) fn emit_join(strategy: linqrs_core::JoinStrategy, outer: usize, produced: usize) {
    tracing::trace!(%strategy, outer, produced, "join finished");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn emit_join(_strategy: linqrs_core::JoinStrategy, _outer: usize, _produced: usize) {
    /* no-op */
}
