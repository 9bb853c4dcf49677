//! Deferred filter (`where`).

use linqrs_core::prelude::{Plan, Sequence, StageInfo};

/// Yields, in upstream order, the elements for which `predicate` holds.
///
/// Every traversal re-evaluates the predicate against the upstream; nothing
/// is cached between traversals.
#[derive(Debug, Clone)]
pub struct Where<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Where<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    pub fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for Where<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Iter<'s> = std::iter::Filter<S::Iter<'s>, &'s P> where Self: 's;

    fn traverse(&self) -> Self::Iter<'_> {
        self.source.traverse().filter(&self.predicate)
    }

    fn plan(&self) -> Plan {
        self.source.plan().with_stage(StageInfo::new("where", None))
    }
}

/// Build a deferred `where` stage. Performs no iteration.
pub fn filter<S, P>(source: S, predicate: P) -> Where<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    Where::new(source, predicate)
}
