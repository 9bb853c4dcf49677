#![forbid(unsafe_code)]
//! linqrs-operators: deferred stages, materializers, reducers, and joins.
//!
//! Design intent:
//! - Deferred stages (`filter`, `select`, `cloned`, `take`) only record intent.
//!   They never touch the upstream until a consumer traverses them.
//! - Eager operators walk their input exactly once front-to-back. The one
//!   exception is the nested-loop join, which re-walks the inner side per
//!   outer element.
//! - Every operator is a free function; [`Query`] exposes the same set as
//!   chainable methods.

pub mod aggregate;
pub mod distinct;
pub mod element;
pub mod filter;
pub mod join;
pub mod map;
pub mod materialize;
mod metrics;
pub mod query;
pub mod sort;
pub mod take;

pub use aggregate::{aggregate, count, count_where, max, min, sum, try_aggregate};
pub use distinct::{distinct, distinct_by, distinct_by_with, distinct_with};
pub use element::{first, first_or, first_or_default, last, last_or, last_or_default};
pub use filter::{filter, Where};
pub use join::{hash_join, hash_join_with, join, join_with, nested_loop_join};
pub use map::{cloned, select, Cloned, Select};
pub use materialize::{to_sequence, to_sequence_with};
pub use query::{from, Query};
pub use sort::{order_by, order_by_descending};
pub use take::{take, Take};
