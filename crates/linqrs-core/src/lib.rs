#![forbid(unsafe_code)]
//! linqrs-core: the sequence contract, errors, config, and plan descriptions.
//!
//! Everything operator-shaped lives in `linqrs-operators`; this crate only
//! defines what a source has to provide:
//! - a re-startable, forward-only traversal (`Sequence::traverse`),
//! - an optional O(1) length (`Sequence::known_len`), and
//! - an inert description of how it was built (`Sequence::plan`).

pub mod config;
pub mod error;
pub mod plan;
pub mod prelude;
pub mod sequence;
pub mod tracking;

pub use config::{JoinStrategy, QueryConfig};
pub use error::{Error, Result};
pub use plan::{Plan, StageInfo};
pub use sequence::{ByRef, Once, Sequence};
pub use tracking::{AccessStats, Tracked};
