//! Convenient re-exports for downstream crates.

pub use crate::config::{JoinStrategy, QueryConfig};
pub use crate::error::{Error, Result};
pub use crate::plan::{Plan, StageInfo};
pub use crate::sequence::{ByRef, Once, Sequence};
pub use crate::tracking::{AccessStats, Tracked};
