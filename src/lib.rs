#![forbid(unsafe_code)]
//! linqrs: composable deferred and eager query operators over Rust sequences.
//!
//! - `linqrs-core` defines the [`Sequence`] contract, [`Error`], [`QueryConfig`]
//!   and [`Plan`].
//! - `linqrs-operators` implements the operators, plus the chainable [`Query`]
//!   extension trait.
//!
//! ```
//! use linqrs::{from, Query};
//!
//! let numbers = [1, 3, 5, 2, 8, 6, 7, 4, 10, 9];
//! let src = from(numbers.as_slice());
//! assert_eq!(src.sum::<i32>(), 55);
//! assert_eq!(src.count_where(|n| **n > 5), 5);
//! ```

pub use linqrs_core::prelude::*;
pub use linqrs_operators::*;
