//! Tally core: counter value semantics, the storage seam, and error types.
//!
//! This crate defines the domain contracts shared by the server and test
//! tooling. It intentionally carries no transport or runtime dependencies so
//! it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TallyError`/`Result` so the serving
//! process does not crash on bad stored data or storage failures.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod store;
pub mod value;

/// Shared result type.
pub use error::{Result, TallyError};
pub use store::{CounterStore, MemStore};
