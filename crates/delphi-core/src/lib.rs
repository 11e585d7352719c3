//! Delphi core: the in-memory counter store and the shared error surface.
//!
//! This crate owns every counter mutation (lazy creation, increment, delete)
//! and carries no transport or runtime dependencies, so the store can be
//! exercised directly in tests without any HTTP framing.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `DelphiError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;

pub use counter::{Clock, Counter, CounterId, CounterStore, SystemClock};
/// Shared result type.
pub use error::{ClientCode, DelphiError, Result};
