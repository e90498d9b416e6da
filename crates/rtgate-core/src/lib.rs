//! rtgate core: host-agnostic operation catalogs, partition math, and the
//! shared error surface.
//!
//! This crate knows every operation the realtime backend exposes but nothing
//! about how the backend registers hooks. The extension module builds on it
//! to install gates; tests and tooling can use it on its own.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Out-of-range operation ids resolve to a sentinel name instead of failing.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod catalog;
pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, RtGateError};
