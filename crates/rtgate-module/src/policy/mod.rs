//! Policy layer (allowlists, gate plan).
//!
//! Compiles allowlist configuration into catalog sets and derives the
//! enabled/disabled split the gate installer consumes.

pub mod allowlist;
pub mod engine;

pub use allowlist::{Allowlists, BUILTIN_REQUEST_ALLOWLIST, BUILTIN_SOCKET_ALLOWLIST};
pub use engine::GatePlan;
