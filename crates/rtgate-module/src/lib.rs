//! rtgate extension module.
//!
//! Loaded by the realtime backend at startup. It registers the module's own
//! RPCs and then puts a suppressing before-hook on every backend operation
//! that is not on the allowlist. The backend keeps serving the allowed ones.
//!
//! [`host::MemoryInitializer`] stands in for the backend in tests and
//! dry runs.

pub mod config;
pub mod gates;
pub mod host;
pub mod module;
pub mod policy;
pub mod rpc;

pub use module::{init_module, init_module_with};
