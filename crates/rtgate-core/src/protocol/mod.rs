//! Wire-level shapes the module sees when the host hands it socket traffic.

pub mod envelope;

pub use envelope::Envelope;
