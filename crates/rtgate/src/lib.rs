//! Top-level facade crate for rtgate.
//!
//! Re-exports the catalog primitives and the extension module so hosts can depend on a single crate.

pub mod core {
    pub use rtgate_core::*;
}

pub mod module {
    pub use rtgate_module::*;
}
