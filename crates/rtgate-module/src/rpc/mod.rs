//! Custom RPC endpoints.
//!
//! Independent of the gates: registered first at module load, no shared
//! state between endpoints.

pub mod health;
pub mod ice;

use std::sync::Arc;

use rtgate_core::error::Result;

use crate::config::GuardConfig;
use crate::host::{Initializer, RpcFunction};

pub use health::HealthCheckRpc;
pub use ice::IceServersRpc;

pub fn register_rpcs(init: &dyn Initializer, cfg: &GuardConfig) -> Result<()> {
    let rpcs: [Arc<dyn RpcFunction>; 2] = [
        Arc::new(HealthCheckRpc::new()),
        Arc::new(IceServersRpc::new(&cfg.ice)?),
    ];

    for rpc in rpcs {
        init.register_rpc(rpc.id(), Arc::clone(&rpc))?;
        tracing::debug!(rpc = rpc.id(), "rpc registered");
    }
    Ok(())
}
