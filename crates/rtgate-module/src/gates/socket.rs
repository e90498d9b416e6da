//! Socket-family gates: one name-keyed hook per disabled message.

use tracing::debug;

use rtgate_core::catalog::{Operation, SocketOp};
use rtgate_core::error::Result;
use rtgate_core::protocol::Envelope;

use crate::host::{BeforeRtHook, Initializer, RuntimeCtx};

/// Hook that drops every envelope it sees.
pub fn suppress_rt() -> BeforeRtHook {
    Box::new(|_ctx: &RuntimeCtx, _env: Envelope| Ok(None))
}

/// Register a dropping hook for each op. Stops at the first host error.
pub fn install(disabled: &[SocketOp], init: &dyn Initializer) -> Result<()> {
    for op in disabled {
        init.register_before_rt(op.name(), suppress_rt())?;
        debug!(op = %op, "socket operation gated");
    }
    Ok(())
}
