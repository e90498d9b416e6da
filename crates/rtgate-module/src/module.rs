//! Module entry point.
//!
//! Order at load: custom RPCs, then gates. Either step failing fails the
//! load; nothing is retried.

use std::time::Instant;

use tracing::info;

use rtgate_core::error::Result;

use crate::config::GuardConfig;
use crate::gates::{self, GateReport};
use crate::host::Initializer;
use crate::policy::Allowlists;
use crate::rpc;

/// Load with the built-in allowlists.
pub fn init_module(init: &dyn Initializer) -> Result<GateReport> {
    init_module_with(&GuardConfig::default(), init)
}

pub fn init_module_with(cfg: &GuardConfig, init: &dyn Initializer) -> Result<GateReport> {
    let started = Instant::now();

    // Resolve names before touching the host.
    let allow = Allowlists::compile(&cfg.allowlist)?;

    rpc::register_rpcs(init, cfg)?;
    let report = gates::install_gates(&allow, init)?;

    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        socket_gated = report.socket_gated,
        request_gated = report.request_gated,
        "module loaded"
    );
    Ok(report)
}
