//! Gate installer.
//!
//! Computes the disabled half of each catalog and registers a suppressing
//! before-hook for every member, socket family first. Installation is
//! fail-fast: the first refused registration is returned and hooks already
//! handed to the host stay registered.
//!
//! Operations the host adds after this catalog was built are never gated.

pub mod request;
pub mod socket;

use tracing::debug;

use rtgate_core::catalog::format_list;
use rtgate_core::error::Result;

use crate::host::Initializer;
use crate::policy::{Allowlists, GatePlan};

/// Counts of hooks handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateReport {
    pub socket_gated: usize,
    pub request_gated: usize,
}

pub fn install_gates(allow: &Allowlists, init: &dyn Initializer) -> Result<GateReport> {
    let plan = GatePlan::compute(allow);

    debug!(enabled = %format_list(&plan.socket.enabled), "socket operations left enabled");
    socket::install(&plan.socket.disabled, init)?;

    debug!(enabled = %format_list(&plan.request.enabled), "request operations left enabled");
    request::install(&plan.request.disabled, init)?;

    Ok(GateReport {
        socket_gated: plan.socket.disabled.len(),
        request_gated: plan.request.disabled.len(),
    })
}
