use async_trait::async_trait;
use serde::Serialize;

use rtgate_core::error::{Result, RtGateError};

use crate::host::{RpcFunction, RuntimeCtx};

#[derive(Default)]
pub struct HealthCheckRpc;

impl HealthCheckRpc {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Serialize)]
struct HealthCheckResponse {
    success: bool,
}

#[async_trait]
impl RpcFunction for HealthCheckRpc {
    fn id(&self) -> &'static str {
        "health_check"
    }

    async fn call(&self, _ctx: RuntimeCtx, _payload: String) -> Result<String> {
        tracing::debug!("health check rpc called");
        serde_json::to_string(&HealthCheckResponse { success: true }).map_err(|e| {
            tracing::error!(error = %e, "health check response encode failed");
            RtGateError::Marshal(e.to_string())
        })
    }
}
