//! `get_ice_servers`: proxies one TURN credential request to the telephony
//! token API and returns its JSON body wrapped as `{"response": ...}`.
//!
//! Credentials come from the host's runtime env:
//! - `twilio_account_sid`
//! - `twilio_auth_token`
//! - `twilio_turn_credentials_ttl` (seconds)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Serialize;
use serde_json::value::RawValue;

use rtgate_core::error::{Result, RtGateError};

use crate::config::IceSection;
use crate::host::{RpcFunction, RuntimeCtx};

pub const ENV_ACCOUNT_SID: &str = "twilio_account_sid";
pub const ENV_AUTH_TOKEN: &str = "twilio_auth_token";
pub const ENV_CREDENTIALS_TTL: &str = "twilio_turn_credentials_ttl";

fn server_error() -> RtGateError {
    RtGateError::Unavailable("server error".into())
}

/// One token request, resolved from the runtime env.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    pub account_sid: String,
    pub auth_token: String,
    pub ttl_secs: u64,
}

impl TokenRequest {
    pub fn from_env(ctx: &RuntimeCtx) -> Result<Self> {
        let required = |key: &str| -> Result<String> {
            match ctx.env_var(key) {
                Some(v) if !v.is_empty() => Ok(v.to_string()),
                _ => {
                    tracing::error!(key, "ice servers env var missing");
                    Err(server_error())
                }
            }
        };

        let account_sid = required(ENV_ACCOUNT_SID)?;
        let auth_token = required(ENV_AUTH_TOKEN)?;
        let ttl_secs = required(ENV_CREDENTIALS_TTL)?.parse::<u64>().map_err(|e| {
            tracing::error!(error = %e, "ice servers ttl is not a number");
            server_error()
        })?;

        Ok(Self {
            account_sid,
            auth_token,
            ttl_secs,
        })
    }

    pub fn url(&self, api_base: &str) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Tokens.json",
            api_base.trim_end_matches('/'),
            self.account_sid
        )
    }

    pub fn form_body(&self) -> String {
        format!("Ttl={}", self.ttl_secs)
    }
}

#[derive(Serialize)]
struct IceServersResponse<'a> {
    response: &'a RawValue,
}

/// Wrap the upstream body without re-encoding it.
pub fn wrap_response(body: &str) -> Result<String> {
    let raw: &RawValue = serde_json::from_str(body).map_err(|e| {
        tracing::error!(error = %e, "token api returned invalid json");
        RtGateError::Marshal(e.to_string())
    })?;
    serde_json::to_string(&IceServersResponse { response: raw }).map_err(|e| {
        tracing::error!(error = %e, "ice servers response encode failed");
        RtGateError::Marshal(e.to_string())
    })
}

pub struct IceServersRpc {
    http: Client,
    api_base: String,
}

impl IceServersRpc {
    pub fn new(cfg: &IceSection) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .map_err(|e| RtGateError::Internal(format!("http client build failed: {e}")))?;
        Ok(Self {
            http,
            api_base: cfg.api_base.clone(),
        })
    }
}

#[async_trait]
impl RpcFunction for IceServersRpc {
    fn id(&self) -> &'static str {
        "get_ice_servers"
    }

    async fn call(&self, ctx: RuntimeCtx, _payload: String) -> Result<String> {
        let req = TokenRequest::from_env(&ctx)?;

        let res = self
            .http
            .post(req.url(&self.api_base))
            .basic_auth(&req.account_sid, Some(&req.auth_token))
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(req.form_body())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "token api request failed");
                server_error()
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            tracing::error!(error = %e, "token api body read failed");
            server_error()
        })?;

        if status != StatusCode::CREATED {
            tracing::error!(%status, "token api refused credentials request");
            return Err(server_error());
        }

        wrap_response(&body)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::collections::HashMap;

    use super::*;

    fn ctx(pairs: &[(&str, &str)]) -> RuntimeCtx {
        RuntimeCtx::with_env(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn token_request_from_env() {
        let req = TokenRequest::from_env(&ctx(&[
            (ENV_ACCOUNT_SID, "AC123"),
            (ENV_AUTH_TOKEN, "secret"),
            (ENV_CREDENTIALS_TTL, "3600"),
        ]))
        .unwrap();

        assert_eq!(req.ttl_secs, 3600);
        assert_eq!(
            req.url("https://api.twilio.com/"),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/Tokens.json"
        );
        assert_eq!(req.form_body(), "Ttl=3600");
    }

    #[test]
    fn missing_or_bad_env_is_server_error() {
        let err = TokenRequest::from_env(&ctx(&[(ENV_ACCOUNT_SID, "AC123")])).unwrap_err();
        assert_eq!(err.code().grpc_code(), 14);

        let err = TokenRequest::from_env(&ctx(&[
            (ENV_ACCOUNT_SID, "AC123"),
            (ENV_AUTH_TOKEN, "secret"),
            (ENV_CREDENTIALS_TTL, "an hour"),
        ]))
        .unwrap_err();
        assert_eq!(err.code().as_str(), "UNAVAILABLE");
    }

    #[test]
    fn upstream_body_is_embedded_verbatim() {
        let body = r#"{"ice_servers":[{"urls":"stun:global.stun.twilio.com:3478"}],"ttl":"3600"}"#;
        let out = wrap_response(body).unwrap();
        assert_eq!(out, format!(r#"{{"response":{body}}}"#));

        assert_eq!(wrap_response("<html>").unwrap_err().code().as_str(), "MARSHAL");
    }
}
