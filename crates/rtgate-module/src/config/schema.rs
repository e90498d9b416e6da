use serde::Deserialize;

use rtgate_core::catalog::Operation;
use rtgate_core::error::{Result, RtGateError};

use crate::policy::{Allowlists, BUILTIN_REQUEST_ALLOWLIST, BUILTIN_SOCKET_ALLOWLIST};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuardConfig {
    pub version: u32,

    #[serde(default)]
    pub allowlist: AllowlistSection,

    #[serde(default)]
    pub ice: IceSection,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            version: 1,
            allowlist: AllowlistSection::default(),
            ice: IceSection::default(),
        }
    }
}

impl GuardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RtGateError::UnsupportedVersion);
        }

        Allowlists::compile(&self.allowlist)?; // names must exist in the catalog
        self.ice.validate()?;

        Ok(())
    }
}

/// Operation names left enabled, per family. Omitted lists fall back to the
/// built-in ones; an explicit empty list gates the whole family.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AllowlistSection {
    #[serde(default = "default_socket_allowlist")]
    pub socket: Vec<String>,

    #[serde(default = "default_request_allowlist")]
    pub request: Vec<String>,
}

impl Default for AllowlistSection {
    fn default() -> Self {
        Self {
            socket: default_socket_allowlist(),
            request: default_request_allowlist(),
        }
    }
}

fn default_socket_allowlist() -> Vec<String> {
    BUILTIN_SOCKET_ALLOWLIST.iter().map(|op| op.name().to_string()).collect()
}
fn default_request_allowlist() -> Vec<String> {
    BUILTIN_REQUEST_ALLOWLIST.iter().map(|op| op.name().to_string()).collect()
}

/// Outbound token API used by `get_ice_servers`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IceSection {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for IceSection {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl IceSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base.starts_with("https://") || self.api_base.starts_with("http://")) {
            return Err(RtGateError::BadRequest(
                "ice.api_base must be an http(s) url".into(),
            ));
        }
        if !(1000..=30000).contains(&self.timeout_ms) {
            return Err(RtGateError::BadRequest(
                "ice.timeout_ms must be between 1000 and 30000".into(),
            ));
        }
        Ok(())
    }
}

fn default_api_base() -> String {
    "https://api.twilio.com".into()
}
fn default_timeout_ms() -> u64 {
    5000
}
