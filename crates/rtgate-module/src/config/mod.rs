//! Module config loader (strict parsing).
//!
//! Hosts that ship without a config file get [`GuardConfig::default`], which
//! carries the built-in allowlists.

pub mod schema;

use std::fs;

use rtgate_core::error::{Result, RtGateError};

pub use schema::{AllowlistSection, GuardConfig, IceSection};

pub fn load_from_file(path: &str) -> Result<GuardConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| RtGateError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GuardConfig> {
    let cfg: GuardConfig = serde_yaml::from_str(s)
        .map_err(|e| RtGateError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
