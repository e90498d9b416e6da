//! Module load sequence against the in-memory host.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use rtgate_core::catalog::RequestOp;
use rtgate_module::config;
use rtgate_module::host::{Initializer, MemoryInitializer, RuntimeCtx};
use rtgate_module::rpc::HealthCheckRpc;
use rtgate_module::{init_module, init_module_with};

#[tokio::test]
async fn load_registers_rpcs_and_gates() {
    let host = MemoryInitializer::new();
    let report = init_module(&host).unwrap();

    assert_eq!(report.socket_gated, 25);
    assert_eq!(report.request_gated, 67);
    assert_eq!(host.rpc_ids(), vec!["get_ice_servers", "health_check"]);

    let out = host
        .call_rpc("health_check", RuntimeCtx::default(), String::new())
        .await
        .unwrap();
    assert_eq!(out, r#"{"success":true}"#);
}

#[tokio::test]
async fn ice_servers_without_env_is_unavailable() {
    let host = MemoryInitializer::new();
    init_module(&host).unwrap();

    let err = host
        .call_rpc("get_ice_servers", RuntimeCtx::default(), "{}".into())
        .await
        .unwrap_err();
    assert_eq!(err.code().grpc_code(), 14);
}

#[tokio::test]
async fn unknown_rpc_is_not_found() {
    let host = MemoryInitializer::new();
    let err = host
        .call_rpc("matchmake", RuntimeCtx::default(), String::new())
        .await
        .unwrap_err();
    assert_eq!(err.code().as_str(), "NOT_FOUND");
}

#[test]
fn rpcs_are_registered_before_gates() {
    let host = MemoryInitializer::new();
    host.register_rpc("health_check", Arc::new(HealthCheckRpc::new()))
        .unwrap();

    let err = init_module(&host).unwrap_err();
    assert_eq!(err.code().as_str(), "DUPLICATE");
    assert!(host.before_rt_names().is_empty());
    assert!(host.before_request_ops().is_empty());
}

#[test]
fn bad_allowlist_fails_before_touching_host() {
    let mut cfg = config::GuardConfig::default();
    cfg.allowlist.socket.push("Teleport".into());

    let host = MemoryInitializer::new();
    let err = init_module_with(&cfg, &host).unwrap_err();
    assert_eq!(err.code().as_str(), "UNKNOWN_OPERATION");
    assert!(host.rpc_ids().is_empty());
}

#[test]
fn configured_allowlist_drives_gates() {
    let cfg = config::load_from_str(
        r#"
version: 1
allowlist:
  socket: ["Ping", "Pong", "Rpc"]
  request: ["AuthenticateDevice", "GetAccount", "SessionRefresh"]
"#,
    )
    .unwrap();

    let host = MemoryInitializer::new();
    let report = init_module_with(&cfg, &host).unwrap();

    assert_eq!(report.socket_gated, 25);
    assert_eq!(report.request_gated, 65);
    assert!(host.has_before_rt("MatchJoin"));
    assert!(!host.has_before_rt("Ping"));
    assert!(!host.has_before_request(RequestOp::GetAccount));
    assert!(host.has_before_request(RequestOp::AuthenticateEmail));
}
