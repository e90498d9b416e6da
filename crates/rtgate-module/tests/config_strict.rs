#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rtgate_module::config;
use rtgate_module::policy::Allowlists;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
allowlist:
  sockets: ["MatchJoin"] # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(Allowlists::compile(&cfg.allowlist).unwrap(), Allowlists::builtin());
    assert_eq!(cfg.ice.api_base, "https://api.twilio.com");
}

#[test]
fn unknown_operation_name_fails_validation() {
    let bad = r#"
version: 1
allowlist:
  request: ["AuthenticateEmail", "AuthenticateTelegram"]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNKNOWN_OPERATION");
}

#[test]
fn explicit_empty_list_gates_whole_family() {
    let cfg = config::load_from_str(
        r#"
version: 1
allowlist:
  socket: []
"#,
    )
    .expect("must parse");
    let allow = Allowlists::compile(&cfg.allowlist).unwrap();
    assert!(allow.socket.is_empty());
    assert_eq!(allow.request, Allowlists::builtin().request);
}

#[test]
fn version_and_ranges_are_checked() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");

    let err = config::load_from_str("version: 1\nice:\n  timeout_ms: 10\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");

    let err = config::load_from_str("version: 1\nice:\n  api_base: \"ftp://x\"\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}
