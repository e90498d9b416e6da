//! Allowlist compilation.
//!
//! Entries are canonical operation names. Names outside the catalog are
//! rejected so an allowlist is always a subset of its catalog; repeated names
//! are accepted and logged.

use std::collections::BTreeSet;

use rtgate_core::catalog::{Operation, RequestOp, SocketOp};
use rtgate_core::error::{Result, RtGateError};

use crate::config::schema::AllowlistSection;

/// Socket operations left enabled by the shipped build.
pub const BUILTIN_SOCKET_ALLOWLIST: &[SocketOp] =
    &[SocketOp::MatchJoin, SocketOp::MatchCreate, SocketOp::MatchLeave];

/// Request operations left enabled by the shipped build.
pub const BUILTIN_REQUEST_ALLOWLIST: &[RequestOp] = &[RequestOp::AuthenticateEmail];

pub fn compile_allowlist<O: Operation>(raw: &[String]) -> Result<BTreeSet<O>> {
    let mut out = BTreeSet::new();
    for name in raw {
        let op = O::from_name(name).ok_or_else(|| RtGateError::UnknownOperation {
            family: O::FAMILY.as_str(),
            name: name.clone(),
        })?;
        if !out.insert(op) {
            tracing::warn!(family = %O::FAMILY, op = %op, "allowlist entry repeated");
        }
    }
    Ok(out)
}

/// Compiled allowlists for both families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allowlists {
    pub socket: BTreeSet<SocketOp>,
    pub request: BTreeSet<RequestOp>,
}

impl Allowlists {
    pub fn builtin() -> Self {
        Self {
            socket: BUILTIN_SOCKET_ALLOWLIST.iter().copied().collect(),
            request: BUILTIN_REQUEST_ALLOWLIST.iter().copied().collect(),
        }
    }

    pub fn compile(section: &AllowlistSection) -> Result<Self> {
        Ok(Self {
            socket: compile_allowlist(&section.socket)?,
            request: compile_allowlist(&section.request)?,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = compile_allowlist::<SocketOp>(&names(&["MatchJoin", "match_join"])).unwrap_err();
        assert_eq!(err.code().as_str(), "UNKNOWN_OPERATION");
    }

    #[test]
    fn request_names_do_not_resolve_as_socket_ops() {
        assert!(compile_allowlist::<SocketOp>(&names(&["AuthenticateEmail"])).is_err());
    }

    #[test]
    fn repeats_collapse() {
        let set = compile_allowlist::<RequestOp>(&names(&["GetUsers", "GetUsers"])).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn default_section_compiles_to_builtin() {
        let compiled = Allowlists::compile(&AllowlistSection::default()).unwrap();
        assert_eq!(compiled, Allowlists::builtin());
    }
}
