//! Realtime socket envelope (JSON).
//!
//! The module only reads the message key; `data` stays a `RawValue` and is
//! never parsed here.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::catalog::{Operation, SocketOp};

/// One realtime socket message as delivered to a before-hook.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    /// Client correlation id, echoed on replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,
    /// Message key (e.g. "MatchJoin").
    pub message: String,
    /// Message body, kept raw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Box<RawValue>>,
}

impl Envelope {
    pub fn new(op: SocketOp) -> Self {
        Self {
            cid: None,
            message: op.name().to_string(),
            data: None,
        }
    }

    /// Catalog operation for the message key, if this build knows it.
    pub fn op(&self) -> Option<SocketOp> {
        SocketOp::from_name(&self.message)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn parses_known_message() {
        let env: Envelope =
            serde_json::from_str(r#"{"cid":"7","message":"MatchJoin","data":{"match_id":"m1"}}"#).unwrap();
        assert_eq!(env.op(), Some(SocketOp::MatchJoin));
        assert_eq!(env.cid.as_deref(), Some("7"));
        assert!(env.data.unwrap().get().contains("m1"));
    }

    #[test]
    fn unknown_message_key_has_no_op() {
        let env: Envelope = serde_json::from_str(r#"{"message":"PartyUpdate"}"#).unwrap();
        assert_eq!(env.op(), None);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(serde_json::from_str::<Envelope>(r#"{"message":"Ping","extra":1}"#).is_err());
    }
}
