//! Operation catalogs for the realtime backend.
//!
//! Two closed families exist:
//! - socket message operations, gated by name through one generic hook point
//! - request operations, each gated through its own typed hook point
//!
//! Identifiers are contiguous from 0 in declaration order. Lookups by raw
//! index are bounds-checked and resolve to [`OpName::Unknown`] when the host
//! reports an operation newer than this catalog.

pub mod partition;
pub mod request;
pub mod socket;

use std::fmt;
use std::hash::Hash;

pub use partition::{remove_value, Partition};
pub use request::RequestOp;
pub use socket::SocketOp;

/// Operation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Realtime socket envelopes (channels, matches, parties, status).
    Socket,
    /// Request/response API calls (accounts, social, storage, groups).
    Request,
}

impl Family {
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Socket => "socket",
            Family::Request => "request",
        }
    }

    /// Type label used in sentinel names, e.g. `SocketOp(42)`.
    pub fn type_label(self) -> &'static str {
        match self {
            Family::Socket => "SocketOp",
            Family::Request => "RequestOp",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member of one closed operation catalog.
pub trait Operation:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const FAMILY: Family;

    /// Every operation of the family, in index order.
    const ALL: &'static [Self];

    /// Canonical host name.
    fn name(self) -> &'static str;

    /// Position in [`Operation::ALL`].
    fn index(self) -> u16;

    fn from_index(index: u16) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.name() == name)
    }

    /// Bounds-checked name lookup; never fails.
    fn lookup_name(index: u16) -> OpName {
        match Self::from_index(index) {
            Some(op) => OpName::Known(op.name()),
            None => OpName::Unknown {
                family: Self::FAMILY,
                index,
            },
        }
    }
}

/// Result of a raw-index name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpName {
    Known(&'static str),
    /// Index outside the catalog (host is newer than this build).
    Unknown { family: Family, index: u16 },
}

impl OpName {
    pub fn is_known(&self) -> bool {
        matches!(self, OpName::Known(_))
    }
}

impl fmt::Display for OpName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpName::Known(name) => f.write_str(name),
            OpName::Unknown { family, index } => write!(f, "{}({})", family.type_label(), index),
        }
    }
}

/// Render operations as `[A, B, C]` for log lines.
pub fn format_list<O: Operation>(ops: &[O]) -> String {
    let names: Vec<&str> = ops.iter().map(|op| op.name()).collect();
    format!("[{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_index_yields_sentinel() {
        let n = SocketOp::lookup_name(42);
        assert!(!n.is_known());
        assert_eq!(n.to_string(), "SocketOp(42)");

        let n = RequestOp::lookup_name(RequestOp::ALL.len() as u16);
        assert_eq!(n.to_string(), format!("RequestOp({})", RequestOp::ALL.len()));
    }

    #[test]
    fn in_range_index_yields_canonical_name() {
        assert_eq!(SocketOp::lookup_name(0), OpName::Known("ChannelJoin"));
        assert_eq!(RequestOp::lookup_name(6), OpName::Known("AuthenticateEmail"));
    }

    #[test]
    fn format_list_brackets_names() {
        let s = format_list(&[SocketOp::MatchJoin, SocketOp::MatchLeave]);
        assert_eq!(s, "[MatchJoin, MatchLeave]");
        assert_eq!(format_list::<RequestOp>(&[]), "[]");
    }
}
