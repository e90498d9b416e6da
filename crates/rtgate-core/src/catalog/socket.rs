//! Realtime socket message operations.
//!
//! Names match the envelope message keys the host uses when dispatching
//! before-hooks for socket traffic.

use std::fmt;

use super::{Family, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SocketOp {
    // channels
    ChannelJoin = 0,
    ChannelLeave,
    ChannelMessageSend,
    ChannelMessageUpdate,
    ChannelMessageRemove,
    // matches
    MatchCreate,
    MatchDataSend,
    MatchJoin,
    MatchLeave,
    // matchmaker
    MatchmakerAdd,
    MatchmakerRemove,
    // parties
    PartyCreate,
    PartyJoin,
    PartyLeave,
    PartyPromote,
    PartyAccept,
    PartyRemove,
    PartyClose,
    PartyJoinRequestList,
    PartyMatchmakerAdd,
    PartyMatchmakerRemove,
    PartyDataSend,
    // keepalive / rpc
    Ping,
    Pong,
    Rpc,
    // status
    StatusFollow,
    StatusUnfollow,
    StatusUpdate,
}

impl Operation for SocketOp {
    const FAMILY: Family = Family::Socket;

    const ALL: &'static [Self] = &[
        SocketOp::ChannelJoin,
        SocketOp::ChannelLeave,
        SocketOp::ChannelMessageSend,
        SocketOp::ChannelMessageUpdate,
        SocketOp::ChannelMessageRemove,
        SocketOp::MatchCreate,
        SocketOp::MatchDataSend,
        SocketOp::MatchJoin,
        SocketOp::MatchLeave,
        SocketOp::MatchmakerAdd,
        SocketOp::MatchmakerRemove,
        SocketOp::PartyCreate,
        SocketOp::PartyJoin,
        SocketOp::PartyLeave,
        SocketOp::PartyPromote,
        SocketOp::PartyAccept,
        SocketOp::PartyRemove,
        SocketOp::PartyClose,
        SocketOp::PartyJoinRequestList,
        SocketOp::PartyMatchmakerAdd,
        SocketOp::PartyMatchmakerRemove,
        SocketOp::PartyDataSend,
        SocketOp::Ping,
        SocketOp::Pong,
        SocketOp::Rpc,
        SocketOp::StatusFollow,
        SocketOp::StatusUnfollow,
        SocketOp::StatusUpdate,
    ];

    fn name(self) -> &'static str {
        match self {
            SocketOp::ChannelJoin => "ChannelJoin",
            SocketOp::ChannelLeave => "ChannelLeave",
            SocketOp::ChannelMessageSend => "ChannelMessageSend",
            SocketOp::ChannelMessageUpdate => "ChannelMessageUpdate",
            SocketOp::ChannelMessageRemove => "ChannelMessageRemove",
            SocketOp::MatchCreate => "MatchCreate",
            SocketOp::MatchDataSend => "MatchDataSend",
            SocketOp::MatchJoin => "MatchJoin",
            SocketOp::MatchLeave => "MatchLeave",
            SocketOp::MatchmakerAdd => "MatchmakerAdd",
            SocketOp::MatchmakerRemove => "MatchmakerRemove",
            SocketOp::PartyCreate => "PartyCreate",
            SocketOp::PartyJoin => "PartyJoin",
            SocketOp::PartyLeave => "PartyLeave",
            SocketOp::PartyPromote => "PartyPromote",
            SocketOp::PartyAccept => "PartyAccept",
            SocketOp::PartyRemove => "PartyRemove",
            SocketOp::PartyClose => "PartyClose",
            SocketOp::PartyJoinRequestList => "PartyJoinRequestList",
            SocketOp::PartyMatchmakerAdd => "PartyMatchmakerAdd",
            SocketOp::PartyMatchmakerRemove => "PartyMatchmakerRemove",
            SocketOp::PartyDataSend => "PartyDataSend",
            SocketOp::Ping => "Ping",
            SocketOp::Pong => "Pong",
            SocketOp::Rpc => "Rpc",
            SocketOp::StatusFollow => "StatusFollow",
            SocketOp::StatusUnfollow => "StatusUnfollow",
            SocketOp::StatusUpdate => "StatusUpdate",
        }
    }

    fn index(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for SocketOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_contiguous_from_zero() {
        assert_eq!(SocketOp::ALL.len(), 28);
        for (i, op) in SocketOp::ALL.iter().enumerate() {
            assert_eq!(usize::from(op.index()), i, "op={op}");
        }
    }

    #[test]
    fn names_resolve_back_to_variants() {
        for op in SocketOp::ALL {
            assert_eq!(SocketOp::from_name(op.name()), Some(*op));
        }
        assert_eq!(SocketOp::from_name("matchjoin"), None);
    }
}
