//! Request/response API operations.
//!
//! Each variant has a dedicated, typed before-hook registration call on the
//! host; there is no name-keyed hook point for this family. New variants are
//! appended so existing indices stay stable.

use std::fmt;

use super::{Family, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum RequestOp {
    // account / session
    GetAccount = 0,
    UpdateAccount,
    SessionRefresh,
    // authentication
    AuthenticateApple,
    AuthenticateCustom,
    AuthenticateDevice,
    AuthenticateEmail,
    AuthenticateFacebook,
    AuthenticateFacebookInstantGame,
    AuthenticateGameCenter,
    AuthenticateGoogle,
    AuthenticateSteam,
    // social
    ListChannelMessages,
    ListFriends,
    AddFriends,
    DeleteFriends,
    BlockFriends,
    ImportFacebookFriends,
    // groups
    CreateGroup,
    UpdateGroup,
    DeleteGroup,
    JoinGroup,
    LeaveGroup,
    AddGroupUsers,
    BanGroupUsers,
    KickGroupUsers,
    PromoteGroupUsers,
    DemoteGroupUsers,
    ListGroupUsers,
    ListUserGroups,
    ListGroups,
    // leaderboards
    DeleteLeaderboardRecord,
    ListLeaderboardRecords,
    WriteLeaderboardRecord,
    ListLeaderboardRecordsAroundOwner,
    // account linking
    LinkApple,
    LinkCustom,
    LinkDevice,
    LinkEmail,
    LinkFacebook,
    LinkFacebookInstantGame,
    LinkGameCenter,
    LinkGoogle,
    LinkSteam,
    // matches / notifications / storage
    ListMatches,
    ListNotifications,
    DeleteNotifications,
    ListStorageObjects,
    ReadStorageObjects,
    WriteStorageObjects,
    DeleteStorageObjects,
    // tournaments
    JoinTournament,
    ListTournamentRecords,
    ListTournaments,
    WriteTournamentRecord,
    ListTournamentRecordsAroundOwner,
    // account unlinking
    UnlinkApple,
    UnlinkCustom,
    UnlinkDevice,
    UnlinkEmail,
    UnlinkFacebook,
    UnlinkFacebookInstantGame,
    UnlinkGameCenter,
    UnlinkGoogle,
    UnlinkSteam,
    // users
    GetUsers,
    // session / account lifecycle
    SessionLogout,
    DeleteAccount,
}

impl Operation for RequestOp {
    const FAMILY: Family = Family::Request;

    const ALL: &'static [Self] = &[
        RequestOp::GetAccount,
        RequestOp::UpdateAccount,
        RequestOp::SessionRefresh,
        RequestOp::AuthenticateApple,
        RequestOp::AuthenticateCustom,
        RequestOp::AuthenticateDevice,
        RequestOp::AuthenticateEmail,
        RequestOp::AuthenticateFacebook,
        RequestOp::AuthenticateFacebookInstantGame,
        RequestOp::AuthenticateGameCenter,
        RequestOp::AuthenticateGoogle,
        RequestOp::AuthenticateSteam,
        RequestOp::ListChannelMessages,
        RequestOp::ListFriends,
        RequestOp::AddFriends,
        RequestOp::DeleteFriends,
        RequestOp::BlockFriends,
        RequestOp::ImportFacebookFriends,
        RequestOp::CreateGroup,
        RequestOp::UpdateGroup,
        RequestOp::DeleteGroup,
        RequestOp::JoinGroup,
        RequestOp::LeaveGroup,
        RequestOp::AddGroupUsers,
        RequestOp::BanGroupUsers,
        RequestOp::KickGroupUsers,
        RequestOp::PromoteGroupUsers,
        RequestOp::DemoteGroupUsers,
        RequestOp::ListGroupUsers,
        RequestOp::ListUserGroups,
        RequestOp::ListGroups,
        RequestOp::DeleteLeaderboardRecord,
        RequestOp::ListLeaderboardRecords,
        RequestOp::WriteLeaderboardRecord,
        RequestOp::ListLeaderboardRecordsAroundOwner,
        RequestOp::LinkApple,
        RequestOp::LinkCustom,
        RequestOp::LinkDevice,
        RequestOp::LinkEmail,
        RequestOp::LinkFacebook,
        RequestOp::LinkFacebookInstantGame,
        RequestOp::LinkGameCenter,
        RequestOp::LinkGoogle,
        RequestOp::LinkSteam,
        RequestOp::ListMatches,
        RequestOp::ListNotifications,
        RequestOp::DeleteNotifications,
        RequestOp::ListStorageObjects,
        RequestOp::ReadStorageObjects,
        RequestOp::WriteStorageObjects,
        RequestOp::DeleteStorageObjects,
        RequestOp::JoinTournament,
        RequestOp::ListTournamentRecords,
        RequestOp::ListTournaments,
        RequestOp::WriteTournamentRecord,
        RequestOp::ListTournamentRecordsAroundOwner,
        RequestOp::UnlinkApple,
        RequestOp::UnlinkCustom,
        RequestOp::UnlinkDevice,
        RequestOp::UnlinkEmail,
        RequestOp::UnlinkFacebook,
        RequestOp::UnlinkFacebookInstantGame,
        RequestOp::UnlinkGameCenter,
        RequestOp::UnlinkGoogle,
        RequestOp::UnlinkSteam,
        RequestOp::GetUsers,
        RequestOp::SessionLogout,
        RequestOp::DeleteAccount,
    ];

    fn name(self) -> &'static str {
        match self {
            RequestOp::GetAccount => "GetAccount",
            RequestOp::UpdateAccount => "UpdateAccount",
            RequestOp::SessionRefresh => "SessionRefresh",
            RequestOp::AuthenticateApple => "AuthenticateApple",
            RequestOp::AuthenticateCustom => "AuthenticateCustom",
            RequestOp::AuthenticateDevice => "AuthenticateDevice",
            RequestOp::AuthenticateEmail => "AuthenticateEmail",
            RequestOp::AuthenticateFacebook => "AuthenticateFacebook",
            RequestOp::AuthenticateFacebookInstantGame => "AuthenticateFacebookInstantGame",
            RequestOp::AuthenticateGameCenter => "AuthenticateGameCenter",
            RequestOp::AuthenticateGoogle => "AuthenticateGoogle",
            RequestOp::AuthenticateSteam => "AuthenticateSteam",
            RequestOp::ListChannelMessages => "ListChannelMessages",
            RequestOp::ListFriends => "ListFriends",
            RequestOp::AddFriends => "AddFriends",
            RequestOp::DeleteFriends => "DeleteFriends",
            RequestOp::BlockFriends => "BlockFriends",
            RequestOp::ImportFacebookFriends => "ImportFacebookFriends",
            RequestOp::CreateGroup => "CreateGroup",
            RequestOp::UpdateGroup => "UpdateGroup",
            RequestOp::DeleteGroup => "DeleteGroup",
            RequestOp::JoinGroup => "JoinGroup",
            RequestOp::LeaveGroup => "LeaveGroup",
            RequestOp::AddGroupUsers => "AddGroupUsers",
            RequestOp::BanGroupUsers => "BanGroupUsers",
            RequestOp::KickGroupUsers => "KickGroupUsers",
            RequestOp::PromoteGroupUsers => "PromoteGroupUsers",
            RequestOp::DemoteGroupUsers => "DemoteGroupUsers",
            RequestOp::ListGroupUsers => "ListGroupUsers",
            RequestOp::ListUserGroups => "ListUserGroups",
            RequestOp::ListGroups => "ListGroups",
            RequestOp::DeleteLeaderboardRecord => "DeleteLeaderboardRecord",
            RequestOp::ListLeaderboardRecords => "ListLeaderboardRecords",
            RequestOp::WriteLeaderboardRecord => "WriteLeaderboardRecord",
            RequestOp::ListLeaderboardRecordsAroundOwner => "ListLeaderboardRecordsAroundOwner",
            RequestOp::LinkApple => "LinkApple",
            RequestOp::LinkCustom => "LinkCustom",
            RequestOp::LinkDevice => "LinkDevice",
            RequestOp::LinkEmail => "LinkEmail",
            RequestOp::LinkFacebook => "LinkFacebook",
            RequestOp::LinkFacebookInstantGame => "LinkFacebookInstantGame",
            RequestOp::LinkGameCenter => "LinkGameCenter",
            RequestOp::LinkGoogle => "LinkGoogle",
            RequestOp::LinkSteam => "LinkSteam",
            RequestOp::ListMatches => "ListMatches",
            RequestOp::ListNotifications => "ListNotifications",
            RequestOp::DeleteNotifications => "DeleteNotifications",
            RequestOp::ListStorageObjects => "ListStorageObjects",
            RequestOp::ReadStorageObjects => "ReadStorageObjects",
            RequestOp::WriteStorageObjects => "WriteStorageObjects",
            RequestOp::DeleteStorageObjects => "DeleteStorageObjects",
            RequestOp::JoinTournament => "JoinTournament",
            RequestOp::ListTournamentRecords => "ListTournamentRecords",
            RequestOp::ListTournaments => "ListTournaments",
            RequestOp::WriteTournamentRecord => "WriteTournamentRecord",
            RequestOp::ListTournamentRecordsAroundOwner => "ListTournamentRecordsAroundOwner",
            RequestOp::UnlinkApple => "UnlinkApple",
            RequestOp::UnlinkCustom => "UnlinkCustom",
            RequestOp::UnlinkDevice => "UnlinkDevice",
            RequestOp::UnlinkEmail => "UnlinkEmail",
            RequestOp::UnlinkFacebook => "UnlinkFacebook",
            RequestOp::UnlinkFacebookInstantGame => "UnlinkFacebookInstantGame",
            RequestOp::UnlinkGameCenter => "UnlinkGameCenter",
            RequestOp::UnlinkGoogle => "UnlinkGoogle",
            RequestOp::UnlinkSteam => "UnlinkSteam",
            RequestOp::GetUsers => "GetUsers",
            RequestOp::SessionLogout => "SessionLogout",
            RequestOp::DeleteAccount => "DeleteAccount",
        }
    }

    fn index(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for RequestOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
