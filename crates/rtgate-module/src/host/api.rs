//! Request payload types handed to typed before-hooks.
//!
//! The host owns the schema of every request; the module never inspects
//! them, so each payload is an opaque JSON body. Types are distinct so that a
//! hook registered for one request cannot be fed another request's payload.
//! Link and unlink calls for the same provider share a payload type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

macro_rules! request_payloads {
    ($($name:ident),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(pub Value);
        )*
    };
}

request_payloads! {
    GetAccountRequest,
    UpdateAccountRequest,
    SessionRefreshRequest,
    AuthenticateAppleRequest,
    AuthenticateCustomRequest,
    AuthenticateDeviceRequest,
    AuthenticateEmailRequest,
    AuthenticateFacebookRequest,
    AuthenticateFacebookInstantGameRequest,
    AuthenticateGameCenterRequest,
    AuthenticateGoogleRequest,
    AuthenticateSteamRequest,
    ListChannelMessagesRequest,
    ListFriendsRequest,
    AddFriendsRequest,
    DeleteFriendsRequest,
    BlockFriendsRequest,
    ImportFacebookFriendsRequest,
    CreateGroupRequest,
    UpdateGroupRequest,
    DeleteGroupRequest,
    JoinGroupRequest,
    LeaveGroupRequest,
    AddGroupUsersRequest,
    BanGroupUsersRequest,
    KickGroupUsersRequest,
    PromoteGroupUsersRequest,
    DemoteGroupUsersRequest,
    ListGroupUsersRequest,
    ListUserGroupsRequest,
    ListGroupsRequest,
    DeleteLeaderboardRecordRequest,
    ListLeaderboardRecordsRequest,
    WriteLeaderboardRecordRequest,
    ListLeaderboardRecordsAroundOwnerRequest,
    AccountApple,
    AccountCustom,
    AccountDevice,
    AccountEmail,
    LinkFacebookRequest,
    AccountFacebookInstantGame,
    AccountGameCenter,
    AccountGoogle,
    LinkSteamRequest,
    ListMatchesRequest,
    ListNotificationsRequest,
    DeleteNotificationsRequest,
    ListStorageObjectsRequest,
    ReadStorageObjectsRequest,
    WriteStorageObjectsRequest,
    DeleteStorageObjectsRequest,
    JoinTournamentRequest,
    ListTournamentRecordsRequest,
    ListTournamentsRequest,
    WriteTournamentRecordRequest,
    ListTournamentRecordsAroundOwnerRequest,
    AccountFacebook,
    AccountSteam,
    GetUsersRequest,
    SessionLogoutRequest,
    DeleteAccountRequest,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_is_transparent_json() {
        let req: CreateGroupRequest = serde_json::from_value(json!({"name": "g"})).unwrap_or_default();
        assert_eq!(req.0["name"], "g");
        assert_eq!(serde_json::to_value(&req).ok(), Some(json!({"name": "g"})));
    }
}
