//! Host registration interface.
//!
//! The backend hands the module an initializer at load time. It exposes:
//! - `register_rpc` for custom endpoints
//! - `register_before_rt` keyed by socket message name
//! - one typed `register_before_*` call per request operation
//!
//! Every call returns an error when the host refuses the registration
//! (for example a duplicate). Hooks are owned by the host once registered.

pub mod api;
pub mod memory;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use rtgate_core::error::Result;
use rtgate_core::protocol::Envelope;

use api::*;

pub use memory::{HookOutcome, MemoryInitializer};

/// Per-call context supplied by the host.
#[derive(Debug, Clone, Default)]
pub struct RuntimeCtx {
    /// Runtime environment variables from the host config.
    pub env: HashMap<String, String>,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
}

impl RuntimeCtx {
    pub fn with_env(env: HashMap<String, String>) -> Self {
        Self {
            env,
            ..Self::default()
        }
    }

    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }
}

/// Before-hook for socket traffic. `Ok(None)` drops the message.
pub type BeforeRtHook = Box<dyn Fn(&RuntimeCtx, Envelope) -> Result<Option<Envelope>> + Send + Sync>;

/// Before-hook for one request type. `Ok(None)` aborts the request.
pub type BeforeHook<T> = Box<dyn Fn(&RuntimeCtx, T) -> Result<Option<T>> + Send + Sync>;

/// Custom RPC endpoint.
#[async_trait]
pub trait RpcFunction: Send + Sync {
    fn id(&self) -> &'static str;
    async fn call(&self, ctx: RuntimeCtx, payload: String) -> Result<String>;
}

/// Registration surface the host exposes during module load.
pub trait Initializer {
    fn register_rpc(&self, id: &str, rpc: Arc<dyn RpcFunction>) -> Result<()>;

    fn register_before_rt(&self, id: &str, hook: BeforeRtHook) -> Result<()>;

    fn register_before_get_account(&self, hook: BeforeHook<GetAccountRequest>) -> Result<()>;
    fn register_before_update_account(&self, hook: BeforeHook<UpdateAccountRequest>) -> Result<()>;
    fn register_before_session_refresh(&self, hook: BeforeHook<SessionRefreshRequest>) -> Result<()>;
    fn register_before_authenticate_apple(&self, hook: BeforeHook<AuthenticateAppleRequest>) -> Result<()>;
    fn register_before_authenticate_custom(&self, hook: BeforeHook<AuthenticateCustomRequest>) -> Result<()>;
    fn register_before_authenticate_device(&self, hook: BeforeHook<AuthenticateDeviceRequest>) -> Result<()>;
    fn register_before_authenticate_email(&self, hook: BeforeHook<AuthenticateEmailRequest>) -> Result<()>;
    fn register_before_authenticate_facebook(&self, hook: BeforeHook<AuthenticateFacebookRequest>) -> Result<()>;
    fn register_before_authenticate_facebook_instant_game(&self, hook: BeforeHook<AuthenticateFacebookInstantGameRequest>) -> Result<()>;
    fn register_before_authenticate_game_center(&self, hook: BeforeHook<AuthenticateGameCenterRequest>) -> Result<()>;
    fn register_before_authenticate_google(&self, hook: BeforeHook<AuthenticateGoogleRequest>) -> Result<()>;
    fn register_before_authenticate_steam(&self, hook: BeforeHook<AuthenticateSteamRequest>) -> Result<()>;
    fn register_before_list_channel_messages(&self, hook: BeforeHook<ListChannelMessagesRequest>) -> Result<()>;
    fn register_before_list_friends(&self, hook: BeforeHook<ListFriendsRequest>) -> Result<()>;
    fn register_before_add_friends(&self, hook: BeforeHook<AddFriendsRequest>) -> Result<()>;
    fn register_before_delete_friends(&self, hook: BeforeHook<DeleteFriendsRequest>) -> Result<()>;
    fn register_before_block_friends(&self, hook: BeforeHook<BlockFriendsRequest>) -> Result<()>;
    fn register_before_import_facebook_friends(&self, hook: BeforeHook<ImportFacebookFriendsRequest>) -> Result<()>;
    fn register_before_create_group(&self, hook: BeforeHook<CreateGroupRequest>) -> Result<()>;
    fn register_before_update_group(&self, hook: BeforeHook<UpdateGroupRequest>) -> Result<()>;
    fn register_before_delete_group(&self, hook: BeforeHook<DeleteGroupRequest>) -> Result<()>;
    fn register_before_join_group(&self, hook: BeforeHook<JoinGroupRequest>) -> Result<()>;
    fn register_before_leave_group(&self, hook: BeforeHook<LeaveGroupRequest>) -> Result<()>;
    fn register_before_add_group_users(&self, hook: BeforeHook<AddGroupUsersRequest>) -> Result<()>;
    fn register_before_ban_group_users(&self, hook: BeforeHook<BanGroupUsersRequest>) -> Result<()>;
    fn register_before_kick_group_users(&self, hook: BeforeHook<KickGroupUsersRequest>) -> Result<()>;
    fn register_before_promote_group_users(&self, hook: BeforeHook<PromoteGroupUsersRequest>) -> Result<()>;
    fn register_before_demote_group_users(&self, hook: BeforeHook<DemoteGroupUsersRequest>) -> Result<()>;
    fn register_before_list_group_users(&self, hook: BeforeHook<ListGroupUsersRequest>) -> Result<()>;
    fn register_before_list_user_groups(&self, hook: BeforeHook<ListUserGroupsRequest>) -> Result<()>;
    fn register_before_list_groups(&self, hook: BeforeHook<ListGroupsRequest>) -> Result<()>;
    fn register_before_delete_leaderboard_record(&self, hook: BeforeHook<DeleteLeaderboardRecordRequest>) -> Result<()>;
    fn register_before_list_leaderboard_records(&self, hook: BeforeHook<ListLeaderboardRecordsRequest>) -> Result<()>;
    fn register_before_write_leaderboard_record(&self, hook: BeforeHook<WriteLeaderboardRecordRequest>) -> Result<()>;
    fn register_before_list_leaderboard_records_around_owner(&self, hook: BeforeHook<ListLeaderboardRecordsAroundOwnerRequest>) -> Result<()>;
    fn register_before_link_apple(&self, hook: BeforeHook<AccountApple>) -> Result<()>;
    fn register_before_link_custom(&self, hook: BeforeHook<AccountCustom>) -> Result<()>;
    fn register_before_link_device(&self, hook: BeforeHook<AccountDevice>) -> Result<()>;
    fn register_before_link_email(&self, hook: BeforeHook<AccountEmail>) -> Result<()>;
    fn register_before_link_facebook(&self, hook: BeforeHook<LinkFacebookRequest>) -> Result<()>;
    fn register_before_link_facebook_instant_game(&self, hook: BeforeHook<AccountFacebookInstantGame>) -> Result<()>;
    fn register_before_link_game_center(&self, hook: BeforeHook<AccountGameCenter>) -> Result<()>;
    fn register_before_link_google(&self, hook: BeforeHook<AccountGoogle>) -> Result<()>;
    fn register_before_link_steam(&self, hook: BeforeHook<LinkSteamRequest>) -> Result<()>;
    fn register_before_list_matches(&self, hook: BeforeHook<ListMatchesRequest>) -> Result<()>;
    fn register_before_list_notifications(&self, hook: BeforeHook<ListNotificationsRequest>) -> Result<()>;
    fn register_before_delete_notifications(&self, hook: BeforeHook<DeleteNotificationsRequest>) -> Result<()>;
    fn register_before_list_storage_objects(&self, hook: BeforeHook<ListStorageObjectsRequest>) -> Result<()>;
    fn register_before_read_storage_objects(&self, hook: BeforeHook<ReadStorageObjectsRequest>) -> Result<()>;
    fn register_before_write_storage_objects(&self, hook: BeforeHook<WriteStorageObjectsRequest>) -> Result<()>;
    fn register_before_delete_storage_objects(&self, hook: BeforeHook<DeleteStorageObjectsRequest>) -> Result<()>;
    fn register_before_join_tournament(&self, hook: BeforeHook<JoinTournamentRequest>) -> Result<()>;
    fn register_before_list_tournament_records(&self, hook: BeforeHook<ListTournamentRecordsRequest>) -> Result<()>;
    fn register_before_list_tournaments(&self, hook: BeforeHook<ListTournamentsRequest>) -> Result<()>;
    fn register_before_write_tournament_record(&self, hook: BeforeHook<WriteTournamentRecordRequest>) -> Result<()>;
    fn register_before_list_tournament_records_around_owner(&self, hook: BeforeHook<ListTournamentRecordsAroundOwnerRequest>) -> Result<()>;
    fn register_before_unlink_apple(&self, hook: BeforeHook<AccountApple>) -> Result<()>;
    fn register_before_unlink_custom(&self, hook: BeforeHook<AccountCustom>) -> Result<()>;
    fn register_before_unlink_device(&self, hook: BeforeHook<AccountDevice>) -> Result<()>;
    fn register_before_unlink_email(&self, hook: BeforeHook<AccountEmail>) -> Result<()>;
    fn register_before_unlink_facebook(&self, hook: BeforeHook<AccountFacebook>) -> Result<()>;
    fn register_before_unlink_facebook_instant_game(&self, hook: BeforeHook<AccountFacebookInstantGame>) -> Result<()>;
    fn register_before_unlink_game_center(&self, hook: BeforeHook<AccountGameCenter>) -> Result<()>;
    fn register_before_unlink_google(&self, hook: BeforeHook<AccountGoogle>) -> Result<()>;
    fn register_before_unlink_steam(&self, hook: BeforeHook<AccountSteam>) -> Result<()>;
    fn register_before_get_users(&self, hook: BeforeHook<GetUsersRequest>) -> Result<()>;
    fn register_before_session_logout(&self, hook: BeforeHook<SessionLogoutRequest>) -> Result<()>;
    fn register_before_delete_account(&self, hook: BeforeHook<DeleteAccountRequest>) -> Result<()>;
}
