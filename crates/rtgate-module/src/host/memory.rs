//! In-process host registry.
//!
//! Mirrors what the backend does with registrations: one slot per key,
//! duplicates refused. Used to dry-run a module load and to exercise
//! installed hooks without a running backend.

use std::any::Any;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use rtgate_core::catalog::RequestOp;
use rtgate_core::error::{Result, RtGateError};
use rtgate_core::protocol::Envelope;

use super::api::*;
use super::{BeforeHook, BeforeRtHook, Initializer, RpcFunction, RuntimeCtx};

/// What the host would do after running before-hooks for one call.
#[derive(Debug, PartialEq)]
pub enum HookOutcome<T> {
    /// No hook registered; the input goes through untouched.
    Unhooked(T),
    /// Hook ran and returned a (possibly rewritten) input.
    Proceed(T),
    /// Hook returned nothing; the host drops the call.
    Suppressed,
}

impl<T> HookOutcome<T> {
    pub fn is_suppressed(&self) -> bool {
        matches!(self, HookOutcome::Suppressed)
    }
}

#[derive(Default)]
pub struct MemoryInitializer {
    rpcs: DashMap<String, Arc<dyn RpcFunction>>,
    before_rt: DashMap<String, Arc<BeforeRtHook>>,
    // Values are `BeforeHook<T>` for the payload type of the key.
    before_request: DashMap<RequestOp, Arc<dyn Any + Send + Sync>>,
}

impl MemoryInitializer {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert_request<T: 'static>(&self, op: RequestOp, hook: BeforeHook<T>) -> Result<()> {
        match self.before_request.entry(op) {
            Entry::Occupied(_) => Err(RtGateError::Duplicate(format!("before hook for {op}"))),
            Entry::Vacant(slot) => {
                let erased: Arc<dyn Any + Send + Sync> = Arc::new(hook);
                slot.insert(erased);
                Ok(())
            }
        }
    }

    pub fn rpc_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.rpcs.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn before_rt_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.before_rt.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn before_request_ops(&self) -> Vec<RequestOp> {
        let mut ops: Vec<RequestOp> = self.before_request.iter().map(|e| *e.key()).collect();
        ops.sort();
        ops
    }

    pub fn has_before_rt(&self, name: &str) -> bool {
        self.before_rt.contains_key(name)
    }

    pub fn has_before_request(&self, op: RequestOp) -> bool {
        self.before_request.contains_key(&op)
    }

    /// Run the socket before-hook registered for `env.message`, if any.
    pub fn run_before_rt(&self, ctx: &RuntimeCtx, env: Envelope) -> Result<HookOutcome<Envelope>> {
        let hook = match self.before_rt.get(env.message.as_str()) {
            Some(e) => Arc::clone(e.value()),
            None => return Ok(HookOutcome::Unhooked(env)),
        };
        Ok(match hook(ctx, env)? {
            Some(env) => HookOutcome::Proceed(env),
            None => HookOutcome::Suppressed,
        })
    }

    /// Run the typed before-hook registered for `op`, if any.
    ///
    /// `T` must be the payload type `op` was registered with.
    pub fn run_before_request<T: 'static>(
        &self,
        op: RequestOp,
        ctx: &RuntimeCtx,
        input: T,
    ) -> Result<HookOutcome<T>> {
        let erased = match self.before_request.get(&op) {
            Some(e) => Arc::clone(e.value()),
            None => return Ok(HookOutcome::Unhooked(input)),
        };
        let hook = erased.downcast_ref::<BeforeHook<T>>().ok_or_else(|| {
            RtGateError::Internal(format!("payload type does not match hook for {op}"))
        })?;
        Ok(match hook(ctx, input)? {
            Some(input) => HookOutcome::Proceed(input),
            None => HookOutcome::Suppressed,
        })
    }

    pub async fn call_rpc(&self, id: &str, ctx: RuntimeCtx, payload: String) -> Result<String> {
        let rpc = self
            .rpcs
            .get(id)
            .ok_or_else(|| RtGateError::NotFound(format!("rpc {id}")))?
            .value()
            .clone();
        rpc.call(ctx, payload).await
    }
}

impl Initializer for MemoryInitializer {
    fn register_rpc(&self, id: &str, rpc: Arc<dyn RpcFunction>) -> Result<()> {
        match self.rpcs.entry(id.to_string()) {
            Entry::Occupied(_) => Err(RtGateError::Duplicate(format!("rpc {id}"))),
            Entry::Vacant(slot) => {
                slot.insert(rpc);
                Ok(())
            }
        }
    }

    fn register_before_rt(&self, id: &str, hook: BeforeRtHook) -> Result<()> {
        match self.before_rt.entry(id.to_string()) {
            Entry::Occupied(_) => Err(RtGateError::Duplicate(format!("before rt hook for {id}"))),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(hook));
                Ok(())
            }
        }
    }

    fn register_before_get_account(&self, hook: BeforeHook<GetAccountRequest>) -> Result<()> {
        self.insert_request(RequestOp::GetAccount, hook)
    }

    fn register_before_update_account(&self, hook: BeforeHook<UpdateAccountRequest>) -> Result<()> {
        self.insert_request(RequestOp::UpdateAccount, hook)
    }

    fn register_before_session_refresh(&self, hook: BeforeHook<SessionRefreshRequest>) -> Result<()> {
        self.insert_request(RequestOp::SessionRefresh, hook)
    }

    fn register_before_authenticate_apple(&self, hook: BeforeHook<AuthenticateAppleRequest>) -> Result<()> {
        self.insert_request(RequestOp::AuthenticateApple, hook)
    }

    fn register_before_authenticate_custom(&self, hook: BeforeHook<AuthenticateCustomRequest>) -> Result<()> {
        self.insert_request(RequestOp::AuthenticateCustom, hook)
    }

    fn register_before_authenticate_device(&self, hook: BeforeHook<AuthenticateDeviceRequest>) -> Result<()> {
        self.insert_request(RequestOp::AuthenticateDevice, hook)
    }

    fn register_before_authenticate_email(&self, hook: BeforeHook<AuthenticateEmailRequest>) -> Result<()> {
        self.insert_request(RequestOp::AuthenticateEmail, hook)
    }

    fn register_before_authenticate_facebook(&self, hook: BeforeHook<AuthenticateFacebookRequest>) -> Result<()> {
        self.insert_request(RequestOp::AuthenticateFacebook, hook)
    }

    fn register_before_authenticate_facebook_instant_game(&self, hook: BeforeHook<AuthenticateFacebookInstantGameRequest>) -> Result<()> {
        self.insert_request(RequestOp::AuthenticateFacebookInstantGame, hook)
    }

    fn register_before_authenticate_game_center(&self, hook: BeforeHook<AuthenticateGameCenterRequest>) -> Result<()> {
        self.insert_request(RequestOp::AuthenticateGameCenter, hook)
    }

    fn register_before_authenticate_google(&self, hook: BeforeHook<AuthenticateGoogleRequest>) -> Result<()> {
        self.insert_request(RequestOp::AuthenticateGoogle, hook)
    }

    fn register_before_authenticate_steam(&self, hook: BeforeHook<AuthenticateSteamRequest>) -> Result<()> {
        self.insert_request(RequestOp::AuthenticateSteam, hook)
    }

    fn register_before_list_channel_messages(&self, hook: BeforeHook<ListChannelMessagesRequest>) -> Result<()> {
        self.insert_request(RequestOp::ListChannelMessages, hook)
    }

    fn register_before_list_friends(&self, hook: BeforeHook<ListFriendsRequest>) -> Result<()> {
        self.insert_request(RequestOp::ListFriends, hook)
    }

    fn register_before_add_friends(&self, hook: BeforeHook<AddFriendsRequest>) -> Result<()> {
        self.insert_request(RequestOp::AddFriends, hook)
    }

    fn register_before_delete_friends(&self, hook: BeforeHook<DeleteFriendsRequest>) -> Result<()> {
        self.insert_request(RequestOp::DeleteFriends, hook)
    }

    fn register_before_block_friends(&self, hook: BeforeHook<BlockFriendsRequest>) -> Result<()> {
        self.insert_request(RequestOp::BlockFriends, hook)
    }

    fn register_before_import_facebook_friends(&self, hook: BeforeHook<ImportFacebookFriendsRequest>) -> Result<()> {
        self.insert_request(RequestOp::ImportFacebookFriends, hook)
    }

    fn register_before_create_group(&self, hook: BeforeHook<CreateGroupRequest>) -> Result<()> {
        self.insert_request(RequestOp::CreateGroup, hook)
    }

    fn register_before_update_group(&self, hook: BeforeHook<UpdateGroupRequest>) -> Result<()> {
        self.insert_request(RequestOp::UpdateGroup, hook)
    }

    fn register_before_delete_group(&self, hook: BeforeHook<DeleteGroupRequest>) -> Result<()> {
        self.insert_request(RequestOp::DeleteGroup, hook)
    }

    fn register_before_join_group(&self, hook: BeforeHook<JoinGroupRequest>) -> Result<()> {
        self.insert_request(RequestOp::JoinGroup, hook)
    }

    fn register_before_leave_group(&self, hook: BeforeHook<LeaveGroupRequest>) -> Result<()> {
        self.insert_request(RequestOp::LeaveGroup, hook)
    }

    fn register_before_add_group_users(&self, hook: BeforeHook<AddGroupUsersRequest>) -> Result<()> {
        self.insert_request(RequestOp::AddGroupUsers, hook)
    }

    fn register_before_ban_group_users(&self, hook: BeforeHook<BanGroupUsersRequest>) -> Result<()> {
        self.insert_request(RequestOp::BanGroupUsers, hook)
    }

    fn register_before_kick_group_users(&self, hook: BeforeHook<KickGroupUsersRequest>) -> Result<()> {
        self.insert_request(RequestOp::KickGroupUsers, hook)
    }

    fn register_before_promote_group_users(&self, hook: BeforeHook<PromoteGroupUsersRequest>) -> Result<()> {
        self.insert_request(RequestOp::PromoteGroupUsers, hook)
    }

    fn register_before_demote_group_users(&self, hook: BeforeHook<DemoteGroupUsersRequest>) -> Result<()> {
        self.insert_request(RequestOp::DemoteGroupUsers, hook)
    }

    fn register_before_list_group_users(&self, hook: BeforeHook<ListGroupUsersRequest>) -> Result<()> {
        self.insert_request(RequestOp::ListGroupUsers, hook)
    }

    fn register_before_list_user_groups(&self, hook: BeforeHook<ListUserGroupsRequest>) -> Result<()> {
        self.insert_request(RequestOp::ListUserGroups, hook)
    }

    fn register_before_list_groups(&self, hook: BeforeHook<ListGroupsRequest>) -> Result<()> {
        self.insert_request(RequestOp::ListGroups, hook)
    }

    fn register_before_delete_leaderboard_record(&self, hook: BeforeHook<DeleteLeaderboardRecordRequest>) -> Result<()> {
        self.insert_request(RequestOp::DeleteLeaderboardRecord, hook)
    }

    fn register_before_list_leaderboard_records(&self, hook: BeforeHook<ListLeaderboardRecordsRequest>) -> Result<()> {
        self.insert_request(RequestOp::ListLeaderboardRecords, hook)
    }

    fn register_before_write_leaderboard_record(&self, hook: BeforeHook<WriteLeaderboardRecordRequest>) -> Result<()> {
        self.insert_request(RequestOp::WriteLeaderboardRecord, hook)
    }

    fn register_before_list_leaderboard_records_around_owner(&self, hook: BeforeHook<ListLeaderboardRecordsAroundOwnerRequest>) -> Result<()> {
        self.insert_request(RequestOp::ListLeaderboardRecordsAroundOwner, hook)
    }

    fn register_before_link_apple(&self, hook: BeforeHook<AccountApple>) -> Result<()> {
        self.insert_request(RequestOp::LinkApple, hook)
    }

    fn register_before_link_custom(&self, hook: BeforeHook<AccountCustom>) -> Result<()> {
        self.insert_request(RequestOp::LinkCustom, hook)
    }

    fn register_before_link_device(&self, hook: BeforeHook<AccountDevice>) -> Result<()> {
        self.insert_request(RequestOp::LinkDevice, hook)
    }

    fn register_before_link_email(&self, hook: BeforeHook<AccountEmail>) -> Result<()> {
        self.insert_request(RequestOp::LinkEmail, hook)
    }

    fn register_before_link_facebook(&self, hook: BeforeHook<LinkFacebookRequest>) -> Result<()> {
        self.insert_request(RequestOp::LinkFacebook, hook)
    }

    fn register_before_link_facebook_instant_game(&self, hook: BeforeHook<AccountFacebookInstantGame>) -> Result<()> {
        self.insert_request(RequestOp::LinkFacebookInstantGame, hook)
    }

    fn register_before_link_game_center(&self, hook: BeforeHook<AccountGameCenter>) -> Result<()> {
        self.insert_request(RequestOp::LinkGameCenter, hook)
    }

    fn register_before_link_google(&self, hook: BeforeHook<AccountGoogle>) -> Result<()> {
        self.insert_request(RequestOp::LinkGoogle, hook)
    }

    fn register_before_link_steam(&self, hook: BeforeHook<LinkSteamRequest>) -> Result<()> {
        self.insert_request(RequestOp::LinkSteam, hook)
    }

    fn register_before_list_matches(&self, hook: BeforeHook<ListMatchesRequest>) -> Result<()> {
        self.insert_request(RequestOp::ListMatches, hook)
    }

    fn register_before_list_notifications(&self, hook: BeforeHook<ListNotificationsRequest>) -> Result<()> {
        self.insert_request(RequestOp::ListNotifications, hook)
    }

    fn register_before_delete_notifications(&self, hook: BeforeHook<DeleteNotificationsRequest>) -> Result<()> {
        self.insert_request(RequestOp::DeleteNotifications, hook)
    }

    fn register_before_list_storage_objects(&self, hook: BeforeHook<ListStorageObjectsRequest>) -> Result<()> {
        self.insert_request(RequestOp::ListStorageObjects, hook)
    }

    fn register_before_read_storage_objects(&self, hook: BeforeHook<ReadStorageObjectsRequest>) -> Result<()> {
        self.insert_request(RequestOp::ReadStorageObjects, hook)
    }

    fn register_before_write_storage_objects(&self, hook: BeforeHook<WriteStorageObjectsRequest>) -> Result<()> {
        self.insert_request(RequestOp::WriteStorageObjects, hook)
    }

    fn register_before_delete_storage_objects(&self, hook: BeforeHook<DeleteStorageObjectsRequest>) -> Result<()> {
        self.insert_request(RequestOp::DeleteStorageObjects, hook)
    }

    fn register_before_join_tournament(&self, hook: BeforeHook<JoinTournamentRequest>) -> Result<()> {
        self.insert_request(RequestOp::JoinTournament, hook)
    }

    fn register_before_list_tournament_records(&self, hook: BeforeHook<ListTournamentRecordsRequest>) -> Result<()> {
        self.insert_request(RequestOp::ListTournamentRecords, hook)
    }

    fn register_before_list_tournaments(&self, hook: BeforeHook<ListTournamentsRequest>) -> Result<()> {
        self.insert_request(RequestOp::ListTournaments, hook)
    }

    fn register_before_write_tournament_record(&self, hook: BeforeHook<WriteTournamentRecordRequest>) -> Result<()> {
        self.insert_request(RequestOp::WriteTournamentRecord, hook)
    }

    fn register_before_list_tournament_records_around_owner(&self, hook: BeforeHook<ListTournamentRecordsAroundOwnerRequest>) -> Result<()> {
        self.insert_request(RequestOp::ListTournamentRecordsAroundOwner, hook)
    }

    fn register_before_unlink_apple(&self, hook: BeforeHook<AccountApple>) -> Result<()> {
        self.insert_request(RequestOp::UnlinkApple, hook)
    }

    fn register_before_unlink_custom(&self, hook: BeforeHook<AccountCustom>) -> Result<()> {
        self.insert_request(RequestOp::UnlinkCustom, hook)
    }

    fn register_before_unlink_device(&self, hook: BeforeHook<AccountDevice>) -> Result<()> {
        self.insert_request(RequestOp::UnlinkDevice, hook)
    }

    fn register_before_unlink_email(&self, hook: BeforeHook<AccountEmail>) -> Result<()> {
        self.insert_request(RequestOp::UnlinkEmail, hook)
    }

    fn register_before_unlink_facebook(&self, hook: BeforeHook<AccountFacebook>) -> Result<()> {
        self.insert_request(RequestOp::UnlinkFacebook, hook)
    }

    fn register_before_unlink_facebook_instant_game(&self, hook: BeforeHook<AccountFacebookInstantGame>) -> Result<()> {
        self.insert_request(RequestOp::UnlinkFacebookInstantGame, hook)
    }

    fn register_before_unlink_game_center(&self, hook: BeforeHook<AccountGameCenter>) -> Result<()> {
        self.insert_request(RequestOp::UnlinkGameCenter, hook)
    }

    fn register_before_unlink_google(&self, hook: BeforeHook<AccountGoogle>) -> Result<()> {
        self.insert_request(RequestOp::UnlinkGoogle, hook)
    }

    fn register_before_unlink_steam(&self, hook: BeforeHook<AccountSteam>) -> Result<()> {
        self.insert_request(RequestOp::UnlinkSteam, hook)
    }

    fn register_before_get_users(&self, hook: BeforeHook<GetUsersRequest>) -> Result<()> {
        self.insert_request(RequestOp::GetUsers, hook)
    }

    fn register_before_session_logout(&self, hook: BeforeHook<SessionLogoutRequest>) -> Result<()> {
        self.insert_request(RequestOp::SessionLogout, hook)
    }

    fn register_before_delete_account(&self, hook: BeforeHook<DeleteAccountRequest>) -> Result<()> {
        self.insert_request(RequestOp::DeleteAccount, hook)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use rtgate_core::catalog::SocketOp;

    #[test]
    fn duplicate_request_hook_is_refused() {
        let host = MemoryInitializer::new();
        host.register_before_create_group(Box::new(|_: &RuntimeCtx, r: CreateGroupRequest| Ok(Some(r))))
            .unwrap();
        let err = host
            .register_before_create_group(Box::new(|_: &RuntimeCtx, _: CreateGroupRequest| Ok(None)))
            .unwrap_err();
        assert_eq!(err.code().as_str(), "DUPLICATE");
    }

    #[test]
    fn passthrough_hook_proceeds() {
        let host = MemoryInitializer::new();
        host.register_before_rt("Ping", Box::new(|_: &RuntimeCtx, env: Envelope| Ok(Some(env))))
            .unwrap();

        let out = host
            .run_before_rt(&RuntimeCtx::default(), Envelope::new(SocketOp::Ping))
            .unwrap();
        assert!(matches!(out, HookOutcome::Proceed(ref e) if e.message == "Ping"));
    }

    #[test]
    fn unhooked_request_goes_through() {
        let host = MemoryInitializer::new();
        let out = host
            .run_before_request(RequestOp::GetUsers, &RuntimeCtx::default(), GetUsersRequest::default())
            .unwrap();
        assert_eq!(out, HookOutcome::Unhooked(GetUsersRequest::default()));
    }

    #[test]
    fn wrong_payload_type_is_an_error() {
        let host = MemoryInitializer::new();
        host.register_before_link_apple(Box::new(|_: &RuntimeCtx, _: AccountApple| Ok(None)))
            .unwrap();

        let err = host
            .run_before_request(RequestOp::LinkApple, &RuntimeCtx::default(), AccountGoogle::default())
            .unwrap_err();
        assert_eq!(err.code().as_str(), "INTERNAL");

        // shared payload type, separate slot
        assert!(!host.has_before_request(RequestOp::UnlinkApple));
    }
}
