//! Request-family gates.
//!
//! The host has no name-keyed hook point for requests, so every disabled op
//! is routed to its own typed registration call. The `match` in
//! [`install_one`] is exhaustive over [`RequestOp`]: a new catalog entry does
//! not compile until it has a registration arm.

use tracing::debug;

use rtgate_core::catalog::RequestOp;
use rtgate_core::error::Result;

use crate::host::{BeforeHook, Initializer, RuntimeCtx};

/// Hook that aborts every request of type `T`.
pub fn suppress<T: 'static>() -> BeforeHook<T> {
    Box::new(|_ctx: &RuntimeCtx, _input: T| Ok(None))
}

/// Register the aborting hook for one op through its typed call.
pub fn install_one(op: RequestOp, init: &dyn Initializer) -> Result<()> {
    match op {
        RequestOp::GetAccount => init.register_before_get_account(suppress()),
        RequestOp::UpdateAccount => init.register_before_update_account(suppress()),
        RequestOp::SessionRefresh => init.register_before_session_refresh(suppress()),
        RequestOp::AuthenticateApple => init.register_before_authenticate_apple(suppress()),
        RequestOp::AuthenticateCustom => init.register_before_authenticate_custom(suppress()),
        RequestOp::AuthenticateDevice => init.register_before_authenticate_device(suppress()),
        RequestOp::AuthenticateEmail => init.register_before_authenticate_email(suppress()),
        RequestOp::AuthenticateFacebook => init.register_before_authenticate_facebook(suppress()),
        RequestOp::AuthenticateFacebookInstantGame => init.register_before_authenticate_facebook_instant_game(suppress()),
        RequestOp::AuthenticateGameCenter => init.register_before_authenticate_game_center(suppress()),
        RequestOp::AuthenticateGoogle => init.register_before_authenticate_google(suppress()),
        RequestOp::AuthenticateSteam => init.register_before_authenticate_steam(suppress()),
        RequestOp::ListChannelMessages => init.register_before_list_channel_messages(suppress()),
        RequestOp::ListFriends => init.register_before_list_friends(suppress()),
        RequestOp::AddFriends => init.register_before_add_friends(suppress()),
        RequestOp::DeleteFriends => init.register_before_delete_friends(suppress()),
        RequestOp::BlockFriends => init.register_before_block_friends(suppress()),
        RequestOp::ImportFacebookFriends => init.register_before_import_facebook_friends(suppress()),
        RequestOp::CreateGroup => init.register_before_create_group(suppress()),
        RequestOp::UpdateGroup => init.register_before_update_group(suppress()),
        RequestOp::DeleteGroup => init.register_before_delete_group(suppress()),
        RequestOp::JoinGroup => init.register_before_join_group(suppress()),
        RequestOp::LeaveGroup => init.register_before_leave_group(suppress()),
        RequestOp::AddGroupUsers => init.register_before_add_group_users(suppress()),
        RequestOp::BanGroupUsers => init.register_before_ban_group_users(suppress()),
        RequestOp::KickGroupUsers => init.register_before_kick_group_users(suppress()),
        RequestOp::PromoteGroupUsers => init.register_before_promote_group_users(suppress()),
        RequestOp::DemoteGroupUsers => init.register_before_demote_group_users(suppress()),
        RequestOp::ListGroupUsers => init.register_before_list_group_users(suppress()),
        RequestOp::ListUserGroups => init.register_before_list_user_groups(suppress()),
        RequestOp::ListGroups => init.register_before_list_groups(suppress()),
        RequestOp::DeleteLeaderboardRecord => init.register_before_delete_leaderboard_record(suppress()),
        RequestOp::ListLeaderboardRecords => init.register_before_list_leaderboard_records(suppress()),
        RequestOp::WriteLeaderboardRecord => init.register_before_write_leaderboard_record(suppress()),
        RequestOp::ListLeaderboardRecordsAroundOwner => init.register_before_list_leaderboard_records_around_owner(suppress()),
        RequestOp::LinkApple => init.register_before_link_apple(suppress()),
        RequestOp::LinkCustom => init.register_before_link_custom(suppress()),
        RequestOp::LinkDevice => init.register_before_link_device(suppress()),
        RequestOp::LinkEmail => init.register_before_link_email(suppress()),
        RequestOp::LinkFacebook => init.register_before_link_facebook(suppress()),
        RequestOp::LinkFacebookInstantGame => init.register_before_link_facebook_instant_game(suppress()),
        RequestOp::LinkGameCenter => init.register_before_link_game_center(suppress()),
        RequestOp::LinkGoogle => init.register_before_link_google(suppress()),
        RequestOp::LinkSteam => init.register_before_link_steam(suppress()),
        RequestOp::ListMatches => init.register_before_list_matches(suppress()),
        RequestOp::ListNotifications => init.register_before_list_notifications(suppress()),
        RequestOp::DeleteNotifications => init.register_before_delete_notifications(suppress()),
        RequestOp::ListStorageObjects => init.register_before_list_storage_objects(suppress()),
        RequestOp::ReadStorageObjects => init.register_before_read_storage_objects(suppress()),
        RequestOp::WriteStorageObjects => init.register_before_write_storage_objects(suppress()),
        RequestOp::DeleteStorageObjects => init.register_before_delete_storage_objects(suppress()),
        RequestOp::JoinTournament => init.register_before_join_tournament(suppress()),
        RequestOp::ListTournamentRecords => init.register_before_list_tournament_records(suppress()),
        RequestOp::ListTournaments => init.register_before_list_tournaments(suppress()),
        RequestOp::WriteTournamentRecord => init.register_before_write_tournament_record(suppress()),
        RequestOp::ListTournamentRecordsAroundOwner => init.register_before_list_tournament_records_around_owner(suppress()),
        RequestOp::UnlinkApple => init.register_before_unlink_apple(suppress()),
        RequestOp::UnlinkCustom => init.register_before_unlink_custom(suppress()),
        RequestOp::UnlinkDevice => init.register_before_unlink_device(suppress()),
        RequestOp::UnlinkEmail => init.register_before_unlink_email(suppress()),
        RequestOp::UnlinkFacebook => init.register_before_unlink_facebook(suppress()),
        RequestOp::UnlinkFacebookInstantGame => init.register_before_unlink_facebook_instant_game(suppress()),
        RequestOp::UnlinkGameCenter => init.register_before_unlink_game_center(suppress()),
        RequestOp::UnlinkGoogle => init.register_before_unlink_google(suppress()),
        RequestOp::UnlinkSteam => init.register_before_unlink_steam(suppress()),
        RequestOp::GetUsers => init.register_before_get_users(suppress()),
        RequestOp::SessionLogout => init.register_before_session_logout(suppress()),
        RequestOp::DeleteAccount => init.register_before_delete_account(suppress()),
    }
}

/// Register aborting hooks for each op. Stops at the first host error.
pub fn install(disabled: &[RequestOp], init: &dyn Initializer) -> Result<()> {
    for op in disabled {
        install_one(*op, init)?;
        debug!(op = %op, "request operation gated");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::host::MemoryInitializer;
    use rtgate_core::catalog::Operation;

    #[test]
    fn every_op_routes_to_its_own_slot() {
        for op in RequestOp::ALL {
            let host = MemoryInitializer::new();
            install_one(*op, &host).unwrap();
            assert_eq!(host.before_request_ops(), vec![*op], "op={op}");
        }
    }
}
