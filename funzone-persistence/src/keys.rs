use funzone_types::GameKind;
use uuid::Uuid;

/// All registered accounts, as an ordered array.
pub const USERS: &str = "users";
/// Denormalized copy of the logged-in account.
pub const CURRENT_USER: &str = "currentUser";

/// Per-user recent activity feed.
pub fn recent_activity(user_id: Uuid) -> String {
    format!("recentActivity_{user_id}")
}

/// Legacy global per-game display stats blob.
pub fn legacy_stats(kind: GameKind) -> &'static str {
    match kind {
        GameKind::TicTacToe => "tictactoe_stats",
        GameKind::Snake => "snake_stats",
        GameKind::RockPaperScissors => "rps_stats",
    }
}
