use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::GameKind;

/// Maximum number of entries kept in a user's recent activity feed.
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

/// How a completed game went from the tracked user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum OutcomeKind {
    Win,
    Lose,
    Draw,
}

impl OutcomeKind {
    pub fn is_win(&self) -> bool {
        matches!(self, OutcomeKind::Win)
    }
}

/// One line in the per-user recent activity feed, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecentActivityEntry {
    pub game: GameKind,
    pub result: OutcomeKind,
    pub score: Option<u32>,
    pub timestamp: String, // ISO 8601 string
}
