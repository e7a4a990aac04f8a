use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;
use uuid::Uuid;

use crate::{GameKind, PerGameStats};

/// A registered account as stored in the `users` array and denormalized
/// under `currentUser`. Field names follow the stored JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String, // Stored plaintext, matching the site's storage
    pub created_at: String, // ISO 8601 string
    pub last_login: Option<String>,
    pub game_stats: HashMap<GameKind, PerGameStats>,
    pub achievements: Vec<String>,
    pub preferences: Preferences,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl UserRecord {
    /// Stats entry for one game, zeroed when the user has never played it.
    pub fn stats_for(&self, kind: GameKind) -> PerGameStats {
        self.game_stats.get(&kind).copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Preferences {
    pub sound_enabled: bool,
    pub notifications_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            notifications_enabled: true,
        }
    }
}
