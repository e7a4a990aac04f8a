use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifier of one of the three games on the site. Serialized forms match
/// the keys used in the stored `gameStats` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameKind {
    #[serde(rename = "tic-tac-toe")]
    TicTacToe,
    #[serde(rename = "snake")]
    Snake,
    #[serde(rename = "rock-paper-scissors")]
    RockPaperScissors,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [
        GameKind::TicTacToe,
        GameKind::Snake,
        GameKind::RockPaperScissors,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::TicTacToe => "tic-tac-toe",
            GameKind::Snake => "snake",
            GameKind::RockPaperScissors => "rock-paper-scissors",
        }
    }

    /// Display name used in the activity feed.
    pub fn display_name(&self) -> &'static str {
        match self {
            GameKind::TicTacToe => "Tic-Tac-Toe",
            GameKind::Snake => "Snake",
            GameKind::RockPaperScissors => "Rock Paper Scissors",
        }
    }

    /// Flat point award for a win, for the games that score that way.
    /// Snake awards a variable per-game score instead.
    pub fn flat_win_award(&self) -> Option<u32> {
        match self {
            GameKind::TicTacToe => Some(100),
            GameKind::Snake => None,
            GameKind::RockPaperScissors => Some(50),
        }
    }

    /// Whether the per-user `bestScore` field tracks this game. Only snake
    /// produces a per-game maximum worth keeping; the flat-award games leave
    /// the field untouched.
    pub fn tracks_best_score(&self) -> bool {
        matches!(self, GameKind::Snake)
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cumulative per-user statistics for one game kind. All fields start at
/// zero when the user registers or first plays the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PerGameStats {
    pub games_played: u32,
    pub games_won: u32,
    pub best_score: u32,
    pub total_score: u32,
    pub win_streak: u32,
    pub best_streak: u32,
}

/// Legacy global tic-tac-toe display stats, stored under `tictactoe_stats`
/// and shared by every player of the machine. Kept for backward display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TicTacToeLocalStats {
    pub games_played: u32,
    pub player_x_wins: u32,
    pub player_o_wins: u32,
    pub draws: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

/// Legacy global snake display stats, stored under `snake_stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SnakeLocalStats {
    pub games_played: u32,
    pub best_score: u32,
    pub total_food: u32,
    pub longest_snake: u32,
}

impl Default for SnakeLocalStats {
    fn default() -> Self {
        Self {
            games_played: 0,
            best_score: 0,
            total_food: 0,
            longest_snake: 1,
        }
    }
}

/// Legacy global rock-paper-scissors display stats, stored under `rps_stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RpsLocalStats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_kind_serializes_to_stored_keys() {
        for kind in GameKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            assert_eq!(serde_json::from_str::<GameKind>(&json).unwrap(), kind);
        }
    }

    #[test]
    fn test_per_game_stats_uses_stored_field_names() {
        let json = serde_json::to_value(PerGameStats::default()).unwrap();
        let object = json.as_object().unwrap();
        for field in [
            "gamesPlayed",
            "gamesWon",
            "bestScore",
            "totalScore",
            "winStreak",
            "bestStreak",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
    }

    #[test]
    fn test_snake_local_stats_default_length_is_one() {
        assert_eq!(SnakeLocalStats::default().longest_snake, 1);
    }

    #[test]
    fn test_flat_awards() {
        assert_eq!(GameKind::TicTacToe.flat_win_award(), Some(100));
        assert_eq!(GameKind::Snake.flat_win_award(), None);
        assert_eq!(GameKind::RockPaperScissors.flat_win_award(), Some(50));
        assert!(GameKind::Snake.tracks_best_score());
        assert!(!GameKind::TicTacToe.tracks_best_score());
    }
}
