use funzone_types::UserRecord;
use serde::{Deserialize, Serialize};

/// Aggregate of a user's stats across every game kind, as shown on the
/// profile and dashboard pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallStats {
    pub total_games_played: u32,
    pub total_games_won: u32,
    pub total_score: u32,
    /// Percentage, rounded to the nearest whole number.
    pub win_rate: u32,
}

pub fn overall_stats(user: &UserRecord) -> OverallStats {
    let mut totals = OverallStats::default();
    for stats in user.game_stats.values() {
        totals.total_games_played += stats.games_played;
        totals.total_games_won += stats.games_won;
        totals.total_score += stats.total_score;
    }
    if totals.total_games_played > 0 {
        totals.win_rate = ((totals.total_games_won as f64 / totals.total_games_played as f64)
            * 100.0)
            .round() as u32;
    }
    totals
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub score: u32,
    pub games_played: u32,
    pub win_rate: u32,
    pub is_current_user: bool,
}

/// The fixed demonstration roster the site has always shipped with; the
/// leaderboard page mixes the logged-in user into it.
const MOCK_PLAYERS: [(&str, u32, u32, u32); 10] = [
    ("GameMaster2024", 15420, 156, 89),
    ("SnakeCharmer", 12890, 134, 85),
    ("TicTacPro", 11250, 98, 92),
    ("RockPaperWin", 9870, 87, 78),
    ("QuickFingers", 8640, 76, 81),
    ("PuzzleMaster", 7320, 65, 74),
    ("SpeedRunner", 6890, 58, 79),
    ("StrategyKing", 5670, 52, 68),
    ("GameNinja", 4560, 45, 71),
    ("ArcadeHero", 3890, 38, 65),
];

/// Build the leaderboard: mock roster plus the current user's aggregate,
/// sorted by score descending, rank assigned by position.
pub fn build_leaderboard(current_user: Option<&UserRecord>) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = MOCK_PLAYERS
        .iter()
        .map(|&(name, score, games_played, win_rate)| LeaderboardEntry {
            rank: 0,
            name: name.to_string(),
            score,
            games_played,
            win_rate,
            is_current_user: false,
        })
        .collect();

    if let Some(user) = current_user {
        let totals = overall_stats(user);
        entries.push(LeaderboardEntry {
            rank: 0,
            name: user.name.clone(),
            score: totals.total_score,
            games_played: totals.total_games_played,
            win_rate: totals.win_rate,
            is_current_user: true,
        });
    }

    entries.sort_by(|a, b| b.score.cmp(&a.score));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index as u32 + 1;
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use funzone_types::{GameKind, PerGameStats, Preferences};
    use std::collections::HashMap;
    use uuid::Uuid;

    fn user_with_stats(entries: &[(GameKind, PerGameStats)]) -> UserRecord {
        UserRecord {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@funzone.io".to_string(),
            password: "hunter42".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            last_login: None,
            game_stats: entries.iter().copied().collect::<HashMap<_, _>>(),
            achievements: Vec::new(),
            preferences: Preferences::default(),
            profile_image: None,
        }
    }

    #[test]
    fn test_overall_stats_sums_across_games() {
        let user = user_with_stats(&[
            (
                GameKind::TicTacToe,
                PerGameStats {
                    games_played: 4,
                    games_won: 3,
                    total_score: 300,
                    ..Default::default()
                },
            ),
            (
                GameKind::Snake,
                PerGameStats {
                    games_played: 6,
                    games_won: 0,
                    total_score: 700,
                    best_score: 450,
                    ..Default::default()
                },
            ),
        ]);
        let totals = overall_stats(&user);
        assert_eq!(totals.total_games_played, 10);
        assert_eq!(totals.total_games_won, 3);
        assert_eq!(totals.total_score, 1000);
        assert_eq!(totals.win_rate, 30);
    }

    #[test]
    fn test_win_rate_zero_without_games() {
        let user = user_with_stats(&[]);
        assert_eq!(overall_stats(&user).win_rate, 0);
    }

    #[test]
    fn test_leaderboard_sorted_with_user_ranked_once() {
        let user = user_with_stats(&[(
            GameKind::Snake,
            PerGameStats {
                games_played: 10,
                total_score: 10000,
                ..Default::default()
            },
        )]);

        let board = build_leaderboard(Some(&user));
        assert_eq!(board.len(), 11);
        assert!(board.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(board.iter().filter(|e| e.is_current_user).count(), 1);

        let me = board.iter().find(|e| e.is_current_user).unwrap();
        // 10000 sits between TicTacPro (11250) and RockPaperWin (9870)
        assert_eq!(me.rank, 4);
        assert_eq!(board.first().unwrap().rank, 1);
    }

    #[test]
    fn test_leaderboard_without_user_is_the_mock_roster() {
        let board = build_leaderboard(None);
        assert_eq!(board.len(), 10);
        assert_eq!(board[0].name, "GameMaster2024");
    }
}
