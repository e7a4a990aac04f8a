use funzone_types::UserRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub unlocked: bool,
}

/// Evaluate the achievement set against a user's stats. `top_10` stays
/// locked here; ranking the user against the live leaderboard is the
/// page's job.
pub fn evaluate_achievements(user: &UserRecord) -> Vec<Achievement> {
    vec![
        Achievement {
            id: "first_win",
            name: "First Win",
            unlocked: has_first_win(user),
        },
        Achievement {
            id: "win_streak_5",
            name: "5 Win Streak",
            unlocked: has_best_streak(user, 5),
        },
        Achievement {
            id: "play_50_games",
            name: "Play 50 Games",
            unlocked: has_played_games(user, 50),
        },
        Achievement {
            id: "top_10",
            name: "Reach Top 10",
            unlocked: false,
        },
    ]
}

fn has_first_win(user: &UserRecord) -> bool {
    user.game_stats.values().any(|stats| stats.games_won > 0)
}

fn has_best_streak(user: &UserRecord, length: u32) -> bool {
    user.game_stats.values().any(|stats| stats.best_streak >= length)
}

fn has_played_games(user: &UserRecord, count: u32) -> bool {
    user.game_stats
        .values()
        .map(|stats| stats.games_played)
        .sum::<u32>()
        >= count
}
