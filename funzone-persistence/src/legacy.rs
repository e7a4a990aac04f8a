//! Legacy global per-game stats blobs. These predate per-user stats and are
//! still read by the game pages for the machine-wide counters, so every
//! finished game keeps them up to date alongside the user ledger.

use funzone_types::{
    GameKind, GameOutcome, Mark, OutcomeKind, RpsLocalStats, SnakeLocalStats, TicTacToeLocalStats,
};

use crate::keys;
use crate::storage::{get_item, set_item, Storage};

/// Update the `tictactoe_stats` blob. The streak is the local player's,
/// which is why an O win only breaks it when O was the AI.
pub fn record_tictactoe_result(
    storage: &impl Storage,
    outcome: GameOutcome,
    vs_ai: bool,
) -> TicTacToeLocalStats {
    let mut stats: TicTacToeLocalStats =
        get_item(storage, keys::legacy_stats(GameKind::TicTacToe), Default::default());

    stats.games_played += 1;
    match outcome {
        GameOutcome::Win(Mark::X) => {
            stats.player_x_wins += 1;
            if !vs_ai {
                stats.current_streak += 1;
            }
        }
        GameOutcome::Win(Mark::O) => {
            stats.player_o_wins += 1;
            if vs_ai {
                stats.current_streak = 0;
            } else {
                stats.current_streak += 1;
            }
        }
        GameOutcome::Draw => {
            stats.draws += 1;
            stats.current_streak = 0;
        }
    }
    stats.best_streak = stats.best_streak.max(stats.current_streak);

    set_item(storage, keys::legacy_stats(GameKind::TicTacToe), &stats);
    stats
}

/// Update the `snake_stats` blob after a game ends.
pub fn record_snake_game(
    storage: &impl Storage,
    score: u32,
    food_eaten: u32,
    snake_length: u32,
) -> SnakeLocalStats {
    let mut stats: SnakeLocalStats =
        get_item(storage, keys::legacy_stats(GameKind::Snake), Default::default());

    stats.games_played += 1;
    stats.total_food += food_eaten;
    stats.best_score = stats.best_score.max(score);
    stats.longest_snake = stats.longest_snake.max(snake_length);

    set_item(storage, keys::legacy_stats(GameKind::Snake), &stats);
    stats
}

/// Update the `rps_stats` blob after a round.
pub fn record_rps_round(storage: &impl Storage, result: OutcomeKind) -> RpsLocalStats {
    let mut stats: RpsLocalStats = get_item(
        storage,
        keys::legacy_stats(GameKind::RockPaperScissors),
        Default::default(),
    );

    stats.games_played += 1;
    if result.is_win() {
        stats.games_won += 1;
        stats.current_streak += 1;
        stats.best_streak = stats.best_streak.max(stats.current_streak);
    } else {
        stats.current_streak = 0;
    }

    set_item(
        storage,
        keys::legacy_stats(GameKind::RockPaperScissors),
        &stats,
    );
    stats
}
