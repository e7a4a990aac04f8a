//! Terminal stand-in for the FunZone pages: signs a demo account in, plays
//! one game of each kind, and records everything the way the site does.

mod config;

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use config::Config;
use funzone_core::{rps, Choice, SnakeGame, StepResult, TicTacToeSession};
use funzone_persistence::{
    build_leaderboard, legacy, overall_stats, FileStorage, StatsLedger, UserStore,
};
use funzone_types::{AuthError, GameKind, OutcomeKind};

const DEMO_NAME: &str = "Demo Player";
const DEMO_EMAIL: &str = "demo@funzone.io";
const DEMO_PASSWORD: &str = "funzone1";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting FunZone demo session...");

    let config = Config::new();
    let storage = FileStorage::open(&config.storage_path);
    let users = UserStore::new(storage.clone());
    let ledger = StatsLedger::new(storage.clone());

    let user = match users.login(DEMO_EMAIL, DEMO_PASSWORD) {
        Ok(user) => user,
        Err(AuthError::InvalidCredentials) => {
            info!("No demo account yet, registering one");
            users.register(DEMO_NAME, DEMO_EMAIL, DEMO_PASSWORD)?;
            users.login(DEMO_EMAIL, DEMO_PASSWORD)?
        }
        Err(e) => return Err(e.into()),
    };
    info!(user_id = %user.id, "signed in as {}", user.name);

    play_tictactoe(&storage, &ledger, config.ai_move_delay_ms);
    play_snake(&storage, &ledger);
    play_rps(&storage, &ledger);

    let user = users
        .current_user()
        .expect("demo user is signed in for the whole session");
    let totals = overall_stats(&user);
    info!(
        games = totals.total_games_played,
        wins = totals.total_games_won,
        score = totals.total_score,
        win_rate = totals.win_rate,
        "dashboard totals"
    );

    for entry in ledger.recent_activity(user.id) {
        info!(
            game = %entry.game,
            result = ?entry.result,
            score = entry.score,
            "recent activity"
        );
    }

    for entry in build_leaderboard(Some(&user))
        .into_iter()
        .take(config.leaderboard_limit)
    {
        let marker = if entry.is_current_user { " (you)" } else { "" };
        info!(
            rank = entry.rank,
            score = entry.score,
            "{}{}", entry.name, marker
        );
    }

    Ok(())
}

/// One vs-AI game: the demo human greedily takes the first empty cell, the
/// AI thinks for the configured pause like the page does.
fn play_tictactoe(storage: &FileStorage, ledger: &StatsLedger<FileStorage>, delay_ms: u64) {
    let mut session = TicTacToeSession::new(true);
    while !session.state().is_terminal() {
        if session.ai_to_move() {
            thread::sleep(Duration::from_millis(delay_ms));
            session.ai_move();
        } else {
            let index = session
                .board()
                .empty_cells()
                .next()
                .expect("non-terminal board has an empty cell");
            let _ = session.place(index);
        }
    }

    let outcome = session
        .outcome_for_user()
        .expect("terminal board has an outcome");
    info!(?outcome, "tic-tac-toe finished");

    record(ledger, GameKind::TicTacToe, outcome, session.score_awarded());
    legacy::record_tictactoe_result(
        storage,
        session.board().outcome().expect("terminal board"),
        session.vs_ai(),
    );
}

/// A short snake run: head right until the wall ends it.
fn play_snake(storage: &FileStorage, ledger: &StatsLedger<FileStorage>) {
    let mut game = SnakeGame::new();
    while game.step() != StepResult::GameOver {}
    info!(score = game.score(), length = game.snake_length(), "snake finished");

    record(ledger, GameKind::Snake, OutcomeKind::Lose, game.score());
    legacy::record_snake_game(
        storage,
        game.score(),
        game.food_eaten(),
        game.snake_length() as u32,
    );
}

fn play_rps(storage: &FileStorage, ledger: &StatsLedger<FileStorage>) {
    let round = rps::play_round(Choice::Rock);
    info!(
        player = %round.player,
        computer = %round.computer,
        result = ?round.result,
        "rock-paper-scissors finished"
    );

    record(ledger, GameKind::RockPaperScissors, round.result, round.score_awarded());
    legacy::record_rps_round(storage, round.result);
}

fn record(ledger: &StatsLedger<FileStorage>, kind: GameKind, outcome: OutcomeKind, score: u32) {
    // A missing session is a skip, mirroring how the pages bail out quietly
    if let Err(e) = ledger.record_completed_game(kind, outcome, score) {
        tracing::warn!(%kind, error = %e, "skipped recording game");
    }
}
