use funzone_types::{
    GameKind, LedgerError, OutcomeKind, PerGameStats, RecentActivityEntry, UserRecord,
    RECENT_ACTIVITY_LIMIT,
};
use tracing::debug;
use uuid::Uuid;

use crate::keys;
use crate::storage::{get_item, set_item, Storage};
use crate::users::persist_record;

/// The per-user statistics and activity record, updated through one audited
/// operation that every game calls after it ends.
///
/// The update is a plain load, mutate-in-memory, store sequence with no
/// guard. That is safe only under the single-threaded event model: each call
/// runs to completion before any other mutation of the same record can
/// start. A genuinely concurrent caller (two tabs on one account) must wrap
/// the whole sequence in a compare-and-swap or lock.
pub struct StatsLedger<S: Storage> {
    storage: S,
}

impl<S: Storage> StatsLedger<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Record one completed game against the logged-in user.
    ///
    /// `games_played` always increments. A win bumps `games_won` and the
    /// streak pair; a loss or draw resets the streak. Flat-award games
    /// (tic-tac-toe, rock-paper-scissors) add their fixed score on a win and
    /// never touch `best_score`; snake accrues its variable score and
    /// `best_score` on every game, win or not. The asymmetry is the site's
    /// historical behavior and is reproduced deliberately.
    ///
    /// Returns the updated stats entry. Fails with `NoCurrentUser` when no
    /// one is logged in; callers treat that as a skip, not a crash.
    pub fn record_completed_game(
        &self,
        kind: GameKind,
        outcome: OutcomeKind,
        score: u32,
    ) -> Result<PerGameStats, LedgerError> {
        let mut user: UserRecord =
            get_item(&self.storage, keys::CURRENT_USER, None).ok_or(LedgerError::NoCurrentUser)?;

        let stats = user.game_stats.entry(kind).or_default();
        stats.games_played += 1;

        match outcome {
            OutcomeKind::Win => {
                stats.games_won += 1;
                stats.win_streak += 1;
                stats.best_streak = stats.best_streak.max(stats.win_streak);
                if !kind.tracks_best_score() {
                    stats.total_score += score;
                }
            }
            OutcomeKind::Lose | OutcomeKind::Draw => {
                stats.win_streak = 0;
            }
        }

        if kind.tracks_best_score() {
            stats.total_score += score;
            stats.best_score = stats.best_score.max(score);
        }

        let updated = *stats;
        debug!(
            %kind,
            ?outcome,
            score,
            games_played = updated.games_played,
            "recorded completed game"
        );

        persist_record(&self.storage, &user);
        self.push_activity(user.id, kind, outcome, score);

        Ok(updated)
    }

    /// The user's activity feed, newest first, at most 10 entries.
    pub fn recent_activity(&self, user_id: Uuid) -> Vec<RecentActivityEntry> {
        get_item(&self.storage, &keys::recent_activity(user_id), Vec::new())
    }

    fn push_activity(&self, user_id: Uuid, kind: GameKind, outcome: OutcomeKind, score: u32) {
        let key = keys::recent_activity(user_id);
        let mut feed: Vec<RecentActivityEntry> = get_item(&self.storage, &key, Vec::new());

        feed.insert(
            0,
            RecentActivityEntry {
                game: kind,
                result: outcome,
                score: (score > 0).then_some(score),
                timestamp: chrono::Utc::now().to_rfc3339(),
            },
        );
        feed.truncate(RECENT_ACTIVITY_LIMIT);

        set_item(&self.storage, &key, &feed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::users::UserStore;

    fn logged_in_ledger() -> (StatsLedger<MemoryStorage>, UserStore<MemoryStorage>, Uuid) {
        let storage = MemoryStorage::new();
        let users = UserStore::new(storage.clone());
        users.register("Alice", "alice@funzone.io", "hunter42").unwrap();
        let user = users.login("alice@funzone.io", "hunter42").unwrap();
        (StatsLedger::new(storage), users, user.id)
    }

    #[test]
    fn test_no_current_user_is_a_skip() {
        let ledger = StatsLedger::new(MemoryStorage::new());
        assert_eq!(
            ledger.record_completed_game(GameKind::TicTacToe, OutcomeKind::Win, 100),
            Err(LedgerError::NoCurrentUser)
        );
    }

    #[test]
    fn test_tictactoe_win_then_loss_scenario() {
        let (ledger, _, _) = logged_in_ledger();

        let stats = ledger
            .record_completed_game(GameKind::TicTacToe, OutcomeKind::Win, 100)
            .unwrap();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.win_streak, 1);
        assert_eq!(stats.best_streak, 1);
        assert_eq!(stats.total_score, 100);
        // Flat-award games never track bestScore
        assert_eq!(stats.best_score, 0);

        let stats = ledger
            .record_completed_game(GameKind::TicTacToe, OutcomeKind::Lose, 0)
            .unwrap();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.win_streak, 0);
        assert_eq!(stats.best_streak, 1);
    }

    #[test]
    fn test_two_wins_count_twice() {
        let (ledger, _, _) = logged_in_ledger();
        ledger
            .record_completed_game(GameKind::RockPaperScissors, OutcomeKind::Win, 50)
            .unwrap();
        let stats = ledger
            .record_completed_game(GameKind::RockPaperScissors, OutcomeKind::Win, 50)
            .unwrap();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.win_streak, 2);
        assert_eq!(stats.total_score, 100);
    }

    #[test]
    fn test_draw_resets_streak_without_score() {
        let (ledger, _, _) = logged_in_ledger();
        ledger
            .record_completed_game(GameKind::RockPaperScissors, OutcomeKind::Win, 50)
            .unwrap();
        let stats = ledger
            .record_completed_game(GameKind::RockPaperScissors, OutcomeKind::Draw, 0)
            .unwrap();
        assert_eq!(stats.win_streak, 0);
        assert_eq!(stats.best_streak, 1);
        assert_eq!(stats.total_score, 50);
    }

    #[test]
    fn test_snake_accrues_score_regardless_of_outcome() {
        let (ledger, _, _) = logged_in_ledger();

        let stats = ledger
            .record_completed_game(GameKind::Snake, OutcomeKind::Lose, 450)
            .unwrap();
        assert_eq!(stats.best_score, 450);
        assert_eq!(stats.total_score, 450);
        assert_eq!(stats.games_won, 0);

        let stats = ledger
            .record_completed_game(GameKind::Snake, OutcomeKind::Lose, 200)
            .unwrap();
        assert_eq!(stats.best_score, 450);
        assert_eq!(stats.total_score, 650);
        assert_eq!(stats.games_played, 2);
    }

    #[test]
    fn test_best_streak_never_decreases() {
        let (ledger, _, _) = logged_in_ledger();
        let outcomes = [
            OutcomeKind::Win,
            OutcomeKind::Win,
            OutcomeKind::Win,
            OutcomeKind::Lose,
            OutcomeKind::Win,
            OutcomeKind::Draw,
            OutcomeKind::Win,
        ];

        let mut previous_best = 0;
        for outcome in outcomes {
            let stats = ledger
                .record_completed_game(GameKind::TicTacToe, outcome, 100)
                .unwrap();
            assert!(stats.best_streak >= previous_best);
            assert!(stats.best_streak >= stats.win_streak);
            assert!(stats.games_won <= stats.games_played);
            previous_best = stats.best_streak;
        }
        assert_eq!(previous_best, 3);
    }

    #[test]
    fn test_ledger_updates_survive_in_users_array() {
        let (ledger, users, user_id) = logged_in_ledger();
        ledger
            .record_completed_game(GameKind::TicTacToe, OutcomeKind::Win, 100)
            .unwrap();

        // Both the denormalized copy and the registry entry moved
        let current = users.current_user().unwrap();
        assert_eq!(current.stats_for(GameKind::TicTacToe).games_won, 1);
        let stored = users
            .all_users()
            .into_iter()
            .find(|u| u.id == user_id)
            .unwrap();
        assert_eq!(stored.stats_for(GameKind::TicTacToe).games_won, 1);
    }

    #[test]
    fn test_activity_feed_capped_at_ten_newest_first() {
        let (ledger, _, user_id) = logged_in_ledger();
        for _ in 0..12 {
            ledger
                .record_completed_game(GameKind::RockPaperScissors, OutcomeKind::Win, 50)
                .unwrap();
        }
        ledger
            .record_completed_game(GameKind::Snake, OutcomeKind::Lose, 30)
            .unwrap();

        let feed = ledger.recent_activity(user_id);
        assert_eq!(feed.len(), RECENT_ACTIVITY_LIMIT);
        assert_eq!(feed[0].game, GameKind::Snake);
        assert_eq!(feed[0].result, OutcomeKind::Lose);
        assert_eq!(feed[0].score, Some(30));
        assert!(feed[1..].iter().all(|e| e.game == GameKind::RockPaperScissors));
    }

    #[test]
    fn test_zero_score_omitted_from_activity_entry() {
        let (ledger, _, user_id) = logged_in_ledger();
        ledger
            .record_completed_game(GameKind::TicTacToe, OutcomeKind::Lose, 0)
            .unwrap();
        assert_eq!(ledger.recent_activity(user_id)[0].score, None);
    }
}
