use funzone_types::{BoardState, GameError, GameKind, GameOutcome, Mark, OutcomeKind};
use tracing::debug;

use crate::board::Board;
use crate::minimax::best_move;

/// In vs-AI mode the human plays X and the automated opponent plays O.
pub const AI_MARK: Mark = Mark::O;

/// One tic-tac-toe game as the UI shell drives it: forwards move intents
/// into the board, answers whether the game ended, and maps the board
/// outcome to the tracked user's win/lose/draw plus the flat point award.
#[derive(Debug, Clone)]
pub struct TicTacToeSession {
    board: Board,
    vs_ai: bool,
}

impl TicTacToeSession {
    pub fn new(vs_ai: bool) -> Self {
        Self {
            board: Board::new(),
            vs_ai,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn vs_ai(&self) -> bool {
        self.vs_ai
    }

    pub fn state(&self) -> BoardState {
        self.board.state()
    }

    /// Place the mark whose turn it is on `index`. The caller is expected to
    /// ignore a `GameError` the way the UI ignores a dead click.
    pub fn place(&mut self, index: usize) -> Result<BoardState, GameError> {
        let mark = self.board.to_move();
        let state = self.board.place(index, mark)?;
        debug!(cell = index, %mark, ?state, "placed mark");
        Ok(state)
    }

    /// Whether the automated opponent should move next.
    pub fn ai_to_move(&self) -> bool {
        self.vs_ai && !self.state().is_terminal() && self.board.to_move() == AI_MARK
    }

    /// Let the automated opponent take its turn. No-op when it is not the
    /// AI's move or the game is over.
    pub fn ai_move(&mut self) -> Option<BoardState> {
        if !self.ai_to_move() {
            return None;
        }
        let index = best_move(&self.board, AI_MARK)?;
        // best_move only returns empty cells, so this cannot fail
        self.board.place(index, AI_MARK).ok()
    }

    /// Map the finished board to the tracked user's outcome. An X win always
    /// counts for the user; in vs-AI mode an O win is also recorded as a
    /// user win, matching the site's long-standing stats behavior.
    pub fn outcome_for_user(&self) -> Option<OutcomeKind> {
        let outcome = self.board.outcome()?;
        Some(match outcome {
            GameOutcome::Draw => OutcomeKind::Draw,
            GameOutcome::Win(Mark::X) => OutcomeKind::Win,
            GameOutcome::Win(Mark::O) if self.vs_ai => OutcomeKind::Win,
            GameOutcome::Win(Mark::O) => OutcomeKind::Lose,
        })
    }

    /// Flat award for the user outcome: 100 per win, nothing otherwise.
    pub fn score_awarded(&self) -> u32 {
        match self.outcome_for_user() {
            Some(OutcomeKind::Win) => GameKind::TicTacToe
                .flat_win_award()
                .unwrap_or_default(),
            _ => 0,
        }
    }

    /// Toggling the opponent resets the board, like the UI button does.
    pub fn set_vs_ai(&mut self, vs_ai: bool) {
        self.vs_ai = vs_ai;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.board.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_moves_only_on_its_turn() {
        let mut session = TicTacToeSession::new(true);
        assert!(!session.ai_to_move());
        session.place(4).unwrap();
        assert!(session.ai_to_move());
        assert!(session.ai_move().is_some());
        assert!(!session.ai_to_move());
    }

    #[test]
    fn test_ai_replies_with_corner_to_center_opening() {
        let mut session = TicTacToeSession::new(true);
        session.place(4).unwrap();
        session.ai_move().unwrap();
        let corner_taken = [0, 2, 6, 8]
            .iter()
            .any(|&i| session.board().cell(i) == Some(AI_MARK));
        assert!(corner_taken);
    }

    #[test]
    fn test_x_win_is_user_win_with_flat_award() {
        let mut session = TicTacToeSession::new(false);
        for index in [0, 3, 1, 4, 2] {
            session.place(index).unwrap();
        }
        assert_eq!(session.state(), BoardState::Won(Mark::X));
        assert_eq!(session.outcome_for_user(), Some(OutcomeKind::Win));
        assert_eq!(session.score_awarded(), 100);
    }

    #[test]
    fn test_o_win_vs_human_is_user_loss() {
        let mut session = TicTacToeSession::new(false);
        for index in [0, 3, 1, 4, 8, 5] {
            session.place(index).unwrap();
        }
        assert_eq!(session.state(), BoardState::Won(Mark::O));
        assert_eq!(session.outcome_for_user(), Some(OutcomeKind::Lose));
        assert_eq!(session.score_awarded(), 0);
    }

    #[test]
    fn test_o_win_vs_ai_counts_as_user_win() {
        // Long-standing quirk of the site's stats mapping, kept as-is
        let mut session = TicTacToeSession::new(true);
        session.board = {
            let mut board = Board::new();
            for (index, mark) in [
                (0, Mark::X),
                (3, Mark::O),
                (1, Mark::X),
                (4, Mark::O),
                (8, Mark::X),
                (5, Mark::O),
            ] {
                board.place(index, mark).unwrap();
            }
            board
        };
        assert_eq!(session.state(), BoardState::Won(Mark::O));
        assert_eq!(session.outcome_for_user(), Some(OutcomeKind::Win));
    }

    #[test]
    fn test_unfinished_game_has_no_outcome() {
        let mut session = TicTacToeSession::new(false);
        session.place(0).unwrap();
        assert_eq!(session.outcome_for_user(), None);
    }

    #[test]
    fn test_toggling_ai_resets_board() {
        let mut session = TicTacToeSession::new(false);
        session.place(0).unwrap();
        session.set_vs_ai(true);
        assert_eq!(session.board().empty_cells().count(), 9);
        assert!(session.vs_ai());
    }
}
