use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the two player symbols on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Lifecycle of a board: starts in progress, ends won or drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BoardState {
    InProgress,
    Won(Mark),
    Draw,
}

impl BoardState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BoardState::InProgress)
    }
}

/// Result of a finished board, derived purely from its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}
