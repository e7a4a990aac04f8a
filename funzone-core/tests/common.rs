use funzone_core::{Board, TicTacToeSession};
use funzone_types::Mark;

/// Replays marks in the given order through the engine.
pub fn board_from(positions: &[(usize, Mark)]) -> Board {
    let mut board = Board::new();
    for &(index, mark) in positions {
        board.place(index, mark).unwrap();
    }
    board
}

/// A vs-AI session where the human has already opened on the center.
pub fn center_opened_session() -> TicTacToeSession {
    let mut session = TicTacToeSession::new(true);
    session.place(4).unwrap();
    session
}
