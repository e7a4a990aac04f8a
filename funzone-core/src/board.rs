use funzone_types::{BoardState, GameError, GameOutcome, Mark};

pub const BOARD_CELLS: usize = 9;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub type Cells = [Option<Mark>; BOARD_CELLS];

/// A 3x3 tic-tac-toe board and whose turn it is. X always moves first.
/// Owned by the in-memory game session; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: Cells,
    to_move: Mark,
    state: BoardState,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
            to_move: Mark::X,
            state: BoardState::InProgress,
        }
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    /// The mark that places next. Meaningless once the board is terminal.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        assert!(index < BOARD_CELLS, "cell index {index} out of range");
        self.cells[index]
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
    }

    /// Place `mark` on `index` and return the resulting state. The turn
    /// flips only when the game continues. Out-of-range indices are a caller
    /// contract violation and panic.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<BoardState, GameError> {
        assert!(index < BOARD_CELLS, "cell index {index} out of range");

        if self.state.is_terminal() {
            return Err(GameError::GameAlreadyCompleted);
        }
        if mark != self.to_move {
            return Err(GameError::NotYourTurn { mark });
        }
        if self.cells[index].is_some() {
            return Err(GameError::CellOccupied { cell: index });
        }

        self.cells[index] = Some(mark);

        if let Some(winner) = winner_of(&self.cells) {
            self.state = BoardState::Won(winner);
        } else if self.is_full() {
            self.state = BoardState::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }

        Ok(self.state)
    }

    /// The outcome of a finished board, or `None` while still in progress.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state {
            BoardState::InProgress => None,
            BoardState::Won(mark) => Some(GameOutcome::Win(mark)),
            BoardState::Draw => Some(GameOutcome::Draw),
        }
    }

    /// The winning line for `winner`, used by the UI to highlight cells.
    pub fn winning_line(&self, winner: Mark) -> Option<[usize; 3]> {
        WINNING_LINES
            .iter()
            .find(|line| line.iter().all(|&i| self.cells[i] == Some(winner)))
            .copied()
    }

    /// Clear the board for a new game. X moves first again.
    pub fn reset(&mut self) {
        *self = Board::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Check all 8 lines for a fully occupied one. Free function so minimax can
/// evaluate candidate cell arrays without building a `Board`.
pub fn winner_of(cells: &Cells) -> Option<Mark> {
    for line in &WINNING_LINES {
        let [a, b, c] = *line;
        if cells[a].is_some() && cells[a] == cells[b] && cells[a] == cells[c] {
            return cells[a];
        }
    }
    None
}
