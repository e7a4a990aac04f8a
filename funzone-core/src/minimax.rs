use funzone_types::Mark;

use crate::board::{winner_of, Cells, Board, BOARD_CELLS};

/// The empty cell that maximizes the outcome for `mark` under optimal play
/// by both sides, or `None` when the board is terminal or full.
///
/// Exhaustive minimax over the remaining empty cells; the 3x3 state space is
/// small enough that no pruning is needed. Ties in score are broken by the
/// lowest cell index, which keeps the choice deterministic but is not a
/// strategic preference.
pub fn best_move(board: &Board, mark: Mark) -> Option<usize> {
    if board.state().is_terminal() {
        return None;
    }

    let mut best_score = i32::MIN;
    let mut best_cell = None;

    let cells = *board.cells();
    for index in 0..BOARD_CELLS {
        if cells[index].is_none() {
            let score = minimax(with_mark(&cells, index, mark), mark, 1, false);
            if score > best_score {
                best_score = score;
                best_cell = Some(index);
            }
        }
    }

    best_cell
}

/// Score a position for `optimizing`, `depth` plies below the original call.
/// Wins score `10 - depth` so that faster wins (and slower losses) are
/// preferred among equals. Recursion is over copied cell arrays, so no state
/// leaks between sibling branches.
fn minimax(cells: Cells, optimizing: Mark, depth: i32, maximizing: bool) -> i32 {
    if let Some(winner) = winner_of(&cells) {
        return if winner == optimizing {
            10 - depth
        } else {
            depth - 10
        };
    }
    if cells.iter().all(|cell| cell.is_some()) {
        return 0;
    }

    let mover = if maximizing {
        optimizing
    } else {
        optimizing.opponent()
    };

    let scores = (0..BOARD_CELLS)
        .filter(|&index| cells[index].is_none())
        .map(|index| minimax(with_mark(&cells, index, mover), optimizing, depth + 1, !maximizing));

    if maximizing {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}

fn with_mark(cells: &Cells, index: usize, mark: Mark) -> Cells {
    let mut next = *cells;
    next[index] = Some(mark);
    next
}
