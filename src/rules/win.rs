//! Win detection for tic-tac-toe.

use crate::types::{Board, Cell, CellState, Mark};
use tracing::instrument;

/// The 8 lines that decide a match: 3 rows, 3 columns, 2 diagonals.
const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Returns the mark holding a complete line, if any.
///
/// All 8 lines are checked; at most one mark can hold a completed line at a
/// time because marks are never overwritten within a match.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let state = board.get(a);
        if state != CellState::Empty && state == board.get(b) && state == board.get(c) {
            return match state {
                CellState::Marked(mark) => Some(mark),
                CellState::Empty => None,
            };
        }
    }

    None
}
