//! Tie detection for tic-tac-toe.

use crate::types::{Board, CellState};
use tracing::instrument;

/// True when every cell holds a mark.
///
/// A full board with no winning line is a tie. Win evaluation runs first,
/// so this is only consulted once [`winner`](crate::rules::winner) came up
/// empty.
#[instrument]
pub fn board_full(board: &Board) -> bool {
    board.cells().iter().all(|state| *state != CellState::Empty)
}
