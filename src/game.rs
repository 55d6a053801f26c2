//! The match engine: a finite-state model of one tic-tac-toe game.

use crate::rules;
use crate::types::{Board, Cell, CellState, CoordError, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Moves are still being accepted.
    InProgress,
    /// The mark completed a line. Terminal until a reset.
    Won(Mark),
    /// The board filled with no line complete. Terminal until a reset.
    Tied,
}

impl MatchStatus {
    /// True for `Won` and `Tied`.
    pub fn is_terminal(self) -> bool {
        self != MatchStatus::InProgress
    }
}

/// What a placement did to the match.
///
/// This is the event a frontend reacts to: re-render on `TurnAdvanced`,
/// announce the result on `Won`/`Tied` and then trigger a board reset once
/// the player acknowledges, do nothing on `Ignored`. The engine itself
/// never blocks and never resets on its own, so the final board stays
/// readable until the caller asks for a new match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The cell was occupied or the match was already over; nothing changed.
    Ignored,
    /// The mark was placed and play passed to the given mark.
    TurnAdvanced(Mark),
    /// The mark was placed and completed a line; the match is over.
    Won(Mark),
    /// The mark was placed, the board is full, and nobody won.
    Tied,
}

impl PlaceOutcome {
    /// True if this placement ended the match.
    pub fn ended_match(self) -> bool {
        matches!(self, PlaceOutcome::Won(_) | PlaceOutcome::Tied)
    }
}

/// One tic-tac-toe match: board, mark to move, and status.
///
/// Starts with an empty board, X to move, in progress. `Won` and `Tied`
/// are terminal; [`Match::reset`] is the only way back to `InProgress`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    board: Board,
    current_player: Mark,
    status: MatchStatus,
}

impl Match {
    /// Creates a fresh match with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: MatchStatus::InProgress,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that moves next. Meaningful only while in progress.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// The match status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// State of the cell at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`CoordError`] if either index is outside `0..3`.
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState, CoordError> {
        Ok(self.board.get(Cell::from_coords(row, col)?))
    }

    /// Places the current player's mark at (row, col).
    ///
    /// Coordinate-addressed entry point for callers working in grid
    /// indices. Occupied cells and finished matches are not errors; see
    /// [`Match::place`].
    ///
    /// # Errors
    ///
    /// Returns [`CoordError`] if either index is outside `0..3`.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<PlaceOutcome, CoordError> {
        let cell = Cell::from_coords(row, col)?;
        Ok(self.place(cell))
    }

    /// Places the current player's mark at the given cell.
    ///
    /// A move on an occupied cell, or after the match ended, changes
    /// nothing and returns [`PlaceOutcome::Ignored`]. Otherwise the mark is
    /// written, the status re-evaluated (win first, then tie), and the turn
    /// passed if the match continues.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, cell: Cell) -> PlaceOutcome {
        if self.status.is_terminal() {
            debug!(%cell, "move after match end ignored");
            return PlaceOutcome::Ignored;
        }
        if !self.board.is_empty(cell) {
            debug!(%cell, "move on occupied cell ignored");
            return PlaceOutcome::Ignored;
        }

        let mark = self.current_player;
        self.board.set(cell, CellState::Marked(mark));

        if let Some(winner) = rules::winner(&self.board) {
            self.status = MatchStatus::Won(winner);
            return PlaceOutcome::Won(winner);
        }

        if rules::board_full(&self.board) {
            self.status = MatchStatus::Tied;
            return PlaceOutcome::Tied;
        }

        self.current_player = mark.opponent();
        PlaceOutcome::TurnAdvanced(self.current_player)
    }

    /// Clears the board for a new match. X moves first again.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Mark::X;
        self.status = MatchStatus::InProgress;
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
