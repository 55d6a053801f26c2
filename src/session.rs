//! The session a presentation layer owns: one match plus its scoreboard.

use crate::game::{Match, MatchStatus, PlaceOutcome};
use crate::scoreboard::Scoreboard;
use crate::types::{Board, CellState, CoordError, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One play session: the authoritative match state and the win counters
/// that accumulate across matches.
///
/// A frontend constructs one `Session`, holds it for its lifetime, and
/// drives it from its input callbacks. All game truth lives here; widgets
/// only render what the accessors return. There is exactly one mutator and
/// no interior mutability, per the single-threaded model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    game: Match,
    scoreboard: Scoreboard,
}

impl Session {
    /// Starts a session with an empty board and zeroed scores.
    #[instrument]
    pub fn new() -> Self {
        info!("starting tic-tac-toe session");
        Self {
            game: Match::new(),
            scoreboard: Scoreboard::new(),
        }
    }

    /// Places the current player's mark at (row, col).
    ///
    /// Delegates move legality to [`Match::place_mark`] and records the win
    /// when a placement completes a line, so a won match bumps the winner's
    /// counter exactly once. The returned [`PlaceOutcome`] tells the
    /// frontend what to do next: repaint, announce a result, or nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CoordError`] if either index is outside `0..3`.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<PlaceOutcome, CoordError> {
        let outcome = self.game.place_mark(row, col)?;
        match outcome {
            PlaceOutcome::Ignored => debug!(row, col, "input ignored"),
            PlaceOutcome::TurnAdvanced(next) => debug!(row, col, next = %next, "turn advanced"),
            PlaceOutcome::Won(winner) => {
                self.scoreboard.record_win(winner);
                info!(
                    row,
                    col,
                    winner = %winner,
                    wins = self.scoreboard.wins(winner),
                    "match won"
                );
            }
            PlaceOutcome::Tied => info!(row, col, "match tied"),
        }
        Ok(outcome)
    }

    /// Clears the board for a new match, keeping the scores.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        info!("board reset");
        self.game.reset();
    }

    /// Zeroes both scores and clears the board.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        info!("scores reset");
        self.scoreboard.reset();
        self.game.reset();
    }

    /// State of the cell at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`CoordError`] if either index is outside `0..3`.
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState, CoordError> {
        self.game.cell(row, col)
    }

    /// The board, for whole-grid rendering.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// The match status.
    pub fn status(&self) -> MatchStatus {
        self.game.status()
    }

    /// The mark that moves next.
    pub fn current_player(&self) -> Mark {
        self.game.current_player()
    }

    /// The win counters.
    pub fn scores(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Status text for display, in the shape frontends show it.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            MatchStatus::InProgress => format!("Current Player: {}", self.game.current_player()),
            MatchStatus::Won(winner) => format!("Player {winner} wins!"),
            MatchStatus::Tied => "It's a tie!".to_string(),
        }
    }
}
