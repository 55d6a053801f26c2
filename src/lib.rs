//! Tic-tac-toe match engine with score tracking.
//!
//! A finite-state model of one two-player match plus cumulative win
//! counters, decoupled from any rendering technology. A frontend owns a
//! [`Session`], feeds it grid coordinates from its input handling, and
//! renders whatever the accessors return; game truth never lives in
//! widget state.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`CellState`], [`Cell`], [`Board`]
//! - **Rules**: pure win and tie evaluation over a board
//! - **Match**: the mutable state machine (`InProgress` → `Won`/`Tied`)
//! - **Session**: one match plus the [`Scoreboard`] that outlives it
//!
//! Illegal moves (occupied cell, move after the match ended) are defined
//! no-ops, mirroring a UI where used cells stop responding; only
//! out-of-range coordinates are an error.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Mark, PlaceOutcome, Session};
//!
//! # fn main() -> Result<(), tictactoe_engine::CoordError> {
//! let mut session = Session::new();
//!
//! session.place_mark(0, 0)?; // X
//! session.place_mark(1, 1)?; // O
//! session.place_mark(0, 1)?; // X
//! session.place_mark(2, 2)?; // O
//!
//! // X completes the top row
//! let outcome = session.place_mark(0, 2)?;
//! assert_eq!(outcome, PlaceOutcome::Won(Mark::X));
//! assert_eq!(session.scores().wins(Mark::X), 1);
//!
//! // The winning board stays readable until the frontend resets it
//! session.reset_board();
//! assert_eq!(session.current_player(), Mark::X);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod rules;
mod scoreboard;
mod session;
mod types;

pub use game::{Match, MatchStatus, PlaceOutcome};
pub use rules::{board_full, winner};
pub use scoreboard::Scoreboard;
pub use session::Session;
pub use types::{Board, Cell, CellState, CoordError, Mark};
