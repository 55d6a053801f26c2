//! Evaluation rules for tic-tac-toe boards.
//!
//! Pure functions over a [`Board`](crate::types::Board), kept separate from
//! match state so they can be tested in isolation.

pub mod tie;
pub mod win;

pub use tie::board_full;
pub use win::winner;
