//! Cumulative win counters.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Win totals per mark.
///
/// Survives board resets; only [`Scoreboard::reset`] zeroes it.
/// Serializes as `{"X": n, "O": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    #[serde(rename = "X")]
    x_wins: u32,
    #[serde(rename = "O")]
    o_wins: u32,
}

impl Scoreboard {
    /// Creates a scoreboard with both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Win count for the given mark.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Adds one win for the given mark.
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
        }
    }

    /// Returns both counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
