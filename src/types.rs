//! Core domain types for the tic-tac-toe engine.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// No mark placed yet.
    Empty,
    /// Cell holds a mark. Marked cells are never overwritten before a reset.
    Marked(Mark),
}

/// Error for grid coordinates outside the 3x3 range.
///
/// Occupied cells and finished matches are deliberately not errors (those
/// inputs are ignored, like clicks on a disabled control); only a coordinate
/// the grid does not have is treated as a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("coordinates ({row}, {col}) are outside the 3x3 grid")]
pub struct CoordError {
    /// Row index as passed by the caller.
    pub row: usize,
    /// Column index as passed by the caller.
    pub col: usize,
}

impl std::error::Error for CoordError {}

/// One of the nine positions on the grid.
///
/// A constructed `Cell` is always in bounds, so board accessors taking a
/// `Cell` are infallible; coordinate validation happens once in
/// [`Cell::from_coords`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Cell {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Cell {
    /// Resolves a (row, col) pair to its cell.
    ///
    /// # Errors
    ///
    /// Returns [`CoordError`] if either index is outside `0..3`.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Result<Self, CoordError> {
        match (row, col) {
            (0, 0) => Ok(Cell::TopLeft),
            (0, 1) => Ok(Cell::TopCenter),
            (0, 2) => Ok(Cell::TopRight),
            (1, 0) => Ok(Cell::MiddleLeft),
            (1, 1) => Ok(Cell::Center),
            (1, 2) => Ok(Cell::MiddleRight),
            (2, 0) => Ok(Cell::BottomLeft),
            (2, 1) => Ok(Cell::BottomCenter),
            (2, 2) => Ok(Cell::BottomRight),
            _ => Err(CoordError { row, col }),
        }
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        match self {
            Cell::TopLeft => 0,
            Cell::TopCenter => 1,
            Cell::TopRight => 2,
            Cell::MiddleLeft => 3,
            Cell::Center => 4,
            Cell::MiddleRight => 5,
            Cell::BottomLeft => 6,
            Cell::BottomCenter => 7,
            Cell::BottomRight => 8,
        }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// The 3x3 grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cell states in row-major order.
    cells: [CellState; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [CellState::Empty; 9],
        }
    }

    /// State of the given cell.
    pub fn get(&self, cell: Cell) -> CellState {
        self.cells[cell.index()]
    }

    /// Writes a cell state. Callers enforce the no-overwrite rule.
    pub(crate) fn set(&mut self, cell: Cell, state: CellState) {
        self.cells[cell.index()] = state;
    }

    /// True if the cell holds no mark.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == CellState::Empty
    }

    /// All cell states in row-major order.
    pub fn cells(&self) -> &[CellState; 9] {
        &self.cells
    }

    /// Cells still open for play, in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::iter().filter(|cell| self.is_empty(*cell)).collect()
    }

    /// Returns every cell to `Empty`.
    pub(crate) fn clear(&mut self) {
        self.cells = [CellState::Empty; 9];
    }

    /// Formats the board as a human-readable grid.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, state) in self.cells.iter().enumerate() {
            let symbol = match state {
                CellState::Empty => ' ',
                CellState::Marked(Mark::X) => 'X',
                CellState::Marked(Mark::O) => 'O',
            };
            out.push(symbol);
            if i % 3 < 2 {
                out.push('|');
            } else if i < 8 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
