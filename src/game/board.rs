use serde::{Deserialize, Serialize};
use std::fmt;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Default glyph used by the text rendering of a board
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// The 6x7 grid. Row 0 is the top, row 5 is the bottom; column 0 is leftmost.
///
/// `Board` is a plain `Copy` value: every copy handed out by the engine owns its
/// own cells, so editing one never reaches back into the game it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Overwrite the cell at a specific position
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Row-major view of the grid, top row first
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Cells of one column, top to bottom
    pub fn column(&self, col: usize) -> [Cell; ROWS] {
        std::array::from_fn(|row| self.cells[row][col])
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Number of cells held by `player`
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(player))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();
        writeln!(f, " {} ", header.join("  "))?;
        writeln!(f, "{}", "-".repeat(COLS * 3 - 1))?;
        for row in &self.cells {
            let glyphs: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(f, " {} ", glyphs.join("  "))?;
        }
        write!(f, "{}", "-".repeat(COLS * 3 - 1))
    }
}
