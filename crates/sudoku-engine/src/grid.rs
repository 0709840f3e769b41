//! The 9x9 board abstraction and its constraint checks.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A cell coordinate on the board (row and column both 0-8).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..81).map(|i| Position::new(i / 9, i % 9))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row + 1, self.col + 1)
    }
}

/// Error parsing a grid from its 81-character string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGridError {
    #[error("expected 81 cells, got {0}")]
    WrongLength(usize),
    #[error("invalid cell character {0:?}")]
    InvalidChar(char),
}

/// A 9x9 grid of cells. Each cell holds 0 (empty) or a digit 1-9.
///
/// A grid is "complete" when every cell is filled and every row, column,
/// and 3x3 box is a permutation of 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// An all-empty grid.
    pub fn empty() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!(value <= 9, "cell value out of range: {value}");
        self.cells[pos.row][pos.col] = value;
    }

    /// Row-major view of the cell values.
    pub fn rows(&self) -> &[[u8; 9]; 9] {
        &self.cells
    }

    /// Whether `value` may be placed at `pos` without duplicating a digit
    /// in the position's row, column, or 3x3 box. Pure; at most 27
    /// comparisons. The cell itself is expected to be empty.
    pub fn is_valid(&self, pos: Position, value: u8) -> bool {
        for i in 0..9 {
            if self.cells[pos.row][i] == value {
                return false;
            }
            if self.cells[i][pos.col] == value {
                return false;
            }
        }
        let box_row = (pos.row / 3) * 3;
        let box_col = (pos.col / 3) * 3;
        for row in box_row..box_row + 3 {
            for col in box_col..box_col + 3 {
                if self.cells[row][col] == value {
                    return false;
                }
            }
        }
        true
    }

    /// Whether the filled value at `pos` duplicates a digit elsewhere in
    /// its row, column, or box. Empty cells never conflict.
    #[allow(clippy::needless_range_loop)]
    pub fn has_conflict(&self, pos: Position) -> bool {
        let value = self.get(pos);
        if value == 0 {
            return false;
        }

        for col in 0..9 {
            if col != pos.col && self.cells[pos.row][col] == value {
                return true;
            }
        }
        for row in 0..9 {
            if row != pos.row && self.cells[row][pos.col] == value {
                return true;
            }
        }
        let box_row = (pos.row / 3) * 3;
        let box_col = (pos.col / 3) * 3;
        for row in box_row..box_row + 3 {
            for col in box_col..box_col + 3 {
                if (row != pos.row || col != pos.col) && self.cells[row][col] == value {
                    return true;
                }
            }
        }
        false
    }

    /// First empty cell in row-major order, if any.
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.get(pos) == 0)
    }

    /// All empty cells in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.get(pos) == 0).collect()
    }

    pub fn empty_count(&self) -> usize {
        Position::all().filter(|&pos| self.get(pos) == 0).count()
    }

    pub fn filled_count(&self) -> usize {
        81 - self.empty_count()
    }

    /// All cells filled (not necessarily consistently).
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Parse from 81 characters in row-major order; '.' or '0' for empty.
    /// Whitespace is ignored.
    pub fn from_string(s: &str) -> Result<Self, ParseGridError> {
        let mut grid = Grid::empty();
        let mut index = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            if index >= 81 {
                index += 1;
                continue;
            }
            let value = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                other => return Err(ParseGridError::InvalidChar(other)),
            };
            grid.set(Position::new(index / 9, index % 9), value);
            index += 1;
        }
        if index != 81 {
            return Err(ParseGridError::WrongLength(index));
        }
        Ok(grid)
    }

    /// Compact 81-character form with '.' for empty cells.
    pub fn to_string_compact(&self) -> String {
        Position::all()
            .map(|pos| match self.get(pos) {
                0 => '.',
                v => (b'0' + v) as char,
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row % 3 == 0 && row > 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (col, &value) in cells.iter().enumerate() {
                if col % 3 == 0 && col > 0 {
                    write!(f, "| ")?;
                }
                match value {
                    0 => write!(f, ". ")?,
                    v => write!(f, "{} ", v)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
