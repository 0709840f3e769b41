//! Core Sudoku engine: randomized solution generation, uniqueness-preserving
//! puzzle carving, and interactive game sessions.
//!
//! The engine is presentation-agnostic. A UI (terminal, web, document
//! printer) owns a [`Session`] and drives it through cell edits, hints, and
//! checks; text renditions for sharing live in [`export`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub mod export;
pub mod generator;
pub mod grid;
pub mod session;
pub mod solver;

pub use export::PuzzleSnapshot;
pub use generator::{GeneratedPuzzle, Generator};
pub use grid::{Grid, ParseGridError, Position};
pub use session::{format_mm_ss, Session};
pub use solver::{count_solutions, has_unique_solution};

/// Difficulty level of a puzzle.
///
/// Each level maps to a target number of cells the carver removes from the
/// full solution grid. The carver may stop short when no further cell can be
/// removed without losing solution uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Target count of cells to remove from the 81-cell solution grid.
    pub fn cells_to_remove(&self) -> usize {
        match self {
            Difficulty::Easy => 35,
            Difficulty::Medium => 45,
            Difficulty::Hard => 50,
            Difficulty::Expert => 55,
        }
    }

    /// All difficulty levels, easiest first.
    pub fn all_levels() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::Expert => write!(f, "Expert"),
        }
    }
}

/// Error returned when a difficulty name fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty: {0:?}")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}
