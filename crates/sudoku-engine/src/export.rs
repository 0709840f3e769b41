//! Shareable snapshots and text renditions of a puzzle.
//!
//! Export is pure in-memory string construction over a read-only
//! [`PuzzleSnapshot`]; richer document formats are a presentation concern
//! layered on top of the same snapshot.

use crate::{Difficulty, Grid};
use chrono::DateTime;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;

/// Read-only view of one puzzle, handed to export collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct PuzzleSnapshot {
    pub puzzle: Grid,
    pub solution: Grid,
    pub difficulty: Difficulty,
    pub puzzle_id: String,
    /// Unix timestamp of puzzle creation.
    pub timestamp: u64,
}

/// Canonical fingerprint hashed into the shareable puzzle id.
#[derive(Serialize)]
struct Fingerprint<'a> {
    board: &'a Grid,
    difficulty: Difficulty,
    timestamp: u64,
}

/// Derive the short shareable label for a puzzle: SHA-256 over the canonical
/// JSON fingerprint, truncated to 8 hex characters.
///
/// Human-shareable only. Collisions are not handled; never use this as a
/// correctness-critical key.
pub fn puzzle_id(board: &Grid, difficulty: Difficulty, timestamp: u64) -> String {
    let fingerprint = Fingerprint {
        board,
        difficulty,
        timestamp,
    };
    let canonical = serde_json::to_string(&fingerprint).unwrap_or_default();
    let digest = Sha256::digest(canonical.as_bytes());
    digest
        .iter()
        .take(4)
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

impl PuzzleSnapshot {
    fn date_line(&self) -> String {
        DateTime::from_timestamp(self.timestamp as i64, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| self.timestamp.to_string())
    }

    /// Printable puzzle sheet with a box-drawing grid, optionally followed
    /// by the solution, plus solving instructions.
    pub fn formatted_text(&self, include_solution: bool) -> String {
        let mut text = String::new();
        text.push_str("SUDOKU PUZZLE\n");
        text.push_str(&"=".repeat(40));
        text.push('\n');
        let _ = writeln!(text, "Difficulty: {}", self.difficulty);
        let _ = writeln!(text, "Puzzle ID: {}", self.puzzle_id);
        let _ = writeln!(text, "Date: {}", self.date_line());
        text.push_str(&"=".repeat(40));
        text.push_str("\n\n");

        text.push_str("PUZZLE GRID:\n");
        text.push_str(&boxed_grid(&self.puzzle));
        text.push('\n');

        if include_solution {
            text.push_str("SOLUTION:\n");
            text.push_str(&boxed_grid(&self.solution));
            text.push('\n');
        }

        text.push_str("INSTRUCTIONS:\n");
        text.push_str(&"-".repeat(40));
        text.push('\n');
        text.push_str("1. Fill each row with numbers 1-9 (no repeats)\n");
        text.push_str("2. Fill each column with numbers 1-9 (no repeats)\n");
        text.push_str("3. Fill each 3x3 box with numbers 1-9 (no repeats)\n");
        text.push_str("4. Use pencil marks for possible numbers\n");
        text.push_str("5. Start with rows/columns with most given numbers\n\n");

        let _ = write!(
            text,
            "Share this puzzle with friends using Puzzle ID: {}",
            self.puzzle_id
        );
        text
    }

    /// Plain ASCII rendition without box-drawing characters.
    pub fn simple_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "Sudoku Puzzle - {}", self.difficulty);
        let _ = writeln!(text, "Puzzle ID: {}", self.puzzle_id);
        let _ = writeln!(text, "Date: {}", self.date_line());
        text.push_str(&"=".repeat(40));
        text.push_str("\n\n");

        let _ = write!(text, "{}", self.puzzle);

        text.push_str("\nInstructions:\n");
        text.push_str("1. Fill each row with numbers 1-9 (no repeats)\n");
        text.push_str("2. Fill each column with numbers 1-9 (no repeats)\n");
        text.push_str("3. Fill each 3x3 box with numbers 1-9 (no repeats)\n");
        text
    }

    /// Short challenge blurb for sharing the puzzle id.
    pub fn share_text(&self) -> String {
        format!(
            "Sudoku Challenge!\n\n\
             Difficulty: {}\n\
             Puzzle ID: {}\n\
             Date: {}\n\n\
             Can you solve it? Share your time!",
            self.difficulty,
            self.puzzle_id,
            self.date_line()
        )
    }
}

/// Render a grid with box-drawing borders; empty cells print as a middle dot.
fn boxed_grid(grid: &Grid) -> String {
    let mut text = String::from("╔═══════╦═══════╦═══════╗\n");
    for (row, cells) in grid.rows().iter().enumerate() {
        if row % 3 == 0 && row > 0 {
            text.push_str("╠═══════╬═══════╬═══════╣\n");
        }
        text.push_str("║ ");
        for (col, &value) in cells.iter().enumerate() {
            if col % 3 == 0 && col > 0 {
                text.push_str("║ ");
            }
            match value {
                0 => text.push('·'),
                v => text.push((b'0' + v) as char),
            }
            text.push(' ');
        }
        text.push_str("║\n");
    }
    text.push_str("╚═══════╩═══════╩═══════╝\n");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Generator, Position};

    fn snapshot() -> PuzzleSnapshot {
        let generated = Generator::with_seed(42).generate(Difficulty::Easy);
        let timestamp = 1_700_000_000;
        PuzzleSnapshot {
            puzzle: generated.puzzle,
            solution: generated.solution,
            difficulty: generated.difficulty,
            puzzle_id: puzzle_id(&generated.puzzle, generated.difficulty, timestamp),
            timestamp,
        }
    }

    #[test]
    fn puzzle_id_is_a_short_hex_token() {
        let snap = snapshot();
        assert_eq!(snap.puzzle_id.len(), 8);
        assert!(snap.puzzle_id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn puzzle_id_is_stable_and_input_sensitive() {
        let snap = snapshot();
        let same = puzzle_id(&snap.puzzle, snap.difficulty, snap.timestamp);
        assert_eq!(snap.puzzle_id, same);

        let other_difficulty = puzzle_id(&snap.puzzle, Difficulty::Hard, snap.timestamp);
        assert_ne!(snap.puzzle_id, other_difficulty);

        let other_time = puzzle_id(&snap.puzzle, snap.difficulty, snap.timestamp + 1);
        assert_ne!(snap.puzzle_id, other_time);

        let mut board = snap.puzzle;
        let pos = board.first_empty().unwrap();
        board.set(pos, snap.solution.get(pos));
        let other_board = puzzle_id(&board, snap.difficulty, snap.timestamp);
        assert_ne!(snap.puzzle_id, other_board);
    }

    #[test]
    fn formatted_text_carries_header_and_grid() {
        let snap = snapshot();
        let text = snap.formatted_text(false);
        assert!(text.contains("SUDOKU PUZZLE"));
        assert!(text.contains("Difficulty: Easy"));
        assert!(text.contains(&format!("Puzzle ID: {}", snap.puzzle_id)));
        assert!(text.contains("Date: 2023-11-14"));
        assert!(text.contains("╔═══════╦═══════╦═══════╗"));
        assert!(!text.contains("SOLUTION:"));
    }

    #[test]
    fn formatted_text_can_include_the_solution() {
        let snap = snapshot();
        let text = snap.formatted_text(true);
        assert!(text.contains("SOLUTION:"));
        // The solution grid has no empty cells to render.
        let solution_part = text.split("SOLUTION:").nth(1).unwrap();
        let grid_part = solution_part.split("INSTRUCTIONS").next().unwrap();
        assert!(!grid_part.contains('·'));
    }

    #[test]
    fn simple_text_uses_plain_ascii_grid() {
        let snap = snapshot();
        let text = snap.simple_text();
        assert!(text.contains("------+-------+------"));
        assert!(!text.contains('╔'));
        assert!(text.contains("Instructions:"));
    }

    #[test]
    fn share_text_names_the_id() {
        let snap = snapshot();
        let text = snap.share_text();
        assert!(text.contains(&snap.puzzle_id));
        assert!(text.contains("Difficulty: Easy"));
    }

    #[test]
    fn boxed_grid_marks_empty_cells() {
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), 5);
        let text = boxed_grid(&grid);
        assert!(text.starts_with('╔'));
        assert!(text.contains("║ 5 · ·"));
    }
}
