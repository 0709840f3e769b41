//! Interactive game session: the puzzle/solution/user-grid triple plus
//! timing, hint, and error-check operations consumed by a presentation
//! layer.
//!
//! A session is exclusively owned by its caller. Every operation runs to
//! completion before the next; nothing here blocks or shares state.

use crate::export::{self, PuzzleSnapshot};
use crate::{Difficulty, Generator, Grid, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// One puzzle being played.
pub struct Session {
    /// The given grid; non-zero cells are immutable for the player.
    puzzle: Grid,
    /// The unique completion of `puzzle`.
    solution: Grid,
    /// The player's working grid, initially equal to `puzzle`.
    user: Grid,
    difficulty: Difficulty,
    /// Short shareable label, derived from the puzzle fingerprint.
    puzzle_id: String,
    /// Unix timestamp of puzzle creation.
    created_at: u64,
    start_time: Instant,
    /// Elapsed time recorded by the last successful solution check.
    finished: Option<Duration>,
    hints_used: usize,
    /// Cells the carver actually removed; may fall short of the target.
    removed_cells: usize,
    selected: Option<Position>,
    rng: StdRng,
}

impl Session {
    /// Start a new game at the given difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_generator(difficulty, Generator::new(), StdRng::from_entropy())
    }

    /// Start a reproducible game: generation, carving, and hint order all
    /// derive from `seed`.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::from_generator(
            difficulty,
            Generator::with_seed(seed),
            StdRng::seed_from_u64(seed.wrapping_add(0x9e37_79b9_7f4a_7c15)),
        )
    }

    fn from_generator(difficulty: Difficulty, mut generator: Generator, rng: StdRng) -> Self {
        let generated = generator.generate(difficulty);
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let puzzle_id = export::puzzle_id(&generated.puzzle, difficulty, created_at);

        Self {
            puzzle: generated.puzzle,
            solution: generated.solution,
            user: generated.puzzle,
            difficulty,
            puzzle_id,
            created_at,
            start_time: Instant::now(),
            finished: None,
            hints_used: 0,
            removed_cells: generated.removed_cells,
            selected: None,
            rng,
        }
    }

    pub fn puzzle_grid(&self) -> &Grid {
        &self.puzzle
    }

    pub fn solution_grid(&self) -> &Grid {
        &self.solution
    }

    pub fn user_grid(&self) -> &Grid {
        &self.user
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn puzzle_id(&self) -> &str {
        &self.puzzle_id
    }

    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    pub fn removed_cells(&self) -> usize {
        self.removed_cells
    }

    /// Whether the cell is pre-filled and immutable for the player.
    pub fn is_given(&self, pos: Position) -> bool {
        self.puzzle.get(pos) != 0
    }

    /// Write `value` into the user grid; 0 clears the cell. Given cells are
    /// never touched and out-of-range values are rejected; returns whether
    /// the edit applied. No validity enforcement: conflicting entries are
    /// allowed and surfaced by [`check_errors`](Self::check_errors).
    pub fn set_cell(&mut self, pos: Position, value: u8) -> bool {
        if value > 9 || self.is_given(pos) {
            return false;
        }
        self.user.set(pos, value);
        true
    }

    /// Clear a user-entered cell.
    pub fn clear_cell(&mut self, pos: Position) -> bool {
        self.set_cell(pos, 0)
    }

    /// Fill one empty user cell, chosen uniformly at random, with its
    /// solution value. Returns the chosen position, or `None` when no empty
    /// cell remains.
    pub fn get_hint(&mut self) -> Option<Position> {
        let empty = self.user.empty_positions();
        let pos = *empty.choose(&mut self.rng)?;
        self.user.set(pos, self.solution.get(pos));
        self.hints_used += 1;
        Some(pos)
    }

    /// Positions of filled user cells that duplicate a digit in their row,
    /// column, or box. Detects only local conflicts: a locally valid value
    /// that differs from the solution is not flagged.
    pub fn check_errors(&self) -> HashSet<Position> {
        Position::all()
            .filter(|&pos| self.user.has_conflict(pos))
            .collect()
    }

    /// Whether the user grid equals the solution cell-for-cell. On success
    /// the completion time is recorded; a repeated true check re-records it
    /// (last true check wins).
    pub fn check_solution(&mut self) -> bool {
        if self.user != self.solution {
            return false;
        }
        self.finished = Some(self.start_time.elapsed());
        true
    }

    /// All user cells filled, not necessarily correctly.
    pub fn is_complete(&self) -> bool {
        self.user.is_complete()
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Whole seconds since the game started, frozen at the recorded
    /// completion time once the puzzle has been verified solved.
    pub fn elapsed_seconds(&self) -> u64 {
        match self.finished {
            Some(elapsed) => elapsed.as_secs(),
            None => self.start_time.elapsed().as_secs(),
        }
    }

    /// Elapsed time as "MM:SS".
    pub fn elapsed_string(&self) -> String {
        format_mm_ss(self.elapsed_seconds())
    }

    /// Mark a cell as selected for the presentation layer. Given cells are
    /// not selectable; returns whether the selection applied.
    pub fn select_cell(&mut self, pos: Position) -> bool {
        if self.is_given(pos) {
            return false;
        }
        self.selected = Some(pos);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_cell(&self) -> Option<Position> {
        self.selected
    }

    /// Read-only view for export collaborators.
    pub fn snapshot(&self) -> PuzzleSnapshot {
        PuzzleSnapshot {
            puzzle: self.puzzle,
            solution: self.solution,
            difficulty: self.difficulty,
            puzzle_id: self.puzzle_id.clone(),
            timestamp: self.created_at,
        }
    }
}

/// Format whole seconds as zero-padded "MM:SS". Minutes run past 59 without
/// rolling over into hours.
pub fn format_mm_ss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
