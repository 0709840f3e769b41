//! Puzzle generation: randomized constructive fill plus greedy,
//! uniqueness-preserving cell removal.

use crate::{solver, Difficulty, Grid, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, trace};

/// A generated puzzle together with the solution it was carved from.
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// The given grid handed to the player; empty cells are zero.
    pub puzzle: Grid,
    /// The unique completion of `puzzle`.
    pub solution: Grid,
    pub difficulty: Difficulty,
    /// Cells actually removed. May fall short of the difficulty target when
    /// no further removal preserves uniqueness.
    pub removed_cells: usize,
}

/// Sudoku puzzle generator with an owned, seedable random source.
pub struct Generator {
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a puzzle at the given difficulty.
    pub fn generate(&mut self, difficulty: Difficulty) -> GeneratedPuzzle {
        let solution = self.fill_solution();
        let target = difficulty.cells_to_remove();
        let (puzzle, removed_cells) = self.carve(&solution, target);
        if removed_cells < target {
            debug!(removed_cells, target, "carve stopped short of target");
        }
        GeneratedPuzzle {
            puzzle,
            solution,
            difficulty,
            removed_cells,
        }
    }

    /// Produce a completely filled valid grid.
    ///
    /// The three diagonal boxes share no row, column, or box, so they can be
    /// seeded with arbitrary permutations before the backtracking fill; this
    /// seeds variety and shrinks the search.
    pub fn fill_solution(&mut self) -> Grid {
        let mut grid = Grid::empty();
        for band in [0, 3, 6] {
            self.fill_box(&mut grid, band, band);
        }
        let filled = self.fill_remaining(&mut grid, 0);
        debug_assert!(filled, "diagonally seeded 9x9 grid is always completable");
        debug!("generated full solution grid");
        grid
    }

    /// Remove up to `target` cells from a copy of `solution`, keeping each
    /// removal only if the grid still has a unique solution. Returns the
    /// carved puzzle and the number of cells actually removed.
    ///
    /// Greedy and order-dependent: the shuffled visitation order is the only
    /// source of variety for a fixed difficulty, and the result is not the
    /// maximum-removable puzzle, just some valid one.
    pub fn carve(&mut self, solution: &Grid, target: usize) -> (Grid, usize) {
        let mut puzzle = *solution;
        let mut positions: Vec<Position> = Position::all().collect();
        positions.shuffle(&mut self.rng);

        let mut removed = 0;
        for pos in positions {
            if removed >= target {
                break;
            }
            let kept = puzzle.get(pos);
            if kept == 0 {
                continue;
            }
            puzzle.set(pos, 0);
            if solver::has_unique_solution(&puzzle) {
                removed += 1;
                trace!(row = pos.row, col = pos.col, removed, "removed cell");
            } else {
                puzzle.set(pos, kept);
            }
        }
        (puzzle, removed)
    }

    fn fill_box(&mut self, grid: &mut Grid, start_row: usize, start_col: usize) {
        let mut values: Vec<u8> = (1..=9).collect();
        values.shuffle(&mut self.rng);

        let mut idx = 0;
        for row in start_row..start_row + 3 {
            for col in start_col..start_col + 3 {
                grid.set(Position::new(row, col), values[idx]);
                idx += 1;
            }
        }
    }

    /// Recursive backtracking over cells in row-major order, trying digits
    /// in random order and undoing each failed assignment.
    fn fill_remaining(&mut self, grid: &mut Grid, index: usize) -> bool {
        if index == 81 {
            return true;
        }
        let pos = Position::new(index / 9, index % 9);
        if grid.get(pos) != 0 {
            return self.fill_remaining(grid, index + 1);
        }

        let mut digits: Vec<u8> = (1..=9).collect();
        digits.shuffle(&mut self.rng);

        for &digit in &digits {
            if grid.is_valid(pos, digit) {
                grid.set(pos, digit);
                if self.fill_remaining(grid, index + 1) {
                    return true;
                }
                grid.set(pos, 0);
            }
        }
        false
    }
}
