//! Exhaustive backtracking solution counter, used as the carving oracle.

use crate::Grid;

/// Count the completions of `grid`, stopping as soon as `limit` is reached.
///
/// The search scans cells in row-major order, branches on every valid digit
/// at the first empty cell, and undoes each assignment on the way back. A
/// grid with no empty cell counts as one solution. Callers interested only
/// in uniqueness pass `limit = 2`.
pub fn count_solutions(grid: &Grid, limit: usize) -> usize {
    let mut working = *grid;
    let mut count = 0;
    count_recursive(&mut working, limit, &mut count);
    count
}

/// Whether exactly one completion of `grid` exists.
pub fn has_unique_solution(grid: &Grid) -> bool {
    count_solutions(grid, 2) == 1
}

fn count_recursive(grid: &mut Grid, limit: usize, count: &mut usize) {
    let Some(pos) = grid.first_empty() else {
        *count += 1;
        return;
    };

    for value in 1..=9 {
        if *count >= limit {
            return;
        }
        if grid.is_valid(pos, value) {
            grid.set(pos, value);
            count_recursive(grid, limit, count);
            grid.set(pos, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const CLASSIC_SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn classic_puzzle_is_unique() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        assert_eq!(count_solutions(&grid, 2), 1);
        assert!(has_unique_solution(&grid));
    }

    #[test]
    fn complete_grid_counts_as_one_solution() {
        let grid = Grid::from_string(CLASSIC_SOLVED).unwrap();
        assert_eq!(count_solutions(&grid, 2), 1);
    }

    #[test]
    fn removing_one_cell_keeps_uniqueness() {
        let mut grid = Grid::from_string(CLASSIC_SOLVED).unwrap();
        grid.set(Position::new(4, 4), 0);
        assert!(has_unique_solution(&grid));
    }

    #[test]
    fn sparse_grid_short_circuits_at_limit() {
        // One given leaves a wide-open search space; the early exit keeps
        // the count at the requested bound.
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), 1);
        assert_eq!(count_solutions(&grid, 2), 2);
        assert!(!has_unique_solution(&grid));
    }

    #[test]
    fn uncompletable_grid_has_no_solutions() {
        // (0,0) is empty but sees 1-8 in its row and 9 in its column, so no
        // digit fits and the search backtracks straight out.
        let mut grid = Grid::empty();
        for col in 1..9 {
            grid.set(Position::new(0, col), col as u8);
        }
        grid.set(Position::new(1, 0), 9);
        assert_eq!(count_solutions(&grid, 2), 0);
    }
}
