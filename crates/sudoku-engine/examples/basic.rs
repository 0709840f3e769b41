//! Basic example of using the Sudoku engine

use sudoku_engine::{count_solutions, Difficulty, Grid, Session};

fn main() {
    // Start a game
    println!("Starting a Medium difficulty game...\n");
    let mut session = Session::new(Difficulty::Medium);

    println!("Puzzle {}:", session.puzzle_id());
    println!("{}", session.puzzle_grid());

    // Show some stats
    println!("Given cells: {}", session.puzzle_grid().filled_count());
    println!("Empty cells: {}", session.puzzle_grid().empty_count());
    println!("Cells removed by the carver: {}\n", session.removed_cells());

    // Take a hint
    if let Some(pos) = session.get_hint() {
        println!(
            "Hint: {} holds {} ({} hint used)\n",
            pos,
            session.user_grid().get(pos),
            session.hints_used()
        );
    }

    // Check for conflicts (none expected yet)
    println!("Conflicting cells: {}\n", session.check_errors().len());

    // Print the shareable sheet
    let snapshot = session.snapshot();
    println!("{}", snapshot.formatted_text(false));

    // Parse a puzzle from a string
    println!("\n--- Parsing a puzzle from string ---\n");
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    match Grid::from_string(puzzle_string) {
        Ok(grid) => {
            println!("Parsed puzzle:");
            println!("{}", grid);

            // Check uniqueness
            let solutions = count_solutions(&grid, 2);
            println!("Number of solutions (up to 2): {}", solutions);
        }
        Err(e) => println!("Failed to parse puzzle: {}", e),
    }
}
