//! Command-line front end for the Sudoku engine: generates a puzzle and
//! prints shareable text renditions.

use clap::Parser;
use sudoku_engine::{Difficulty, Session};

#[derive(Parser)]
#[command(name = "sudoku", about = "Generate printable Sudoku puzzles")]
struct Args {
    /// Difficulty level (easy, medium, hard, expert)
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// Include the solution grid in the output
    #[arg(short, long)]
    solution: bool,

    /// Plain ASCII output instead of box-drawing characters
    #[arg(long)]
    plain: bool,

    /// Seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let session = match args.seed {
        Some(seed) => Session::with_seed(args.difficulty, seed),
        None => Session::new(args.difficulty),
    };
    let snapshot = session.snapshot();

    if args.plain {
        println!("{}", snapshot.simple_text());
        if args.solution {
            println!("Solution:\n{}", snapshot.solution);
        }
    } else {
        println!("{}", snapshot.formatted_text(args.solution));
    }

    let target = args.difficulty.cells_to_remove();
    if session.removed_cells() < target {
        eprintln!(
            "note: removed {} of {} cells; puzzle is easier than requested",
            session.removed_cells(),
            target
        );
    }
}
