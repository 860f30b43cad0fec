use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::process::ExitCode;

use wordseek::errors::PuzzleError;
use wordseek::generator::Placement;
use wordseek::grid::Grid;
use wordseek::palette::Palette;
use wordseek::session::{GameConfig, Session};
use wordseek::word_list::WordList;

/// Word-search puzzle generator
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), "+", env!("GIT_HASH")),
    about,
    long_about = None
)]
struct Cli {
    /// Path to the vocabulary file (one word per line, '#' for comments)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Side length of the square grid
    #[arg(short, long, default_value_t = 15)]
    grid_size: usize,

    /// Number of words sampled into the round
    #[arg(short = 'n', long, default_value_t = 12)]
    words_per_game: usize,

    /// Seed for reproducible puzzles (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the word placements after the grid
    #[arg(long)]
    solution: bool,

    /// Emit the puzzle as JSON for rendering collaborators
    #[arg(long)]
    json: bool,
}

/// JSON payload for rendering collaborators: cell contents, target words,
/// and the solution placements.
#[derive(Serialize)]
struct PuzzleJson<'a> {
    grid: &'a Grid,
    words: &'a [String],
    placements: &'a [Placement],
}

/// Entry point of the wordseek CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them in a
/// user-friendly way before exiting with a nonzero code.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WORDSEEK_DEBUG").is_ok();
    wordseek::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        // Print the error to stderr, with code and help if it's ours
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the wordseek CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the vocabulary from disk.
/// 3. Sample a round and generate the puzzle grid.
/// 4. Print the puzzle on stdout (text or JSON).
/// 5. Print diagnostics on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 1. Load the vocabulary
    let vocabulary = WordList::load_from_path(&cli.word_list)?;
    log::info!("loaded {} words from {}", vocabulary.len(), cli.word_list);

    // 2. Build a session; a fixed seed reproduces the same round exactly
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = GameConfig {
        grid_size: cli.grid_size,
        words_per_game: cli.words_per_game,
        palette: Palette::default(),
    };
    let session = Session::new(config, vocabulary, rng)?;

    // 3. Emit the puzzle
    if cli.json {
        let payload = PuzzleJson {
            grid: session.grid(),
            words: session.words(),
            placements: session.placements(),
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print!("{}", session.grid());
    println!();
    println!("Find these words:");
    for word in session.words() {
        println!("  {word}");
    }

    if cli.solution {
        println!();
        println!("Solution:");
        for placement in session.placements() {
            println!(
                "  {} at ({}, {}) {:?}",
                placement.word, placement.row, placement.col, placement.orientation
            );
        }
    }

    Ok(())
}
