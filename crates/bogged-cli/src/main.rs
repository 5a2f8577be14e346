//! Command-line front end for the word-grid engine.
//!
//! # Usage
//!
//! ```sh
//! bogged canonicalize HLNNRZHIMNQU...
//! bogged generate --preset big --seed-text "monday"
//! bogged generate --dict words.txt --json
//! bogged check --layout SERSPATGLINESERS least plates
//! ```
//!
//! Set `RUST_LOG=debug` to see generation statistics.

use std::{fs, io, path::PathBuf, process};

use bogged_core::{DiceError, Grid, GridError, dice};
use bogged_engine::{Board, EngineError, GameSeed, MIN_WORD_LENGTH};
use bogged_game::Puzzle;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the canonical form of a dice string.
    Canonicalize {
        /// 96 or 150 uppercase letters, six faces per die.
        dice: String,
    },
    /// Roll a grid and list the dictionary words on it.
    Generate(GenerateArgs),
    /// Check whether words can be spelled on a layout.
    Check {
        /// Row-major letters of the grid (16 or 25).
        #[arg(long, value_name = "LAYOUT")]
        layout: String,

        /// Words to check.
        #[arg(required = true, value_name = "WORD")]
        words: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    Classic,
    Big,
}

impl Preset {
    fn dice(self) -> &'static str {
        match self {
            Self::Classic => dice::CLASSIC_4X4,
            Self::Big => dice::BIG_5X5,
        }
    }
}

#[derive(Debug, clap::Args)]
struct GenerateArgs {
    /// Dice string to roll (96 or 150 letters).
    #[arg(long, value_name = "DICE", conflicts_with = "preset")]
    dice: Option<String>,

    /// Built-in dice set to roll.
    #[arg(long, value_name = "KIND", default_value = "classic")]
    preset: Preset,

    /// Word list, one word per line.
    #[arg(long, value_name = "PATH", default_value = "/usr/share/dict/words")]
    dict: PathBuf,

    /// Seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "seed_text")]
    seed: Option<GameSeed>,

    /// Derive the seed from arbitrary text.
    #[arg(long, value_name = "TEXT")]
    seed_text: Option<String>,

    /// Print the puzzle as JSON.
    #[arg(long)]
    json: bool,
}

impl GenerateArgs {
    fn seed(&self) -> GameSeed {
        match (&self.seed, &self.seed_text) {
            (Some(seed), _) => *seed,
            (None, Some(text)) => GameSeed::from_text(text),
            (None, None) => GameSeed::random(),
        }
    }

    fn dice(&self) -> &str {
        self.dice.as_deref().unwrap_or_else(|| self.preset.dice())
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("cannot read {}: {source}", path.display())]
    ReadDictionary { path: PathBuf, source: io::Error },
    #[display("{_0}")]
    Dice(#[from] DiceError),
    #[display("{_0}")]
    Engine(#[from] EngineError),
    #[display("{_0}")]
    Layout(#[from] GridError),
    #[display("cannot encode puzzle: {_0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Canonicalize { dice } => canonicalize(&dice),
        Command::Generate(args) => generate(&args),
        Command::Check { layout, words } => check(&layout, &words),
    };
    if let Err(err) = result {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn canonicalize(raw: &str) -> Result<(), CliError> {
    println!("{}", dice::canonicalize(raw)?);
    Ok(())
}

fn generate(args: &GenerateArgs) -> Result<(), CliError> {
    let text = fs::read_to_string(&args.dict).map_err(|source| CliError::ReadDictionary {
        path: args.dict.clone(),
        source,
    })?;
    log::info!(
        "read dictionary {} ({} lines)",
        args.dict.display(),
        text.lines().count()
    );

    let seed = args.seed();
    let puzzle = Puzzle::generate_with_seed(args.dice(), seed, text.lines())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&puzzle)?);
        return Ok(());
    }

    let grid = Grid::from_layout(&puzzle.layout)?;
    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Grid:");
    for line in grid.to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!("Layout:");
    println!("  {}", puzzle.layout);
    println!();
    println!("Words ({}):", puzzle.max_words);
    for word in &puzzle.words {
        println!("  {word}");
    }
    Ok(())
}

fn check(layout: &str, words: &[String]) -> Result<(), CliError> {
    let board = Board::from_layout(layout)?;
    for word in words {
        println!("{}", verdict(&board, word));
        if let Some(path) = board.trace(word) {
            let shown = board.grid().display_path(path.positions());
            for line in shown.to_string().lines() {
                println!("  {line}");
            }
        }
    }
    Ok(())
}

fn verdict(board: &Board, word: &str) -> String {
    if word.len() < MIN_WORD_LENGTH {
        format!("{word}: too short")
    } else if board.is_constructible(word) {
        format!("{word}: yes")
    } else {
        format!("{word}: no")
    }
}
