//! Example demonstrating puzzle generation.
//!
//! This example shows how to:
//! - Create a `BoggleEngine` from a dice preset
//! - Roll a grid and search a dictionary file for the words on it
//! - Sample many grids in parallel and keep the richest one
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --dict /usr/share/dict/words
//! ```
//!
//! Sample several grids and keep the one with the most words:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --max-tries 200
//! ```
//!
//! Use the 5×5 dice:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --dice big
//! ```

use std::{fs, path::PathBuf, process};

use bogged_core::dice;
use bogged_engine::{BoggleEngine, SeededGame};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DiceKind {
    Classic,
    Big,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Dice preset to roll.
    #[arg(long, value_name = "KIND", default_value = "classic")]
    dice: DiceKind,

    /// Word list, one word per line.
    #[arg(long, value_name = "PATH", default_value = "/usr/share/dict/words")]
    dict: PathBuf,

    /// Number of grids to sample; the one with the most words is printed.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    max_tries: usize,
}

fn main() {
    let args = Args::parse();
    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let dictionary = match fs::read_to_string(&args.dict) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Cannot read {}: {err}", args.dict.display());
            process::exit(1);
        }
    };
    let words: Vec<&str> = dictionary.lines().collect();

    let dice = match args.dice {
        DiceKind::Classic => dice::CLASSIC_4X4,
        DiceKind::Big => dice::BIG_5X5,
    };

    // Each sample owns its engine, so samples need no coordination.
    let best = (0..args.max_tries)
        .into_par_iter()
        .map(|_| {
            let mut engine = BoggleEngine::new(dice).unwrap();
            let game = engine.generate(&words);
            (engine, game)
        })
        .max_by_key(|(_, game)| game.game.max_words);

    let Some((engine, SeededGame { seed, game })) = best else {
        eprintln!("No grid was generated.");
        process::exit(1);
    };

    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Grid:");
    for line in engine.grid().to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!("Layout:");
    println!("  {}", game.layout);
    println!();
    println!("Words ({}):", game.max_words);
    for word in &game.words {
        println!("  {word}");
    }
}
