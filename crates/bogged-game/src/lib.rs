//! Puzzles and play sessions.
//!
//! A [`Puzzle`] holds the facts of one generated grid: the canonical dice it
//! was rolled from, the layout, and the words found on it. A [`Play`] tracks
//! one player's submissions against a puzzle under an [`AcceptancePolicy`].
//!
//! # Examples
//!
//! ```
//! use bogged_core::dice;
//! use bogged_engine::GameSeed;
//! use bogged_game::{AcceptancePolicy, Play, Puzzle};
//!
//! let dictionary = ["tone", "note", "stone", "onset"];
//! let seed = GameSeed::from_text("demo");
//! let puzzle = Puzzle::generate_with_seed(dice::CLASSIC_4X4, seed, dictionary)?;
//!
//! let mut play = Play::new(&puzzle, AcceptancePolicy::Revalidate)?;
//! for word in &puzzle.words {
//!     assert!(play.submit(word).is_accepted());
//! }
//! assert!(play.is_complete());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{play::*, puzzle::*};

mod play;
mod puzzle;
