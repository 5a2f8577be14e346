//! Word-grid generation and word search.
//!
//! This crate rolls dice into a letter grid and finds which words can be
//! spelled on it by chaining adjacent cells (diagonals included) without
//! reusing a cell.
//!
//! # Overview
//!
//! - [`Board`]: a fixed grid with its adjacent letter pairs; answers
//!   [`is_constructible`](Board::is_constructible) and [`trace`](Board::trace)
//!   for single words.
//! - [`BoggleEngine`]: owns a dice set, rolls new grids with an injected random
//!   source and collects every dictionary word they contain.
//! - [`GameSeed`]: reproducible seeds for [`BoggleEngine::new_game_with_seed`].
//!
//! # Examples
//!
//! ```
//! use bogged_core::dice;
//! use bogged_engine::{BoggleEngine, GameSeed};
//!
//! let dictionary = ["tone", "note", "stone", "onset", "seton"];
//! let mut engine = BoggleEngine::new(dice::CLASSIC_4X4)?;
//! let game = engine.new_game_with_seed(GameSeed::from_text("example"), dictionary);
//!
//! println!("{}", engine.grid());
//! for word in &game.words {
//!     let path = engine.board().trace(word).unwrap();
//!     assert!(path.is_distinct());
//! }
//! # Ok::<(), bogged_engine::EngineError>(())
//! ```

pub use self::{board::*, engine::*, seed::*};

mod board;
mod engine;
mod seed;
