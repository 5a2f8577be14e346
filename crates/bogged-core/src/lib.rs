//! Core data structures for word-grid puzzles.
//!
//! This crate provides the building blocks shared by puzzle generation, word
//! search and game management:
//!
//! - [`letter`]: [`Letter`] and the 26-bit [`LetterSet`]
//! - [`dice`]: six-sided [`Die`]s, [`DiceSet`]s and dice-string
//!   [canonicalization](dice::canonicalize)
//! - [`position`]: [`GridSize`] (4×4 or 5×5) and [`Position`] with its
//!   8-directional neighbourhood
//! - [`grid`]: the rolled letter [`Grid`] and its layout string
//! - [`adjacency`]: the [`AdjacencyPairs`] of a grid, used to prune word searches
//! - [`visited`]: the [`VisitedMask`] of cells on an in-progress path
//!
//! # Examples
//!
//! ```
//! use bogged_core::{AdjacencyPairs, Grid, Position};
//!
//! let grid = Grid::from_layout("QUAKEFGHIJKLMNOP")?;
//! let pairs = AdjacencyPairs::from_grid(&grid);
//!
//! // `Q` cells always admit a following `U`.
//! assert!(pairs.contains_str("QU"));
//! assert_eq!(grid[Position::new(0, 0)].as_char(), 'Q');
//! # Ok::<(), bogged_core::GridError>(())
//! ```

pub mod adjacency;
pub mod dice;
pub mod grid;
pub mod letter;
pub mod position;
pub mod visited;

pub use self::{
    adjacency::AdjacencyPairs,
    dice::{DiceError, DiceSet, Die},
    grid::{Grid, GridError},
    letter::{Letter, LetterSet},
    position::{GridSize, Position},
    visited::{Visit, VisitedMask},
};
