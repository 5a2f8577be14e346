use bogged_core::{AdjacencyPairs, Grid, GridError, Letter, LetterSet, Position, VisitedMask};

/// Minimum number of letters in a word.
pub const MIN_WORD_LENGTH: usize = 3;

/// A fixed grid together with its adjacent letter pairs.
///
/// The board answers whether a word can be spelled by a path of distinct,
/// pairwise-adjacent cells. A `Q` cell spells "QU" in a single step.
///
/// # Example
///
/// ```
/// use bogged_engine::Board;
///
/// // ABCD
/// // EFGH
/// // IJKL
/// // MNOP
/// let board = Board::from_layout("ABCDEFGHIJKLMNOP")?;
/// assert!(board.is_constructible("fab"));
/// assert!(board.is_constructible("Knife"));
/// assert!(!board.is_constructible("cab"));
/// assert!(!board.is_constructible("zzz"));
/// # Ok::<(), bogged_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    pairs: AdjacencyPairs,
}

impl Board {
    /// Creates a board for `grid`.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let pairs = AdjacencyPairs::from_grid(&grid);
        Self { grid, pairs }
    }

    /// Creates a board from a persisted layout string.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the layout is not 16 or 25 letters.
    pub fn from_layout(layout: &str) -> Result<Self, GridError> {
        Ok(Self::new(Grid::from_layout(layout)?))
    }

    /// Returns the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the adjacent letter pairs of the grid.
    #[must_use]
    pub fn pairs(&self) -> &AdjacencyPairs {
        &self.pairs
    }

    /// Returns the letters a word may use: those on the grid, plus `U` when a
    /// `Q` is present.
    #[must_use]
    pub fn usable_letters(&self) -> LetterSet {
        let mut letters = self.grid.letters();
        if letters.contains(Letter::Q) {
            letters.insert(Letter::U);
        }
        letters
    }

    /// Returns `true` if `word` has at least [`MIN_WORD_LENGTH`] letters and
    /// can be spelled on the grid. Case is ignored.
    #[must_use]
    pub fn is_constructible(&self, word: &str) -> bool {
        word.len() >= MIN_WORD_LENGTH && self.trace(word).is_some()
    }

    /// Finds a path spelling `word`, if any.
    ///
    /// Unlike [`Board::is_constructible`], words of any non-zero length are
    /// searched. Starting cells are tried in row-major order and neighbours in
    /// [`Position::neighbors`] order; the first complete path wins.
    #[must_use]
    pub fn trace(&self, word: &str) -> Option<WordPath> {
        let letters = word
            .bytes()
            .map(Letter::from_ascii)
            .collect::<Option<Vec<_>>>()?;
        let first = *letters.first()?;

        for pair in letters.windows(2) {
            if let [from, to] = *pair
                && !self.pairs.contains(from, to)
            {
                log::trace!("rejected {word:?}: no adjacent {from}{to}");
                return None;
            }
        }

        let mut mask = VisitedMask::new(self.grid.size());
        let mut path = Vec::with_capacity(letters.len());
        for start in self.grid.positions_of(first) {
            if self.extend(&letters, 0, start, &mut mask, &mut path) {
                debug_assert!(mask.is_clear());
                return Some(WordPath { positions: path });
            }
            debug_assert!(path.is_empty());
        }
        None
    }

    /// Extends the path spelling `letters[..index]` with the cell at `pos`,
    /// which matches `letters[index]`.
    fn extend(
        &self,
        letters: &[Letter],
        mut index: usize,
        pos: Position,
        mask: &mut VisitedMask,
        path: &mut Vec<Position>,
    ) -> bool {
        let mut visit = mask.visit(pos);
        path.push(pos);

        // "Qu" is one tile.
        if letters[index] == Letter::Q && letters.get(index + 1) == Some(&Letter::U) {
            index += 1;
        }
        if index + 1 == letters.len() {
            return true;
        }

        let next = letters[index + 1];
        for neighbor in pos.neighbors(self.grid.size()) {
            if visit.is_marked(neighbor) || self.grid[neighbor] != next {
                continue;
            }
            if self.extend(letters, index + 1, neighbor, &mut visit, path) {
                return true;
            }
        }

        path.pop();
        false
    }
}

/// The cells used to spell a word, in order.
///
/// A `Q` cell spelling "QU" appears once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPath {
    positions: Vec<Position>,
}

impl WordPath {
    /// Returns the cells of the path.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns the number of cells on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the path has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns `true` if no cell appears twice.
    #[must_use]
    pub fn is_distinct(&self) -> bool {
        self.positions
            .iter()
            .enumerate()
            .all(|(i, pos)| !self.positions[..i].contains(pos))
    }

    /// Returns `true` if each cell touches the next one.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.positions.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Returns the uppercase word the path spells on `grid`, expanding `Q` to "QU".
    #[must_use]
    pub fn spell(&self, grid: &Grid) -> String {
        let mut word = String::with_capacity(self.positions.len() + 1);
        for &pos in &self.positions {
            let letter = grid[pos];
            word.push(letter.as_char());
            if letter == Letter::Q {
                word.push('U');
            }
        }
        word
    }
}
