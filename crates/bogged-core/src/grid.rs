//! The letter grid of one puzzle.

use std::{
    fmt::{self, Display, Write as _},
    ops::Index,
};

use crate::{GridSize, Letter, LetterSet, Position};

/// Errors reported while reading a layout string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The layout is not 16 or 25 letters long.
    #[display("bad layout length: {len}; must be 16 or 25 letters")]
    InvalidLength {
        /// Actual length, in characters.
        len: usize,
    },
    /// The layout contains something other than a letter.
    #[display("invalid letter {letter:?} at offset {index} of layout")]
    InvalidLetter {
        /// Character offset of the bad character.
        index: usize,
        /// The offending character.
        letter: char,
    },
}

/// A square grid of letters, one per die.
///
/// The layout string of a grid is its letters in row-major order.
///
/// # Examples
///
/// ```
/// use bogged_core::{Grid, GridSize, Letter, Position};
///
/// let grid = Grid::from_layout("abcdefghijklmnop")?;
/// assert_eq!(grid.size(), GridSize::Four);
/// assert_eq!(grid[Position::new(1, 2)], Letter::from_ascii(b'J').unwrap());
/// assert_eq!(grid.layout(), "ABCDEFGHIJKLMNOP");
/// # Ok::<(), bogged_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Letter>,
}

impl Grid {
    /// Returns the fixed layout a grid holds before the first roll: the
    /// alphabet, row-major, starting from `A`.
    #[must_use]
    pub fn placeholder(size: GridSize) -> Self {
        let cells = Letter::ALL[..size.cell_count()].to_vec();
        Self { size, cells }
    }

    /// Creates a grid by asking `f` for the letter of every position, in
    /// row-major order.
    #[must_use]
    pub fn from_fn(size: GridSize, f: impl FnMut(Position) -> Letter) -> Self {
        let cells = size.positions().map(f).collect();
        Self { size, cells }
    }

    /// Creates a grid from row-major cells.
    ///
    /// Returns `None` unless there are exactly 16 or 25 cells.
    #[must_use]
    pub fn from_cells(cells: Vec<Letter>) -> Option<Self> {
        let size = GridSize::from_cell_count(cells.len())?;
        Some(Self { size, cells })
    }

    /// Parses a row-major layout string. Letters may be in either case.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidLength`] unless the layout has 16 or 25
    /// characters, and [`GridError::InvalidLetter`] for any non-letter.
    pub fn from_layout(layout: &str) -> Result<Self, GridError> {
        let len = layout.chars().count();
        let Some(size) = GridSize::from_cell_count(len) else {
            return Err(GridError::InvalidLength { len });
        };
        let cells = layout
            .chars()
            .enumerate()
            .map(|(index, letter)| {
                u8::try_from(letter)
                    .ok()
                    .and_then(Letter::from_ascii)
                    .ok_or(GridError::InvalidLetter { index, letter })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { size, cells })
    }

    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Letter] {
        &self.cells
    }

    /// Returns the row-major layout string.
    #[must_use]
    pub fn layout(&self) -> String {
        self.cells.iter().map(|letter| letter.as_char()).collect()
    }

    /// Returns the distinct letters on the grid.
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.cells.iter().copied().collect()
    }

    /// Returns every position holding `letter`, in row-major order.
    pub fn positions_of(&self, letter: Letter) -> impl Iterator<Item = Position> + '_ {
        self.size
            .positions()
            .filter(move |&pos| self[pos] == letter)
    }

    /// Returns a view of the grid with the cells of `path` shown in lowercase.
    #[must_use]
    pub fn display_path<'a>(&'a self, path: &'a [Position]) -> GridDisplay<'a> {
        GridDisplay { grid: self, path }
    }
}

impl Index<Position> for Grid {
    type Output = Letter;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index(self.size)]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.display_path(&[]), f)
    }
}

/// Framed, multi-line rendering of a [`Grid`].
///
/// ```text
/// /----\
/// |ABCD|
/// |EFGH|
/// |IJKL|
/// |MNOP|
/// \----/
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GridDisplay<'a> {
    grid: &'a Grid,
    path: &'a [Position],
}

impl Display for GridDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = usize::from(self.grid.size.side());
        let rule = "-".repeat(side);
        writeln!(f, "/{rule}\\")?;
        for y in 0..self.grid.size.side() {
            f.write_char('|')?;
            for x in 0..self.grid.size.side() {
                let pos = Position::new(x, y);
                let c = self.grid[pos].as_char();
                if self.path.contains(&pos) {
                    f.write_char(c.to_ascii_lowercase())?;
                } else {
                    f.write_char(c)?;
                }
            }
            f.write_str("|\n")?;
        }
        write!(f, "\\{rule}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_layouts() {
        assert_eq!(
            Grid::placeholder(GridSize::Four).layout(),
            "ABCDEFGHIJKLMNOP"
        );
        assert_eq!(
            Grid::placeholder(GridSize::Five).layout(),
            "ABCDEFGHIJKLMNOPQRSTUVWXY"
        );
    }

    #[test]
    fn test_from_layout_errors() {
        assert_eq!(
            Grid::from_layout("ABC"),
            Err(GridError::InvalidLength { len: 3 })
        );
        assert_eq!(
            Grid::from_layout("ABCDEFGHIJ LMNOP"),
            Err(GridError::InvalidLetter {
                index: 10,
                letter: ' '
            })
        );
    }

    #[test]
    fn test_from_layout_counts_characters() {
        // 15 characters, 16 bytes
        assert_eq!(
            Grid::from_layout("ÉBCDEFGHIJKLMNO"),
            Err(GridError::InvalidLength { len: 15 })
        );
        assert_eq!(
            Grid::from_layout("ABÉDEFGHIJKLMNOP"),
            Err(GridError::InvalidLetter {
                index: 2,
                letter: 'É'
            })
        );
    }

    #[test]
    fn test_letters_and_positions() {
        let grid = Grid::from_layout("QAAAEEEEIIIIOOOO").unwrap();
        assert_eq!(grid.letters().to_string(), "AEIOQ");
        let a = Letter::from_ascii(b'A').unwrap();
        let positions: Vec<_> = grid.positions_of(a).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(3, 0),
            ]
        );
        assert_eq!(grid.positions_of(Letter::Q).count(), 1);
        assert_eq!(grid.positions_of(Letter::U).count(), 0);
    }

    #[test]
    fn test_from_cells() {
        let grid = Grid::from_cells(Letter::ALL[..25].to_vec()).unwrap();
        assert_eq!(grid, Grid::placeholder(GridSize::Five));
        assert!(Grid::from_cells(Letter::ALL[..20].to_vec()).is_none());
    }

    #[test]
    fn test_display() {
        let grid = Grid::placeholder(GridSize::Four);
        assert_eq!(
            grid.to_string(),
            "/----\\\n|ABCD|\n|EFGH|\n|IJKL|\n|MNOP|\n\\----/"
        );
        let path = [Position::new(0, 0), Position::new(1, 1)];
        let shown = grid.display_path(&path).to_string();
        assert!(shown.contains("|aBCD|"));
        assert!(shown.contains("|EfGH|"));

        let big = Grid::placeholder(GridSize::Five).to_string();
        assert!(big.starts_with("/-----\\\n|ABCDE|"));
    }
}
