//! Grid geometry: sizes, positions and 8-directional neighbourhoods.

use tinyvec::ArrayVec;

use crate::dice::FACES_PER_DIE;

/// The dimension of a square grid.
///
/// Only 4×4 and 5×5 grids exist; the size follows from the number of dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GridSize {
    /// A 4×4 grid of 16 dice.
    #[display("4x4")]
    Four,
    /// A 5×5 grid of 25 dice.
    #[display("5x5")]
    Five,
}

impl GridSize {
    /// Both supported sizes.
    pub const ALL: [Self; 2] = [Self::Four, Self::Five];

    /// Returns the number of cells along one side.
    #[must_use]
    #[inline]
    pub const fn side(self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Returns the number of cells (and dice) in the grid.
    #[must_use]
    #[inline]
    pub const fn cell_count(self) -> usize {
        let side = self.side() as usize;
        side * side
    }

    /// Returns the length of a dice string for this size (96 or 150).
    #[must_use]
    #[inline]
    pub const fn dice_len(self) -> usize {
        self.cell_count() * FACES_PER_DIE
    }

    /// Returns the size whose dice string has exactly `len` characters.
    #[must_use]
    pub const fn from_dice_len(len: usize) -> Option<Self> {
        match len {
            96 => Some(Self::Four),
            150 => Some(Self::Five),
            _ => None,
        }
    }

    /// Returns the size with exactly `count` cells.
    #[must_use]
    pub const fn from_cell_count(count: usize) -> Option<Self> {
        match count {
            16 => Some(Self::Four),
            25 => Some(Self::Five),
            _ => None,
        }
    }

    /// Returns all positions in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let side = self.side();
        (0..side).flat_map(move |y| (0..side).map(move |x| Position::new(x, y)))
    }
}

/// A cell coordinate. `x` is the column and `y` the row, both from zero.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Position {
    /// Column.
    pub x: u8,
    /// Row.
    pub y: u8,
}

impl Position {
    /// Creates a position.
    #[must_use]
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Converts a row-major cell index back into a position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the grid.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_index(size: GridSize, index: usize) -> Self {
        assert!(
            index < size.cell_count(),
            "cell index out of range: {index}"
        );
        let width = usize::from(size.side());
        Self::new((index % width) as u8, (index / width) as u8)
    }

    /// Returns the row-major index of this position.
    #[must_use]
    #[inline]
    pub const fn index(self, size: GridSize) -> usize {
        self.y as usize * size.side() as usize + self.x as usize
    }

    /// Returns `true` if the position lies inside a grid of `size`.
    #[must_use]
    #[inline]
    pub const fn is_within(self, size: GridSize) -> bool {
        self.x < size.side() && self.y < size.side()
    }

    /// Returns `true` if `other` is one of the eight cells around `self`.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx <= 1 && dy <= 1 && (dx | dy) != 0
    }

    /// Returns the in-bounds neighbours, diagonals included.
    ///
    /// Neighbours come row by row (above, same row, below), left to right.
    #[must_use]
    pub fn neighbors(self, size: GridSize) -> ArrayVec<[Self; 8]> {
        let mut neighbors = ArrayVec::new();
        let last = size.side() - 1;
        for y in self.y.saturating_sub(1)..=(self.y + 1).min(last) {
            for x in self.x.saturating_sub(1)..=(self.x + 1).min(last) {
                if x == self.x && y == self.y {
                    continue;
                }
                neighbors.push(Self::new(x, y));
            }
        }
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_dimensions() {
        assert_eq!(GridSize::Four.cell_count(), 16);
        assert_eq!(GridSize::Five.cell_count(), 25);
        assert_eq!(GridSize::Four.dice_len(), 96);
        assert_eq!(GridSize::Five.dice_len(), 150);
        assert_eq!(GridSize::from_dice_len(96), Some(GridSize::Four));
        assert_eq!(GridSize::from_dice_len(150), Some(GridSize::Five));
        assert_eq!(GridSize::from_dice_len(100), None);
        assert_eq!(GridSize::from_cell_count(25), Some(GridSize::Five));
        assert_eq!(GridSize::from_cell_count(9), None);
    }

    #[test]
    fn test_positions_are_row_major() {
        for size in GridSize::ALL {
            for (i, pos) in size.positions().enumerate() {
                assert_eq!(pos.index(size), i);
                assert_eq!(Position::from_index(size, i), pos);
            }
        }
        let first: Vec<_> = GridSize::Four.positions().take(5).collect();
        assert_eq!(first[4], Position::new(0, 1));
    }

    #[test]
    fn test_from_index_wraps_at_the_side() {
        assert_eq!(Position::from_index(GridSize::Four, 4), Position::new(0, 1));
        assert_eq!(Position::from_index(GridSize::Five, 4), Position::new(4, 0));
        assert_eq!(Position::from_index(GridSize::Five, 24), Position::new(4, 4));

        let corner = Position::new(4, 4).neighbors(GridSize::Five);
        let expected = [
            Position::new(3, 3),
            Position::new(4, 3),
            Position::new(3, 4),
        ];
        assert_eq!(corner.as_slice(), expected);
    }

    #[test]
    fn test_neighbors_corner_edge_center() {
        let size = GridSize::Four;
        assert_eq!(Position::new(0, 0).neighbors(size).len(), 3);
        assert_eq!(Position::new(3, 3).neighbors(size).len(), 3);
        assert_eq!(Position::new(1, 0).neighbors(size).len(), 5);
        assert_eq!(Position::new(1, 1).neighbors(size).len(), 8);
        assert_eq!(Position::new(2, 2).neighbors(GridSize::Five).len(), 8);
        assert_eq!(Position::new(4, 2).neighbors(GridSize::Five).len(), 5);
    }

    #[test]
    fn test_neighbors_are_adjacent_and_in_bounds() {
        for size in GridSize::ALL {
            for pos in size.positions() {
                for neighbor in pos.neighbors(size) {
                    assert!(neighbor.is_within(size));
                    assert!(pos.is_adjacent(neighbor));
                    assert!(neighbor.neighbors(size).contains(&pos));
                }
            }
        }
    }

    #[test]
    fn test_neighbor_order() {
        let neighbors = Position::new(1, 1).neighbors(GridSize::Four);
        assert_eq!(neighbors[0], Position::new(0, 0));
        assert_eq!(neighbors[3], Position::new(0, 1));
        assert_eq!(neighbors[4], Position::new(2, 1));
        assert_eq!(neighbors[7], Position::new(2, 2));
    }

    #[test]
    fn test_is_adjacent_excludes_self() {
        let pos = Position::new(2, 2);
        assert!(!pos.is_adjacent(pos));
        assert!(pos.is_adjacent(Position::new(3, 3)));
        assert!(!pos.is_adjacent(Position::new(0, 2)));
    }
}
