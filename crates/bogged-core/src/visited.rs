//! Cells committed to an in-progress path.

use std::ops::{Deref, DerefMut};

use crate::{GridSize, Position};

/// A per-search mark for every cell of a grid.
///
/// Marks are taken with [`VisitedMask::visit`], whose guard releases the mark
/// when it goes out of scope, so a search that only marks through guards
/// always leaves the mask clear when it returns.
///
/// # Examples
///
/// ```
/// use bogged_core::{GridSize, Position, VisitedMask};
///
/// let mut mask = VisitedMask::new(GridSize::Four);
/// {
///     let visit = mask.visit(Position::new(1, 2));
///     assert!(visit.is_marked(Position::new(1, 2)));
/// }
/// assert!(mask.is_clear());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedMask {
    size: GridSize,
    bits: u32,
}

impl VisitedMask {
    /// Creates a clear mask for a grid of `size`.
    #[must_use]
    pub const fn new(size: GridSize) -> Self {
        Self { size, bits: 0 }
    }

    /// Returns the grid size of this mask.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    fn bit(&self, pos: Position) -> u32 {
        debug_assert!(pos.is_within(self.size));
        1 << pos.index(self.size)
    }

    /// Returns `true` if `pos` is marked.
    #[must_use]
    #[inline]
    pub fn is_marked(&self, pos: Position) -> bool {
        self.bits & self.bit(pos) != 0
    }

    /// Returns `true` if no cell is marked.
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.bits == 0
    }

    /// Returns the number of marked cells.
    #[must_use]
    pub const fn marked_count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Marks `pos` until the returned guard is dropped.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `pos` is already marked.
    #[must_use = "the mark is released as soon as the guard is dropped"]
    pub fn visit(&mut self, pos: Position) -> Visit<'_> {
        let bit = self.bit(pos);
        debug_assert!(self.bits & bit == 0, "cell {pos} visited twice");
        self.bits |= bit;
        Visit { mask: self, bit }
    }
}

/// A mark held on one cell of a [`VisitedMask`].
///
/// Dereferences to the mask so a search can keep marking deeper cells.
#[derive(Debug)]
pub struct Visit<'a> {
    mask: &'a mut VisitedMask,
    bit: u32,
}

impl Deref for Visit<'_> {
    type Target = VisitedMask;

    fn deref(&self) -> &Self::Target {
        self.mask
    }
}

impl DerefMut for Visit<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.mask
    }
}

impl Drop for Visit<'_> {
    fn drop(&mut self) {
        self.mask.bits &= !self.bit;
    }
}
