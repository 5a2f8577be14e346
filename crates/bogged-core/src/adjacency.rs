//! Adjacent letter pairs of a grid.

use std::iter::FusedIterator;

use crate::{Grid, Letter};

/// The set of ordered letter pairs `AB` such that some `A` cell touches some
/// `B` cell (diagonals included) somewhere on the grid.
///
/// A `Q` cell carries a phantom `U`: every neighbour of a `Q` cell forms a pair
/// both with `Q` and with `U`, and `QU` itself is always present once the grid
/// has a `Q`.
///
/// The set is a cheap necessary condition for a word: if any consecutive pair
/// of the word is missing, no path on the grid can spell it.
///
/// # Examples
///
/// ```
/// use bogged_core::{AdjacencyPairs, Grid};
///
/// let grid = Grid::from_layout("ABCDEFGHIJKLMNOP")?;
/// let pairs = AdjacencyPairs::from_grid(&grid);
/// assert!(pairs.contains_str("AB"));
/// assert!(pairs.contains_str("AF"));
/// assert!(!pairs.contains_str("AC"));
/// assert!(pairs.admits_word("fab"));
/// assert!(!pairs.admits_word("cab"));
/// # Ok::<(), bogged_core::GridError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AdjacencyPairs {
    rows: [u32; 26],
}

impl AdjacencyPairs {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: [0; 26] }
    }

    /// Builds the pair set of `grid`.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut pairs = Self::new();
        let size = grid.size();
        for pos in size.positions() {
            let from = grid[pos];
            if from == Letter::Q {
                pairs.insert(Letter::Q, Letter::U);
            }
            for neighbor in pos.neighbors(size) {
                let to = grid[neighbor];
                pairs.insert(from, to);
                if from == Letter::Q {
                    pairs.insert(Letter::U, to);
                }
            }
        }
        pairs
    }

    /// Adds the pair `from`,`to`.
    pub fn insert(&mut self, from: Letter, to: Letter) {
        self.rows[usize::from(from.index())] |= 1 << to.index();
    }

    /// Returns `true` if `from` may be followed by `to`.
    #[must_use]
    #[inline]
    pub fn contains(&self, from: Letter, to: Letter) -> bool {
        self.rows[usize::from(from.index())] & (1 << to.index()) != 0
    }

    /// Returns `true` if the two-letter string `pair` is in the set.
    ///
    /// Case is ignored; anything that is not exactly two letters is absent.
    #[must_use]
    pub fn contains_str(&self, pair: &str) -> bool {
        match pair.as_bytes() {
            &[a, b] => match (Letter::from_ascii(a), Letter::from_ascii(b)) {
                (Some(a), Some(b)) => self.contains(a, b),
                _ => false,
            },
            _ => false,
        }
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones() as usize).sum()
    }

    /// Returns `true` if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }

    /// Returns `true` if every consecutive pair of `word` is in the set.
    ///
    /// Case is ignored. Words containing anything but letters, and the empty
    /// word, are never admitted.
    #[must_use]
    pub fn admits_word(&self, word: &str) -> bool {
        let Some(letters) = word
            .bytes()
            .map(Letter::from_ascii)
            .collect::<Option<Vec<_>>>()
        else {
            return false;
        };
        !letters.is_empty()
            && letters
                .windows(2)
                .all(|pair| self.contains(pair[0], pair[1]))
    }

    /// Returns an iterator over all pairs, ordered by first then second letter.
    #[must_use]
    pub fn iter(&self) -> Pairs<'_> {
        Pairs {
            rows: &self.rows,
            from: 0,
            bits: self.rows[0],
        }
    }
}

impl<'a> IntoIterator for &'a AdjacencyPairs {
    type Item = (Letter, Letter);
    type IntoIter = Pairs<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the pairs of an [`AdjacencyPairs`].
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    rows: &'a [u32; 26],
    from: usize,
    bits: u32,
}

impl Iterator for Pairs<'_> {
    type Item = (Letter, Letter);

    fn next(&mut self) -> Option<Self::Item> {
        while self.bits == 0 {
            self.from += 1;
            if self.from >= self.rows.len() {
                return None;
            }
            self.bits = self.rows[self.from];
        }
        let to = Letter::ALL[self.bits.trailing_zeros() as usize];
        self.bits &= self.bits - 1;
        Some((Letter::ALL[self.from], to))
    }
}

impl FusedIterator for Pairs<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs_of(layout: &str) -> AdjacencyPairs {
        AdjacencyPairs::from_grid(&Grid::from_layout(layout).unwrap())
    }

    #[test]
    fn test_pairs_follow_8_neighbourhood() {
        // ABCD
        // EFGH
        // IJKL
        // MNOP
        let pairs = pairs_of("ABCDEFGHIJKLMNOP");
        for pair in ["AB", "BA", "AE", "AF", "FA", "FK", "KP", "GD", "DG", "MJ"] {
            assert!(pairs.contains_str(pair), "{pair}");
        }
        for pair in ["AC", "AK", "DM", "AA", "PA", "AQ", "QU"] {
            assert!(!pairs.contains_str(pair), "{pair}");
        }
        // 4 corners * 3 + 8 edges * 5 + 4 inner cells * 8, all letters distinct
        assert_eq!(pairs.len(), 4 * 3 + 8 * 5 + 4 * 8);
    }

    #[test]
    fn test_repeated_letters_pair_with_themselves() {
        let pairs = pairs_of("AABBCCDDEEFFGGHH");
        assert!(pairs.contains_str("AA"));
        assert!(pairs.contains_str("DD"));
        assert!(pairs.contains_str("HH"));
    }

    #[test]
    fn test_q_cell_adds_phantom_u() {
        // QBCD
        // EFGH
        // IJKL
        // MNOT
        let pairs = pairs_of("QBCDEFGHIJKLMNOT");
        assert!(pairs.contains_str("QU"));
        for to in ["B", "E", "F"] {
            assert!(pairs.contains_str(&format!("Q{to}")), "Q{to}");
            assert!(pairs.contains_str(&format!("U{to}")), "U{to}");
        }
        assert!(!pairs.contains_str("UC"));
        assert!(!pairs.contains_str("UQ"));
        assert!(pairs.admits_word("quef"));
        assert!(!pairs.admits_word("quiz"));
    }

    #[test]
    fn test_qu_requires_a_q_cell() {
        let pairs = pairs_of("UABCDEFGHIJKLMNO");
        assert!(!pairs.contains_str("QU"));
        assert!(pairs.contains_str("UA"));
    }

    #[test]
    fn test_admits_word() {
        let pairs = pairs_of("ABCDEFGHIJKLMNOP");
        assert!(pairs.admits_word("a"));
        assert!(pairs.admits_word("Fab"));
        assert!(!pairs.admits_word(""));
        assert!(!pairs.admits_word("ab-"));
        assert!(!pairs.admits_word("face"));
    }

    #[test]
    fn test_iter_matches_contains() {
        let pairs = pairs_of("QBCDEFGHIJKLMNOT");
        let listed: Vec<_> = pairs.iter().collect();
        assert_eq!(listed.len(), pairs.len());
        assert!(listed.iter().all(|&(a, b)| pairs.contains(a, b)));
        assert!(listed.windows(2).all(|w| w[0] < w[1]));
        assert!(!pairs.is_empty());
        assert!(AdjacencyPairs::new().is_empty());
        assert_eq!(AdjacencyPairs::new().iter().count(), 0);
    }
}
