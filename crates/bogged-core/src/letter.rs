//! Letters and letter sets.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

/// An uppercase ASCII letter (`A`-`Z`).
///
/// Grid cells and die faces hold exactly one letter. The letter `Q` stands for
/// the two-letter "Qu" face; see [`AdjacencyPairs`](crate::AdjacencyPairs).
///
/// # Examples
///
/// ```
/// use bogged_core::Letter;
///
/// let q = Letter::from_ascii(b'q').unwrap();
/// assert_eq!(q, Letter::Q);
/// assert_eq!(q.as_char(), 'Q');
/// assert_eq!(Letter::from_ascii(b'-'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// The letter `A`.
    pub const A: Self = Self(0);
    /// The letter `Q`, printed on the "Qu" die face.
    pub const Q: Self = Self(16);
    /// The letter `U`.
    pub const U: Self = Self(20);

    /// All 26 letters in alphabetical order.
    pub const ALL: [Self; 26] = {
        let mut all = [Self(0); 26];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 26 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Converts an ASCII byte to a letter, ignoring case.
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    #[must_use]
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        let upper = byte.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Self(upper - b'A'))
        } else {
            None
        }
    }

    /// Converts an uppercase ASCII byte to a letter.
    ///
    /// Unlike [`Letter::from_ascii`], lowercase letters are rejected.
    #[must_use]
    #[inline]
    pub const fn from_uppercase(byte: u8) -> Option<Self> {
        if byte.is_ascii_uppercase() {
            Some(Self(byte - b'A'))
        } else {
            None
        }
    }

    /// Returns the letter's index in the alphabet (0 for `A`, 25 for `Z`).
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the uppercase ASCII byte of this letter.
    #[must_use]
    #[inline]
    pub const fn as_byte(self) -> u8 {
        b'A' + self.0
    }

    /// Returns the uppercase character of this letter.
    #[must_use]
    #[inline]
    pub const fn as_char(self) -> char {
        self.as_byte() as char
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

/// A set of letters, represented as a 26-bit mask.
///
/// # Examples
///
/// ```
/// use bogged_core::{Letter, LetterSet};
///
/// let set: LetterSet = "CAB".bytes().filter_map(Letter::from_ascii).collect();
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.to_string(), "ABC");
/// assert!(set.covers_word("cab"));
/// assert!(!set.covers_word("cad"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet {
    bits: u32,
}

impl LetterSet {
    /// An empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a letter. Returns `true` if it was not already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1 << letter.index();
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Returns `true` if the letter is in the set.
    #[must_use]
    #[inline]
    pub const fn contains(self, letter: Letter) -> bool {
        self.bits & (1 << letter.index()) != 0
    }

    /// Returns the number of letters in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the letters in alphabetical order.
    #[must_use]
    pub fn iter(self) -> LetterSetIter {
        LetterSetIter { bits: self.bits }
    }

    /// Returns `true` if `word` is non-empty and made only of letters in this set.
    ///
    /// Matching ignores case. Any byte that is not an ASCII letter makes the
    /// word fail.
    #[must_use]
    pub fn covers_word(self, word: &str) -> bool {
        !word.is_empty()
            && word
                .bytes()
                .all(|b| Letter::from_ascii(b).is_some_and(|l| self.contains(l)))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<T: IntoIterator<Item = Letter>>(iter: T) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl IntoIterator for LetterSet {
    type Item = Letter;
    type IntoIter = LetterSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in *self {
            Display::fmt(&letter, f)?;
        }
        Ok(())
    }
}

/// Iterator over the letters of a [`LetterSet`].
#[derive(Debug, Clone)]
pub struct LetterSetIter {
    bits: u32,
}

impl Iterator for LetterSetIter {
    type Item = Letter;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Letter(index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for LetterSetIter {}
impl ExactSizeIterator for LetterSetIter {}
