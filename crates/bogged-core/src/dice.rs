//! Dice and dice sets.
//!
//! A dice set is written as a flat string of uppercase letters, six per die:
//! 96 characters for the 16 dice of a 4×4 grid, or 150 characters for the 25
//! dice of a 5×5 grid. A `Q` face stands for "Qu".
//!
//! Two dice sets that contain the same dice, each with the same faces,
//! canonicalize to the same string:
//!
//! ```
//! use bogged_core::dice;
//!
//! let shuffled = dice::CLASSIC_4X4
//!     .as_bytes()
//!     .chunks(6)
//!     .rev()
//!     .map(|die| die.iter().rev().map(|&b| char::from(b)).collect::<String>())
//!     .collect::<String>();
//! assert_ne!(shuffled, dice::CLASSIC_4X4);
//! assert_eq!(dice::canonicalize(&shuffled)?, dice::CLASSIC_4X4);
//! # Ok::<(), bogged_core::DiceError>(())
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{GridSize, Letter};

/// Number of faces on every die.
pub const FACES_PER_DIE: usize = 6;

/// The sixteen dice of the classic 4×4 game, in canonical order.
#[rustfmt::skip]
pub const CLASSIC_4X4: &str = concat!(
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", "AOOTTW", "CIMOTU", "DEILRX", "DELRVY",
    "DISTTY", "EEGHNW", "EEINSU", "EHRTVW", "EIOSST", "ELRTTY", "HIMNQU", "HLNNRZ",
);

/// The twenty-five dice of the "big" 5×5 game, in canonical order.
#[rustfmt::skip]
pub const BIG_5X5: &str = concat!(
    "AAAFRS", "AAEEEE", "AAFIRS", "ADENNN", "AEEEEM", "AEEGMU", "AEGMNN", "AFIRSY",
    "BJKQXZ", "CCENST", "CEIILT", "CEILPT", "CEIPST", "DDHNOT", "DHHLOR", "DHLNOR",
    "DHLNOR", "EIIITT", "EMOTTT", "ENSSSU", "FIPRSY", "GORRVW", "IPRRRY", "NOOTUW",
    "OOOTTU",
);

/// Errors reported while reading a dice string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DiceError {
    /// The string is not 96 or 150 characters long.
    #[display(
        "bad dice length detected: {len}; must be 16 or 25 six-sided dice (96 or 150 characters)"
    )]
    InvalidLength {
        /// Actual length of the string, in characters.
        len: usize,
    },
    /// A face is not an uppercase ASCII letter.
    #[display("invalid die face {face:?} at offset {index}; faces must be uppercase letters")]
    InvalidFace {
        /// Character offset of the bad face.
        index: usize,
        /// The offending character.
        face: char,
    },
}

/// A six-sided die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Die {
    faces: [Letter; FACES_PER_DIE],
}

impl Die {
    /// Creates a die from its faces.
    #[must_use]
    pub const fn new(faces: [Letter; FACES_PER_DIE]) -> Self {
        Self { faces }
    }

    /// Returns the faces in their stored order.
    #[must_use]
    pub const fn faces(&self) -> &[Letter; FACES_PER_DIE] {
        &self.faces
    }

    /// Returns this die with its faces in alphabetical order.
    #[must_use]
    pub fn sorted(mut self) -> Self {
        self.faces.sort_unstable();
        self
    }
}

impl Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in self.faces {
            Display::fmt(&face, f)?;
        }
        Ok(())
    }
}

/// An ordered collection of 16 or 25 dice.
///
/// # Examples
///
/// ```
/// use bogged_core::{DiceSet, GridSize, dice};
///
/// let set = DiceSet::parse(dice::BIG_5X5)?;
/// assert_eq!(set.size(), GridSize::Five);
/// assert_eq!(set.dice().len(), 25);
/// assert_eq!(set.to_string(), dice::BIG_5X5);
/// # Ok::<(), bogged_core::DiceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiceSet {
    size: GridSize,
    dice: Vec<Die>,
}

impl DiceSet {
    /// Parses a flat dice string.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::InvalidLength`] if the string is not 96 or 150
    /// characters long, and [`DiceError::InvalidFace`] if any character is
    /// not an uppercase ASCII letter.
    pub fn parse(raw: &str) -> Result<Self, DiceError> {
        let len = raw.chars().count();
        let Some(size) = GridSize::from_dice_len(len) else {
            return Err(DiceError::InvalidLength { len });
        };

        let mut faces = Vec::with_capacity(len);
        for (index, face) in raw.chars().enumerate() {
            let letter = u8::try_from(face)
                .ok()
                .and_then(Letter::from_uppercase)
                .ok_or(DiceError::InvalidFace { index, face })?;
            faces.push(letter);
        }
        let dice = faces
            .chunks_exact(FACES_PER_DIE)
            .map(|chunk| {
                let mut die = [Letter::A; FACES_PER_DIE];
                die.copy_from_slice(chunk);
                Die::new(die)
            })
            .collect();
        Ok(Self { size, dice })
    }

    /// Returns the grid size these dice fill.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the dice in their stored order.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Returns the canonical form: faces sorted within each die, then dice sorted.
    #[must_use]
    pub fn canonicalized(&self) -> Self {
        let mut dice: Vec<Die> = self.dice.iter().map(|die| die.sorted()).collect();
        dice.sort_unstable();
        Self {
            size: self.size,
            dice,
        }
    }

    /// Returns `true` if the set is already in canonical form.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        *self == self.canonicalized()
    }
}

impl Display for DiceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for die in &self.dice {
            Display::fmt(die, f)?;
        }
        Ok(())
    }
}

impl FromStr for DiceSet {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Normalizes a dice string so that equivalent dice sets compare equal.
///
/// The faces of each die are sorted, then the dice are sorted as strings and
/// concatenated. The result has the same length as the input.
///
/// # Errors
///
/// Returns [`DiceError::InvalidLength`] (carrying the bad length) if `raw` is
/// not 96 or 150 characters long, or [`DiceError::InvalidFace`] if it holds
/// anything but uppercase letters.
///
/// # Examples
///
/// ```
/// use bogged_core::{DiceError, dice};
///
/// let err = dice::canonicalize("ABC").unwrap_err();
/// assert_eq!(err, DiceError::InvalidLength { len: 3 });
/// assert!(err.to_string().contains('3'));
/// ```
pub fn canonicalize(raw: &str) -> Result<String, DiceError> {
    Ok(DiceSet::parse(raw)?.canonicalized().to_string())
}
