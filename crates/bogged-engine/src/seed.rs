use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};

/// Seed used to reproduce a game layout.
///
/// A seed is 32 bytes, written as 64 lowercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use bogged_engine::GameSeed;
///
/// let seed = GameSeed::from_text("puzzle #42");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(GameSeed::from_str(&text)?, seed);
/// # Ok::<(), bogged_engine::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSeed([u8; 32]);

impl GameSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from arbitrary text (its SHA-256 digest).
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self(Sha256::digest(text.as_bytes()).into())
    }

    /// Returns the seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<GameSeed> for [u8; 32] {
    fn from(seed: GameSeed) -> Self {
        seed.0
    }
}

impl Display for GameSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors reported while parsing a [`GameSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Actual length, in bytes.
        len: usize,
    },
    /// A character is not a hexadecimal digit.
    #[display("invalid hex digit {digit:?} at offset {index}")]
    InvalidDigit {
        /// Byte offset of the bad digit.
        index: usize,
        /// The offending character.
        digit: char,
    },
}

impl FromStr for GameSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let digit = |index: usize| {
            let b = s.as_bytes()[index];
            char::from(b)
                .to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or_else(|| ParseSeedError::InvalidDigit {
                    index,
                    digit: s
                        .get(index..)
                        .and_then(|rest| rest.chars().next())
                        .unwrap_or(char::REPLACEMENT_CHARACTER),
                })
        };

        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let hi = digit(2 * i)?;
            let lo = digit(2 * i + 1)?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}
