use std::collections::HashSet;

use bogged_core::GridError;
use bogged_engine::{Board, MIN_WORD_LENGTH};

use crate::Puzzle;

/// How submitted words are judged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum AcceptancePolicy {
    /// A word is accepted if and only if it is in the puzzle's stored list.
    #[default]
    WordList,
    /// As [`WordList`](Self::WordList), and the word must also be spellable on
    /// the stored layout.
    Revalidate,
}

/// The verdict on one submitted word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SubmissionOutcome {
    /// A new word was found.
    #[display("accepted")]
    Accepted,
    /// The word was already found in this play.
    #[display("already found")]
    AlreadyFound,
    /// The word is shorter than the minimum length.
    #[display("too short")]
    TooShort,
    /// The word is not in the puzzle's word list.
    #[display("not in word list")]
    NotInList,
    /// The word is listed but cannot be spelled on the board.
    #[display("not on board")]
    NotOnBoard,
}

/// One player's attempt at a puzzle.
///
/// # Example
///
/// ```
/// use bogged_game::{AcceptancePolicy, Play, Puzzle, SubmissionOutcome};
///
/// let puzzle = Puzzle {
///     dice: bogged_core::dice::CLASSIC_4X4.to_owned(),
///     layout: "ABCDEFGHIJKLMNOP".to_owned(),
///     words: vec!["fab".to_owned(), "knife".to_owned()],
///     max_words: 2,
/// };
/// let mut play = Play::new(&puzzle, AcceptancePolicy::WordList)?;
///
/// assert_eq!(play.submit("Fab"), SubmissionOutcome::Accepted);
/// assert_eq!(play.submit("fab"), SubmissionOutcome::AlreadyFound);
/// assert_eq!(play.submit("cab"), SubmissionOutcome::NotInList);
/// assert_eq!(play.remaining(), 1);
/// # Ok::<(), bogged_core::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Play<'a> {
    puzzle: &'a Puzzle,
    policy: AcceptancePolicy,
    board: Option<Board>,
    min_word_length: usize,
    found: Vec<String>,
    seen: HashSet<String>,
}

impl<'a> Play<'a> {
    /// Starts a play of `puzzle`.
    ///
    /// # Errors
    ///
    /// With [`AcceptancePolicy::Revalidate`], returns [`GridError`] if the
    /// stored layout is malformed.
    pub fn new(puzzle: &'a Puzzle, policy: AcceptancePolicy) -> Result<Self, GridError> {
        let board = match policy {
            AcceptancePolicy::WordList => None,
            AcceptancePolicy::Revalidate => Some(puzzle.board()?),
        };
        Ok(Self {
            puzzle,
            policy,
            board,
            min_word_length: MIN_WORD_LENGTH,
            found: Vec::new(),
            seen: HashSet::new(),
        })
    }

    /// Sets the shortest word this play accepts.
    ///
    /// Defaults to [`MIN_WORD_LENGTH`]. Shorter words are reported as
    /// [`SubmissionOutcome::TooShort`] before the word list is consulted.
    #[must_use]
    pub fn with_min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    /// Returns the shortest word this play accepts.
    #[must_use]
    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        self.puzzle
    }

    /// Returns the acceptance policy.
    #[must_use]
    pub fn policy(&self) -> AcceptancePolicy {
        self.policy
    }

    /// Judges a submitted word and records it if accepted.
    ///
    /// Case and surrounding whitespace are ignored. Resubmitting a found word
    /// is reported as [`SubmissionOutcome::AlreadyFound`] and not counted again.
    pub fn submit(&mut self, word: &str) -> SubmissionOutcome {
        let word = word.trim();
        if word.chars().count() < self.min_word_length {
            return SubmissionOutcome::TooShort;
        }
        let key = word.to_ascii_lowercase();
        if self.seen.contains(&key) {
            return SubmissionOutcome::AlreadyFound;
        }
        if !self.puzzle.contains_word(word) {
            return SubmissionOutcome::NotInList;
        }
        if let Some(board) = &self.board
            && !board.is_constructible(word)
        {
            log::warn!(
                "word list and board disagree on {word:?} (layout {})",
                self.puzzle.layout
            );
            return SubmissionOutcome::NotOnBoard;
        }

        self.seen.insert(key);
        self.found.push(word.to_owned());
        SubmissionOutcome::Accepted
    }

    /// Returns the accepted words in submission order, as submitted.
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    /// Returns the number of accepted words.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Returns the number of listed words not yet found.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.puzzle.max_words.saturating_sub(self.found.len())
    }

    /// Returns `true` once every listed word has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ABCD
    // EFGH
    // IJKL
    // MNOP
    fn puzzle(words: &[&str]) -> Puzzle {
        Puzzle {
            dice: bogged_core::dice::CLASSIC_4X4.to_owned(),
            layout: "ABCDEFGHIJKLMNOP".to_owned(),
            words: words.iter().map(|&w| w.to_owned()).collect(),
            max_words: words.len(),
        }
    }

    #[test]
    fn test_word_list_policy() {
        let puzzle = puzzle(&["fab", "glop", "cab"]);
        let mut play = Play::new(&puzzle, AcceptancePolicy::default()).unwrap();
        assert!(play.policy().is_word_list());

        assert!(play.submit("FAB").is_accepted());
        assert!(play.submit(" fab ").is_already_found());
        assert!(play.submit("ab").is_too_short());
        assert!(play.submit("knife").is_not_in_list());
        // Listed but not spellable: the list is authoritative.
        assert!(play.submit("cab").is_accepted());
        assert_eq!(play.found_words(), ["FAB", "cab"]);
        assert_eq!(play.remaining(), 1);
        assert!(!play.is_complete());

        assert!(play.submit("glop").is_accepted());
        assert!(play.is_complete());
        assert_eq!(play.found_count(), 3);
    }

    #[test]
    fn test_revalidate_policy_rejects_mismatched_list() {
        let puzzle = puzzle(&["fab", "cab"]);
        let mut play = Play::new(&puzzle, AcceptancePolicy::Revalidate).unwrap();
        assert_eq!(play.submit("cab"), SubmissionOutcome::NotOnBoard);
        assert_eq!(play.submit("fab"), SubmissionOutcome::Accepted);
        assert_eq!(play.submit("zzz"), SubmissionOutcome::NotInList);
        assert_eq!(play.found_count(), 1);
        assert!(!play.is_complete());
    }

    #[test]
    fn test_revalidate_requires_valid_layout() {
        let mut bad = puzzle(&["fab"]);
        bad.layout = "ABC".to_owned();
        assert!(Play::new(&bad, AcceptancePolicy::Revalidate).is_err());
        assert!(Play::new(&bad, AcceptancePolicy::WordList).is_ok());
    }

    #[test]
    fn test_empty_puzzle_is_complete() {
        let puzzle = puzzle(&[]);
        let play = Play::new(&puzzle, AcceptancePolicy::WordList).unwrap();
        assert!(play.is_complete());
        assert_eq!(play.puzzle().max_words, 0);
    }

    #[test]
    fn test_min_word_length_is_per_play() {
        let puzzle = puzzle(&["fab", "glop"]);
        let default = Play::new(&puzzle, AcceptancePolicy::WordList).unwrap();
        assert_eq!(default.min_word_length(), MIN_WORD_LENGTH);

        let mut play = Play::new(&puzzle, AcceptancePolicy::WordList)
            .unwrap()
            .with_min_word_length(4);
        assert_eq!(play.min_word_length(), 4);
        assert!(play.submit("fab").is_too_short());
        assert!(play.submit("glop").is_accepted());
        assert_eq!(play.found_words(), ["glop"]);
        assert_eq!(play.remaining(), 1);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(SubmissionOutcome::NotOnBoard.to_string(), "not on board");
        assert_eq!(SubmissionOutcome::Accepted.to_string(), "accepted");
    }
}
