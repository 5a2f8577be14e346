use bogged_core::{DiceError, DiceSet, Die, Grid, Letter};
use rand::{
    Rng, SeedableRng as _,
    seq::{IndexedRandom as _, SliceRandom as _},
};
use rand_pcg::Pcg64;

use crate::{Board, GameSeed, MIN_WORD_LENGTH};

/// Errors reported while creating a [`BoggleEngine`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// The dice string is malformed.
    #[display("bad chromosome detected: {source}: {dice:?}")]
    InvalidDice {
        /// The string that was rejected.
        dice: String,
        /// Why it was rejected.
        source: DiceError,
    },
}

/// The outcome of [`BoggleEngine::new_game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGame {
    /// Row-major letters of the rolled grid.
    pub layout: String,
    /// Dictionary words found on the grid, in dictionary order and casing.
    pub words: Vec<String>,
    /// Number of words found; the completion target of the puzzle.
    pub max_words: usize,
}

/// A [`GeneratedGame`] together with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededGame {
    /// Seed to pass to [`BoggleEngine::new_game_with_seed`].
    pub seed: GameSeed,
    /// The generated game.
    pub game: GeneratedGame,
}

/// Rolls dice into a grid and finds the dictionary words it contains.
///
/// The engine is created once per dice set. Each call to
/// [`new_game`](Self::new_game) rolls a new grid and re-runs the word search;
/// afterwards [`is_constructible`](Self::is_constructible) checks single words
/// against the current grid.
///
/// # Example
///
/// ```
/// use bogged_core::dice;
/// use bogged_engine::BoggleEngine;
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let mut engine = BoggleEngine::new(dice::CLASSIC_4X4)?;
/// let mut rng = Pcg64::seed_from_u64(7);
/// let game = engine.new_game(&mut rng, ["the", "tea", "eat", "at", "qi"]);
///
/// assert_eq!(game.layout.len(), 16);
/// assert_eq!(game.max_words, game.words.len());
/// for word in &game.words {
///     assert!(engine.is_constructible(word));
/// }
/// # Ok::<(), bogged_engine::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BoggleEngine {
    dice: DiceSet,
    board: Board,
    words: Vec<String>,
}

impl BoggleEngine {
    /// Creates an engine from a 96- or 150-character dice string.
    ///
    /// The grid starts with a fixed placeholder layout until the first roll.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDice`] carrying the string and the reason
    /// (bad length or bad face).
    pub fn new(dice: &str) -> Result<Self, EngineError> {
        let dice_set = DiceSet::parse(dice).map_err(|source| EngineError::InvalidDice {
            dice: dice.to_owned(),
            source,
        })?;
        Ok(Self::from_dice_set(dice_set))
    }

    /// Creates an engine from parsed dice.
    #[must_use]
    pub fn from_dice_set(dice: DiceSet) -> Self {
        let board = Board::new(Grid::placeholder(dice.size()));
        Self {
            dice,
            board,
            words: Vec::new(),
        }
    }

    /// Returns the dice.
    #[must_use]
    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.board.grid()
    }

    /// Returns the row-major layout of the current grid.
    #[must_use]
    pub fn layout(&self) -> String {
        self.board.grid().layout()
    }

    /// Returns the words found by the last [`new_game`](Self::new_game).
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words found by the last game.
    #[must_use]
    pub fn max_words(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if `word` can be spelled on the current grid.
    ///
    /// See [`Board::is_constructible`].
    #[must_use]
    pub fn is_constructible(&self, word: &str) -> bool {
        self.board.is_constructible(word)
    }

    /// Rolls the dice: shuffles them over the cells and turns each one to a
    /// random face.
    ///
    /// The word list of the previous game is cleared.
    pub fn roll<R>(&mut self, rng: &mut R) -> &Board
    where
        R: Rng + ?Sized,
    {
        let mut dice = self.dice.dice().to_vec();
        dice.shuffle(rng);
        let size = self.dice.size();
        let grid = Grid::from_fn(size, |pos| roll_die(dice[pos.index(size)], rng));
        self.board = Board::new(grid);
        self.words.clear();
        &self.board
    }

    /// Rolls a new grid and collects every dictionary word it contains.
    ///
    /// Dictionary entries are trimmed; entries shorter than
    /// [`MIN_WORD_LENGTH`], or using letters that are not on the grid (`U`
    /// counts as present when a `Q` is), are skipped before the path search.
    /// Found words keep their dictionary casing and order.
    pub fn new_game<R, I>(&mut self, rng: &mut R, dictionary: I) -> GeneratedGame
    where
        R: Rng + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.roll(rng);
        let letters = self.board.usable_letters();

        let mut candidates = 0_usize;
        for entry in dictionary {
            let word = entry.as_ref().trim();
            if word.len() < MIN_WORD_LENGTH || !letters.covers_word(word) {
                continue;
            }
            candidates += 1;
            if self.board.is_constructible(word) {
                self.words.push(word.to_owned());
            }
        }

        let layout = self.layout();
        log::debug!(
            "rolled {layout} ({}): {candidates} candidates, {} words",
            self.dice.size(),
            self.words.len()
        );
        GeneratedGame {
            layout,
            words: self.words.clone(),
            max_words: self.words.len(),
        }
    }

    /// Like [`new_game`](Self::new_game), with the grid rolled from `seed`.
    ///
    /// The same seed and dice always produce the same layout.
    pub fn new_game_with_seed<I>(&mut self, seed: GameSeed, dictionary: I) -> GeneratedGame
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut rng = Pcg64::from_seed(seed.into());
        self.new_game(&mut rng, dictionary)
    }

    /// Like [`new_game_with_seed`](Self::new_game_with_seed), with a fresh
    /// random seed that is returned alongside the game.
    pub fn generate<I>(&mut self, dictionary: I) -> SeededGame
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let seed = GameSeed::random();
        let game = self.new_game_with_seed(seed, dictionary);
        SeededGame { seed, game }
    }
}

fn roll_die<R>(die: Die, rng: &mut R) -> Letter
where
    R: Rng + ?Sized,
{
    match die.faces().choose(rng) {
        Some(&face) => face,
        None => unreachable!("dice always have faces"),
    }
}

#[cfg(test)]
mod tests {
    use bogged_core::{GridSize, LetterSet, dice};
    use rand::SeedableRng as _;

    use super::*;

    /// Sixteen dice whose six faces all show the same letter, `A` to `P`.
    fn alphabet_dice() -> String {
        Letter::ALL[..16]
            .iter()
            .map(|letter| letter.as_char().to_string().repeat(6))
            .collect()
    }

    const WORDS: [&str; 12] = [
        "cab", "bad", "face", "zzz", "Fab", "abe", "glop", "knife", "ab", "  jink  ", "it's", "",
    ];

    #[test]
    fn test_new_rejects_bad_lengths() {
        let raw = "A".repeat(100);
        let err = BoggleEngine::new(&raw).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidDice {
                dice: raw.clone(),
                source: DiceError::InvalidLength { len: 100 }
            }
        );
        let message = err.to_string();
        assert!(message.contains("100"), "{message}");
        assert!(message.contains(&raw), "{message}");

        for len in [0, 1, 95, 97, 149, 151, 200] {
            assert!(BoggleEngine::new(&"A".repeat(len)).is_err());
        }
    }

    #[test]
    fn test_new_uses_placeholder_grid() {
        let engine = BoggleEngine::new(dice::CLASSIC_4X4).unwrap();
        assert_eq!(engine.layout(), "ABCDEFGHIJKLMNOP");
        assert_eq!(engine.max_words(), 0);

        let engine = BoggleEngine::new(dice::BIG_5X5).unwrap();
        assert_eq!(engine.grid().size(), GridSize::Five);
        assert_eq!(engine.layout(), "ABCDEFGHIJKLMNOPQRSTUVWXY");
    }

    #[test]
    fn test_roll_die_returns_one_of_its_faces() {
        let (q, u) = (Letter::Q, Letter::U);
        let die = Die::new([q, u, q, u, q, u]);
        let mut rng = Pcg64::seed_from_u64(9);
        for _ in 0..32 {
            let face = roll_die(die, &mut rng);
            assert!(face == q || face == u, "{face}");
        }
        assert_eq!(roll_die(Die::new([Letter::A; 6]), &mut rng), Letter::A);
    }

    #[test]
    fn test_roll_uses_every_die_once() {
        let mut engine = BoggleEngine::new(&alphabet_dice()).unwrap();
        let mut rng = Pcg64::seed_from_u64(1);
        for _ in 0..10 {
            let board = engine.roll(&mut rng);
            let mut layout: Vec<char> = board.grid().layout().chars().collect();
            layout.sort_unstable();
            assert_eq!(layout.into_iter().collect::<String>(), "ABCDEFGHIJKLMNOP");
        }
    }

    #[test]
    fn test_roll_picks_faces_of_the_placed_die() {
        let mut engine = BoggleEngine::new(dice::BIG_5X5).unwrap();
        let mut rng = Pcg64::seed_from_u64(2);
        let pool: LetterSet = engine
            .dice()
            .dice()
            .iter()
            .flat_map(|die| die.faces().iter().copied())
            .collect();
        let board = engine.roll(&mut rng);
        let cells = board.grid().cells();
        assert!(cells.iter().all(|&letter| pool.contains(letter)));
    }

    #[test]
    fn test_new_game_on_fixed_letters() {
        let mut engine = BoggleEngine::new(&alphabet_dice()).unwrap();
        let mut rng = Pcg64::seed_from_u64(3);
        let game = engine.new_game(&mut rng, WORDS);

        let board = Board::from_layout(&game.layout).unwrap();
        assert_eq!(board, *engine.board());
        assert_eq!(game.max_words, game.words.len());
        assert_eq!(engine.words(), game.words.as_slice());
        for word in &game.words {
            assert!(engine.is_constructible(word), "{word}");
            assert!(word.len() >= MIN_WORD_LENGTH);
            assert_eq!(word.trim(), word);
        }
        for word in WORDS {
            let word = word.trim();
            let expected = word.len() >= MIN_WORD_LENGTH && board.is_constructible(word);
            assert_eq!(game.words.iter().any(|w| w == word), expected, "{word}");
        }
        assert!(!game.words.iter().any(|w| w == "zzz" || w == "ab"));
    }

    #[test]
    fn test_new_game_preserves_dictionary_order_and_case() {
        let mut engine = BoggleEngine::new(&"E".repeat(96)).unwrap();
        let mut rng = Pcg64::seed_from_u64(4);
        let game = engine.new_game(&mut rng, ["eee", "EE", "Eeee", "ebb", "EEE", "e e e"]);
        assert_eq!(game.layout, "E".repeat(16));
        assert_eq!(game.words, ["eee", "Eeee", "EEE"]);
        assert_eq!(game.max_words, 3);
    }

    #[test]
    fn test_new_game_with_seed_is_reproducible() {
        let seed = GameSeed::from_text("reproducible");
        let mut a = BoggleEngine::new(dice::CLASSIC_4X4).unwrap();
        let mut b = BoggleEngine::new(dice::CLASSIC_4X4).unwrap();
        let first = a.new_game_with_seed(seed, ["toe", "tot"]);
        let second = b.new_game_with_seed(seed, ["toe", "tot"]);
        assert_eq!(first, second);

        let other = a.new_game_with_seed(GameSeed::from_text("other"), ["toe"]);
        let third = a.new_game_with_seed(seed, ["toe", "tot"]);
        assert_eq!(third, first);
        assert_eq!(other.layout.len(), 16);
    }

    #[test]
    fn test_generate_returns_its_seed() {
        let mut engine = BoggleEngine::new(dice::BIG_5X5).unwrap();
        let SeededGame { seed, game } = engine.generate(["rat", "tar", "art"]);
        let replay = BoggleEngine::new(dice::BIG_5X5)
            .unwrap()
            .new_game_with_seed(seed, ["rat", "tar", "art"]);
        assert_eq!(replay, game);
    }

    #[test]
    fn test_new_game_clears_previous_words() {
        let mut engine = BoggleEngine::new(&"E".repeat(96)).unwrap();
        let mut rng = Pcg64::seed_from_u64(5);
        engine.new_game(&mut rng, ["eee"]);
        assert_eq!(engine.max_words(), 1);
        let game = engine.new_game(&mut rng, ["eeee", "eeeee"]);
        assert_eq!(game.words, ["eeee", "eeeee"]);
        assert_eq!(engine.words(), ["eeee", "eeeee"]);
    }

    #[test]
    fn test_q_die_allows_qu_words() {
        // One die is all Q, the rest all E: "QUEE" needs the phantom U.
        let mut raw = "QQQQQQ".to_owned();
        raw.push_str(&"E".repeat(90));
        let mut engine = BoggleEngine::new(&raw).unwrap();
        let mut rng = Pcg64::seed_from_u64(6);
        let game = engine.new_game(&mut rng, ["quee", "queue", "que", "qe", "uee"]);
        assert_eq!(game.words, ["quee", "que"]);
    }
}
