use bogged_core::{GridError, dice};
use bogged_engine::{Board, BoggleEngine, EngineError, GameSeed, GeneratedGame};
use rand::Rng;

/// The facts of one generated puzzle, as handed to storage.
///
/// # Example
///
/// ```
/// use bogged_core::dice;
/// use bogged_engine::GameSeed;
/// use bogged_game::Puzzle;
///
/// let puzzle = Puzzle::generate_with_seed(
///     dice::CLASSIC_4X4,
///     GameSeed::from_text("monday"),
///     ["tone", "note", "set"],
/// )?;
/// assert_eq!(puzzle.dice, dice::CLASSIC_4X4);
/// assert_eq!(puzzle.layout.len(), 16);
/// assert_eq!(puzzle.max_words, puzzle.words.len());
/// # Ok::<(), bogged_engine::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Puzzle {
    /// Canonical dice string the grid was rolled from.
    pub dice: String,
    /// Row-major letters of the grid.
    pub layout: String,
    /// Words on the grid, in dictionary order.
    pub words: Vec<String>,
    /// Number of words to find.
    pub max_words: usize,
}

impl Puzzle {
    /// Rolls a puzzle from `dice` with the given random source.
    ///
    /// The dice are canonicalized first, so equivalent dice sets produce equal
    /// `dice` fields.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the dice string is malformed.
    pub fn generate<R, I>(dice: &str, rng: &mut R, dictionary: I) -> Result<Self, EngineError>
    where
        R: Rng + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut engine = canonical_engine(dice)?;
        let game = engine.new_game(rng, dictionary);
        Ok(Self::from_game(&engine, game))
    }

    /// Rolls a reproducible puzzle from `dice` and `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the dice string is malformed.
    pub fn generate_with_seed<I>(
        dice: &str,
        seed: GameSeed,
        dictionary: I,
    ) -> Result<Self, EngineError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut engine = canonical_engine(dice)?;
        let game = engine.new_game_with_seed(seed, dictionary);
        Ok(Self::from_game(&engine, game))
    }

    fn from_game(engine: &BoggleEngine, game: GeneratedGame) -> Self {
        let GeneratedGame {
            layout,
            words,
            max_words,
        } = game;
        Self {
            dice: engine.dice().to_string(),
            layout,
            words,
            max_words,
        }
    }

    /// Rebuilds the board from the stored layout.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the stored layout is malformed.
    pub fn board(&self) -> Result<Board, GridError> {
        Board::from_layout(&self.layout)
    }

    /// Returns `true` if `word` is in the stored list, ignoring case.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        let word = word.trim();
        self.words.iter().any(|w| w.eq_ignore_ascii_case(word))
    }
}

fn canonical_engine(raw: &str) -> Result<BoggleEngine, EngineError> {
    let canonical = dice::canonicalize(raw).map_err(|source| EngineError::InvalidDice {
        dice: raw.to_owned(),
        source,
    })?;
    BoggleEngine::new(&canonical)
}
