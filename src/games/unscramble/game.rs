//! Unscramble game implementation.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::{
    scramble, Command, ConfigError, GameConfig, GameRng, GameState, GuessOutcome, Phase,
    RandomSource, Session,
};

/// Word-unscrambling state machine.
///
/// Owns the configuration, the private session and the public snapshot.
/// Commands take `&mut self`; observers read `state()` or hold the `Arc`
/// from `snapshot()`, which is swapped for a new value on every change.
#[derive(Clone, Debug)]
pub struct UnscrambleGame<R = GameRng> {
    config: GameConfig,
    state: Arc<GameState>,
    session: Session,
    /// Draws which word comes next.
    word_rng: R,
    /// Shuffles the chosen word.
    scramble_rng: R,
    seed: Option<u64>,
}

/// Builder for creating an UnscrambleGame.
#[derive(Clone, Debug, Default)]
pub struct UnscrambleGameBuilder {
    config: GameConfig,
}

impl UnscrambleGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_words(mut self, count: u32) -> Self {
        self.config = self.config.with_max_words(count);
        self
    }

    pub fn score_increase(mut self, delta: u32) -> Self {
        self.config = self.config.with_score_increase(delta);
        self
    }

    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config = self.config.with_words(words);
        self
    }

    /// Build a game whose round is fully determined by `seed`.
    pub fn build(self, seed: u64) -> Result<UnscrambleGame, ConfigError> {
        Self::seeded(self.config, GameRng::new(seed))
    }

    /// Build a game seeded from OS entropy.
    pub fn build_random(self) -> Result<UnscrambleGame, ConfigError> {
        Self::seeded(self.config, GameRng::from_entropy())
    }

    /// Build a game driven by caller-supplied random sources.
    pub fn build_with<R: RandomSource>(
        self,
        word_rng: R,
        scramble_rng: R,
    ) -> Result<UnscrambleGame<R>, ConfigError> {
        UnscrambleGame::start(self.config, word_rng, scramble_rng, None)
    }

    fn seeded(config: GameConfig, rng: GameRng) -> Result<UnscrambleGame, ConfigError> {
        let seed = rng.seed();
        UnscrambleGame::start(
            config,
            rng.for_context("words"),
            rng.for_context("scramble"),
            Some(seed),
        )
    }
}

impl<R: RandomSource> UnscrambleGame<R> {
    fn start(
        config: GameConfig,
        word_rng: R,
        scramble_rng: R,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut game = Self {
            config,
            state: Arc::new(GameState::first_word(String::new())),
            session: Session::default(),
            word_rng,
            scramble_rng,
            seed,
        };
        game.new_round();
        Ok(game)
    }

    // === Observation ===

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Shared handle to the current snapshot.
    ///
    /// The handle keeps pointing at this snapshot; later commands install
    /// new ones instead of changing it.
    #[must_use]
    pub fn snapshot(&self) -> Arc<GameState> {
        Arc::clone(&self.state)
    }

    /// Current phase of the round.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Pending guess text.
    #[must_use]
    pub fn user_guess(&self) -> &str {
        &self.session.user_guess
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the game was built with, if it was built from one.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Words still to be presented after the current one.
    #[must_use]
    pub fn words_remaining(&self) -> u32 {
        if self.state.is_game_over {
            return 0;
        }
        self.config.max_no_of_words - self.state.current_word_count
    }

    // === Commands ===

    /// Store `text` as the pending guess without evaluating it.
    pub fn update_user_guess(&mut self, text: impl Into<String>) {
        if self.is_complete("update_user_guess") {
            return;
        }
        self.session.user_guess = text.into();
    }

    /// Evaluate the pending guess against the current word.
    pub fn check_user_guess(&mut self) -> GuessOutcome {
        if self.is_complete("check_user_guess") {
            return GuessOutcome::Ignored;
        }

        let correct = self.session.guess_matches();
        trace!(
            guess = %self.session.user_guess,
            word_count = self.state.current_word_count,
            correct,
            "checked guess"
        );

        if correct {
            let score = self.state.score.saturating_add(self.config.score_increase);
            self.advance(score);
            GuessOutcome::Correct
        } else {
            self.state = Arc::new(self.state.with_wrong_guess());
            GuessOutcome::Wrong
        }
    }

    /// Move on to the next word without scoring.
    pub fn skip_word(&mut self) {
        if self.is_complete("skip_word") {
            return;
        }
        debug!(word_count = self.state.current_word_count, "word skipped");
        self.advance(self.state.score);
    }

    /// Discard the round and start a fresh one with the same configuration.
    ///
    /// The random sources carry on rather than being reseeded.
    pub fn reset(&mut self) {
        debug!(
            seed = ?self.seed,
            word_count = self.state.current_word_count,
            score = self.state.score,
            "round reset"
        );
        self.new_round();
    }

    /// Dispatch a command. Returns the outcome for `CheckGuess`.
    pub fn apply(&mut self, command: Command) -> Option<GuessOutcome> {
        match command {
            Command::UpdateGuess(text) => {
                self.update_user_guess(text);
                None
            }
            Command::CheckGuess => Some(self.check_user_guess()),
            Command::SkipWord => {
                self.skip_word();
                None
            }
            Command::Reset => {
                self.reset();
                None
            }
        }
    }

    // === Internals ===

    fn is_complete(&self, command: &'static str) -> bool {
        let complete = self.state.is_game_over;
        if complete {
            debug!(command, "round complete, command ignored");
        }
        complete
    }

    fn new_round(&mut self) {
        self.session = Session::default();
        let scrambled = self.pick_word();
        self.state = Arc::new(GameState::first_word(scrambled));
        debug!(
            seed = ?self.seed,
            max_words = self.config.max_no_of_words,
            "round started"
        );
    }

    /// Retire the current word, then present another or end the round.
    fn advance(&mut self, score: u32) {
        if self.state.current_word_count >= self.config.max_no_of_words {
            self.session.user_guess.clear();
            self.state = Arc::new(self.state.with_game_over(score));
            debug!(score, "round complete");
            return;
        }

        let scrambled = self.pick_word();
        self.state = Arc::new(self.state.with_next_word(scrambled, score));
        debug!(
            word_count = self.state.current_word_count,
            score,
            "next word"
        );
    }

    /// Draw an unused word, mark it used and return its scramble.
    fn pick_word(&mut self) -> String {
        let remaining: Vec<usize> = (0..self.config.words.len())
            .filter(|i| !self.session.used.contains(i))
            .collect();
        assert!(
            !remaining.is_empty(),
            "validated pool must hold at least max_no_of_words words"
        );

        let index = remaining[self.word_rng.gen_index(remaining.len())];
        let word = self
            .config
            .words
            .get(index)
            .expect("index drawn from the pool's own range");
        self.session.present(index, word);

        scramble(word, &mut self.scramble_rng)
    }
}
