//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{MAX_NO_OF_WORDS, SCORE_INCREASE};
use crate::games::unscramble::{UnscrambleGame, UnscrambleGameBuilder};

use super::py_core::{PyGameState, PyGuessOutcome};

/// Python wrapper for UnscrambleGame.
#[pyclass(name = "UnscrambleGame")]
pub struct PyUnscrambleGame {
    inner: UnscrambleGame,
}

#[pymethods]
impl PyUnscrambleGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for a reproducible round; random when None
    /// - max_words: Words per round
    /// - score_increase: Points per correct answer
    /// - words: Candidate pool; the built-in list when None
    #[new]
    #[pyo3(signature = (
        seed = None,
        max_words = MAX_NO_OF_WORDS,
        score_increase = SCORE_INCREASE,
        words = None
    ))]
    fn new(
        seed: Option<u64>,
        max_words: u32,
        score_increase: u32,
        words: Option<Vec<String>>,
    ) -> PyResult<Self> {
        let mut builder = UnscrambleGameBuilder::new()
            .max_words(max_words)
            .score_increase(score_increase);
        if let Some(words) = words {
            builder = builder.words(words);
        }

        let inner = match seed {
            Some(seed) => builder.build(seed),
            None => builder.build_random(),
        }
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Current snapshot.
    #[getter]
    fn state(&self) -> PyGameState {
        PyGameState(self.inner.state().clone())
    }

    /// Pending guess text.
    #[getter]
    fn user_guess(&self) -> &str {
        self.inner.user_guess()
    }

    /// Seed the round was built from.
    #[getter]
    fn seed(&self) -> Option<u64> {
        self.inner.seed()
    }

    fn update_user_guess(&mut self, text: String) {
        self.inner.update_user_guess(text);
    }

    /// Check the pending guess.
    ///
    /// Returns `GuessOutcome.Ignored` once the round is over.
    fn check_user_guess(&mut self) -> PyGuessOutcome {
        self.inner.check_user_guess().into()
    }

    fn skip_word(&mut self) {
        self.inner.skip_word();
    }

    /// Start a new round.
    fn reset(&mut self) {
        self.inner.reset();
    }

    fn __repr__(&self) -> String {
        let state = self.inner.state();
        let status = if state.is_game_over { "over" } else { "ongoing" };
        format!(
            "UnscrambleGame(word={}/{}, score={}, status={})",
            state.current_word_count,
            self.inner.config().max_no_of_words,
            state.score,
            status
        )
    }
}
