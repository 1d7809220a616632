//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{GameState, GuessOutcome};

/// Read-only Python view of a game snapshot.
#[pyclass(name = "GameState", frozen)]
#[derive(Clone, Debug)]
pub struct PyGameState(pub GameState);

#[pymethods]
impl PyGameState {
    #[getter]
    fn current_scrambled_word(&self) -> &str {
        &self.0.current_scrambled_word
    }

    #[getter]
    fn current_word_count(&self) -> u32 {
        self.0.current_word_count
    }

    #[getter]
    fn score(&self) -> u32 {
        self.0.score
    }

    #[getter]
    fn is_guessed_word_wrong(&self) -> bool {
        self.0.is_guessed_word_wrong
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.0.is_game_over
    }

    fn __repr__(&self) -> String {
        format!(
            "GameState(word={:?}, count={}, score={}, wrong={}, over={})",
            self.0.current_scrambled_word,
            self.0.current_word_count,
            self.0.score,
            self.0.is_guessed_word_wrong,
            self.0.is_game_over
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Result of checking a guess, as seen from Python.
#[pyclass(name = "GuessOutcome", eq, eq_int, frozen)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PyGuessOutcome {
    Correct,
    Wrong,
    Ignored,
}

impl From<GuessOutcome> for PyGuessOutcome {
    fn from(outcome: GuessOutcome) -> Self {
        match outcome {
            GuessOutcome::Correct => PyGuessOutcome::Correct,
            GuessOutcome::Wrong => PyGuessOutcome::Wrong,
            GuessOutcome::Ignored => PyGuessOutcome::Ignored,
        }
    }
}

#[pymethods]
impl PyGuessOutcome {
    #[getter]
    fn is_correct(&self) -> bool {
        *self == PyGuessOutcome::Correct
    }
}
