//! Python bindings for the unscramble game.
//!
//! Lets a Python presentation layer drive a round.
//!
//! # Quick Start
//!
//! ```python
//! import unscramble
//!
//! game = unscramble.UnscrambleGame(seed=42)
//! print(game.state.current_scrambled_word)
//!
//! game.update_user_guess("animal")
//! if game.check_user_guess() == unscramble.GuessOutcome.Wrong:
//!     game.skip_word()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// unscramble: a word-unscrambling game engine.
#[pymodule]
fn unscramble(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameState>()?;
    m.add_class::<PyGuessOutcome>()?;
    m.add_class::<PyUnscrambleGame>()?;

    m.add("MAX_NO_OF_WORDS", crate::core::MAX_NO_OF_WORDS)?;
    m.add("SCORE_INCREASE", crate::core::SCORE_INCREASE)?;

    Ok(())
}
