//! Commands a presentation layer sends to the game.
//!
//! Each command maps onto one engine method; `UnscrambleGame::apply`
//! dispatches them so scripted sessions can be replayed from a list.

use serde::{Deserialize, Serialize};

/// A player command.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Replace the pending guess text.
    UpdateGuess(String),
    /// Evaluate the pending guess.
    CheckGuess,
    /// Give up on the current word.
    SkipWord,
    /// Start a new round.
    Reset,
}

/// Result of evaluating a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Matched the target; score was awarded.
    Correct,
    /// Did not match; the word stays for another try.
    Wrong,
    /// Round already complete; nothing changed.
    Ignored,
}

impl GuessOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        self == GuessOutcome::Correct
    }
}
