//! Configuration errors.
//!
//! Game commands never fail; only building a game from a `GameConfig` can.

use thiserror::Error;

/// Reasons a `GameConfig` cannot start a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A round must present at least one word.
    #[error("round length must be at least 1")]
    ZeroRoundLength,

    /// The word pool cannot fill a round without repeating.
    #[error("word list has {available} distinct words but a round needs {needed}")]
    NotEnoughWords { needed: usize, available: usize },

    /// Every arrangement of the word's characters is the word itself.
    #[error("word {0:?} cannot be scrambled (needs two distinct characters)")]
    Unscramblable(String),
}
