//! Game configuration.
//!
//! A round is configured by three values:
//! - `max_no_of_words`: how many words a round presents
//! - `score_increase`: points awarded per correct answer
//! - `words`: the candidate pool
//!
//! Configs are validated once, when a game is built.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::words::WordList;

/// Default round length.
pub const MAX_NO_OF_WORDS: u32 = 10;

/// Default points per correct answer.
pub const SCORE_INCREASE: u32 = 20;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Words presented per round (at least 1).
    pub max_no_of_words: u32,

    /// Score delta for each correct guess.
    pub score_increase: u32,

    /// Candidate pool. Must hold at least `max_no_of_words` words.
    pub words: WordList,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_no_of_words: MAX_NO_OF_WORDS,
            score_increase: SCORE_INCREASE,
            words: WordList::default(),
        }
    }
}

impl GameConfig {
    /// Set the round length.
    #[must_use]
    pub fn with_max_words(mut self, count: u32) -> Self {
        self.max_no_of_words = count;
        self
    }

    /// Set the per-correct-answer score delta.
    #[must_use]
    pub fn with_score_increase(mut self, delta: u32) -> Self {
        self.score_increase = delta;
        self
    }

    /// Replace the word pool.
    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words = WordList::new(words);
        self
    }

    /// Check that a round can be played to completion with this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_no_of_words == 0 {
            return Err(ConfigError::ZeroRoundLength);
        }

        let needed = self.max_no_of_words as usize;
        if self.words.len() < needed {
            return Err(ConfigError::NotEnoughWords {
                needed,
                available: self.words.len(),
            });
        }

        if let Some(word) = self.words.find_unscramblable() {
            return Err(ConfigError::Unscramblable(word.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_no_of_words, 10);
        assert_eq!(config.score_increase, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default()
            .with_max_words(3)
            .with_score_increase(5)
            .with_words(["one", "two", "three"]);

        assert_eq!(config.max_no_of_words, 3);
        assert_eq!(config.score_increase, 5);
        assert_eq!(config.words.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_round_length() {
        let config = GameConfig::default().with_max_words(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroRoundLength));
    }

    #[test]
    fn test_not_enough_words() {
        // Duplicates collapse, leaving two distinct words
        let config = GameConfig::default()
            .with_max_words(3)
            .with_words(["cat", "dog", "cat"]);

        assert_eq!(
            config.validate(),
            Err(ConfigError::NotEnoughWords { needed: 3, available: 2 })
        );
    }

    #[test]
    fn test_unscramblable_word() {
        let config = GameConfig::default()
            .with_max_words(2)
            .with_words(["cat", "a", "dog"]);

        assert_eq!(
            config.validate(),
            Err(ConfigError::Unscramblable("a".to_string()))
        );
    }

    #[test]
    fn test_case_variants_do_not_fill_a_round() {
        let config = GameConfig::default()
            .with_max_words(2)
            .with_words(["Cat", "cat"]);

        assert_eq!(
            config.validate(),
            Err(ConfigError::NotEnoughWords { needed: 2, available: 1 })
        );
    }

    #[test]
    fn test_case_only_word_is_unscramblable() {
        let config = GameConfig::default()
            .with_max_words(1)
            .with_words(["Aa"]);

        assert_eq!(
            config.validate(),
            Err(ConfigError::Unscramblable("Aa".to_string()))
        );
    }

    #[test]
    fn test_serde_partial_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "max_no_of_words": 2, "words": ["ab", "cd"] }"#).unwrap();

        assert_eq!(config.max_no_of_words, 2);
        assert_eq!(config.score_increase, SCORE_INCREASE);
        assert_eq!(config.words.len(), 2);
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::NotEnoughWords { needed: 10, available: 4 };
        assert_eq!(
            err.to_string(),
            "word list has 4 distinct words but a round needs 10"
        );
    }
}
