//! Game state: the public snapshot and the private session.
//!
//! ## GameState
//!
//! What a presentation layer may observe:
//! - The scrambled word and its 1-based position in the round
//! - Score
//! - Wrong-guess and game-over flags
//!
//! Snapshots are values. Transitions build a new snapshot from the old one
//! rather than editing it.
//!
//! ## Session
//!
//! What the player must not see: the target word, the pending guess and
//! the indices already drawn this round.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Lifecycle of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting guesses.
    InProgress,
    /// All words presented. Terminal until reset.
    Complete,
}

/// Observable snapshot of a round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Permutation of the target word, never equal to it.
    pub current_scrambled_word: String,

    /// 1-based position of the current word in the round.
    pub current_word_count: u32,

    /// Accumulated score.
    pub score: u32,

    /// Set by a wrong evaluation, cleared by the next evaluation or advancement.
    pub is_guessed_word_wrong: bool,

    /// True once the last word has been answered or skipped.
    pub is_game_over: bool,
}

impl GameState {
    /// Snapshot for the first word of a fresh round.
    #[must_use]
    pub fn first_word(scrambled: String) -> Self {
        Self {
            current_scrambled_word: scrambled,
            current_word_count: 1,
            score: 0,
            is_guessed_word_wrong: false,
            is_game_over: false,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_game_over {
            Phase::Complete
        } else {
            Phase::InProgress
        }
    }

    /// Snapshot after a wrong evaluation.
    #[must_use]
    pub fn with_wrong_guess(&self) -> Self {
        Self {
            is_guessed_word_wrong: true,
            ..self.clone()
        }
    }

    /// Snapshot presenting the next word with the given score.
    #[must_use]
    pub fn with_next_word(&self, scrambled: String, score: u32) -> Self {
        Self {
            current_scrambled_word: scrambled,
            current_word_count: self.current_word_count + 1,
            score,
            is_guessed_word_wrong: false,
            is_game_over: false,
        }
    }

    /// Snapshot ending the round with the given score.
    ///
    /// The last scrambled word and count are kept for display.
    #[must_use]
    pub fn with_game_over(&self, score: u32) -> Self {
        Self {
            score,
            is_guessed_word_wrong: false,
            is_game_over: true,
            ..self.clone()
        }
    }
}

/// Private per-round bookkeeping.
#[derive(Clone, Debug, Default)]
pub(crate) struct Session {
    /// Unscrambled word currently presented.
    pub target: String,

    /// Guess text as last entered by the player.
    pub user_guess: String,

    /// Word-pool indices presented this round.
    pub used: FxHashSet<usize>,
}

impl Session {
    /// Record `index` as presented and make `word` the target.
    pub fn present(&mut self, index: usize, word: &str) {
        self.used.insert(index);
        self.target = word.to_string();
        self.user_guess.clear();
    }

    /// Does the pending guess match the target?
    ///
    /// Case-insensitive after trimming surrounding whitespace.
    #[must_use]
    pub fn guess_matches(&self) -> bool {
        self.user_guess.trim().to_lowercase() == self.target.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_word() {
        let state = GameState::first_word("tca".to_string());
        assert_eq!(state.current_word_count, 1);
        assert_eq!(state.score, 0);
        assert!(!state.is_guessed_word_wrong);
        assert!(!state.is_game_over);
        assert_eq!(state.phase(), Phase::InProgress);
    }

    #[test]
    fn test_transitions_leave_original_untouched() {
        let first = GameState::first_word("tca".to_string());

        let wrong = first.with_wrong_guess();
        assert!(wrong.is_guessed_word_wrong);
        assert!(!first.is_guessed_word_wrong);

        let next = wrong.with_next_word("godo".to_string(), 20);
        assert_eq!(next.current_word_count, 2);
        assert_eq!(next.score, 20);
        assert!(!next.is_guessed_word_wrong);
        assert_eq!(first.current_word_count, 1);
    }

    #[test]
    fn test_game_over_keeps_count() {
        let state = GameState::first_word("tca".to_string())
            .with_wrong_guess()
            .with_game_over(40);

        assert_eq!(state.current_word_count, 1);
        assert_eq!(state.score, 40);
        assert!(!state.is_guessed_word_wrong);
        assert_eq!(state.phase(), Phase::Complete);
    }

    #[test]
    fn test_session_guess_matching() {
        let mut session = Session::default();
        session.present(3, "Cat");
        assert!(session.used.contains(&3));

        session.user_guess = "  cAT\n".to_string();
        assert!(session.guess_matches());

        session.user_guess = "ca t".to_string();
        assert!(!session.guess_matches());

        session.user_guess.clear();
        assert!(!session.guess_matches());
    }

    #[test]
    fn test_present_clears_guess() {
        let mut session = Session::default();
        session.user_guess = "old".to_string();
        session.present(0, "new");
        assert!(session.user_guess.is_empty());
        assert_eq!(session.target, "new");
    }

    #[test]
    fn test_snapshot_serde() {
        let state = GameState::first_word("tca".to_string());
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
