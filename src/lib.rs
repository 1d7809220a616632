//! # unscramble
//!
//! A single-player word-unscrambling game engine.
//!
//! ## Design Principles
//!
//! 1. **Owned state**: A game is an ordinary value. There is no global
//!    session; presentation layers hold an `UnscrambleGame` and call into it.
//!
//! 2. **Snapshots, not mutation**: Every command installs a fresh
//!    `GameState` behind an `Arc`, so observers never see a half-applied
//!    change.
//!
//! 3. **Injectable randomness**: Word picks and scrambles go through
//!    `RandomSource`. `GameRng` is seedable, so a seed replays a round.
//!
//! ## Example
//!
//! ```
//! use unscramble::{GuessOutcome, UnscrambleGameBuilder};
//!
//! let mut game = UnscrambleGameBuilder::new()
//!     .max_words(2)
//!     .words(["rust", "crab", "ferris"])
//!     .build(42)
//!     .unwrap();
//!
//! assert_eq!(game.state().current_word_count, 1);
//!
//! game.update_user_guess("not it");
//! assert_eq!(game.check_user_guess(), GuessOutcome::Wrong);
//! assert!(game.state().is_guessed_word_wrong);
//!
//! game.skip_word();
//! game.skip_word();
//! assert!(game.state().is_game_over);
//! ```
//!
//! ## Modules
//!
//! - `core`: Configuration, word pool, RNG, scrambling, state, commands
//! - `games`: The unscramble state machine
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Command, ConfigError, GameConfig, GameRng, GameState, GuessOutcome, Phase, RandomSource,
    WordList, DEFAULT_WORDS, MAX_NO_OF_WORDS, SCORE_INCREASE,
};

pub use crate::games::unscramble::{UnscrambleGame, UnscrambleGameBuilder};
