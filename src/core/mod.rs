//! Core types: configuration, word pool, RNG, scrambling, state, commands.
//!
//! Nothing in here knows the order in which a round unfolds; that lives in
//! `games::unscramble`.

pub mod command;
pub mod config;
pub mod error;
pub mod rng;
pub mod scramble;
pub mod state;
pub mod words;

pub use command::{Command, GuessOutcome};
pub use config::{GameConfig, MAX_NO_OF_WORDS, SCORE_INCREASE};
pub use error::ConfigError;
pub use rng::{GameRng, RandomSource};
pub use scramble::scramble;
pub use state::{GameState, Phase};
pub use words::{can_scramble, WordList, DEFAULT_WORDS};

pub(crate) use state::Session;
