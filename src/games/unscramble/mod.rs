//! Single-player word unscrambling.
//!
//! The player sees a scrambled word, types a guess and checks it:
//! - A correct guess scores `score_increase` and moves to the next word
//! - A wrong guess sets the error flag and keeps the word for a retry
//! - Skipping moves on without scoring
//!
//! After `max_no_of_words` words the round is over.

mod game;

pub use game::{UnscrambleGame, UnscrambleGameBuilder};
