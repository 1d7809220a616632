//! Word scrambling.
//!
//! A scramble is a shuffle of the word's characters that must not
//! reproduce the original order, compared ignoring case since that is how
//! guesses are checked. Shuffling is retried a bounded number of times;
//! after that the first adjacent pair of characters that differ ignoring
//! case is swapped, which always yields a new arrangement.

use smallvec::SmallVec;
use tracing::trace;

use super::rng::RandomSource;

/// Shuffles attempted before falling back to an adjacent swap.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 16;

/// Scramble `word` so the result differs from it.
///
/// Words with fewer than two characters that differ ignoring case have
/// no other arrangement and are returned unchanged.
pub fn scramble<R: RandomSource>(word: &str, rng: &mut R) -> String {
    let original: SmallVec<[char; 16]> = word.chars().collect();

    let swap_at = original
        .windows(2)
        .position(|pair| !pair[0].to_lowercase().eq(pair[1].to_lowercase()));
    let Some(swap_at) = swap_at else {
        // Adjacent chars all equal means every char is equal
        return word.to_string();
    };

    let mut chars = original.clone();
    for attempt in 0..MAX_SHUFFLE_ATTEMPTS {
        rng.shuffle(chars.as_mut_slice());
        if !same_ignoring_case(&chars, &original) {
            return chars.into_iter().collect();
        }
        trace!(word, attempt, "shuffle reproduced word, retrying");
    }

    chars = original;
    chars.swap(swap_at, swap_at + 1);
    chars.into_iter().collect()
}

fn same_ignoring_case(a: &[char], b: &[char]) -> bool {
    a.iter()
        .flat_map(|c| c.to_lowercase())
        .eq(b.iter().flat_map(|c| c.to_lowercase()))
}
