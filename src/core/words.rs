//! Candidate word pool.
//!
//! A `WordList` is built once and never changes. Entries are trimmed and
//! empty entries are dropped. Guesses are checked without regard to case,
//! so entries differing only in case count as duplicates; the first
//! spelling is kept. Distinct indices always mean distinct answers.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Words shipped with the crate, used when no pool is configured.
pub const DEFAULT_WORDS: &[&str] = &[
    "animal", "auto", "anecdote", "alphabet", "all", "awesome", "arise",
    "balloon", "basket", "bench", "best", "birthday", "book", "briefcase",
    "camera", "camping", "candle", "cat", "cauliflower", "chat", "children",
    "class", "classic", "classroom", "coffee", "colorful", "cookie", "creative",
    "cruise", "dance", "daytime", "dinosaur", "doorknob", "dine", "dream",
    "dusk", "eating", "elephant", "emerald", "eerie", "electric", "finish",
    "flowers", "follow", "fox", "frame", "free", "frequent", "funnel", "green",
    "guitar", "grocery", "glass", "great", "giggle", "haircut", "half",
    "homemade", "happen", "honey", "hurry", "hundred", "ice", "igloo",
    "invest", "invite", "icon", "introduce", "joke", "jovial", "journal",
    "jump", "join", "kangaroo", "keyboard", "kitchen", "koala", "kind",
    "kaleidoscope", "landscape", "late", "laugh", "learning", "lemon",
    "letter", "lily", "magazine", "marine", "marshmallow", "maze", "meditate",
    "melody", "minute", "monument", "moon", "motorcycle", "mountain", "music",
    "north", "nose", "night", "name", "never", "negotiate", "number",
    "opposite", "octopus", "oak", "order", "open", "polar", "pack", "painting",
    "person", "picnic", "pillow", "pizza", "podcast", "presentation", "puppy",
    "puzzle", "recipe", "release", "restaurant", "revolution", "rainbow",
    "raccoon", "shelf", "surf", "sister", "sky", "science", "shirt", "stamp",
    "sunny", "sun", "twig", "twins", "team", "tutorial", "tree", "umbrella",
    "unicorn", "umpire", "under", "up", "unique", "vacation", "valley",
    "value", "vanilla", "vase", "violin", "virtual", "vivid", "volcano",
    "walrus", "wand", "water", "wave", "wallet", "whale", "window", "wind",
    "winter", "wolf", "woman", "world", "xylophone", "yard", "yellow", "yoga",
    "yogurt", "zebra", "zero", "zoo",
];

/// Immutable, deduplicated pool of candidate words.
///
/// Backed by `im::Vector` so cloning a config or restarting a round
/// shares the pool instead of copying it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct WordList {
    words: Vector<String>,
}

impl WordList {
    /// Build a pool from any sequence of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut out = Vector::new();

        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() || !seen.insert(word.to_lowercase()) {
                continue;
            }
            out.push_back(word.to_string());
        }

        Self { words: out }
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Iterate words in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// First word that no permutation can disguise, if any.
    #[must_use]
    pub fn find_unscramblable(&self) -> Option<&str> {
        self.iter().find(|w| !can_scramble(w))
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS.iter().copied())
    }
}

impl From<Vec<String>> for WordList {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.words.into_iter().collect()
    }
}

/// True if the word has at least two characters that differ ignoring case.
#[must_use]
pub fn can_scramble(word: &str) -> bool {
    let folded = word.to_lowercase();
    let mut chars = folded.chars();
    match chars.next() {
        Some(first) => chars.any(|c| c != first),
        None => false,
    }
}
