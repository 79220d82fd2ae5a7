//! Loading custom word lists for offline play
//!
//! A list file holds one word per line. Lines starting with `#` are comments.
//! Words are lowercased; anything that is not a playable word is skipped, and
//! repeated words are kept once so every target is equally likely.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Parse the contents of a word list file, keeping first-seen order
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(err) => {
                skipped += 1;
                debug!(line, %err, "skipping word list entry");
                None
            }
        })
        .filter(|word| seen.insert(word.text().to_string()))
        .collect();

    if skipped > 0 {
        warn!(skipped, kept = words.len(), "word list had unplayable entries");
    }
    words
}

/// Load a word list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_masters::wordlists::loader::load_from_file;
///
/// let words = load_from_file("my-words.txt").unwrap();
/// println!("{} playable words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let words = parse_words(&fs::read_to_string(path)?);
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Playable words from a static list such as [`WORDS`](super::WORDS)
///
/// # Examples
/// ```
/// use word_masters::wordlists::loader::words_from_slice;
/// use word_masters::wordlists::WORDS;
///
/// assert_eq!(words_from_slice(WORDS).len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
