//! Offline word source backed by a word list

use super::{SourceError, WordSource};
use crate::core::Word;
use crate::wordlists::{WORDS, loader};
use async_trait::async_trait;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::debug;

/// Word source that picks targets from, and validates against, a fixed list
#[derive(Debug, Clone)]
pub struct ListWordSource {
    words: Vec<Word>,
    dictionary: FxHashSet<String>,
    fixed_target: Option<Word>,
}

impl ListWordSource {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let dictionary = words.iter().map(|w| w.text().to_string()).collect();
        Self {
            words,
            dictionary,
            fixed_target: None,
        }
    }

    /// Source over the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Source over a word list file, one word per line
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        Ok(Self::new(loader::load_from_file(path)?))
    }

    /// Always play `target` instead of a random pick; `target` is also accepted as a guess
    #[must_use]
    pub fn with_target(mut self, target: Word) -> Self {
        self.dictionary.insert(target.text().to_string());
        self.fixed_target = Some(target);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[async_trait]
impl WordSource for ListWordSource {
    async fn fetch_target_word(&self) -> Result<Word, SourceError> {
        if let Some(target) = &self.fixed_target {
            return Ok(target.clone());
        }

        let target = self
            .words
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(SourceError::EmptyWordList)?;
        debug!(candidates = self.words.len(), "picked target from word list");
        Ok(target)
    }

    async fn validate_word(&self, word: &str) -> Result<bool, SourceError> {
        Ok(self.dictionary.contains(&word.to_lowercase()))
    }
}
