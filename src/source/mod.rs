//! Word sources
//!
//! A word source supplies the target word for a round and decides whether a
//! guess is an accepted dictionary word. Both calls are asynchronous; the game
//! core never awaits them itself; it emits effects and receives the results
//! back as events.
//!
//! - [`HttpWordSource`]: the remote words API
//! - [`ListWordSource`]: an in-memory word list, for offline play and tests

mod error;
mod http;
mod list;

pub use error::SourceError;
pub use http::{DEFAULT_API_URL, HttpWordSource};
pub use list::ListWordSource;

use crate::core::Word;
use async_trait::async_trait;

/// Supplies target words and validates guesses
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Fetch the target word for a new round
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the source is unreachable or answers with
    /// something that is not a playable word.
    async fn fetch_target_word(&self) -> Result<Word, SourceError>;

    /// Check whether `word` is an accepted dictionary word
    ///
    /// `Ok(false)` is a normal negative answer, not an error.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the source could not be asked.
    async fn validate_word(&self, word: &str) -> Result<bool, SourceError>;
}
