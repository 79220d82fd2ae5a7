//! Word source errors.

use crate::core::WordError;
use thiserror::Error;

/// Failure to get an answer from a word source.
///
/// Every variant means the source is unavailable for now; none of them is a
/// "word not accepted" answer, which is `Ok(false)` from
/// [`WordSource::validate_word`](super::WordSource::validate_word).
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request could not be sent or the response could not be read.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The source answered with a non-success HTTP status.
    #[error("Word service responded with status {0}")]
    Status(u16),

    /// The source answered, but not with a playable word.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The word list has no words to pick a target from.
    #[error("Word list is empty")]
    EmptyWordList,

    /// Reading a word list from disk failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<WordError> for SourceError {
    fn from(err: WordError) -> Self {
        Self::Malformed(err.to_string())
    }
}
