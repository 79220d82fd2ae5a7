//! Core domain types for the game
//!
//! Words and the per-letter feedback they produce. Everything here is pure:
//! no I/O, no async, no logging.

mod feedback;
mod word;

pub use feedback::{Classification, Feedback, score};
pub use word::{Word, WordError};

/// Number of letters in every word of a round
pub const WORD_LENGTH: usize = 5;

/// Number of validated guesses the player gets before the round is lost
pub const TOTAL_ATTEMPTS: usize = 6;
