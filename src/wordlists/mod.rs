//! Word lists for offline play
//!
//! Provides the embedded word list compiled into the binary and a loader for
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
