//! Word Masters
//!
//! A five-letter word guessing game: six attempts to find a hidden word,
//! with per-letter feedback after every accepted guess.
//!
//! # Quick Start
//!
//! ```rust
//! use word_masters::core::{Feedback, Word, score};
//!
//! let guess = Word::new("eerie").unwrap();
//! let target = Word::new("crepe").unwrap();
//!
//! let classification = score(&guess, &target);
//! assert_eq!(classification.letters()[4], Feedback::Correct);
//! assert_eq!(classification.to_string(), "pipic");
//! ```

// Core domain types
pub mod core;

// Round state machine and effect driver
pub mod game;

// Target words and guess validation
pub mod source;

// Embedded word list
pub mod wordlists;

// Runtime configuration and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
