//! Inputs to and outputs from the round state machine.
//!
//! Events come from two places: the presentation layer (key presses, round
//! start) and the word source (completions of the calls requested through
//! [`Effect`]s). Effects are the only way the state machine talks to the
//! outside world.

use crate::core::Word;
use std::fmt;

/// Raw key press raised by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Any character key. Non-letters are ignored by the state machine.
    Letter(char),
    Backspace,
    Enter,
}

/// Something that happened, to be applied to a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Begin the round, or retry after the target could not be fetched.
    Start,

    /// A key press from the player.
    Key(Key),

    /// The word source answered the target word request.
    ///
    /// The error string describes why the source was unavailable.
    TargetFetched(Result<Word, String>),

    /// The word source answered a validation request for `word`.
    ValidationFinished {
        word: String,
        result: Result<bool, String>,
    },
}

impl From<Key> for Event {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

/// Side effect requested by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the word source for a target word; answer with [`Event::TargetFetched`].
    FetchTarget,

    /// Ask the word source whether the word is accepted; answer with
    /// [`Event::ValidationFinished`].
    ValidateWord(String),

    /// Show a notice to the player.
    Notify(Notice),
}

/// User-visible outcome of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The word source could not be reached. Nothing was recorded.
    SourceUnavailable(String),

    /// The submitted guess is not an accepted word. Not counted as an attempt.
    InvalidWord(String),

    Won { attempts: usize },

    Lost { target: String },
}

impl Notice {
    /// Whether the notice reports a problem rather than progress.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::SourceUnavailable(_) | Self::InvalidWord(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable(reason) => {
                write!(f, "Word service unavailable ({reason}). Try again.")
            }
            Self::InvalidWord(word) => write!(f, "{} is not a valid word.", word.to_uppercase()),
            Self::Won { attempts: 1 } => write!(f, "You win! Solved in 1 guess."),
            Self::Won { attempts } => write!(f, "You win! Solved in {attempts} guesses."),
            Self::Lost { target } => {
                write!(f, "You lose! The word was {}.", target.to_uppercase())
            }
        }
    }
}
