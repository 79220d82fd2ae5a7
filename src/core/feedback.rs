//! Per-letter feedback for a guess
//!
//! Each letter of a guess is classified against the target as one of:
//! - Correct: right letter, right position
//! - Present: letter is in the target, but elsewhere
//! - Absent: letter is not in the target (or every copy is already accounted for)

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
///
/// Ordered by strength so the best known state of a letter is its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Single-character code: `c` correct, `p` present, `i` absent
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'c',
            Self::Present => 'p',
            Self::Absent => 'i',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, aligned by index to the guess letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification([Feedback; WORD_LENGTH]);

impl Classification {
    /// All letters correct
    pub const SOLVED: Self = Self([Feedback::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(letters: [Feedback; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    /// Classify `guess` against `target`
    ///
    /// Duplicate letters are handled with a two-pass multiset discipline, so a
    /// guess letter is only marked correct or present while the target still
    /// has an unclaimed copy of it.
    ///
    /// # Algorithm
    /// 1. Count every letter of the target
    /// 2. First pass: mark exact position matches correct and consume their copy
    /// 3. Second pass, left to right over the rest: present if a copy remains
    ///    (consuming it), absent otherwise
    ///
    /// # Examples
    /// ```
    /// use word_masters::core::{Classification, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    ///
    /// // C R absent, A correct, N absent, E correct
    /// assert_eq!(Classification::score(&guess, &target).to_string(), "iicic");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut remaining = target.char_counts();
        let guess_chars = guess.chars();
        let target_chars = target.chars();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess_chars.iter().zip(target_chars).enumerate() {
            if g == t {
                result[i] = Feedback::Correct;
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        for (i, &g) in guess_chars.iter().enumerate() {
            if result[i] == Feedback::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                result[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in &self.0 {
            write!(f, "{}", feedback.code())?;
        }
        Ok(())
    }
}

/// Classify `guess` against `target`; see [`Classification::score`]
#[must_use]
pub fn score(guess: &Word, target: &Word) -> Classification {
    Classification::score(guess, target)
}
