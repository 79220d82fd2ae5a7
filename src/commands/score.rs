//! One-shot scoring of a guess against a target

use crate::core::{Classification, Word, WordError};

/// Result of scoring a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub classification: Classification,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns `WordError` if either argument is not a 5-letter word.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let classification = Classification::score(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        classification,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_case_insensitively() {
        let result = score_words("EERIE", "crepe").unwrap();
        assert_eq!(result.guess.text(), "eerie");
        assert_eq!(result.classification.to_string(), "pipic");
    }

    #[test]
    fn rejects_bad_words() {
        assert_eq!(
            score_words("cran", "crane"),
            Err(WordError::InvalidLength(4))
        );
        assert_eq!(
            score_words("crane", "cr4ne"),
            Err(WordError::InvalidCharacters)
        );
    }
}
