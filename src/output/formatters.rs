//! Formatting utilities for terminal output

use crate::core::{Classification, Feedback, TOTAL_ATTEMPTS, WORD_LENGTH};
use crate::game::Snapshot;
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A single letter box, colored by its feedback
#[must_use]
pub fn tile(letter: char, feedback: Option<Feedback>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match feedback {
        Some(Feedback::Correct) => text.black().on_green().bold(),
        Some(Feedback::Present) => text.black().on_yellow().bold(),
        Some(Feedback::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A scored word as a row of tiles
#[must_use]
pub fn scored_row(word: &str, classification: Classification) -> String {
    word.chars()
        .zip(classification.letters())
        .map(|(ch, &feedback)| tile(ch, Some(feedback)).to_string())
        .collect()
}

/// An unscored row: typed letters, then placeholders up to the word length
#[must_use]
pub fn pending_row(text: &str) -> String {
    let mut row: String = text.chars().map(|ch| tile(ch, None).to_string()).collect();
    for _ in text.chars().count()..WORD_LENGTH {
        row.push_str(&" _ ".dimmed().to_string());
    }
    row
}

/// Every row of the board: guesses, then the current guess, then empty rows
#[must_use]
pub fn board_rows(snapshot: &Snapshot) -> Vec<String> {
    let mut rows: Vec<String> = snapshot
        .guesses
        .iter()
        .map(|g| scored_row(g.word.text(), g.classification))
        .collect();

    if rows.len() < TOTAL_ATTEMPTS && !snapshot.status.is_over() {
        rows.push(pending_row(&snapshot.current));
    }
    while rows.len() < TOTAL_ATTEMPTS {
        rows.push(pending_row(""));
    }

    rows
}

/// The alphabet in keyboard layout, colored by best known feedback
#[must_use]
pub fn keyboard_rows(hints: &FxHashMap<u8, Feedback>) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.bytes()
                .map(|b| {
                    let letter = char::from(b).to_ascii_uppercase().to_string();
                    match hints.get(&b) {
                        Some(Feedback::Correct) => letter.green().bold().to_string(),
                        Some(Feedback::Present) => letter.yellow().bold().to_string(),
                        Some(Feedback::Absent) => letter.bright_black().to_string(),
                        None => letter,
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
