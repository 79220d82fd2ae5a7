//! Display functions for the line-based commands

use super::formatters::{board_rows, keyboard_rows, scored_row};
use crate::core::{Classification, Word};
use crate::game::{Notice, Snapshot, Status};
use colored::Colorize;

/// Print the board, the keyboard hints and the round status
pub fn print_board(snapshot: &Snapshot) {
    println!("\n{}", "─".repeat(40).cyan());
    for row in board_rows(snapshot) {
        println!("  {row}");
    }
    println!();
    for row in keyboard_rows(&snapshot.letter_hints()) {
        println!("  {row}");
    }
    println!("{}", "─".repeat(40).cyan());

    match snapshot.status {
        Status::Active => println!(
            "Attempts remaining: {}",
            snapshot.attempts_remaining.to_string().bright_yellow()
        ),
        Status::Starting => println!("{}", "Waiting for a target word...".bright_black()),
        Status::Won | Status::Lost => {}
    }
}

/// Print a notice, colored by kind
pub fn print_notice(notice: &Notice) {
    let text = notice.to_string();
    match notice {
        Notice::Won { .. } => println!("\n{}", format!("🎉 {text}").green().bold()),
        Notice::Lost { .. } => println!("\n{}", text.red().bold()),
        Notice::InvalidWord(_) | Notice::SourceUnavailable(_) => {
            println!("{}", format!("❌ {text}").red());
        }
    }
}

/// Print a guess scored against a target
pub fn print_scored(guess: &Word, target: &Word, classification: Classification) {
    println!(
        "{} vs {}",
        guess.text().to_uppercase().bright_white().bold(),
        target.text().to_uppercase().bright_white().bold()
    );
    println!("  {}", scored_row(guess.text(), classification));
    println!("  {}  {}", classification.to_emoji(), classification);
}
