//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is a whole guess.

use crate::core::WORD_LENGTH;
use crate::game::{Event, Key, RoundState, Status, dispatch};
use crate::output::{print_board, print_notice};
use crate::source::WordSource;
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub async fn run_simple(source: Arc<dyn WordSource>) -> Result<()> {
    println!("\n╔════════════════════════════════════════╗");
    println!("║        Word Masters - Simple Mode      ║");
    println!("╚════════════════════════════════════════╝\n");
    println!("Guess the {WORD_LENGTH}-letter word. Type 'quit' to exit.\n");

    let mut round = RoundState::new();

    while round.status() == Status::Starting {
        let notices = with_spinner(
            "Fetching a word...",
            dispatch(&mut round, source.as_ref(), Event::Start),
        )
        .await;
        notices.iter().for_each(print_notice);

        if round.status() == Status::Starting {
            let input = get_user_input("Press Enter to retry, or type 'quit'")?;
            if is_quit(&input) {
                return Ok(());
            }
        }
    }

    print_board(&round.snapshot());

    while !round.status().is_over() {
        let input = get_user_input("Guess")?;
        if is_quit(&input) {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        let Some(events) = line_events(round.current_guess(), &input) else {
            println!(
                "{}",
                format!("Guesses are exactly {WORD_LENGTH} letters.").yellow()
            );
            continue;
        };

        let mut notices = Vec::new();
        for event in events {
            let submit = event == Event::Key(Key::Enter);
            let fut = dispatch(&mut round, source.as_ref(), event);
            notices.extend(if submit {
                with_spinner("Checking word...", fut).await
            } else {
                fut.await
            });
        }

        print_board(&round.snapshot());
        notices.iter().for_each(print_notice);
    }

    info!(status = ?round.status(), attempts = round.guesses().len(), "simple round finished");
    Ok(())
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit")
}

/// Key events that replace the current guess with `line` and submit it
///
/// Returns `None` if the line is not a whole guess.
fn line_events(current: &str, line: &str) -> Option<Vec<Event>> {
    let line = line.trim();
    if line.chars().count() != WORD_LENGTH || !line.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let clear = current.chars().map(|_| Event::Key(Key::Backspace));
    let letters = line.chars().map(|c| Event::Key(Key::Letter(c)));
    Some(
        clear
            .chain(letters)
            .chain(std::iter::once(Event::Key(Key::Enter)))
            .collect(),
    )
}

/// Await `fut` while a spinner runs
async fn with_spinner<F: Future>(message: &'static str, fut: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let output = fut.await;
    spinner.finish_and_clear();
    output
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    Ok(input.trim().to_string())
}
