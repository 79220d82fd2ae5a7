//! TUI rendering with ratatui
//!
//! Everything is drawn from a [`Snapshot`] of the round, never from the round itself.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, TOTAL_ATTEMPTS, WORD_LENGTH};
use crate::game::{Snapshot, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let snapshot = app.round.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                         // Header
            Constraint::Length(TOTAL_ATTEMPTS as u16 + 2), // Board
            Constraint::Length(3),                         // Banner
            Constraint::Length(5),                         // Keyboard
            Constraint::Min(4),                            // Messages
            Constraint::Length(1),                         // Status bar
        ])
        .split(f.area());

    render_header(f, &snapshot, chunks[0]);
    render_board(f, &snapshot, chunks[1]);
    render_banner(f, &snapshot, app.spinner_frame, chunks[2]);
    render_keyboard(f, &snapshot.letter_hints(), chunks[3]);
    render_messages(f, app, chunks[4]);
    render_status(f, &snapshot, chunks[5]);
}

fn render_header(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let color = if snapshot.status == Status::Won {
        Color::Green
    } else {
        Color::Cyan
    };

    let header = Paragraph::new("WORD MASTERS")
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(header, area);
}

fn feedback_style(feedback: Option<Feedback>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match feedback {
        Some(Feedback::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(Feedback::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Feedback::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

/// One row of letter boxes; missing letters render as empty boxes
fn board_line(letters: &[(char, Option<Feedback>)], is_current: bool) -> Line<'static> {
    let mut spans = vec![Span::raw(if is_current { "▶ " } else { "  " })];

    for i in 0..WORD_LENGTH {
        let (text, style) = match letters.get(i) {
            Some(&(ch, feedback)) => (
                format!("[{}]", ch.to_ascii_uppercase()),
                feedback_style(feedback),
            ),
            None => ("[ ]".to_string(), Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let mut lines: Vec<Line> = snapshot
        .guesses
        .iter()
        .map(|guess| {
            let letters: Vec<_> = guess
                .word
                .text()
                .chars()
                .zip(guess.classification.letters().iter().map(|&fb| Some(fb)))
                .collect();
            board_line(&letters, false)
        })
        .collect();

    if lines.len() < TOTAL_ATTEMPTS && snapshot.status == Status::Active {
        let letters: Vec<_> = snapshot.current.chars().map(|c| (c, None)).collect();
        lines.push(board_line(&letters, true));
    }
    while lines.len() < TOTAL_ATTEMPTS {
        lines.push(board_line(&[], false));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Board "));
    f.render_widget(board, area);
}

fn render_banner(f: &mut Frame, snapshot: &Snapshot, spinner_frame: usize, area: Rect) {
    let (text, color) = match snapshot.status {
        Status::Won => ("YOU WON!".to_string(), Color::Green),
        Status::Lost => (
            format!(
                "YOU LOSE! The word was {}",
                snapshot.target.as_deref().unwrap_or_default().to_uppercase()
            ),
            Color::Red,
        ),
        Status::Starting if snapshot.busy => (
            format!("{} Fetching a word...", SPINNER[spinner_frame % SPINNER.len()]),
            Color::Yellow,
        ),
        Status::Starting => ("Press Enter to start".to_string(), Color::Yellow),
        Status::Active if snapshot.busy => (
            format!("{} Checking word...", SPINNER[spinner_frame % SPINNER.len()]),
            Color::Yellow,
        ),
        Status::Active => (String::new(), Color::White),
    };

    let banner = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(banner, area);
}

fn render_keyboard(f: &mut Frame, hints: &FxHashMap<u8, Feedback>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|b| {
                    let style = match hints.get(&b) {
                        Some(&feedback) => feedback_style(Some(feedback)),
                        None => Style::default(),
                    };
                    Span::styled(format!(" {} ", char::from(b).to_ascii_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Letters "));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let attempts = Paragraph::new(format!(
        "Attempts left: {}/{TOTAL_ATTEMPTS}",
        snapshot.attempts_remaining
    ))
    .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let help_text = if snapshot.status.is_over() {
        "q/Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{Event, Key};
    use crate::source::ListWordSource;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn started_app() -> App {
        let mut app = App::new(Arc::new(ListWordSource::new(Vec::new())));
        app.apply(Event::Start);
        app.apply(Event::TargetFetched(Ok(Word::new("crane").unwrap())));
        app
    }

    fn play(app: &mut App, word: &str) {
        for c in word.chars() {
            app.apply(Key::Letter(c).into());
        }
        app.apply(Key::Enter.into());
        app.apply(Event::ValidationFinished {
            word: word.to_string(),
            result: Ok(true),
        });
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shows_typed_letters() {
        let mut app = started_app();
        for c in "sla".chars() {
            app.apply(Key::Letter(c).into());
        }
        let screen = screen(&app);
        assert!(screen.contains("[S] [L] [A] [ ]"));
        assert!(screen.contains("Attempts left: 6/6"));
    }

    #[test]
    fn shows_busy_indicator() {
        let mut app = started_app();
        for c in "slate".chars() {
            app.apply(Key::Letter(c).into());
        }
        app.apply(Key::Enter.into());
        assert!(screen(&app).contains("Checking word..."));
    }

    #[test]
    fn shows_win_banner() {
        let mut app = started_app();
        play(&mut app, "crane");
        let screen = screen(&app);
        assert!(screen.contains("YOU WON!"));
        assert!(screen.contains("q/Esc: Quit"));
    }

    #[test]
    fn shows_lose_banner_with_target() {
        let mut app = started_app();
        for _ in 0..TOTAL_ATTEMPTS {
            play(&mut app, "slate");
        }
        assert!(screen(&app).contains("YOU LOSE! The word was CRANE"));
    }

    #[test]
    fn target_is_not_shown_while_playing() {
        let mut app = started_app();
        play(&mut app, "slate");
        assert!(!screen(&app).contains("CRANE"));
    }
}
