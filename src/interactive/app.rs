//! TUI application state and event loop

use crate::game::{Effect, Event, Key, Notice, RoundState, Status, spawn_request};
use crate::source::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::{Arc, mpsc};
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for a key before redrawing (drives the spinner)
const TICK: Duration = Duration::from_millis(80);

/// Maximum number of messages kept for the messages panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub round: RoundState,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// Advances every tick while a request is pending
    pub spinner_frame: usize,
    source: Arc<dyn WordSource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What a key press means to the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    Game(Event),
    Ignore,
}

impl App {
    #[must_use]
    pub fn new(source: Arc<dyn WordSource>) -> Self {
        Self {
            round: RoundState::new(),
            messages: vec![Message {
                text: "Type a 5-letter word and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            spinner_frame: 0,
            source,
        }
    }

    /// Apply an event to the round
    ///
    /// Notices are turned into messages; request effects are returned for
    /// the caller to run.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        let mut requests = Vec::new();
        for effect in self.round.handle_event(event) {
            match effect {
                Effect::Notify(notice) => self.notify(&notice),
                request => requests.push(request),
            }
        }
        requests
    }

    /// Apply an event and start any requests it needs in the background
    pub fn dispatch(&mut self, event: Event, tx: &mpsc::Sender<Event>) {
        for request in self.apply(event) {
            spawn_request(self.source.clone(), request, tx.clone());
        }
    }

    fn notify(&mut self, notice: &Notice) {
        let style = match notice {
            Notice::Won { .. } => MessageStyle::Success,
            Notice::SourceUnavailable(_) if self.round.status() == Status::Starting => {
                self.add_message(&notice.to_string(), MessageStyle::Error);
                self.add_message("Press Enter to retry.", MessageStyle::Info);
                return;
            }
            _ if notice.is_error() => MessageStyle::Error,
            _ => MessageStyle::Info,
        };
        self.add_message(&notice.to_string(), style);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Translate a raw key press into an application input
#[must_use]
pub fn translate_key(key: KeyEvent, status: Status) -> Input {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Esc => Input::Quit,
        KeyCode::Char('q') if status.is_over() => Input::Quit,
        _ if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Ignore,
        KeyCode::Enter if status == Status::Starting => Input::Game(Event::Start),
        KeyCode::Enter => Input::Game(Key::Enter.into()),
        KeyCode::Backspace => Input::Game(Key::Backspace.into()),
        KeyCode::Char(c) => Input::Game(Key::Letter(c).into()),
        _ => Input::Ignore,
    }
}

/// Run the TUI application
///
/// Must be called from within a tokio runtime: word source requests are
/// spawned onto it.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // Completions from background requests
    let (tx, rx) = mpsc::channel();

    info!("starting round");
    app.dispatch(Event::Start, &tx);

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let TermEvent::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            match translate_key(key, app.round.status()) {
                Input::Quit => app.should_quit = true,
                Input::Game(event) => app.dispatch(event, &tx),
                Input::Ignore => {}
            }
        }

        while let Ok(event) = rx.try_recv() {
            debug!(?event, "word source completion");
            app.dispatch(event, &tx);
        }

        if app.round.is_busy() {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::source::ListWordSource;
    use crate::wordlists::loader::words_from_slice;

    fn app() -> App {
        let source = ListWordSource::new(words_from_slice(&["crane", "slate"]))
            .with_target(Word::new("crane").unwrap());
        App::new(Arc::new(source))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn key_translation() {
        assert_eq!(
            translate_key(press(KeyCode::Char('a')), Status::Active),
            Input::Game(Key::Letter('a').into())
        );
        assert_eq!(
            translate_key(press(KeyCode::Backspace), Status::Active),
            Input::Game(Key::Backspace.into())
        );
        assert_eq!(
            translate_key(press(KeyCode::Enter), Status::Active),
            Input::Game(Key::Enter.into())
        );
        assert_eq!(translate_key(press(KeyCode::Esc), Status::Active), Input::Quit);
        assert_eq!(translate_key(press(KeyCode::Tab), Status::Active), Input::Ignore);
    }

    #[test]
    fn enter_retries_start() {
        assert_eq!(
            translate_key(press(KeyCode::Enter), Status::Starting),
            Input::Game(Event::Start)
        );
    }

    #[test]
    fn q_is_a_letter_until_the_round_ends() {
        assert_eq!(
            translate_key(press(KeyCode::Char('q')), Status::Active),
            Input::Game(Key::Letter('q').into())
        );
        assert_eq!(translate_key(press(KeyCode::Char('q')), Status::Won), Input::Quit);
        assert_eq!(translate_key(press(KeyCode::Char('q')), Status::Lost), Input::Quit);
    }

    #[test]
    fn ctrl_c_quits_and_other_chords_are_ignored() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(translate_key(ctrl('c'), Status::Active), Input::Quit);
        assert_eq!(translate_key(ctrl('a'), Status::Active), Input::Ignore);
    }

    #[test]
    fn apply_returns_requests_and_records_notices() {
        let mut app = app();
        assert_eq!(app.apply(Event::Start), vec![Effect::FetchTarget]);
        assert!(
            app.apply(Event::TargetFetched(Ok(Word::new("crane").unwrap())))
                .is_empty()
        );

        for c in "xxxxx".chars() {
            app.apply(Key::Letter(c).into());
        }
        assert_eq!(
            app.apply(Key::Enter.into()),
            vec![Effect::ValidateWord("xxxxx".into())]
        );
        app.apply(Event::ValidationFinished {
            word: "xxxxx".into(),
            result: Ok(false),
        });

        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "XXXXX is not a valid word.");
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn failed_start_asks_for_retry() {
        let mut app = app();
        app.apply(Event::Start);
        app.apply(Event::TargetFetched(Err("offline".into())));

        let texts: Vec<&str> = app.messages.iter().map(|m| m.text.as_str()).collect();
        assert!(texts.contains(&"Press Enter to retry."));
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
