//! Round state machine
//!
//! A [`RoundState`] owns everything about one round: the target word, the
//! history of validated guesses, the guess being typed, and where the round
//! is in its lifecycle. It is only ever changed through
//! [`RoundState::handle_event`], which returns the effects the caller must
//! carry out.
//!
//! ```text
//! Starting ──Start──▶ Starting(busy) ──TargetFetched(Ok)──▶ Active
//!     ▲                      │
//!     └──TargetFetched(Err)──┘
//!
//! Active ──Enter──▶ Active(busy) ──ValidationFinished──▶ Active | Won | Lost
//! ```
//!
//! While busy, or once `Won`/`Lost`, key events are ignored.

use super::event::{Effect, Event, Key, Notice};
use crate::core::{Classification, Feedback, TOTAL_ATTEMPTS, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use tracing::{debug, info, trace, warn};

/// Where a round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No target word yet; the round cannot be played
    Starting,
    Active,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A validated guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedGuess {
    pub word: Word,
    pub classification: Classification,
}

/// State of a single round
#[derive(Debug, Clone)]
pub struct RoundState {
    target: Option<Word>,
    guesses: Vec<SubmittedGuess>,
    current: String,
    status: Status,
    busy: bool,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundState {
    /// A round waiting for its target word; send [`Event::Start`] to fetch it
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target: None,
            guesses: Vec::new(),
            current: String::new(),
            status: Status::Starting,
            busy: false,
        }
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Whether a word source call is pending
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn guesses(&self) -> &[SubmittedGuess] {
        &self.guesses
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        TOTAL_ATTEMPTS.saturating_sub(self.guesses.len())
    }

    /// The target word, once the round has been lost
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        match self.status {
            Status::Lost => self.target.as_ref(),
            _ => None,
        }
    }

    /// Whether key presses are currently applied
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.status == Status::Active && !self.busy
    }

    /// Read-only copy of everything the presentation layer may show
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            busy: self.busy,
            guesses: self.guesses.clone(),
            current: self.current.clone(),
            attempts_remaining: self.attempts_remaining(),
            target: self.revealed_target().map(|w| w.text().to_string()),
        }
    }

    /// Apply an event and return the effects to carry out, in order
    pub fn handle_event(&mut self, event: Event) -> Vec<Effect> {
        trace!(?event, status = ?self.status, busy = self.busy, "handling event");
        match event {
            Event::Start => self.start(),
            Event::Key(key) => self.handle_key(key),
            Event::TargetFetched(result) => self.target_fetched(result),
            Event::ValidationFinished { word, result } => self.validation_finished(&word, result),
        }
    }

    fn start(&mut self) -> Vec<Effect> {
        if self.status != Status::Starting || self.busy {
            return Vec::new();
        }

        info!("fetching target word");
        self.busy = true;
        vec![Effect::FetchTarget]
    }

    fn handle_key(&mut self, key: Key) -> Vec<Effect> {
        if !self.accepts_input() {
            trace!(?key, "input ignored");
            return Vec::new();
        }

        match key {
            Key::Letter(ch) => {
                self.append_letter(ch);
                Vec::new()
            }
            Key::Backspace => {
                self.current.pop();
                Vec::new()
            }
            Key::Enter => self.submit(),
        }
    }

    fn append_letter(&mut self, ch: char) {
        if ch.is_ascii_alphabetic() && self.current.len() < WORD_LENGTH {
            self.current.push(ch.to_ascii_lowercase());
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        if self.current.len() != WORD_LENGTH {
            return Vec::new();
        }

        debug!(guess = %self.current, "submitting guess for validation");
        self.busy = true;
        vec![Effect::ValidateWord(self.current.clone())]
    }

    fn target_fetched(&mut self, result: Result<Word, String>) -> Vec<Effect> {
        if self.status != Status::Starting || !self.busy {
            debug!("ignoring target word nobody asked for");
            return Vec::new();
        }

        self.busy = false;
        match result {
            Ok(target) => {
                info!("round started");
                self.target = Some(target);
                self.status = Status::Active;
                Vec::new()
            }
            Err(reason) => {
                warn!(%reason, "could not fetch target word");
                vec![Effect::Notify(Notice::SourceUnavailable(reason))]
            }
        }
    }

    fn validation_finished(&mut self, word: &str, result: Result<bool, String>) -> Vec<Effect> {
        if self.status != Status::Active || !self.busy || word != self.current {
            debug!(word, "ignoring stale validation result");
            return Vec::new();
        }

        self.busy = false;
        match result {
            Ok(true) => self.record_guess(),
            Ok(false) => {
                debug!(word, "guess rejected by dictionary");
                vec![Effect::Notify(Notice::InvalidWord(word.to_string()))]
            }
            Err(reason) => {
                warn!(%reason, word, "could not validate guess");
                vec![Effect::Notify(Notice::SourceUnavailable(reason))]
            }
        }
    }

    fn record_guess(&mut self) -> Vec<Effect> {
        let Some(target) = &self.target else {
            return Vec::new();
        };
        let word = match Word::new(self.current.as_str()) {
            Ok(word) => word,
            Err(err) => {
                warn!(%err, guess = %self.current, "current guess is not a word");
                return Vec::new();
            }
        };

        let classification = Classification::score(&word, target);
        let solved = word == *target;
        self.guesses.push(SubmittedGuess {
            word,
            classification,
        });
        self.current.clear();

        let attempts = self.guesses.len();
        debug!(attempts, %classification, "guess recorded");

        if solved {
            info!(attempts, "round won");
            self.status = Status::Won;
            vec![Effect::Notify(Notice::Won { attempts })]
        } else if attempts == TOTAL_ATTEMPTS {
            info!("round lost");
            self.status = Status::Lost;
            vec![Effect::Notify(Notice::Lost {
                target: target.text().to_string(),
            })]
        } else {
            Vec::new()
        }
    }
}

/// Read-only view of a round for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub status: Status,
    pub busy: bool,
    pub guesses: Vec<SubmittedGuess>,
    pub current: String,
    pub attempts_remaining: usize,
    /// Only set once the round is lost
    pub target: Option<String>,
}

impl Snapshot {
    /// Best known feedback for every letter guessed so far
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<u8, Feedback> {
        let mut hints: FxHashMap<u8, Feedback> = FxHashMap::default();
        for guess in &self.guesses {
            for (&letter, &feedback) in guess.word.chars().iter().zip(guess.classification.letters()) {
                hints
                    .entry(letter)
                    .and_modify(|best| *best = (*best).max(feedback))
                    .or_insert(feedback);
            }
        }
        hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn started(target: &str) -> RoundState {
        let mut round = RoundState::new();
        assert_eq!(round.handle_event(Event::Start), vec![Effect::FetchTarget]);
        assert!(round.handle_event(Event::TargetFetched(Ok(word(target)))).is_empty());
        round
    }

    fn type_word(round: &mut RoundState, text: &str) {
        for ch in text.chars() {
            round.handle_event(Event::Key(Key::Letter(ch)));
        }
    }

    /// Type, submit and validate a guess; returns the effects of the validation
    fn play(round: &mut RoundState, text: &str) -> Vec<Effect> {
        type_word(round, text);
        assert_eq!(
            round.handle_event(Key::Enter.into()),
            vec![Effect::ValidateWord(text.to_string())]
        );
        round.handle_event(Event::ValidationFinished {
            word: text.to_string(),
            result: Ok(true),
        })
    }

    #[test]
    fn new_round_is_not_playable() {
        let mut round = RoundState::new();
        assert_eq!(round.status(), Status::Starting);
        assert!(!round.accepts_input());

        type_word(&mut round, "crane");
        assert_eq!(round.current_guess(), "");
    }

    #[test]
    fn start_is_single_flight() {
        let mut round = RoundState::new();
        assert_eq!(round.handle_event(Event::Start), vec![Effect::FetchTarget]);
        assert!(round.is_busy());
        assert!(round.handle_event(Event::Start).is_empty());
    }

    #[test]
    fn failed_start_stays_out_of_active_and_can_retry() {
        let mut round = RoundState::new();
        round.handle_event(Event::Start);
        let effects = round.handle_event(Event::TargetFetched(Err("offline".into())));

        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::SourceUnavailable("offline".into()))]
        );
        assert_eq!(round.status(), Status::Starting);
        assert!(!round.is_busy());

        assert_eq!(round.handle_event(Event::Start), vec![Effect::FetchTarget]);
        round.handle_event(Event::TargetFetched(Ok(word("crane"))));
        assert_eq!(round.status(), Status::Active);
    }

    #[test]
    fn letters_are_lowercased_and_bounded() {
        let mut round = started("crane");
        type_word(&mut round, "SLATEX");
        assert_eq!(round.current_guess(), "slate");
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut round = started("crane");
        type_word(&mut round, "a1 -b!é");
        assert_eq!(round.current_guess(), "ab");
    }

    #[test]
    fn backspace_removes_last_letter_and_is_noop_when_empty() {
        let mut round = started("crane");
        assert!(round.handle_event(Key::Backspace.into()).is_empty());
        assert_eq!(round.current_guess(), "");

        type_word(&mut round, "cra");
        round.handle_event(Key::Backspace.into());
        assert_eq!(round.current_guess(), "cr");
    }

    #[test]
    fn short_guess_is_not_submitted() {
        let mut round = started("crane");
        type_word(&mut round, "cran");
        assert!(round.handle_event(Key::Enter.into()).is_empty());
        assert!(!round.is_busy());
    }

    #[test]
    fn busy_round_ignores_keys() {
        let mut round = started("crane");
        type_word(&mut round, "slate");
        round.handle_event(Key::Enter.into());
        assert!(round.is_busy());

        round.handle_event(Key::Backspace.into());
        type_word(&mut round, "x");
        assert!(round.handle_event(Key::Enter.into()).is_empty());
        assert_eq!(round.current_guess(), "slate");
    }

    #[test]
    fn invalid_word_is_not_an_attempt() {
        let mut round = started("crane");
        type_word(&mut round, "xxxxx");
        round.handle_event(Key::Enter.into());
        let effects = round.handle_event(Event::ValidationFinished {
            word: "xxxxx".into(),
            result: Ok(false),
        });

        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::InvalidWord("xxxxx".into()))]
        );
        assert!(round.guesses().is_empty());
        assert_eq!(round.current_guess(), "xxxxx");
        assert_eq!(round.attempts_remaining(), TOTAL_ATTEMPTS);
        assert!(round.accepts_input());
    }

    #[test]
    fn unavailable_validator_keeps_guess() {
        let mut round = started("crane");
        type_word(&mut round, "slate");
        round.handle_event(Key::Enter.into());
        let effects = round.handle_event(Event::ValidationFinished {
            word: "slate".into(),
            result: Err("timed out".into()),
        });

        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::SourceUnavailable("timed out".into()))]
        );
        assert_eq!(round.status(), Status::Active);
        assert!(!round.is_busy());
        assert_eq!(round.current_guess(), "slate");
        assert!(round.guesses().is_empty());

        // The player can simply submit again
        assert_eq!(
            round.handle_event(Key::Enter.into()),
            vec![Effect::ValidateWord("slate".into())]
        );
    }

    #[test]
    fn valid_guess_is_scored_and_cleared() {
        let mut round = started("crane");
        assert!(play(&mut round, "slate").is_empty());

        assert_eq!(round.guesses().len(), 1);
        assert_eq!(round.guesses()[0].word.text(), "slate");
        assert_eq!(round.guesses()[0].classification.to_string(), "iicic");
        assert_eq!(round.current_guess(), "");
        assert_eq!(round.attempts_remaining(), TOTAL_ATTEMPTS - 1);
        assert_eq!(round.status(), Status::Active);
    }

    #[test]
    fn winning_on_attempt_k() {
        for k in 1..=TOTAL_ATTEMPTS {
            let mut round = started("crane");
            for _ in 1..k {
                play(&mut round, "slate");
            }
            let effects = play(&mut round, "crane");

            assert_eq!(effects, vec![Effect::Notify(Notice::Won { attempts: k })]);
            assert_eq!(round.status(), Status::Won);
            assert_eq!(round.guesses().len(), k);
            assert!(round.guesses()[k - 1].classification.is_solved());
        }
    }

    #[test]
    fn six_misses_lose_and_reveal_target() {
        let mut round = started("crane");
        for _ in 1..TOTAL_ATTEMPTS {
            assert!(play(&mut round, "slate").is_empty());
            assert!(round.revealed_target().is_none());
        }
        let effects = play(&mut round, "slate");

        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::Lost {
                target: "crane".into()
            })]
        );
        assert_eq!(round.status(), Status::Lost);
        assert_eq!(round.guesses().len(), TOTAL_ATTEMPTS);
        assert_eq!(round.revealed_target().map(Word::text), Some("crane"));
        assert_eq!(round.snapshot().target.as_deref(), Some("crane"));
    }

    #[test]
    fn finished_round_ignores_everything() {
        let mut round = started("crane");
        play(&mut round, "crane");

        type_word(&mut round, "slate");
        assert_eq!(round.current_guess(), "");
        assert!(round.handle_event(Key::Enter.into()).is_empty());
        assert!(round.handle_event(Event::Start).is_empty());
        assert!(
            round
                .handle_event(Event::ValidationFinished {
                    word: String::new(),
                    result: Ok(true),
                })
                .is_empty()
        );
        assert_eq!(round.guesses().len(), 1);
        assert_eq!(round.status(), Status::Won);
    }

    #[test]
    fn stale_completions_are_ignored() {
        let mut round = started("crane");
        type_word(&mut round, "slate");

        // Nothing pending
        assert!(
            round
                .handle_event(Event::ValidationFinished {
                    word: "slate".into(),
                    result: Ok(true),
                })
                .is_empty()
        );
        assert!(round.guesses().is_empty());
        assert!(
            round
                .handle_event(Event::TargetFetched(Ok(word("audio"))))
                .is_empty()
        );

        // Pending, but for another word
        round.handle_event(Key::Enter.into());
        round.handle_event(Event::ValidationFinished {
            word: "audio".into(),
            result: Ok(true),
        });
        assert!(round.is_busy());
        assert!(round.guesses().is_empty());
    }

    #[test]
    fn snapshot_hides_target_while_playing() {
        let mut round = started("crane");
        type_word(&mut round, "sla");
        let snapshot = round.snapshot();

        assert_eq!(snapshot.status, Status::Active);
        assert_eq!(snapshot.current, "sla");
        assert_eq!(snapshot.target, None);
        assert_eq!(snapshot.attempts_remaining, TOTAL_ATTEMPTS);
        assert!(!snapshot.busy);
    }

    #[test]
    fn letter_hints_keep_best_feedback() {
        let mut round = started("crane");
        play(&mut round, "react");
        let hints = round.snapshot().letter_hints();
        assert_eq!(hints.get(&b'r'), Some(&Feedback::Present));
        assert_eq!(hints.get(&b'a'), Some(&Feedback::Correct));
        assert_eq!(hints.get(&b't'), Some(&Feedback::Absent));
        assert_eq!(hints.get(&b'z'), None);

        // r is exact in the second guess; an absent t never downgrades anything
        play(&mut round, "crate");
        let hints = round.snapshot().letter_hints();
        assert_eq!(hints.get(&b'r'), Some(&Feedback::Correct));
        assert_eq!(hints.get(&b'c'), Some(&Feedback::Correct));
        assert_eq!(hints.get(&b't'), Some(&Feedback::Absent));
    }
}
