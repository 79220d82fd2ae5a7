//! Carrying out effects against a word source
//!
//! The state machine never awaits anything. Whoever owns the [`RoundState`]
//! runs the request effects it returns, here, and feeds the resulting
//! completion events back in. Two styles are supported:
//! - [`dispatch`]: await every request inline (line-based play, tests)
//! - [`spawn_request`]: run the request on the tokio runtime and deliver the
//!   completion over a channel (the TUI event loop)

use super::event::{Effect, Event, Notice};
use super::state::RoundState;
use crate::source::WordSource;
use std::sync::{Arc, mpsc};
use tracing::{debug, warn};

/// Run a request effect and produce its completion event
///
/// Returns `None` for effects that are not requests (notices).
pub async fn perform(source: &dyn WordSource, effect: &Effect) -> Option<Event> {
    match effect {
        Effect::FetchTarget => {
            let result = source
                .fetch_target_word()
                .await
                .map_err(|err| err.to_string());
            Some(Event::TargetFetched(result))
        }
        Effect::ValidateWord(word) => {
            let result = source
                .validate_word(word)
                .await
                .map_err(|err| err.to_string());
            Some(Event::ValidationFinished {
                word: word.clone(),
                result,
            })
        }
        Effect::Notify(_) => None,
    }
}

/// Apply `event`, then keep running requests until the round settles
///
/// Returns the notices produced along the way, in order.
pub async fn dispatch(round: &mut RoundState, source: &dyn WordSource, event: Event) -> Vec<Notice> {
    let mut notices = Vec::new();
    let mut pending = vec![event];

    while let Some(event) = pending.pop() {
        for effect in round.handle_event(event) {
            if let Effect::Notify(notice) = effect {
                notices.push(notice);
            } else if let Some(completion) = perform(source, &effect).await {
                pending.push(completion);
            }
        }
    }

    notices
}

/// Run a request effect in the background and send its completion to `tx`
///
/// Notices are not requests and are ignored here.
pub fn spawn_request(source: Arc<dyn WordSource>, effect: Effect, tx: mpsc::Sender<Event>) {
    if matches!(effect, Effect::Notify(_)) {
        return;
    }

    debug!(?effect, "spawning word source request");
    tokio::spawn(async move {
        if let Some(event) = perform(source.as_ref(), &effect).await
            && tx.send(event).is_err()
        {
            warn!("Failed to deliver word source completion: receiver dropped");
        }
    });
}
