//! The game round: state machine, events and effects.
//!
//! ```text
//! Presentation ──Key/Start──▶ RoundState::handle_event ──Effects──▶ driver ──▶ WordSource
//!      ▲                              ▲                                            │
//!      └────────── Snapshot ──────────┴──────────── completion Events ◀────────────┘
//! ```
//!
//! # Modules
//!
//! - [`event`]: events in, effects and notices out
//! - [`state`]: the round state machine and its snapshot
//! - [`driver`]: runs request effects against a word source

pub mod driver;
pub mod event;
pub mod state;

pub use driver::{dispatch, perform, spawn_request};
pub use event::{Effect, Event, Key, Notice};
pub use state::{RoundState, Snapshot, Status, SubmittedGuess};
