//! Terminal output formatting
//!
//! Colored letter tiles and boards for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_notice, print_scored};
