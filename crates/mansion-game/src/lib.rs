//! Game engine for Mansion Escape.
//!
//! Turns text lines into game turns: a [`GameSession`] owns the immutable
//! world and the mutable [`GameState`], parses each input line into a
//! [`Command`], runs it through the rule tables, and hands back a [`Turn`]
//! of narrative lines plus an optional terminal [`Outcome`]. The engine
//! never prints; presentation belongs to the host.

/// Command parsing for player input.
pub mod command;
/// Session configuration.
pub mod config;
/// Error types for the game engine.
pub mod error;
/// The rule tables and the dispatch logic that applies them.
pub mod rules;
/// Session lifecycle and turn sequencing.
pub mod session;
/// The mutable per-session game state.
pub mod state;

pub use command::{Command, parse_command};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use session::{GameSession, Outcome, Turn};
pub use state::{Flag, GameState};
