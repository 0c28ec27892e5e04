//! Error types for the game engine.

use mansion_core::WorldError;

/// Alias for `Result<T, GameError>`.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur when setting up a session.
///
/// Once a session is running there are no error paths: every malformed or
/// disallowed input is answered with a narrative line, not an `Err`.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The world failed its construction-time invariants.
    #[error(transparent)]
    World(#[from] WorldError),
}
