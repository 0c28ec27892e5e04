use crate::direction::Direction;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when building or validating a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A location with the same name already exists.
    #[error("location already exists: \"{0}\"")]
    DuplicateLocation(String),

    /// The designated starting location is not in the location table.
    #[error("starting location not found: \"{0}\"")]
    UnknownStart(String),

    /// An exit references a destination that is not in the location table.
    #[error("exit {direction} from \"{from}\" leads to unknown location \"{to}\"")]
    DanglingExit {
        /// The location the exit leaves from.
        from: String,
        /// The exit's direction.
        direction: Direction,
        /// The missing destination name.
        to: String,
    },
}
