//! World model for Mansion Escape: directions, rooms, and exits.
//!
//! This crate defines the immutable topology the game engine runs on. A
//! [`World`] is a table of named [`Location`]s connected by directed exits;
//! it is constructed once (see [`mansion::world`] for the canonical layout),
//! validated, and never mutated afterwards.

/// The closed set of movement directions.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// A single named room with a description and outbound exits.
pub mod location;
/// The fixed mansion layout the game is played in.
pub mod mansion;
/// The world model: a validated table of locations.
pub mod world;

/// Re-export the direction type.
pub use direction::Direction;
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export the location record.
pub use location::Location;
/// Re-export the world model.
pub use world::World;
