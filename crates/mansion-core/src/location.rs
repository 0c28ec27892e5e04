//! A single named room with a description and outbound exits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// A named room in the navigation graph.
///
/// Locations are immutable once the world is built: the name doubles as the
/// identity key, and the exit map holds one destination name per direction.
/// A direction absent from the map means there is no exit that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique name, used as the identity key in the world table.
    pub name: String,
    /// Text shown when the player enters this location.
    pub description: String,
    /// Outbound exits: direction to destination location name.
    pub exits: BTreeMap<Direction, String>,
}

impl Location {
    /// Create a location with no exits.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
        }
    }

    /// Add an exit, builder-style.
    #[must_use]
    pub fn with_exit(mut self, direction: Direction, destination: impl Into<String>) -> Self {
        self.exits.insert(direction, destination.into());
        self
    }

    /// Look up the destination for a direction, if there is an exit that way.
    pub fn exit(&self, direction: Direction) -> Option<&str> {
        self.exits.get(&direction).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_location_has_no_exits() {
        let hall = Location::new("Hall", "A bare hall.");
        assert_eq!(hall.name, "Hall");
        assert!(hall.exits.is_empty());
        assert_eq!(hall.exit(Direction::North), None);
    }

    #[test]
    fn with_exit_builder() {
        let hall = Location::new("Hall", "A bare hall.")
            .with_exit(Direction::North, "Parlor")
            .with_exit(Direction::Down, "Cellar");

        assert_eq!(hall.exit(Direction::North), Some("Parlor"));
        assert_eq!(hall.exit(Direction::Down), Some("Cellar"));
        assert_eq!(hall.exit(Direction::South), None);
    }

    #[test]
    fn later_exit_replaces_earlier() {
        let hall = Location::new("Hall", "")
            .with_exit(Direction::North, "Parlor")
            .with_exit(Direction::North, "Study");

        assert_eq!(hall.exit(Direction::North), Some("Study"));
        assert_eq!(hall.exits.len(), 1);
    }
}
