//! The world model: a validated table of locations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::location::Location;

/// The central world model. Owns the location table and the starting point.
///
/// A world is built once, validated with [`World::validate`], and treated as
/// read-only from then on: nothing in the game mutates topology. Locations
/// are keyed by their name; a `BTreeMap` keeps iteration and serialization
/// deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    name: String,
    start: String,
    locations: BTreeMap<String, Location>,
}

impl World {
    /// Create an empty world with a display name and a starting location name.
    ///
    /// The start does not have to exist yet; [`World::validate`] checks it
    /// once the table is filled in.
    pub fn new(name: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            locations: BTreeMap::new(),
        }
    }

    /// The world's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the designated starting location.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Add a location to the table.
    pub fn add_location(&mut self, location: Location) -> WorldResult<()> {
        if self.locations.contains_key(&location.name) {
            return Err(WorldError::DuplicateLocation(location.name));
        }
        self.locations.insert(location.name.clone(), location);
        Ok(())
    }

    /// Get a location by name.
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    /// Whether a location with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    /// Look up where an exit leads: the destination name for moving
    /// `direction` from the location named `from`, if such an exit exists.
    pub fn exit(&self, from: &str, direction: Direction) -> Option<&str> {
        self.locations.get(from).and_then(|loc| loc.exit(direction))
    }

    /// Iterate over all locations in name order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Number of locations in the world.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the world has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Check the construction-time invariants: the starting location exists
    /// and every exit destination names a location in the table.
    ///
    /// Reachability is deliberately not checked; a room no exit leads into
    /// is valid topology.
    pub fn validate(&self) -> WorldResult<()> {
        if !self.locations.contains_key(&self.start) {
            return Err(WorldError::UnknownStart(self.start.clone()));
        }

        for location in self.locations.values() {
            for (&direction, destination) in &location.exits {
                if !self.locations.contains_key(destination) {
                    return Err(WorldError::DanglingExit {
                        from: location.name.clone(),
                        direction,
                        to: destination.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_room_world() -> World {
        let mut world = World::new("Test House", "Hall");
        world
            .add_location(Location::new("Hall", "A hall.").with_exit(Direction::North, "Study"))
            .unwrap();
        world
            .add_location(Location::new("Study", "A study.").with_exit(Direction::South, "Hall"))
            .unwrap();
        world
    }

    #[test]
    fn add_and_look_up() {
        let world = two_room_world();
        assert_eq!(world.len(), 2);
        assert!(world.contains("Hall"));
        assert!(!world.contains("Cellar"));
        assert_eq!(world.location("Study").unwrap().description, "A study.");
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut world = two_room_world();
        let err = world
            .add_location(Location::new("Hall", "Another hall."))
            .unwrap_err();
        assert!(matches!(err, WorldError::DuplicateLocation(name) if name == "Hall"));
    }

    #[test]
    fn exit_lookup() {
        let world = two_room_world();
        assert_eq!(world.exit("Hall", Direction::North), Some("Study"));
        assert_eq!(world.exit("Hall", Direction::East), None);
        assert_eq!(world.exit("Cellar", Direction::North), None);
    }

    #[test]
    fn validate_accepts_closed_world() {
        assert!(two_room_world().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_start() {
        let mut world = World::new("Test House", "Cellar");
        world.add_location(Location::new("Hall", "A hall.")).unwrap();
        let err = world.validate().unwrap_err();
        assert!(matches!(err, WorldError::UnknownStart(name) if name == "Cellar"));
    }

    #[test]
    fn validate_rejects_dangling_exit() {
        let mut world = World::new("Test House", "Hall");
        world
            .add_location(Location::new("Hall", "A hall.").with_exit(Direction::Down, "Oubliette"))
            .unwrap();
        let err = world.validate().unwrap_err();
        assert!(matches!(
            err,
            WorldError::DanglingExit { from, direction: Direction::Down, to }
                if from == "Hall" && to == "Oubliette"
        ));
    }

    #[test]
    fn unreachable_room_is_valid() {
        let mut world = two_room_world();
        world
            .add_location(Location::new("Priest Hole", "No way in.").with_exit(Direction::Up, "Hall"))
            .unwrap();
        assert!(world.validate().is_ok());
    }

    #[test]
    fn locations_iterate_in_name_order() {
        let world = two_room_world();
        let names: Vec<_> = world.locations().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Hall", "Study"]);
    }

    #[test]
    fn serializes_to_json() {
        let world = two_room_world();
        let json = serde_json::to_string(&world).unwrap();
        assert!(json.contains("\"north\":\"Study\""));

        let back: World = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.exit("Hall", Direction::North), Some("Study"));
    }
}
