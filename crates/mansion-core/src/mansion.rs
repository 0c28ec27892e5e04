//! The fixed mansion layout the game is played in.
//!
//! Eight rooms, wired exactly as the game rules expect them. The layout is
//! static data: the name constants below are the identity keys the rule
//! tables key on, so nothing else in the workspace spells a room name out
//! as a bare string literal.

use crate::direction::Direction;
use crate::location::Location;
use crate::world::World;

/// Display title of the game world.
pub const TITLE: &str = "Mansion Escape - Extended Edition";

/// The starting room.
pub const ENTRY_HALL: &str = "Entry Hall";
/// Gloomy room between the hall and the locked door.
pub const LIVING_ROOM: &str = "Living Room";
/// Where the key sits on a shelf.
pub const LIBRARY: &str = "Library";
/// Behind the locked door; the way to the final room.
pub const LOCKED_ROOM: &str = "Locked Room";
/// Where the lantern lies.
pub const BASEMENT: &str = "Basement";
/// Present in the floor plan but no corridor leads into it.
pub const KITCHEN: &str = "Kitchen";
/// Too dark to enter without a light; holds the amulet.
pub const ATTIC: &str = "Attic";
/// The one-way exit. Entering it ends the game.
pub const FINAL_ROOM: &str = "Final Room";

/// Build the canonical mansion.
///
/// The table is closed and covered by this crate's tests, so validation
/// cannot fail here at runtime.
pub fn world() -> World {
    let mut world = World::new(TITLE, ENTRY_HALL);

    let rooms = [
        Location::new(
            ENTRY_HALL,
            "You are in a grand, dusty hall with cobwebs hanging from the chandelier.",
        )
        .with_exit(Direction::North, LIVING_ROOM)
        .with_exit(Direction::East, LIBRARY)
        .with_exit(Direction::Down, BASEMENT)
        .with_exit(Direction::Up, ATTIC),
        Location::new(
            LIVING_ROOM,
            "A gloomy living room with a cold fireplace. A locked door is to the north.",
        )
        .with_exit(Direction::South, ENTRY_HALL)
        .with_exit(Direction::North, LOCKED_ROOM),
        Location::new(
            LIBRARY,
            "The walls are lined with old, rotting books. There’s a key on a shelf.",
        )
        .with_exit(Direction::West, ENTRY_HALL),
        Location::new(
            LOCKED_ROOM,
            "A room filled with mysterious symbols. There’s something unsettling about it.",
        )
        .with_exit(Direction::South, LIVING_ROOM)
        .with_exit(Direction::North, FINAL_ROOM),
        Location::new(
            BASEMENT,
            "A damp, dark basement. You need a light source to explore further.",
        )
        .with_exit(Direction::Up, ENTRY_HALL),
        Location::new(
            KITCHEN,
            "An old kitchen with broken utensils. A lantern is lying in a corner.",
        )
        .with_exit(Direction::West, LIVING_ROOM),
        Location::new(
            ATTIC,
            "The attic is dark and dusty. You need a lantern to search it.",
        )
        .with_exit(Direction::Down, ENTRY_HALL),
        Location::new(
            FINAL_ROOM,
            "The final exit, but only those fully prepared can leave.",
        ),
    ];

    for room in rooms {
        world
            .add_location(room)
            .expect("mansion room names are unique");
    }

    world.validate().expect("mansion layout is closed");
    world
}
