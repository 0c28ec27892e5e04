//! The rule tables and the dispatch logic that applies them.
//!
//! Every gameplay rule is a row in one of three const tables: movement
//! gates keyed by destination, pickups keyed by (location, item), and item
//! uses keyed by (location, required item, item). The dispatch functions
//! take the world read-only and the state exclusively and return a
//! [`Turn`], so all mutation is explicit.

use mansion_core::{Direction, World, mansion};

use crate::command::Command;
use crate::session::{Outcome, Turn};
use crate::state::{Flag, GameState};

/// Opening narrative, shown once at session start.
pub const MSG_OPENING: &str = "You wake up in an abandoned mansion. Your goal is to escape by finding clues and items scattered across the rooms.";

/// The fixed command summary.
pub const MSG_HELP: &str =
    "Available commands: north, south, east, west, up, down, take [item], use [item], help";

/// Response to an unrecognized or empty command.
pub const MSG_INVALID: &str = "Invalid command.";

/// Response to a direction with no exit.
pub const MSG_NO_EXIT: &str = "You can't go that way.";

/// Prompt for a bare `take`.
pub const MSG_TAKE_WHAT: &str = "What do you want to take?";

/// Prompt for a bare `use`.
pub const MSG_USE_WHAT: &str = "What do you want to use?";

/// Emitted when the turn budget runs out.
pub const MSG_TIMEOUT: &str = "Time has run out. You're trapped in the mansion forever.";

/// Emitted on entering the final room fully equipped.
pub const MSG_VICTORY: &str =
    "You’ve gathered all the items and escaped the mansion! Congratulations!";

/// Emitted on entering the final room without the full set of items.
pub const MSG_TRAPPED: &str =
    "You’ve entered the final room, but without the required items, you're trapped forever.";

/// A movement precondition keyed by destination.
#[derive(Debug, Clone, Copy)]
pub struct AccessGate {
    /// Destination the gate guards.
    pub destination: &'static str,
    /// Item the player must hold to pass.
    pub requires: Flag,
    /// Refusal emitted when the item is missing.
    pub refusal: &'static str,
}

/// Movement gates, checked in priority order.
pub const ACCESS_GATES: &[AccessGate] = &[
    AccessGate {
        destination: mansion::LOCKED_ROOM,
        requires: Flag::Key,
        refusal: "The door is locked. You need a key.",
    },
    AccessGate {
        destination: mansion::ATTIC,
        requires: Flag::Lantern,
        refusal: "It's too dark to explore the Attic without a light.",
    },
];

/// A pickup: being in `location` and taking `item` grants `grants`.
#[derive(Debug, Clone, Copy)]
pub struct TakeRule {
    /// Room the item can be taken in.
    pub location: &'static str,
    /// Item token as the player types it, lowercase.
    pub item: &'static str,
    /// Flag the pickup sets.
    pub grants: Flag,
    /// Message emitted on every pickup, including repeats.
    pub pickup: &'static str,
}

/// The pickup table. Re-taking an item re-emits the same message; the flag
/// is already true and stays true.
pub const TAKE_RULES: &[TakeRule] = &[
    TakeRule {
        location: mansion::LIBRARY,
        item: "key",
        grants: Flag::Key,
        pickup: "You picked up the Key.",
    },
    TakeRule {
        location: mansion::BASEMENT,
        item: "lantern",
        grants: Flag::Lantern,
        pickup: "You picked up the Lantern.",
    },
    TakeRule {
        location: mansion::ATTIC,
        item: "amulet",
        grants: Flag::Amulet,
        pickup: "You picked up the Mysterious Amulet.",
    },
];

/// An item use: in `location`, holding `requires`, using `item` narrates
/// `narration` and optionally ends the session.
#[derive(Debug, Clone, Copy)]
pub struct UseRule {
    /// Room the use applies in.
    pub location: &'static str,
    /// Item token as the player types it, lowercase.
    pub item: &'static str,
    /// Item the player must hold.
    pub requires: Flag,
    /// Narration emitted when the rule fires.
    pub narration: &'static str,
    /// Terminal outcome, for uses that end the session.
    pub ends: Option<Outcome>,
}

/// The use table. Uses never change state; the lock and the darkness are
/// already expressed by the movement gates, so two of these are pure
/// narration and the third is a terminal curse.
pub const USE_RULES: &[UseRule] = &[
    UseRule {
        location: mansion::LIVING_ROOM,
        item: "key",
        requires: Flag::Key,
        narration: "You use the key to unlock the door to the north.",
        ends: None,
    },
    UseRule {
        location: mansion::ATTIC,
        item: "lantern",
        requires: Flag::Lantern,
        narration: "You use the lantern to light up the attic. There's an amulet here.",
        ends: None,
    },
    UseRule {
        location: mansion::FINAL_ROOM,
        item: "amulet",
        requires: Flag::Amulet,
        narration: "The amulet starts glowing... but something feels wrong. You are cursed by the amulet!",
        ends: Some(Outcome::Cursed),
    },
];

/// Execute a parsed command against the world and state.
pub fn dispatch(world: &World, state: &mut GameState, command: Command) -> Turn {
    match command {
        Command::Move { direction } => resolve_move(world, state, direction),
        Command::Take { item } => resolve_take(state, item.as_deref()),
        Command::Use { item } => resolve_use(state, item.as_deref()),
        Command::Help => Turn::line(MSG_HELP),
        Command::Invalid => Turn::line(MSG_INVALID),
    }
}

/// Apply the movement rule: exit lookup, access gates, then the move itself.
///
/// Entering the final room is always terminal: victory when fully equipped,
/// otherwise the trapped ending.
fn resolve_move(world: &World, state: &mut GameState, direction: Direction) -> Turn {
    let Some(destination) = world.exit(state.location(), direction) else {
        return Turn::line(MSG_NO_EXIT);
    };

    for gate in ACCESS_GATES {
        if destination == gate.destination && !state.has(gate.requires) {
            return Turn::line(gate.refusal);
        }
    }

    let arrived = world
        .location(destination)
        .expect("validated world: every exit destination exists");
    state.enter(&arrived.name);

    let mut turn = Turn::line(arrived.description.clone());
    if arrived.name == mansion::FINAL_ROOM {
        if state.fully_equipped() {
            turn.lines.push(MSG_VICTORY.to_string());
            turn.outcome = Some(Outcome::Escaped);
        } else {
            turn.lines.push(MSG_TRAPPED.to_string());
            turn.outcome = Some(Outcome::Trapped);
        }
    }
    turn
}

/// Apply the take rule for the player's current location.
fn resolve_take(state: &mut GameState, item: Option<&str>) -> Turn {
    let Some(item) = item else {
        return Turn::line(MSG_TAKE_WHAT);
    };

    let rule = TAKE_RULES
        .iter()
        .find(|r| r.location == state.location() && r.item == item);

    match rule {
        Some(rule) => {
            state.grant(rule.grants);
            Turn::line(rule.pickup)
        }
        None => Turn::line(format!("There's no {item} here.")),
    }
}

/// Apply the use rule for the player's current location and held items.
fn resolve_use(state: &mut GameState, item: Option<&str>) -> Turn {
    let Some(item) = item else {
        return Turn::line(MSG_USE_WHAT);
    };

    let rule = USE_RULES.iter().find(|r| {
        r.location == state.location() && r.item == item && state.has(r.requires)
    });

    match rule {
        Some(rule) => Turn {
            lines: vec![rule.narration.to_string()],
            outcome: rule.ends,
        },
        None => Turn::line(format!("You can't use the {item} here.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(location: &str) -> GameState {
        let mut state = GameState::new(mansion::ENTRY_HALL, 15);
        state.enter(location);
        state
    }

    fn move_cmd(direction: Direction) -> Command {
        Command::Move { direction }
    }

    #[test]
    fn move_without_exit_is_refused() {
        let world = mansion::world();
        let mut state = state_at(mansion::ENTRY_HALL);

        let turn = dispatch(&world, &mut state, move_cmd(Direction::South));
        assert_eq!(turn.lines, vec![MSG_NO_EXIT.to_string()]);
        assert_eq!(turn.outcome, None);
        assert_eq!(state.location(), mansion::ENTRY_HALL);
    }

    #[test]
    fn successful_move_emits_description() {
        let world = mansion::world();
        let mut state = state_at(mansion::ENTRY_HALL);

        let turn = dispatch(&world, &mut state, move_cmd(Direction::East));
        assert_eq!(state.location(), mansion::LIBRARY);
        assert_eq!(
            turn.lines,
            vec![world.location(mansion::LIBRARY).unwrap().description.clone()]
        );
    }

    #[test]
    fn locked_room_needs_the_key() {
        let world = mansion::world();
        let mut state = state_at(mansion::LIVING_ROOM);

        let turn = dispatch(&world, &mut state, move_cmd(Direction::North));
        assert_eq!(turn.lines, vec!["The door is locked. You need a key.".to_string()]);
        assert_eq!(state.location(), mansion::LIVING_ROOM);

        state.grant(Flag::Key);
        let turn = dispatch(&world, &mut state, move_cmd(Direction::North));
        assert_eq!(state.location(), mansion::LOCKED_ROOM);
        assert_eq!(turn.outcome, None);
    }

    #[test]
    fn attic_needs_the_lantern() {
        let world = mansion::world();
        let mut state = state_at(mansion::ENTRY_HALL);

        let turn = dispatch(&world, &mut state, move_cmd(Direction::Up));
        assert_eq!(
            turn.lines,
            vec!["It's too dark to explore the Attic without a light.".to_string()]
        );
        assert_eq!(state.location(), mansion::ENTRY_HALL);

        state.grant(Flag::Lantern);
        dispatch(&world, &mut state, move_cmd(Direction::Up));
        assert_eq!(state.location(), mansion::ATTIC);
    }

    #[test]
    fn entering_final_room_prepared_wins() {
        let world = mansion::world();
        let mut state = state_at(mansion::LOCKED_ROOM);
        state.grant(Flag::Key);
        state.grant(Flag::Lantern);
        state.grant(Flag::Amulet);

        let turn = dispatch(&world, &mut state, move_cmd(Direction::North));
        assert_eq!(state.location(), mansion::FINAL_ROOM);
        assert_eq!(turn.outcome, Some(Outcome::Escaped));
        assert_eq!(turn.lines.last().unwrap(), MSG_VICTORY);
    }

    #[test]
    fn entering_final_room_unprepared_traps() {
        let world = mansion::world();
        let mut state = state_at(mansion::LOCKED_ROOM);
        state.grant(Flag::Key);

        let turn = dispatch(&world, &mut state, move_cmd(Direction::North));
        assert_eq!(turn.outcome, Some(Outcome::Trapped));
        assert_eq!(turn.lines.last().unwrap(), MSG_TRAPPED);
    }

    #[test]
    fn take_rules_fire_in_place() {
        let world = mansion::world();

        for rule in TAKE_RULES {
            let mut state = state_at(rule.location);
            let turn = dispatch(
                &world,
                &mut state,
                Command::Take {
                    item: Some(rule.item.to_string()),
                },
            );
            assert!(state.has(rule.grants));
            assert_eq!(turn.lines, vec![rule.pickup.to_string()]);
            assert_eq!(turn.outcome, None);
        }
    }

    #[test]
    fn take_is_idempotent() {
        let world = mansion::world();
        let mut state = state_at(mansion::LIBRARY);
        let take_key = Command::Take {
            item: Some("key".to_string()),
        };

        let first = dispatch(&world, &mut state, take_key.clone());
        let second = dispatch(&world, &mut state, take_key);
        assert_eq!(first, second);
        assert!(state.has(Flag::Key));
    }

    #[test]
    fn take_in_the_wrong_room() {
        let world = mansion::world();
        let mut state = state_at(mansion::ENTRY_HALL);

        let turn = dispatch(
            &world,
            &mut state,
            Command::Take {
                item: Some("key".to_string()),
            },
        );
        assert_eq!(turn.lines, vec!["There's no key here.".to_string()]);
        assert!(!state.has(Flag::Key));
    }

    #[test]
    fn bare_take_prompts() {
        let world = mansion::world();
        let mut state = state_at(mansion::LIBRARY);

        let turn = dispatch(&world, &mut state, Command::Take { item: None });
        assert_eq!(turn.lines, vec![MSG_TAKE_WHAT.to_string()]);
        assert!(!state.has(Flag::Key));
    }

    #[test]
    fn use_key_in_living_room_narrates() {
        let world = mansion::world();
        let mut state = state_at(mansion::LIVING_ROOM);
        state.grant(Flag::Key);

        let turn = dispatch(
            &world,
            &mut state,
            Command::Use {
                item: Some("key".to_string()),
            },
        );
        assert_eq!(
            turn.lines,
            vec!["You use the key to unlock the door to the north.".to_string()]
        );
        assert_eq!(turn.outcome, None);
        // Narration only; the actual lock stays with the movement gate.
        assert_eq!(state.location(), mansion::LIVING_ROOM);
    }

    #[test]
    fn use_without_holding_the_item_fails() {
        let world = mansion::world();
        let mut state = state_at(mansion::LIVING_ROOM);

        let turn = dispatch(
            &world,
            &mut state,
            Command::Use {
                item: Some("key".to_string()),
            },
        );
        assert_eq!(turn.lines, vec!["You can't use the key here.".to_string()]);
    }

    #[test]
    fn use_amulet_in_final_room_is_a_curse() {
        let world = mansion::world();
        let mut state = state_at(mansion::FINAL_ROOM);
        state.grant(Flag::Amulet);

        let turn = dispatch(
            &world,
            &mut state,
            Command::Use {
                item: Some("amulet".to_string()),
            },
        );
        assert_eq!(turn.outcome, Some(Outcome::Cursed));
        assert_eq!(
            turn.lines,
            vec![
                "The amulet starts glowing... but something feels wrong. You are cursed by the amulet!"
                    .to_string()
            ]
        );
    }

    #[test]
    fn bare_use_prompts() {
        let world = mansion::world();
        let mut state = state_at(mansion::ATTIC);

        let turn = dispatch(&world, &mut state, Command::Use { item: None });
        assert_eq!(turn.lines, vec![MSG_USE_WHAT.to_string()]);
    }

    #[test]
    fn help_and_invalid() {
        let world = mansion::world();
        let mut state = state_at(mansion::ENTRY_HALL);

        let turn = dispatch(&world, &mut state, Command::Help);
        assert_eq!(turn.lines, vec![MSG_HELP.to_string()]);

        let turn = dispatch(&world, &mut state, Command::Invalid);
        assert_eq!(turn.lines, vec![MSG_INVALID.to_string()]);
        assert_eq!(turn.outcome, None);
    }
}
