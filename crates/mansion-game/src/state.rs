//! The mutable per-session game state.

/// One of the three key items, as a flag the rule tables can name.
///
/// Possession is a single bit: once picked up, an item cannot be inspected
/// or dropped, so no item entity outlives its pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// The key from the library shelf.
    Key,
    /// The lantern from the basement.
    Lantern,
    /// The amulet from the attic.
    Amulet,
}

/// The player's mutable state for one session.
///
/// Holds the current location name (always a valid key into the world), the
/// three monotonic possession flags, and the countdown of turns. Mutators
/// are crate-private: only the rule engine and the session write the state.
#[derive(Debug, Clone)]
pub struct GameState {
    location: String,
    has_key: bool,
    has_lantern: bool,
    has_amulet: bool,
    turns_remaining: u32,
}

impl GameState {
    /// Create a fresh state at the starting location with a full turn budget
    /// and no items.
    pub fn new(start: impl Into<String>, turn_budget: u32) -> Self {
        Self {
            location: start.into(),
            has_key: false,
            has_lantern: false,
            has_amulet: false,
            turns_remaining: turn_budget,
        }
    }

    /// Name of the location the player is currently in.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Move the player to a new location.
    pub(crate) fn enter(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Whether the player holds the given item.
    pub fn has(&self, flag: Flag) -> bool {
        match flag {
            Flag::Key => self.has_key,
            Flag::Lantern => self.has_lantern,
            Flag::Amulet => self.has_amulet,
        }
    }

    /// Whether all three items are held.
    pub fn fully_equipped(&self) -> bool {
        self.has_key && self.has_lantern && self.has_amulet
    }

    /// Grant an item. Flags only ever move from false to true; granting an
    /// item twice is a no-op.
    pub(crate) fn grant(&mut self, flag: Flag) {
        match flag {
            Flag::Key => self.has_key = true,
            Flag::Lantern => self.has_lantern = true,
            Flag::Amulet => self.has_amulet = true,
        }
    }

    /// Turns left before the timeout.
    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    /// Spend one turn from the budget.
    pub(crate) fn spend_turn(&mut self) {
        self.turns_remaining = self.turns_remaining.saturating_sub(1);
    }

    /// Whether the budget is exhausted.
    pub fn out_of_time(&self) -> bool {
        self.turns_remaining == 0
    }
}
