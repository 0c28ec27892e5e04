//! Session lifecycle and turn sequencing.

use mansion_core::World;

use crate::command::parse_command;
use crate::config::GameConfig;
use crate::error::GameResult;
use crate::rules;
use crate::state::GameState;

/// How a session ended. Every variant is terminal; [`Outcome::Escaped`] is
/// the only victory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All three items gathered and the final room reached.
    Escaped,
    /// The final room entered without the full set of items.
    Trapped,
    /// The amulet used in the final room.
    Cursed,
    /// The turn budget ran out.
    OutOfTime,
}

impl Outcome {
    /// Whether this outcome is the winning one.
    pub fn is_victory(&self) -> bool {
        matches!(self, Self::Escaped)
    }
}

/// Everything one processed input line produced: the narrative lines for the
/// presentation sink, and the terminal outcome if this line ended the
/// session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    /// Narrative lines, in emission order.
    pub lines: Vec<String>,
    /// Set exactly once per session, on the line that ends it.
    pub outcome: Option<Outcome>,
}

impl Turn {
    /// A non-terminal turn with a single line.
    pub(crate) fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            outcome: None,
        }
    }
}

/// One play-through of the mansion.
///
/// Owns the immutable [`World`] and the mutable [`GameState`], and runs the
/// turn sequencing: blank lines are free, every other line costs one turn
/// from the budget before it is dispatched, and once an outcome is reached
/// further input is ignored.
pub struct GameSession {
    world: World,
    state: GameState,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Create a session over a world.
    ///
    /// Validates the world first: the start location must exist and every
    /// exit must lead somewhere real.
    pub fn new(world: World, config: GameConfig) -> GameResult<Self> {
        world.validate()?;
        let state = GameState::new(world.start(), config.turn_budget);
        Ok(Self {
            world,
            state,
            outcome: None,
        })
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The terminal outcome, once one has been reached.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the session has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The startup transcript: opening narrative, the starting location's
    /// description, and the command summary.
    pub fn opening(&self) -> Vec<String> {
        let here = self
            .world
            .location(self.state.location())
            .expect("validated world: the start location exists");
        vec![
            rules::MSG_OPENING.to_string(),
            here.description.clone(),
            rules::MSG_HELP.to_string(),
        ]
    }

    /// Process one input line and return what it produced.
    ///
    /// Sequencing, in order: a finished session ignores input entirely; a
    /// blank line answers "Invalid command." without spending a turn; every
    /// other line spends one turn, times out if that empties the budget, and
    /// otherwise dispatches through the rule tables.
    pub fn handle_line(&mut self, input: &str) -> Turn {
        if self.is_over() {
            return Turn::default();
        }

        let Some(command) = parse_command(input) else {
            return Turn::line(rules::MSG_INVALID);
        };

        self.state.spend_turn();
        if self.state.out_of_time() {
            let turn = Turn {
                lines: vec![rules::MSG_TIMEOUT.to_string()],
                outcome: Some(Outcome::OutOfTime),
            };
            self.outcome = turn.outcome;
            return turn;
        }

        let turn = rules::dispatch(&self.world, &mut self.state, command);
        self.outcome = turn.outcome;
        turn
    }
}
