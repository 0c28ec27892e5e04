//! Command parsing for player input.

use mansion_core::Direction;

/// A parsed player command.
///
/// The command set is closed: a bare direction word, `take`, `use`, and
/// `help`. Anything else is [`Command::Invalid`], which still costs a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move in a direction.
    Move {
        /// The direction to move.
        direction: Direction,
    },
    /// Pick up an item. `None` when the player typed a bare `take`.
    Take {
        /// The item name, lowercased.
        item: Option<String>,
    },
    /// Use an item. `None` when the player typed a bare `use`.
    Use {
        /// The item name, lowercased.
        item: Option<String>,
    },
    /// Show the command summary.
    Help,
    /// Anything the interpreter does not recognize.
    Invalid,
}

/// Parse one input line into a command.
///
/// Tokens are split on whitespace and lowercased; only the first two matter
/// (the verb and, for `take`/`use`, the item). Extra tokens are ignored.
///
/// Returns `None` when the line has no tokens at all: a blank line is not a
/// command and must not consume a turn.
pub fn parse_command(input: &str) -> Option<Command> {
    let mut tokens = input.split_whitespace();
    let verb = tokens.next()?.to_lowercase();
    let item = tokens.next().map(str::to_lowercase);

    if let Some(direction) = Direction::parse(&verb) {
        return Some(Command::Move { direction });
    }

    let command = match verb.as_str() {
        "take" => Command::Take { item },
        "use" => Command::Use { item },
        "help" => Command::Help,
        _ => Command::Invalid,
    };
    Some(command)
}
