use std::io::{self, BufRead, Write};

use colored::Colorize;
use mansion_core::mansion;
use mansion_game::{GameConfig, GameSession};

/// Run the game loop: opening transcript, then one prompt per input line
/// until the session reports an outcome or stdin runs dry.
pub fn run(turns: u32) -> Result<(), String> {
    let world = mansion::world();
    let config = GameConfig::default().with_turn_budget(turns);
    let mut session = GameSession::new(world, config).map_err(|e| e.to_string())?;

    println!("  {}", session.world().name().bold());
    println!();
    for line in session.opening() {
        println!("{line}");
    }

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        input.clear();
        let read = stdin
            .lock()
            .read_line(&mut input)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            // EOF: the host is done feeding input.
            return Ok(());
        }

        let turn = session.handle_line(&input);
        for line in &turn.lines {
            println!("{line}");
        }

        if let Some(outcome) = turn.outcome {
            println!();
            if outcome.is_victory() {
                println!("  {}", "You escaped.".green().bold());
            } else {
                println!("  {}", "Game over.".red().bold());
            }
            return Ok(());
        }
    }
}
