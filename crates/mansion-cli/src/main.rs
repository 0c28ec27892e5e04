//! CLI frontend for the Mansion Escape text adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mansion",
    about = "Mansion Escape — a turn-based text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game on stdin/stdout
    Play {
        /// Turn budget before time runs out
        #[arg(short, long, default_value = "15")]
        turns: u32,
    },

    /// Print the mansion floor plan as a table
    Map,

    /// Export the world model as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { turns } => commands::play::run(turns),
        Commands::Map => commands::map::run(),
        Commands::Export { output } => commands::export::run(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
