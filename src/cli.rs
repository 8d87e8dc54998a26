//! Command-line interface for threeline.

use clap::{Parser, Subcommand};

/// Threeline - tic-tac-toe with a navigable move history
#[derive(Parser, Debug)]
#[command(name = "threeline")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal UI
    Tui,

    /// Replay a scripted move sequence and print the resulting view
    Show {
        /// Cell indices (0-8) to play, in order, comma-separated
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
