//! Threeline - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use threeline::{GameView, Position, SortOrder, Timeline};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => threeline::tui::run(),
        Command::Show {
            moves,
            descending,
            json,
        } => run_show(&moves, descending, json),
    }
}

/// Replays a scripted move sequence and prints the resulting view.
fn run_show(moves: &[usize], descending: bool, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut timeline = Timeline::new();
    for &index in moves {
        match Position::from_index(index) {
            Some(pos) => {
                if let Err(e) = timeline.play(pos) {
                    warn!(index, error = %e, "Move ignored");
                }
            }
            None => warn!(index, "Cell index out of range, ignored"),
        }
    }

    let sort = if descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    let view = GameView::new(&timeline, sort);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.board.display());
        println!();
        println!("{}", view.status);
        println!();
        for entry in &view.moves {
            let marker = if entry.is_current { "*" } else { " " };
            println!("{} {}", marker, entry.description);
        }
    }

    Ok(())
}
