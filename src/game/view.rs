//! Render model for the presentation layer.
//!
//! Everything a shell needs to draw one frame: the active board, the
//! winning line for highlighting, the status line, and the labeled move
//! list in display order. Building a view never mutates the timeline.

use super::rules::{move_location, Win};
use super::timeline::Timeline;
use super::types::{Board, GameStatus};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display order of the move list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "Ascending"),
            SortOrder::Descending => write!(f, "Descending"),
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry navigates to.
    pub index: usize,
    /// User-facing label.
    pub description: String,
    /// True for the active snapshot's entry.
    pub is_current: bool,
}

/// Builds the move list in history order, one entry per snapshot.
///
/// The active entry reads "You are at move #N" even for the start
/// entry; past entries read "Go to game start" or "Go to move #N"
/// with the (row, col) of the move when it can be located.
#[instrument(skip(timeline))]
pub fn move_entries(timeline: &Timeline) -> Vec<MoveEntry> {
    let history = timeline.history();
    let current = timeline.current_index();

    history
        .iter()
        .enumerate()
        .map(|(index, board)| {
            let description = if index == current {
                format!("You are at move #{}", index)
            } else if index > 0 {
                match move_location(&history[index - 1], board) {
                    Some(location) => {
                        format!("Go to move #{} ({}, {})", index, location.row, location.col)
                    }
                    None => format!("Go to move #{}", index),
                }
            } else {
                "Go to game start".to_string()
            };

            MoveEntry {
                index,
                description,
                is_current: index == current,
            }
        })
        .collect()
}

/// Formats the status line for the active snapshot.
pub fn status_line(timeline: &Timeline) -> String {
    match timeline.status() {
        GameStatus::Won(player) => format!("Winner: {}", player),
        GameStatus::Draw => "Draw: no winner".to_string(),
        GameStatus::InProgress => format!("Next player: {}", timeline.to_move()),
    }
}

/// A complete render snapshot for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The active board snapshot.
    pub board: Board,
    /// The completed line, when one exists.
    pub winner: Option<Win>,
    /// Status line text.
    pub status: String,
    /// Move list, already in display order.
    pub moves: Vec<MoveEntry>,
    /// The order `moves` is listed in.
    pub sort: SortOrder,
}

impl GameView {
    /// Builds a view of the timeline with the move list in the given
    /// display order. Descending order reverses the list only; the
    /// underlying history is untouched.
    #[instrument(skip(timeline))]
    pub fn new(timeline: &Timeline, sort: SortOrder) -> Self {
        let mut moves = move_entries(timeline);
        if sort == SortOrder::Descending {
            moves.reverse();
        }

        Self {
            board: timeline.board().clone(),
            winner: timeline.winner(),
            status: status_line(timeline),
            moves,
            sort,
        }
    }
}
