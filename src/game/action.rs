//! User actions and their rejection errors.
//!
//! Actions are domain events: the three things a user can ask of the
//! game. They are produced by a shell (key press, click) and applied to
//! the timeline; rejected actions leave the state untouched.

use super::Position;
use serde::{Deserialize, Serialize};

/// An event from the presentation layer into the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Place the next player's mark at the given cell.
    Play(Position),
    /// Jump to a history index.
    Jump(usize),
    /// Flip the display order of the move list.
    ToggleSort,
}

/// Error that can occur when applying a play action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// The cell at the position is already occupied.
    #[display("Cell {:?} is already occupied", _0)]
    CellOccupied(Position),

    /// The active snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for PlayError {}

/// Error that can occur when jumping through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested index is outside the recorded history.
    #[display("History index {} out of range (length {})", index, len)]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The history length at the time of the jump.
        len: usize,
    },
}

impl std::error::Error for JumpError {}
