//! Snapshot history and the active cursor.
//!
//! The timeline is the single source of truth: an ordered list of board
//! snapshots plus the index currently displayed and played from. Status,
//! turn, and fullness are derived from the active snapshot on demand and
//! never stored.

use super::action::{JumpError, PlayError};
use super::rules::{check_winner, is_full, Win};
use super::types::{Board, GameStatus, Player, Square};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Ordered history of board snapshots with an active cursor.
///
/// Snapshot 0 is the empty board. Each later snapshot adds exactly one
/// mark to its predecessor. Playing from a non-latest cursor discards the
/// snapshots after it before appending, so the history never branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub(super) history: Vec<Board>,
    pub(super) current: usize,
}

impl Timeline {
    /// Creates a timeline holding a single empty snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current: 0,
        }
    }

    /// Returns all snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the index of the active snapshot.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the active snapshot.
    pub fn board(&self) -> &Board {
        &self.history[self.current]
    }

    /// Returns the player who moves next from the active snapshot.
    ///
    /// X moves from even indices, O from odd ones.
    pub fn to_move(&self) -> Player {
        if self.current % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the winner of the active snapshot, if a line is complete.
    pub fn winner(&self) -> Option<Win> {
        check_winner(self.board())
    }

    /// Checks if every cell of the active snapshot is occupied.
    pub fn is_board_full(&self) -> bool {
        is_full(self.board())
    }

    /// Returns the status of the active snapshot, recomputed per call.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = self.winner() {
            GameStatus::Won(win.player)
        } else if self.is_board_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Places the next player's mark at the given cell.
    ///
    /// Truncates any snapshots after the active one, appends the new
    /// snapshot, and moves the cursor to it.
    ///
    /// # Errors
    ///
    /// Returns `PlayError::CellOccupied` if the cell is taken, or
    /// `PlayError::GameOver` if the active snapshot already has a winner.
    /// The timeline is unchanged on error.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn play(&mut self, pos: Position) -> Result<(), PlayError> {
        if !self.board().is_empty(pos) {
            warn!(position = ?pos, "Rejected play on occupied cell");
            return Err(PlayError::CellOccupied(pos));
        }
        if self.winner().is_some() {
            warn!(position = ?pos, "Rejected play on finished board");
            return Err(PlayError::GameOver);
        }

        let player = self.to_move();
        let mut next = self.board().clone();
        next.set(pos, Square::Occupied(player));

        let discarded = self.history.len() - (self.current + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots before appending");
        }
        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;

        info!(
            position = ?pos,
            player = %player,
            move_number = self.current,
            status = ?self.status(),
            "Move applied"
        );

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);

        Ok(())
    }

    /// Moves the cursor to a historical snapshot.
    ///
    /// # Errors
    ///
    /// Returns `JumpError::OutOfRange` if the index is not a recorded
    /// snapshot. The timeline is unchanged on error.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        if index >= self.history.len() {
            warn!(index, len = self.history.len(), "Rejected out-of-range jump");
            return Err(JumpError::OutOfRange {
                index,
                len: self.history.len(),
            });
        }

        debug!(from = self.current, to = index, "Jumping through history");
        self.current = index;

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);

        Ok(())
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
