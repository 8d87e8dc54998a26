//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Player, Square};
use super::super::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line: the winning player and the three cells forming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The player who completed the line.
    pub player: Player,
    /// The three cells of the winning line, in line order.
    pub line: [Position; 3],
}

/// The 8 possible lines, in fixed scan order: rows, columns, diagonals.
///
/// The order is part of the contract: on a board where several lines are
/// complete at once, the first line in this table is reported.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the winning player together with the completed line,
/// or `None` if no line is complete.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some(Win { player, line });
            }
        }
    }

    None
}
