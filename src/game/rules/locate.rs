//! Move-location diffing between consecutive board snapshots.

use super::super::types::Board;
use super::super::Position;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The 1-based (row, col) of a move, as shown in the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLocation {
    /// Row, 1-based.
    pub row: usize,
    /// Column, 1-based.
    pub col: usize,
}

/// Finds the cell that changed between two consecutive snapshots.
///
/// Cells are scanned in board order and the first difference is reported.
/// Identical boards yield `None`; this is a degenerate input, not an error.
#[instrument]
pub fn move_location(prev: &Board, next: &Board) -> Option<MoveLocation> {
    for pos in Position::iter() {
        if prev.get(pos) != next.get(pos) {
            return Some(MoveLocation {
                row: pos.row() + 1,
                col: pos.col() + 1,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::super::super::types::{Player, Square};
    use super::*;

    #[test]
    fn test_single_difference_located() {
        for pos in Position::ALL {
            let prev = Board::new();
            let mut next = Board::new();
            next.set(pos, Square::Occupied(Player::X));

            let location = move_location(&prev, &next).expect("one cell differs");
            assert_eq!(location.row, pos.index() / 3 + 1);
            assert_eq!(location.col, pos.index() % 3 + 1);
        }
    }

    #[test]
    fn test_identical_boards_have_no_location() {
        let board = Board::new();
        assert_eq!(move_location(&board, &board), None);

        let mut occupied = Board::new();
        occupied.set(Position::Center, Square::Occupied(Player::O));
        assert_eq!(move_location(&occupied, &occupied.clone()), None);
    }

    #[test]
    fn test_first_difference_in_board_order_wins() {
        let prev = Board::new();
        let mut next = Board::new();
        next.set(Position::MiddleLeft, Square::Occupied(Player::X));
        next.set(Position::BottomRight, Square::Occupied(Player::O));

        let location = move_location(&prev, &next).expect("cells differ");
        assert_eq!(location, MoveLocation { row: 2, col: 1 });
    }
}
