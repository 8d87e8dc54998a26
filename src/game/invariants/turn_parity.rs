//! Turn parity invariant: marks alternate X, O, X, O, ...

use super::super::timeline::Timeline;
use super::super::types::{Board, Player, Square};
use super::super::Position;
use super::Invariant;

/// Invariant: The mark added by each snapshot follows turn parity.
///
/// Snapshot i is produced by the player who moves from snapshot i-1:
/// X from even indices, O from odd ones. The first mark is always X.
pub struct TurnParityInvariant;

impl TurnParityInvariant {
    /// The mark added between two consecutive snapshots, if exactly one
    /// cell went from empty to occupied.
    fn added_mark(prev: &Board, next: &Board) -> Option<Player> {
        let mut added = None;

        for pos in Position::ALL {
            if prev.get(pos) != next.get(pos) {
                match (prev.get(pos), next.get(pos)) {
                    (Square::Empty, Square::Occupied(player)) if added.is_none() => {
                        added = Some(player);
                    }
                    _ => return None,
                }
            }
        }

        added
    }
}

impl Invariant<Timeline> for TurnParityInvariant {
    fn holds(timeline: &Timeline) -> bool {
        for (i, window) in timeline.history().windows(2).enumerate() {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };

            match Self::added_mark(&window[0], &window[1]) {
                Some(player) if player == expected => {}
                Some(_) => return false,
                // Malformed step; shape is the single-step invariant's job.
                None => continue,
            }
        }

        true
    }

    fn description() -> &'static str {
        "Marks alternate by history parity (X from even indices)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timeline_holds() {
        let timeline = Timeline::new();
        assert!(TurnParityInvariant::holds(&timeline));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut timeline = Timeline::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ] {
            timeline.play(pos).expect("legal move");
        }

        assert!(TurnParityInvariant::holds(&timeline));
    }

    #[test]
    fn test_parity_restored_after_branching() {
        let mut timeline = Timeline::new();
        timeline.play(Position::TopLeft).expect("legal move");
        timeline.play(Position::Center).expect("legal move");
        timeline.play(Position::TopCenter).expect("legal move");
        timeline.jump_to(1).expect("index recorded");
        timeline.play(Position::BottomLeft).expect("legal move");

        assert!(TurnParityInvariant::holds(&timeline));
    }

    #[test]
    fn test_first_mark_by_o_violates() {
        let mut timeline = Timeline::new();
        let mut bad = Board::new();
        bad.set(Position::Center, Square::Occupied(Player::O));
        timeline.history.push(bad);
        timeline.current = 1;

        assert!(!TurnParityInvariant::holds(&timeline));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut timeline = Timeline::new();
        timeline.play(Position::TopLeft).expect("legal move");

        // X plays again instead of O.
        let mut bad = timeline.history[1].clone();
        bad.set(Position::Center, Square::Occupied(Player::X));
        timeline.history.push(bad);
        timeline.current = 2;

        assert!(!TurnParityInvariant::holds(&timeline));
    }
}
