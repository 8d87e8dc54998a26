//! Single-step invariant: each snapshot adds exactly one mark.

use super::super::timeline::Timeline;
use super::super::types::{Board, Square};
use super::super::Position;
use super::Invariant;

/// Invariant: The history is a chain of single-mark additions.
///
/// Snapshot 0 is the empty board. Every consecutive pair differs in
/// exactly one cell, and that cell goes from empty to occupied. Marks
/// are never removed or overwritten.
pub struct SingleStepInvariant;

impl Invariant<Timeline> for SingleStepInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let history = timeline.history();

        let Some(first) = history.first() else {
            return false;
        };
        if *first != Board::new() {
            return false;
        }

        for window in history.windows(2) {
            let (prev, next) = (&window[0], &window[1]);
            let mut changed = 0;

            for pos in Position::ALL {
                if prev.get(pos) != next.get(pos) {
                    if prev.get(pos) != Square::Empty {
                        return false;
                    }
                    changed += 1;
                }
            }

            if changed != 1 {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::types::Player;
    use super::*;

    #[test]
    fn test_new_timeline_holds() {
        let timeline = Timeline::new();
        assert!(SingleStepInvariant::holds(&timeline));
    }

    #[test]
    fn test_legal_moves_hold() {
        let mut timeline = Timeline::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ] {
            timeline.play(pos).expect("legal move");
        }

        assert!(SingleStepInvariant::holds(&timeline));
    }

    #[test]
    fn test_holds_after_branching_play() {
        let mut timeline = Timeline::new();
        timeline.play(Position::TopLeft).expect("legal move");
        timeline.play(Position::Center).expect("legal move");
        timeline.jump_to(1).expect("index recorded");
        timeline.play(Position::BottomRight).expect("legal move");

        assert!(SingleStepInvariant::holds(&timeline));
    }

    #[test]
    fn test_double_addition_violates() {
        let mut timeline = Timeline::new();
        let mut bad = Board::new();
        bad.set(Position::TopLeft, Square::Occupied(Player::X));
        bad.set(Position::TopRight, Square::Occupied(Player::O));
        timeline.history.push(bad);

        assert!(!SingleStepInvariant::holds(&timeline));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut timeline = Timeline::new();
        timeline.play(Position::Center).expect("legal move");

        // Flip an existing mark instead of adding a new one.
        let mut bad = timeline.history[1].clone();
        bad.set(Position::Center, Square::Occupied(Player::O));
        timeline.history.push(bad);
        timeline.current = 2;

        assert!(!SingleStepInvariant::holds(&timeline));
    }

    #[test]
    fn test_identical_snapshots_violate() {
        let mut timeline = Timeline::new();
        timeline.history.push(Board::new());

        assert!(!SingleStepInvariant::holds(&timeline));
    }
}
