//! Tests for the render model: move-list labels, status lines, and
//! display ordering.

use threeline::{move_entries, status_line, GameView, Position, SortOrder, Timeline};

fn timeline_with(indices: &[usize]) -> Timeline {
    let mut timeline = Timeline::new();
    for &index in indices {
        let pos = Position::from_index(index).expect("test index in range");
        timeline.play(pos).expect("legal move");
    }
    timeline
}

#[test]
fn test_move_list_labels() {
    // X at top-left, O at center.
    let timeline = timeline_with(&[0, 4]);

    let entries = move_entries(&timeline);
    let labels: Vec<&str> = entries.iter().map(|e| e.description.as_str()).collect();

    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "Go to move #1 (1, 1)",
            "You are at move #2",
        ]
    );
    assert!(entries[2].is_current);
    assert!(!entries[0].is_current);
}

#[test]
fn test_active_label_wins_over_start_label() {
    let mut timeline = timeline_with(&[0, 4]);
    timeline.jump_to(0).expect("index recorded");

    let entries = move_entries(&timeline);
    assert_eq!(entries[0].description, "You are at move #0");
    assert_eq!(entries[1].description, "Go to move #1 (1, 1)");
    assert_eq!(entries[2].description, "Go to move #2 (2, 2)");
}

#[test]
fn test_status_lines() {
    let mut timeline = Timeline::new();
    assert_eq!(status_line(&timeline), "Next player: X");

    timeline.play(Position::Center).expect("legal move");
    assert_eq!(status_line(&timeline), "Next player: O");

    let won = timeline_with(&[0, 4, 1, 3, 2]);
    assert_eq!(status_line(&won), "Winner: X");

    let drawn = timeline_with(&[0, 1, 2, 3, 4, 6, 5, 8, 7]);
    assert_eq!(status_line(&drawn), "Draw: no winner");
}

#[test]
fn test_descending_view_reverses_display_only() {
    let timeline = timeline_with(&[0, 4, 1]);
    let before = timeline.clone();

    let ascending = GameView::new(&timeline, SortOrder::Ascending);
    let descending = GameView::new(&timeline, SortOrder::Descending);

    let mut reversed = ascending.moves.clone();
    reversed.reverse();
    assert_eq!(descending.moves, reversed);
    assert_eq!(descending.moves[0].description, "You are at move #3");

    // Building views never touches the timeline.
    assert_eq!(timeline, before);
    assert_eq!(timeline.history().len(), 4);
    assert_eq!(timeline.current_index(), 3);
}

#[test]
fn test_sort_toggle_roundtrip() {
    assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
    assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
    assert_eq!(
        SortOrder::Ascending.toggle().toggle(),
        SortOrder::Ascending
    );
}

#[test]
fn test_view_carries_winning_line_for_highlighting() {
    let timeline = timeline_with(&[0, 4, 1, 3, 2]);
    let view = GameView::new(&timeline, SortOrder::Ascending);

    let win = view.winner.expect("top row is complete");
    assert_eq!(
        win.line,
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
    assert_eq!(view.status, "Winner: X");
}

#[test]
fn test_view_serializes_to_json() {
    let timeline = timeline_with(&[0, 4]);
    let view = GameView::new(&timeline, SortOrder::Ascending);

    let value = serde_json::to_value(&view).expect("view serializes");
    assert_eq!(value["status"], "Next player: X");
    assert_eq!(value["moves"][0]["description"], "Go to game start");
}
