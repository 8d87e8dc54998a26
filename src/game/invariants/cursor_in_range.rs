//! Cursor range invariant: the active index names a recorded snapshot.

use super::super::timeline::Timeline;
use super::Invariant;

/// Invariant: The active index is within the recorded history.
pub struct CursorInRangeInvariant;

impl Invariant<Timeline> for CursorInRangeInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.current_index() < timeline.history().len()
    }

    fn description() -> &'static str {
        "Active index is within the recorded history"
    }
}
