//! Threeline - tic-tac-toe with a navigable move history
//!
//! The core is a snapshot timeline: every move appends a full board
//! snapshot, and the active index can jump to any recorded state.
//! Playing from a past state discards the overwritten future.
//!
//! # Architecture
//!
//! - **Game**: board types, pure win/locate/draw rules, the timeline,
//!   and first-class invariants over it
//! - **View**: a serializable render model (status line, labeled move
//!   list, winning line) consumed by any shell
//! - **Tui**: a terminal shell feeding cell plays, history jumps, and
//!   sort toggles back into the core
//!
//! # Example
//!
//! ```
//! use threeline::{GameStatus, Position, Timeline};
//!
//! let mut timeline = Timeline::new();
//! timeline.play(Position::Center)?;
//! timeline.play(Position::TopLeft)?;
//! timeline.jump_to(1)?;
//!
//! assert_eq!(timeline.status(), GameStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
pub mod tui;

// Crate-level exports - Game core
pub use game::{
    Board, GameEvent, GameStatus, JumpError, PlayError, Player, Position, Square, Timeline,
};

// Crate-level exports - Pure rules
pub use game::{check_winner, is_full, move_location, MoveLocation, Win};

// Crate-level exports - Invariants
pub use game::invariants::{
    CursorInRangeInvariant, Invariant, InvariantSet, InvariantViolation, SingleStepInvariant,
    TimelineInvariants, TurnParityInvariant,
};

// Crate-level exports - Render model
pub use game::view::{move_entries, status_line, GameView, MoveEntry, SortOrder};
