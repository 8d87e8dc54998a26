//! Formal verification of invariants using Kani model checker.
//!
//! These proof harnesses mathematically verify that invariants hold
//! for ALL possible play sequences (bounded).

#[cfg(kani)]
mod proofs {
    use crate::game::invariants::{InvariantSet, TimelineInvariants};
    use crate::game::{Position, Timeline};

    /// Verify the invariant set holds after any short play sequence,
    /// including rejected plays and arbitrary jumps.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_invariants_after_arbitrary_plays() {
        let mut timeline = Timeline::new();

        for _ in 0..3 {
            let index: usize = kani::any();
            kani::assume(index < 9);
            let pos = Position::from_index(index).expect("index is in range");
            let _ = timeline.play(pos);

            let jump: usize = kani::any();
            if jump < timeline.history().len() {
                let _ = timeline.jump_to(jump);
            }
        }

        assert!(
            TimelineInvariants::check_all(&timeline).is_ok(),
            "Timeline invariant violated"
        );
    }
}
