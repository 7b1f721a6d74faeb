//! First-class invariants for a tic-tac-toe round.
//!
//! Each invariant is a zero-sized type checked against a round of any phase.
//! Rounds run the whole set under `debug_assert!` after each placement.

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// A property of a round that every placement must preserve.
pub trait Invariant<S> {
    /// Whether the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// What the property promises, used in violation reports.
    fn description() -> &'static str;
}

/// A broken invariant, named by its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the broken invariant.
    pub description: &'static str,
}

/// Invariants checked together. Implemented for pairs and triples.
pub trait InvariantSet<S> {
    /// Checks every member, reporting all that fail.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn verdict<S, I: Invariant<S>>(state: &S) -> Option<InvariantViolation> {
    (!I::holds(state)).then(|| InvariantViolation {
        description: I::description(),
    })
}

fn gather<const N: usize>(
    verdicts: [Option<InvariantViolation>; N],
) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = verdicts.into_iter().flatten().collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, A: Invariant<S>, B: Invariant<S>> InvariantSet<S> for (A, B) {
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        gather([verdict::<S, A>(state), verdict::<S, B>(state)])
    }
}

impl<S, A: Invariant<S>, B: Invariant<S>, C: Invariant<S>> InvariantSet<S> for (A, B, C) {
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        gather([
            verdict::<S, A>(state),
            verdict::<S, B>(state),
            verdict::<S, C>(state),
        ])
    }
}

/// Every round invariant as one set.
pub type RoundInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);
