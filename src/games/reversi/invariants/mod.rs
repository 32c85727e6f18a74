//! First-class invariants for Reversi.
//!
//! Invariants are properties every in-progress game must satisfy. They are
//! checked after each placement in debug builds and tested on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

pub mod disc_count;
pub mod mover_can_play;
pub mod record_consistent;

pub use disc_count::DiscCountInvariant;
pub use mover_can_play::MoverCanPlayInvariant;
pub use record_consistent::RecordConsistentInvariant;

/// Invariants that hold right after a placement, before the turn is judged.
pub type PlacementInvariants = (DiscCountInvariant, RecordConsistentInvariant);

/// All Reversi invariants as a composable set.
pub type ReversiInvariants = (
    DiscCountInvariant,
    RecordConsistentInvariant,
    MoverCanPlayInvariant,
);

#[cfg(test)]
pub(crate) fn opening() -> super::GameInProgress {
    match super::GameSetup::new().start() {
        Ok(super::GameResult::InProgress(game)) => game,
        other => panic!("Expected in-progress game, got {other:?}"),
    }
}
