//! Disc count invariant: cached counts agree with the grid.

use super::super::{GameInProgress, Side};
use super::Invariant;

/// Invariant: each side's cached count equals its discs on the grid.
pub struct DiscCountInvariant;

impl Invariant<GameInProgress> for DiscCountInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let board = game.board();
        [Side::Black, Side::White]
            .into_iter()
            .all(|side| board.count(side) == board.recount(side))
    }

    fn description() -> &'static str {
        "Cached disc counts match the grid"
    }
}
