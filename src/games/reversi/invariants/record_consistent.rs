//! Record consistency invariant: every placement added exactly one disc.

use super::super::{GameInProgress, Side};
use super::Invariant;

/// Invariant: discs on the board equal the starting discs plus recorded moves.
///
/// Captures only recolor discs, so each accepted placement adds one.
pub struct RecordConsistentInvariant;

impl Invariant<GameInProgress> for RecordConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let board = game.board();
        let occupied = board.recount(Side::Black) as usize + board.recount(Side::White) as usize;
        occupied == game.initial_discs as usize + game.record().moves().len()
    }

    fn description() -> &'static str {
        "Disc total equals starting discs plus recorded moves"
    }
}
