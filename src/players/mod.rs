//! Players that pick placements for a side.

mod random;

pub use random::{AutomationExhausted, DEFAULT_RETRY_CEILING, RandomPlayer};

use crate::games::reversi::{Board, Position, Side};

/// Something that chooses where `side` places next.
pub trait Player {
    /// Display name.
    fn name(&self) -> &str;

    /// Picks a placement for `side`, which is to move on `board`.
    fn choose(&mut self, board: &Board, side: Side) -> Result<Position, AutomationExhausted>;
}
