//! Plain-text board view.

use super::format_grid;
use crate::games::reversi::{Cell, Side, Snapshot};
use std::fmt;

/// Renders a [`Snapshot`] as text: `#` black, `O` white, `.` empty.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a>(pub &'a Snapshot);

impl BoardView<'_> {
    fn symbol(cell: Cell) -> char {
        match cell {
            Cell::Empty => '.',
            Cell::Occupied(Side::Black) => '#',
            Cell::Occupied(Side::White) => 'O',
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        let symbols = snapshot.rows().iter().flatten().map(|cell| Self::symbol(*cell));
        format_grid(symbols, f)?;
        write!(
            f,
            "\nBlack (#): {}  White (O): {}",
            snapshot.black(),
            snapshot.white()
        )?;
        match (snapshot.to_move(), snapshot.outcome()) {
            (_, Some(outcome)) => write!(f, "\n{outcome}"),
            (Some(side), None) => write!(f, "\n{side} to move"),
            (None, None) => Ok(()),
        }
    }
}
