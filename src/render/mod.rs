//! Text rendering and screen-coordinate mapping.
//!
//! Renderers only ever see a [`Snapshot`](crate::Snapshot); nothing here can
//! mutate a game.

mod layout;
mod text;

pub use layout::ScreenLayout;
pub use text::BoardView;

use crate::games::reversi::EDGE;
use std::fmt::{self, Formatter};

/// Formats 64 characters as a lettered, numbered grid.
///
/// `symbols` must yield exactly 64 items in row-major order.
pub fn format_grid<I: Iterator<Item = char>>(mut symbols: I, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "   A B C D E F G H")?;

    for row in 0..EDGE {
        write!(f, "\n {} ", row + 1)?;
        for column in 0..EDGE {
            let symbol = symbols.next().ok_or(fmt::Error)?;
            if column + 1 == EDGE {
                write!(f, "{symbol}")?;
            } else {
                write!(f, "{symbol} ")?;
            }
        }
    }

    match symbols.next() {
        None => Ok(()),
        Some(_) => Err(fmt::Error),
    }
}
