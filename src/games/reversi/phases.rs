//! Terminal outcome of a game.

use super::Side;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Black won.
    BlackWin,
    /// White won.
    WhiteWin,
    /// Equal disc counts.
    Draw,
}

impl Outcome {
    /// More discs wins; equal counts is a draw.
    pub fn from_counts(black: u8, white: u8) -> Self {
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::BlackWin,
            std::cmp::Ordering::Less => Outcome::WhiteWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::BlackWin => Some(Side::Black),
            Outcome::WhiteWin => Some(Side::White),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// The outcome in which `side` wins.
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::Black => Outcome::BlackWin,
            Side::White => Outcome::WhiteWin,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            Some(side) => write!(f, "{} wins", side),
            None => write!(f, "Draw"),
        }
    }
}
