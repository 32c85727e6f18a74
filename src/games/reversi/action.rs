//! First-class action types for Reversi.
//!
//! A move is a domain event: the side placing a disc and where. It round-trips
//! through the 3-character token used by the move log (`bC5`).

use super::Side;
use super::position::{OutOfRange, ParsePositionError, Position};
use super::record::RecordError;
use super::types::ApplyError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Length of one encoded move.
pub const TOKEN_LEN: usize = 3;

/// A placement by one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side placing the disc.
    pub side: Side,
    /// Where the disc goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(side: Side, position: Position) -> Self {
        Self { side, position }
    }

    /// Encodes the move as `[bw][A-H][1-8]`.
    pub fn token(&self) -> Result<String, OutOfRange> {
        Ok([
            self.side.marker(),
            self.position.column_char()?,
            self.position.row_char()?,
        ]
        .iter()
        .collect())
    }

    /// Splits a concatenated token string into moves.
    #[instrument(skip(process), fields(len = process.len()))]
    pub fn parse_sequence(process: &str) -> Result<Vec<Move>, ParseMoveError> {
        let chars: Vec<char> = process.chars().collect();
        if chars.len() % TOKEN_LEN != 0 {
            return Err(ParseMoveError::TrailingCharacters(chars.len() % TOKEN_LEN));
        }
        chars
            .chunks(TOKEN_LEN)
            .map(|chunk| Self::from_chars(chunk[0], chunk[1], chunk[2]))
            .collect()
    }

    fn from_chars(marker: char, column: char, row: char) -> Result<Self, ParseMoveError> {
        let side = Side::from_marker(marker).ok_or(ParseMoveError::BadSide(marker))?;
        // Tokens use upper-case columns only.
        if column.is_ascii_lowercase() {
            return Err(ParseMoveError::Position(ParsePositionError::BadColumn(column)));
        }
        let position = Position::from_chars(column, row)?;
        Ok(Self::new(side, position))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.side.marker(), self.position)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        match chars.as_slice() {
            [marker, column, row] => Self::from_chars(*marker, *column, *row),
            _ => Err(ParseMoveError::WrongLength(chars.len())),
        }
    }
}

/// A move token could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseMoveError {
    /// Token is not 3 characters.
    #[display("Move token has {} characters, expected 3", _0)]
    WrongLength(usize),
    /// Token string length is not a multiple of 3.
    #[display("Move sequence has {} trailing characters", _0)]
    TrailingCharacters(usize),
    /// First character is not `b` or `w`.
    #[display("Invalid side marker {:?}", _0)]
    BadSide(char),
    /// Column or row is invalid.
    #[display("{}", _0)]
    Position(ParsePositionError),
}

impl std::error::Error for ParseMoveError {}

impl From<ParsePositionError> for ParseMoveError {
    fn from(err: ParsePositionError) -> Self {
        Self::Position(err)
    }
}

/// Fatal error while playing a game.
///
/// Illegal placements are not errors; they come back as
/// [`GameResult::Rejected`](super::GameResult::Rejected).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// It is not this side's turn.
    #[display("It is {}'s turn, not {}'s", expected, found)]
    WrongSide {
        /// Side whose turn it is.
        expected: Side,
        /// Side that tried to move.
        found: Side,
    },

    /// A position outside the board reached the engine.
    #[display("{}", _0)]
    OutOfRange(OutOfRange),

    /// The board refused a capture set.
    #[display("Apply failed: {}", _0)]
    Apply(ApplyError),

    /// The game record was misused.
    #[display("{}", _0)]
    Record(RecordError),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

impl From<OutOfRange> for GameError {
    fn from(err: OutOfRange) -> Self {
        Self::OutOfRange(err)
    }
}

impl From<ApplyError> for GameError {
    fn from(err: ApplyError) -> Self {
        Self::Apply(err)
    }
}

impl From<RecordError> for GameError {
    fn from(err: RecordError) -> Self {
        Self::Record(err)
    }
}
