//! Board coordinates and the eight scan directions.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells along one edge of the board.
pub const EDGE: i8 = 8;

/// Column letters in token and text notation.
const COLUMNS: &str = "ABCDEFGH";

/// A (column, row) coordinate on the board.
///
/// Off-board values are representable so that direction arithmetic can step
/// past an edge; every read goes through [`Position::index`], which rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Column, `A`..`H` as 0..7.
    pub column: i8,
    /// Row, `1`..`8` as 0..7.
    pub row: i8,
}

impl Position {
    /// Creates a position without bounds checking.
    pub const fn new(column: i8, row: i8) -> Self {
        Self { column, row }
    }

    /// Creates a position, failing if it lies off the board.
    #[instrument]
    pub fn checked(column: i8, row: i8) -> Result<Self, OutOfRange> {
        let position = Self::new(column, row);
        position.index().map(|_| position)
    }

    /// Returns true if both coordinates are within 0..8.
    pub fn is_on_board(self) -> bool {
        (0..EDGE).contains(&self.column) && (0..EDGE).contains(&self.row)
    }

    /// Row-major index into a 64-cell grid.
    pub fn index(self) -> Result<usize, OutOfRange> {
        if self.is_on_board() {
            Ok(self.row as usize * EDGE as usize + self.column as usize)
        } else {
            Err(OutOfRange { position: self })
        }
    }

    /// Inverse of [`Position::index`].
    pub fn from_index(index: usize) -> Result<Self, OutOfRange> {
        let edge = EDGE as usize;
        // Clamp so that huge indices still report an off-board position.
        let row = (index / edge).min(i8::MAX as usize) as i8;
        Self::checked((index % edge) as i8, row)
    }

    /// Steps one unit in `direction`. The result may be off the board.
    pub fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.delta();
        Self::new(self.column + dc, self.row + dr)
    }

    /// Column letter, `'A'`..`'H'`.
    pub fn column_char(self) -> Result<char, OutOfRange> {
        self.index()?;
        Ok(char::from(b'A' + self.column as u8))
    }

    /// Row digit, `'1'`..`'8'`.
    pub fn row_char(self) -> Result<char, OutOfRange> {
        self.index()?;
        Ok(char::from(b'1' + self.row as u8))
    }

    /// All 64 on-board positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..EDGE).flat_map(|row| (0..EDGE).map(move |column| Position::new(column, row)))
    }

    /// Builds a position from a column letter and row digit.
    pub fn from_chars(column: char, row: char) -> Result<Self, ParsePositionError> {
        let column = COLUMNS
            .find(column.to_ascii_uppercase())
            .ok_or(ParsePositionError::BadColumn(column))?;
        let row = row
            .to_digit(10)
            .filter(|digit| (1..=8).contains(digit))
            .ok_or(ParsePositionError::BadRow(row))?;
        Ok(Self::new(column as i8, row as i8 - 1))
    }
}

/// Text notation, e.g. `C5`. Off-board positions print as raw coordinates.
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.column_char(), self.row_char()) {
            (Ok(column), Ok(row)) => write!(f, "{}{}", column, row),
            _ => write!(f, "({}, {})", self.column, self.row),
        }
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let column = chars.next().ok_or(ParsePositionError::Empty)?;
        let row = chars.next().ok_or(ParsePositionError::Empty)?;
        if chars.next().is_some() {
            return Err(ParsePositionError::TooLong);
        }
        Self::from_chars(column, row)
    }
}

/// A position outside the 8×8 grid reached the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Position {} is off the board", position)]
pub struct OutOfRange {
    /// The rejected position.
    pub position: Position,
}

/// Failure to read a position from `A1`-style notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ParsePositionError {
    /// No input.
    #[display("Missing column or row")]
    Empty,
    /// More than two characters.
    #[display("Position notation is two characters")]
    TooLong,
    /// Column letter outside `A`..`H`.
    #[display("Invalid column {:?}", _0)]
    BadColumn(char),
    /// Row digit outside `1`..`8`.
    #[display("Invalid row {:?}", _0)]
    BadRow(char),
}

impl std::error::Error for ParsePositionError {}

/// One of the eight unit steps from a cell: four axes plus four diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// Toward row 0.
    North,
    /// Toward row 0 and column 7.
    NorthEast,
    /// Toward column 7.
    East,
    /// Toward row 7 and column 7.
    SouthEast,
    /// Toward row 7.
    South,
    /// Toward row 7 and column 0.
    SouthWest,
    /// Toward column 0.
    West,
    /// Toward row 0 and column 0.
    NorthWest,
}

impl Direction {
    /// The (column, row) offset of one step.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// All eight directions.
    pub fn all() -> impl Iterator<Item = Direction> {
        <Direction as strum::IntoEnumIterator>::iter()
    }
}
