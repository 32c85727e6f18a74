//! Core domain types for Reversi.

use super::position::{EDGE, OutOfRange, Position};
use super::rules::CaptureLine;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELLS: usize = (EDGE as usize) * (EDGE as usize);

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Side {
    /// Black (moves first).
    Black,
    /// White.
    White,
}

impl Side {
    /// Returns the opposing side.
    pub fn other(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Single-character marker used in move tokens.
    pub fn marker(self) -> char {
        match self {
            Side::Black => 'b',
            Side::White => 'w',
        }
    }

    /// Reads a token marker.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'b' => Some(Side::Black),
            'w' => Some(Side::White),
            _ => None,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No disc.
    #[default]
    Empty,
    /// Disc of the given side.
    Occupied(Side),
}

impl Cell {
    /// Diagram character: `B`, `W` or `.`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Side::Black) => 'B',
            Cell::Occupied(Side::White) => 'W',
        }
    }
}

/// 8×8 board with cached disc counts.
///
/// The grid is the source of truth; counts are kept in step by [`Board::apply`],
/// the only mutator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELLS],
    black: u8,
    white: u8,
}

impl Board {
    /// Creates the starting position: (3,3) and (4,4) black, (3,4) and (4,3) white.
    #[instrument]
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; CELLS];
        for (column, row, side) in [
            (3, 3, Side::Black),
            (4, 4, Side::Black),
            (3, 4, Side::White),
            (4, 3, Side::White),
        ] {
            cells[row * EDGE as usize + column] = Cell::Occupied(side);
        }
        Self {
            cells,
            black: 2,
            white: 2,
        }
    }

    /// Builds a board from a grid, deriving the counts.
    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        let mut board = Self {
            cells,
            black: 0,
            white: 0,
        };
        board.black = board.recount(Side::Black);
        board.white = board.recount(Side::White);
        board
    }

    /// Returns the cell at `position`.
    pub fn at(&self, position: Position) -> Result<Cell, OutOfRange> {
        Ok(self.cells[position.index()?])
    }

    /// Returns true if `position` is on the board and holds no disc.
    pub fn is_empty(&self, position: Position) -> bool {
        matches!(self.at(position), Ok(Cell::Empty))
    }

    /// Cached disc count for `side`.
    pub fn count(&self, side: Side) -> u8 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    /// Disc count for `side` recomputed from the grid.
    pub fn recount(&self, side: Side) -> u8 {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(side))
            .count() as u8
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|position| self.is_empty(*position))
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        CELLS - self.black as usize - self.white as usize
    }

    /// Places `side` at `position` and flips every captured disc.
    ///
    /// All preconditions are checked before the grid changes, so a failure
    /// leaves the board untouched. Returns the number of flipped discs.
    #[instrument(level = "debug", skip(self, lines), fields(lines = lines.len()))]
    pub fn apply(
        &mut self,
        position: Position,
        side: Side,
        lines: &[CaptureLine],
    ) -> Result<usize, ApplyError> {
        let target = position.index()?;
        if self.cells[target] != Cell::Empty {
            return Err(ApplyError::Occupied(position));
        }

        let mut flips = Vec::new();
        for captured in lines.iter().flat_map(|line| line.positions()) {
            let index = captured.index()?;
            if self.cells[index] != Cell::Occupied(side.other()) {
                return Err(ApplyError::NotCapturable(*captured));
            }
            if !flips.contains(&index) {
                flips.push(index);
            }
        }

        self.cells[target] = Cell::Occupied(side);
        for index in &flips {
            self.cells[*index] = Cell::Occupied(side);
        }

        let flipped = flips.len() as u8;
        match side {
            Side::Black => {
                self.black += 1 + flipped;
                self.white -= flipped;
            }
            Side::White => {
                self.white += 1 + flipped;
                self.black -= flipped;
            }
        }

        debug!(%position, ?side, flipped, black = self.black, white = self.white, "Move applied");
        Ok(flips.len())
    }

    /// The grid as rows, indexed `[row][column]`.
    pub fn rows(&self) -> [[Cell; EDGE as usize]; EDGE as usize] {
        let mut rows = [[Cell::Empty; EDGE as usize]; EDGE as usize];
        for (index, cell) in self.cells.iter().enumerate() {
            rows[index / EDGE as usize][index % EDGE as usize] = *cell;
        }
        rows
    }

    /// 0/1 occupancy plane for `side`, indexed `[row][column]`.
    pub fn plane(&self, side: Side) -> [[u8; EDGE as usize]; EDGE as usize] {
        self.rows()
            .map(|row| row.map(|cell| u8::from(cell == Cell::Occupied(side))))
    }

    #[cfg(test)]
    pub(crate) fn set_unchecked(&mut self, position: Position, cell: Cell) {
        if let Ok(index) = position.index() {
            self.cells[index] = cell;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::format_grid(self.cells.iter().map(|cell| cell.symbol()), f)
    }
}

/// Reads a 64-cell diagram of `B`, `W` and `.`, row 0 first. Whitespace is ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELLS];
        let mut filled = 0;
        for symbol in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match symbol {
                'B' | 'b' => Cell::Occupied(Side::Black),
                'W' | 'w' => Cell::Occupied(Side::White),
                '.' => Cell::Empty,
                other => return Err(ParseBoardError::BadSymbol(other)),
            };
            *cells
                .get_mut(filled)
                .ok_or(ParseBoardError::WrongLength(filled + 1))? = cell;
            filled += 1;
        }
        if filled != CELLS {
            return Err(ParseBoardError::WrongLength(filled));
        }
        Ok(Self::from_cells(cells))
    }
}

/// Board diagram could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ParseBoardError {
    /// Character other than `B`, `W` or `.`.
    #[display("Unexpected board symbol {:?}", _0)]
    BadSymbol(char),
    /// Not exactly 64 cells.
    #[display("Board diagram has {} cells, expected 64", _0)]
    WrongLength(usize),
}

impl std::error::Error for ParseBoardError {}

/// A precondition of [`Board::apply`] was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ApplyError {
    /// Target or captured position is off the board.
    #[display("{}", _0)]
    OutOfRange(OutOfRange),
    /// Target cell already holds a disc.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Position),
    /// A captured position does not hold an opposing disc.
    #[display("Cell {} does not hold an opposing disc", _0)]
    NotCapturable(Position),
}

impl std::error::Error for ApplyError {}

impl From<OutOfRange> for ApplyError {
    fn from(err: OutOfRange) -> Self {
        Self::OutOfRange(err)
    }
}
