//! Placement legality: the eight-direction capture scan.

use super::super::position::{Direction, OutOfRange, Position};
use super::super::types::{Board, Cell, Side};
use tracing::{instrument, trace};

/// Opposing discs that flip along one direction from a placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureLine {
    direction: Direction,
    positions: Vec<Position>,
}

impl CaptureLine {
    /// Creates a capture line. `positions` run nearest to farthest.
    pub fn new(direction: Direction, positions: Vec<Position>) -> Self {
        Self {
            direction,
            positions,
        }
    }

    /// Direction scanned from the placement.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Captured positions, nearest first.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The cell already holds a disc.
    #[display("cell is occupied")]
    Occupied,
    /// The cell is empty but flanks nothing.
    #[display("placement captures nothing")]
    NoCapture,
}

/// Result of evaluating a candidate placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The cell is occupied.
    Rejected,
    /// The cell is empty but no direction yields a capture.
    NoCapture,
    /// The placement captures at least one line.
    Legal(Vec<CaptureLine>),
}

impl MoveOutcome {
    /// Returns true for [`MoveOutcome::Legal`].
    pub fn is_legal(&self) -> bool {
        matches!(self, MoveOutcome::Legal(_))
    }

    /// The refusal reason, if the placement is not legal.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Rejected => Some(Rejection::Occupied),
            MoveOutcome::NoCapture => Some(Rejection::NoCapture),
            MoveOutcome::Legal(_) => None,
        }
    }

    /// Total number of discs that would flip.
    pub fn captured(&self) -> usize {
        match self {
            MoveOutcome::Legal(lines) => lines.iter().map(|line| line.positions().len()).sum(),
            _ => 0,
        }
    }
}

/// Evaluates placing `side` at `position` on `board`.
///
/// Off-board `position` is a caller error. Every in-range query returns one of
/// the three outcomes.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board, position: Position, side: Side) -> Result<MoveOutcome, OutOfRange> {
    if board.at(position)? != Cell::Empty {
        return Ok(MoveOutcome::Rejected);
    }

    let lines: Vec<CaptureLine> = Direction::all()
        .filter_map(|direction| scan(board, position, side, direction))
        .collect();

    if lines.is_empty() {
        Ok(MoveOutcome::NoCapture)
    } else {
        Ok(MoveOutcome::Legal(lines))
    }
}

/// Walks one direction and confirms the run only when a same-side anchor closes it.
fn scan(board: &Board, origin: Position, side: Side, direction: Direction) -> Option<CaptureLine> {
    let opponent = Cell::Occupied(side.other());
    let anchor = Cell::Occupied(side);

    let mut next = origin.step(direction);
    // The first neighbour must be an opposing disc.
    if board.at(next).ok()? != opponent {
        return None;
    }

    let mut run = vec![next];
    loop {
        next = next.step(direction);
        match board.at(next) {
            Ok(cell) if cell == opponent => run.push(next),
            Ok(cell) if cell == anchor => {
                trace!(?direction, captured = run.len(), "Anchor found");
                return Some(CaptureLine::new(direction, run));
            }
            // Empty cell or the board edge: the run is open-ended.
            _ => return None,
        }
    }
}

/// All positions where `side` has a legal placement, row-major.
#[instrument(level = "trace", skip(board))]
pub fn legal_positions(board: &Board, side: Side) -> Vec<Position> {
    board
        .empty_positions()
        .filter(|position| matches!(evaluate(board, *position, side), Ok(MoveOutcome::Legal(_))))
        .collect()
}

/// Returns true if `side` can place anywhere.
#[instrument(level = "trace", skip(board))]
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board
        .empty_positions()
        .any(|position| matches!(evaluate(board, position, side), Ok(MoveOutcome::Legal(_))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(diagram: &str) -> Board {
        diagram.parse().expect("valid diagram")
    }

    #[test]
    fn test_initial_legal_moves_for_black() {
        let board = Board::new();
        let mut moves = legal_positions(&board, Side::Black);
        moves.sort();
        let mut expected = vec![
            Position::new(2, 4),
            Position::new(3, 5),
            Position::new(4, 2),
            Position::new(5, 3),
        ];
        expected.sort();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_single_capture_from_start() {
        let board = Board::new();
        let outcome = evaluate(&board, Position::new(2, 4), Side::Black).expect("in range");
        assert_eq!(
            outcome,
            MoveOutcome::Legal(vec![CaptureLine::new(
                Direction::East,
                vec![Position::new(3, 4)]
            )])
        );
        assert_eq!(outcome.captured(), 1);
    }

    #[test]
    fn test_unflanked_cell_is_no_capture() {
        let board = Board::new();
        assert_eq!(
            evaluate(&board, Position::new(2, 3), Side::Black),
            Ok(MoveOutcome::NoCapture)
        );
        assert_eq!(
            evaluate(&board, Position::new(0, 0), Side::Black),
            Ok(MoveOutcome::NoCapture)
        );
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let board = Board::new();
        let outcome = evaluate(&board, Position::new(3, 3), Side::White).expect("in range");
        assert_eq!(outcome, MoveOutcome::Rejected);
        assert_eq!(outcome.rejection(), Some(Rejection::Occupied));
    }

    #[test]
    fn test_off_board_query_is_error() {
        let board = Board::new();
        assert!(evaluate(&board, Position::new(-1, 0), Side::Black).is_err());
        assert!(evaluate(&board, Position::new(0, 8), Side::Black).is_err());
    }

    #[test]
    fn test_run_to_edge_is_not_captured() {
        let board = board(
            ". W W W W W W W
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . B",
        );
        assert_eq!(
            evaluate(&board, Position::new(0, 0), Side::Black),
            Ok(MoveOutcome::NoCapture)
        );
    }

    #[test]
    fn test_long_run_closed_by_anchor() {
        let board = board(
            "B W W W W W W .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .",
        );
        let outcome = evaluate(&board, Position::new(7, 0), Side::Black).expect("in range");
        let MoveOutcome::Legal(lines) = outcome else {
            panic!("expected a legal move");
        };
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].direction(), Direction::West);
        let expected: Vec<_> = (1..7).rev().map(|c| Position::new(c, 0)).collect();
        assert_eq!(lines[0].positions(), expected.as_slice());
    }

    #[test]
    fn test_gap_breaks_the_run() {
        // W then empty then B: open-ended, and the far anchor does not count.
        let board = board(
            ". W . B . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . W",
        );
        assert_eq!(
            evaluate(&board, Position::new(0, 0), Side::Black),
            Ok(MoveOutcome::NoCapture)
        );
    }

    #[test]
    fn test_adjacent_empty_or_same_side_contributes_nothing() {
        let board = board(
            ". . W B . . . .
             B W B . . . . .
             . . B . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .",
        );
        // From (0,0): east neighbour empty, south neighbour black, diagonal W then B.
        let outcome = evaluate(&board, Position::new(0, 0), Side::Black).expect("in range");
        assert_eq!(
            outcome,
            MoveOutcome::Legal(vec![CaptureLine::new(
                Direction::SouthEast,
                vec![Position::new(1, 1)]
            )])
        );
    }

    #[test]
    fn test_multiple_lines() {
        // Black at (2,2) closes runs east, south and south-east.
        let board = board(
            ". . . . . . . .
             . . . . . . . .
             . . . W B . . .
             . . W W . . . .
             . . B . B . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .",
        );
        let outcome = evaluate(&board, Position::new(2, 2), Side::Black).expect("in range");
        let MoveOutcome::Legal(lines) = &outcome else {
            panic!("expected a legal move");
        };
        let directions: Vec<_> = lines.iter().map(CaptureLine::direction).collect();
        assert_eq!(
            directions,
            vec![Direction::East, Direction::SouthEast, Direction::South]
        );
        assert_eq!(outcome.captured(), 3);
    }

    #[test]
    fn test_has_legal_move() {
        let stuck = board(
            "B . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . W",
        );
        assert!(!has_legal_move(&stuck, Side::Black));
        assert!(!has_legal_move(&stuck, Side::White));
        assert!(has_legal_move(&Board::new(), Side::White));
    }
}
