//! Turn progression: continue, forced pass, or game over.

use super::super::phases::Outcome;
use super::super::types::{Board, Side};
use super::capture::has_legal_move;
use tracing::{debug, instrument};

/// What happens after the board has been judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// The given side moves next.
    Continue(Side),
    /// The opponent has no placement; the given side moves again.
    Pass(Side),
    /// No further moves.
    Over(Outcome),
}

impl TurnState {
    /// The side to move, unless the game is over.
    pub fn to_move(self) -> Option<Side> {
        match self {
            TurnState::Continue(side) | TurnState::Pass(side) => Some(side),
            TurnState::Over(_) => None,
        }
    }
}

/// Judges `board` after `just_moved` placed a disc.
///
/// Elimination and a full board are checked before any legality scan, so an
/// eliminated side loses even while empty cells remain.
#[instrument(level = "debug", skip(board))]
pub fn advance(board: &Board, just_moved: Side) -> TurnState {
    let black = board.count(Side::Black);
    let white = board.count(Side::White);

    let state = if black == 0 {
        TurnState::Over(Outcome::win_for(Side::White))
    } else if white == 0 {
        TurnState::Over(Outcome::win_for(Side::Black))
    } else if board.empty_count() == 0 {
        TurnState::Over(Outcome::from_counts(black, white))
    } else if has_legal_move(board, just_moved.other()) {
        TurnState::Continue(just_moved.other())
    } else if has_legal_move(board, just_moved) {
        TurnState::Pass(just_moved)
    } else {
        // Mutual block with empty cells left.
        TurnState::Over(Outcome::from_counts(black, white))
    };

    debug!(?state, black, white, "Turn judged");
    state
}

/// Judges `board` before `to_move` attempts a placement.
#[instrument(level = "debug", skip(board))]
pub fn assess(board: &Board, to_move: Side) -> TurnState {
    advance(board, to_move.other())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(diagram: &str) -> Board {
        diagram.parse().expect("valid diagram")
    }

    #[test]
    fn test_opening_continues() {
        let board = Board::new();
        assert_eq!(assess(&board, Side::Black), TurnState::Continue(Side::Black));
        assert_eq!(advance(&board, Side::Black), TurnState::Continue(Side::White));
    }

    #[test]
    fn test_forced_pass() {
        // White has nothing to flank; black can play (3,0).
        let board = board(
            "B W W . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .",
        );
        assert_eq!(advance(&board, Side::Black), TurnState::Pass(Side::Black));
        assert_eq!(assess(&board, Side::White), TurnState::Pass(Side::Black));
        assert_eq!(assess(&board, Side::Black), TurnState::Continue(Side::Black));
    }

    #[test]
    fn test_elimination_wins_with_empties_left() {
        let board = board(
            "B B . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .",
        );
        assert_eq!(advance(&board, Side::Black), TurnState::Over(Outcome::BlackWin));
        assert_eq!(advance(&board, Side::White), TurnState::Over(Outcome::BlackWin));
    }

    #[test]
    fn test_full_board_compares_counts() {
        let half = "B B B B B B B B\n".repeat(4) + &"W W W W W W W W\n".repeat(4);
        assert_eq!(
            advance(&board(&half), Side::White),
            TurnState::Over(Outcome::Draw)
        );

        let mut cells = "B".repeat(33);
        cells.push_str(&"W".repeat(31));
        assert_eq!(
            advance(&board(&cells), Side::Black),
            TurnState::Over(Outcome::BlackWin)
        );
    }

    #[test]
    fn test_mutual_block_is_terminal() {
        let even = board(
            "B . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . W",
        );
        assert_eq!(advance(&even, Side::Black), TurnState::Over(Outcome::Draw));

        let uneven = board(
            "B . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . W
             . . . . . . . W",
        );
        assert_eq!(advance(&uneven, Side::Black), TurnState::Over(Outcome::WhiteWin));
        assert_eq!(TurnState::Over(Outcome::WhiteWin).to_move(), None);
    }
}
