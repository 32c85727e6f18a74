//! Contract-based validation for Reversi.
//!
//! A placement is checked before it is applied (is it this side's turn?) and
//! the resulting game is checked afterwards against the invariant set.

use super::action::{GameError, Move};
use super::invariants::{InvariantSet, PlacementInvariants};
use super::typestate::GameInProgress;
use super::Side;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

/// Precondition: the move belongs to the side whose turn it is.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`GameError::WrongSide`] when the sides differ.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), GameError> {
        if mov.side != game.to_move() {
            warn!(expected = ?game.to_move(), found = ?mov.side, "Move out of turn");
            Err(GameError::WrongSide {
                expected: game.to_move(),
                found: mov.side,
            })
        } else {
            Ok(())
        }
    }
}

/// Contract for placements.
///
/// Occupied and non-capturing targets are not contract failures; the session
/// reports them as rejections.
///
/// Postconditions:
/// - every invariant in [`PlacementInvariants`] holds
/// - exactly one disc was added
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), GameError> {
        PlayersTurn::check(action, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), GameError> {
        let mut failures: Vec<String> = match PlacementInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations.into_iter().map(|v| v.description).collect(),
        };

        if discs(after) != discs(before) + 1 {
            failures.push(format!(
                "Disc total went from {} to {}",
                discs(before),
                discs(after)
            ));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(GameError::InvariantViolation(format!(
                "Postcondition failed: {}",
                failures.join("; ")
            )))
        }
    }
}

fn discs(game: &GameInProgress) -> usize {
    game.board().count(Side::Black) as usize + game.board().count(Side::White) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::reversi::invariants::opening;
    use crate::games::reversi::{Cell, GameResult, Position};

    #[test]
    fn test_precondition_right_side() {
        let game = opening();
        let action = Move::new(Side::Black, Position::new(3, 5));
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_wrong_side() {
        let game = opening();
        let action = Move::new(Side::White, Position::new(3, 5));
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(GameError::WrongSide {
                expected: Side::Black,
                found: Side::White,
            })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = opening();
        let Ok(GameResult::InProgress(after)) = game.clone().place(Position::new(3, 5)) else {
            panic!("Expected in-progress game");
        };
        assert!(MoveContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = opening();
        let Ok(GameResult::InProgress(mut after)) = game.clone().place(Position::new(3, 5)) else {
            panic!("Expected in-progress game");
        };
        after
            .board
            .set_unchecked(Position::new(0, 0), Cell::Occupied(Side::White));
        assert!(matches!(
            MoveContract::post(&game, &after),
            Err(GameError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_requires_one_new_disc() {
        let game = opening();
        assert!(matches!(
            MoveContract::post(&game, &game),
            Err(GameError::InvariantViolation(_))
        ));
    }
}
