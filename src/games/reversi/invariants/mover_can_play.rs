//! Mover invariant: an in-progress game never waits on a side with no move.

use super::super::GameInProgress;
use super::super::rules::has_legal_move;
use super::Invariant;

/// Invariant: the side to move has at least one legal placement.
///
/// Passes are resolved by the turn judge before control returns, so a game
/// that still needs a pass must not be handed out.
pub struct MoverCanPlayInvariant;

impl Invariant<GameInProgress> for MoverCanPlayInvariant {
    fn holds(game: &GameInProgress) -> bool {
        has_legal_move(game.board(), game.to_move())
    }

    fn description() -> &'static str {
        "Side to move has a legal placement"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::reversi::invariants::opening;
    use crate::games::reversi::{Board, GameResult, GameSetup, Side};

    fn pass_board() -> Board {
        format!("B W W{}", " .".repeat(61))
            .parse()
            .expect("valid diagram")
    }

    #[test]
    fn test_opening_holds() {
        assert!(MoverCanPlayInvariant::holds(&opening()));
    }

    #[test]
    fn test_forced_pass_holds() {
        // White cannot flank anything, so Black keeps the turn.
        let Ok(GameResult::InProgress(game)) =
            GameSetup::from_board(pass_board(), Side::White).start()
        else {
            panic!("Expected in-progress game");
        };
        assert_eq!(game.to_move(), Side::Black);
        assert!(game.after_pass());
        assert!(MoverCanPlayInvariant::holds(&game));
    }

    #[test]
    fn test_stuck_mover_violates() {
        let mut game = opening();
        game.to_move = Side::White;
        game.board = pass_board();
        assert!(!MoverCanPlayInvariant::holds(&game));
    }
}
