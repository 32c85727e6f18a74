//! Uniform-random automated player.

use super::Player;
use crate::games::reversi::rules::{MoveOutcome, evaluate};
use crate::games::reversi::{Board, Position, Side};
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, warn};

/// Candidate evaluations allowed per turn.
pub const DEFAULT_RETRY_CEILING: usize = 300;

/// The player ran out of attempts without finding a legal placement.
///
/// The turn judge only hands a turn to a side with a legal move, so this
/// signals an engine inconsistency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{} found no legal placement in {} attempts", side, attempts)]
pub struct AutomationExhausted {
    /// Side that was to move.
    pub side: Side,
    /// Candidates evaluated.
    pub attempts: usize,
}

/// Picks uniformly among empty cells, without replacement, until one is legal.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
    ceiling: usize,
}

impl RandomPlayer {
    /// Creates a player. `None` seeds from the OS.
    #[instrument]
    pub fn new(seed: Option<u64>, ceiling: usize) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            name: "Random".to_string(),
            rng,
            ceiling,
        }
    }

    /// Renames the player.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Evaluations allowed per turn.
    pub fn ceiling(&self) -> usize {
        self.ceiling
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new(None, DEFAULT_RETRY_CEILING)
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(level = "debug", skip(self, board), fields(player = %self.name))]
    fn choose(&mut self, board: &Board, side: Side) -> Result<Position, AutomationExhausted> {
        let mut candidates: Vec<Position> = board.empty_positions().collect();
        let mut attempts = 0;

        while attempts < self.ceiling && !candidates.is_empty() {
            let index = self.rng.random_range(0..candidates.len());
            let position = candidates.swap_remove(index);
            attempts += 1;
            if matches!(evaluate(board, position, side), Ok(MoveOutcome::Legal(_))) {
                debug!(%position, attempts, "Placement chosen");
                return Ok(position);
            }
        }

        warn!(?side, attempts, "No legal placement found");
        Err(AutomationExhausted { side, attempts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::reversi::rules::legal_positions;

    #[test]
    fn test_random_player_selects_legal_placement() {
        let mut player = RandomPlayer::new(Some(7), DEFAULT_RETRY_CEILING);
        let board = Board::new();
        let legal = legal_positions(&board, Side::Black);

        for _ in 0..100 {
            let position = player.choose(&board, Side::Black).expect("legal move exists");
            assert!(legal.contains(&position), "{position} is not legal");
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomPlayer::new(Some(42), DEFAULT_RETRY_CEILING);
        let mut b = RandomPlayer::new(Some(42), DEFAULT_RETRY_CEILING);
        for _ in 0..20 {
            assert_eq!(a.choose(&board, Side::Black), b.choose(&board, Side::Black));
        }
    }

    #[test]
    fn test_no_legal_move_exhausts_candidates() {
        let board: Board = format!("B W W{}", " .".repeat(61))
            .parse()
            .expect("valid diagram");
        let mut player = RandomPlayer::new(Some(1), DEFAULT_RETRY_CEILING);
        assert_eq!(
            player.choose(&board, Side::White),
            Err(AutomationExhausted {
                side: Side::White,
                attempts: 61,
            })
        );
    }

    #[test]
    fn test_zero_ceiling_exhausts_immediately() {
        let mut player = RandomPlayer::new(Some(1), 0);
        let err = player.choose(&Board::new(), Side::Black).unwrap_err();
        assert_eq!(err.attempts, 0);
        assert_eq!(player.ceiling(), 0);
    }

    #[test]
    fn test_name() {
        let player = RandomPlayer::new(Some(1), 10).with_name("white bot");
        assert_eq!(player.name(), "white bot");
    }
}
