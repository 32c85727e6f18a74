//! Phase-specific typestate structs for Reversi.
//!
//! Each phase is its own type. Only [`GameInProgress`] accepts placements, and
//! a [`GameFinished`] always carries its outcome and finalized record.

use super::action::{GameError, Move};
use super::contracts::{Contract, MoveContract};
#[cfg(debug_assertions)]
use super::invariants::{Invariant, MoverCanPlayInvariant};
use super::phases::Outcome;
use super::position::Position;
use super::record::GameRecord;
use super::rules::{self, MoveOutcome, Rejection, TurnState};
use super::types::{Board, Cell, Side};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase: a position and the side to move.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
    to_move: Side,
}

impl GameSetup {
    /// Standard opening with Black to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Side::Black,
        }
    }

    /// Starts from an arbitrary position.
    #[instrument(skip(board))]
    pub fn from_board(board: Board, to_move: Side) -> Self {
        Self { board, to_move }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game, resolving a forced pass or a terminal position up front.
    #[instrument(skip(self))]
    pub fn start(self) -> Result<GameResult, GameError> {
        let discs = self.board.count(Side::Black) + self.board.count(Side::White);
        let game = GameInProgress {
            board: self.board,
            record: GameRecord::new(),
            to_move: self.to_move,
            turn: TurnState::Continue(self.to_move),
            initial_discs: discs,
        };
        let turn = rules::assess(&game.board, game.to_move);
        game.settle(turn)
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress: the side to move always has a legal placement.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(super) board: Board,
    pub(super) record: GameRecord,
    pub(super) to_move: Side,
    pub(super) turn: TurnState,
    pub(super) initial_discs: u8,
}

impl GameInProgress {
    /// Standard opening with Black to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            record: GameRecord::new(),
            to_move: Side::Black,
            turn: TurnState::Continue(Side::Black),
            initial_discs: 4,
        }
    }

    /// Places a disc for the side to move.
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn place(self, position: Position) -> Result<GameResult, GameError> {
        let side = self.to_move;
        self.play(Move::new(side, position))
    }

    /// Plays a move: evaluate, apply, record, judge.
    ///
    /// An illegal placement hands the unchanged game back in
    /// [`GameResult::Rejected`]. Errors are reserved for invariant breaches.
    #[instrument(skip(self), fields(%action))]
    pub fn play(self, action: Move) -> Result<GameResult, GameError> {
        MoveContract::pre(&self, &action)?;

        let lines = match rules::evaluate(&self.board, action.position, action.side)? {
            MoveOutcome::Legal(lines) => lines,
            outcome => {
                let rejection = outcome.rejection().unwrap_or(Rejection::NoCapture);
                debug!(%rejection, "Placement rejected");
                return Ok(GameResult::Rejected(self, rejection));
            }
        };

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.board.apply(action.position, action.side, &lines)?;
        game.record.append(action.side, action.position)?;

        let turn = rules::advance(&game.board, action.side);

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        game.settle(turn)
    }

    /// Moves to the judged turn, finishing the game when it is over.
    fn settle(mut self, turn: TurnState) -> Result<GameResult, GameError> {
        match turn {
            TurnState::Continue(side) | TurnState::Pass(side) => {
                if matches!(turn, TurnState::Pass(_)) {
                    info!(passed = ?side.other(), "Forced pass");
                }
                self.to_move = side;
                self.turn = turn;

                #[cfg(debug_assertions)]
                if !MoverCanPlayInvariant::holds(&self) {
                    return Err(GameError::InvariantViolation(
                        MoverCanPlayInvariant::description().to_string(),
                    ));
                }

                Ok(GameResult::InProgress(self))
            }
            TurnState::Over(outcome) => {
                let black = self.board.count(Side::Black);
                let white = self.board.count(Side::White);
                self.record.finalize(outcome, black, white)?;
                info!(%outcome, black, white, moves = self.record.moves().len(), "Game over");
                Ok(GameResult::Finished(GameFinished {
                    board: self.board,
                    record: self.record,
                    outcome,
                }))
            }
        }
    }

    /// Evaluates a placement for the side to move without playing it.
    pub fn evaluate(&self, position: Position) -> Result<MoveOutcome, GameError> {
        Ok(rules::evaluate(&self.board, position, self.to_move)?)
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// How the current turn was reached: a normal hand-over or a forced pass.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Returns true if the opponent was skipped to reach this turn.
    pub fn after_pass(&self) -> bool {
        matches!(self.turn, TurnState::Pass(_))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move record.
    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    /// Legal placements for the side to move.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Position> {
        rules::legal_positions(&self.board, self.to_move)
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.board, Some(self.to_move), None)
    }
}

impl Default for GameInProgress {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished: outcome and finalized record are always present.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    record: GameRecord,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the finalized record.
    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    /// Hands the record over for persistence.
    pub fn into_record(self) -> GameRecord {
        self.record
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.board, None, Some(self.outcome))
    }

    /// Restarts the game (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of a placement attempt.
#[derive(Debug)]
pub enum GameResult {
    /// Placement refused; the game is unchanged.
    Rejected(GameInProgress, Rejection),
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

// ─────────────────────────────────────────────────────────────
//  Snapshot
// ─────────────────────────────────────────────────────────────

/// Read-only board view handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Snapshot {
    /// Grid indexed `[row][column]`.
    rows: [[Cell; 8]; 8],
    /// Side to move, absent once the game is over.
    to_move: Option<Side>,
    /// Black disc count.
    black: u8,
    /// White disc count.
    white: u8,
    /// Outcome once the game is over.
    outcome: Option<Outcome>,
}

impl Snapshot {
    fn new(board: &Board, to_move: Option<Side>, outcome: Option<Outcome>) -> Self {
        Self {
            rows: board.rows(),
            to_move,
            black: board.count(Side::Black),
            white: board.count(Side::White),
            outcome,
        }
    }
}
