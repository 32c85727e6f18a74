//! Reversi (Othello-style) engine.
//!
//! Two sides place discs on an 8×8 grid. A placement must flank at least one
//! straight run of opposing discs, which then flip. A side with no placement
//! passes, and the game ends when neither side can move, one side has no
//! discs left, or the board is full.
//!
//! # Architecture
//!
//! - **Position and types**: coordinates, sides, the board with cached counts
//! - **Rules**: capture scanning and turn judging, pure over a board
//! - **Action and record**: moves as values, the move history and its log line
//! - **Typestate**: setup, in-progress and finished phases as distinct types
//! - **Contracts and invariants**: checks around each placement

pub mod action;
pub mod contracts;
pub mod invariants;
pub mod phases;
pub mod position;
pub mod record;
pub mod rules;
pub mod typestate;
pub mod types;

pub use action::{GameError, Move, ParseMoveError, TOKEN_LEN};
pub use phases::Outcome;
pub use position::{Direction, EDGE, OutOfRange, ParsePositionError, Position};
pub use record::{FinalResult, GameRecord, RecordError};
pub use rules::{CaptureLine, MoveOutcome, Rejection, TurnState};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup, Snapshot};
pub use types::{ApplyError, Board, CELLS, Cell, ParseBoardError, Side};
