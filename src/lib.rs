//! Strictly Reversi - a rule-checked Reversi engine
//!
//! The engine decides which placements are legal, flips captured discs,
//! tracks turns including forced passes, and determines the outcome. Around it
//! sit an append-only move log, offline replay, a random automated player and
//! a text renderer.
//!
//! # Architecture
//!
//! - **Games**: the Reversi engine as typestate phases with contracts
//! - **Players**: automated placement choice
//! - **Move log**: one JSON line per completed game
//! - **Replay**: re-feeds a record and extracts per-position planes
//! - **Render**: text board view and screen-to-cell mapping
//!
//! # Example
//!
//! ```
//! use strictly_reversi::{GameInProgress, GameResult, Position, Side};
//!
//! let game = GameInProgress::new();
//! match game.place(Position::new(2, 4)).unwrap() {
//!     GameResult::InProgress(game) => {
//!         assert_eq!(game.board().count(Side::Black), 4);
//!         assert_eq!(game.to_move(), Side::White);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod players;
mod render;

// Public modules
pub mod move_log;
pub mod replay;
pub mod selfplay;

// Crate-level exports - Configuration
pub use config::{ConfigError, ReversiConfig};

// Crate-level exports - Engine
pub use games::reversi::rules;
pub use games::reversi::{
    ApplyError, Board, CELLS, CaptureLine, Cell, Direction, EDGE, FinalResult, GameError,
    GameFinished, GameInProgress, GameRecord, GameResult, GameSetup, Move, MoveOutcome,
    OutOfRange, Outcome, ParseBoardError, ParseMoveError, ParsePositionError, Position,
    RecordError, Rejection, Side, Snapshot, TOKEN_LEN, TurnState,
};

// Crate-level exports - Contracts and invariants
pub use games::reversi::contracts::{Contract, MoveContract, PlayersTurn};
pub use games::reversi::invariants::{
    DiscCountInvariant, Invariant, InvariantSet, InvariantViolation, MoverCanPlayInvariant,
    PlacementInvariants, RecordConsistentInvariant, ReversiInvariants,
};

// Crate-level exports - Players
pub use players::{AutomationExhausted, DEFAULT_RETRY_CEILING, Player, RandomPlayer};

// Crate-level exports - Rendering
pub use render::{BoardView, ScreenLayout, format_grid};

// Crate-level exports - Collaborators
pub use move_log::LogError;
pub use replay::{Frame, Replay, ReplayError};
pub use selfplay::{SelfPlayError, Tally};
