//! Game rules for Reversi.
//!
//! Pure functions over a [`Board`](super::Board): placement legality and turn
//! progression. Rules are kept apart from board storage so the session layer
//! can compose them into contracts.

pub mod capture;
pub mod judge;

pub use capture::{CaptureLine, MoveOutcome, Rejection, evaluate, has_legal_move, legal_positions};
pub use judge::{TurnState, advance, assess};
