//! Offline replay of recorded games.
//!
//! A record's moves are re-fed through the same placement pipeline as live
//! play. Each position, the opening included, becomes a [`Frame`] carrying the
//! grid and one 0/1 plane per side.

use crate::games::reversi::{
    Board, GameError, GameInProgress, GameRecord, GameResult, Move, Outcome, Rejection, Side,
    Snapshot,
};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// 0/1 occupancy plane, indexed `[row][column]`.
pub type Plane = [[u8; 8]; 8];

/// One position of a replayed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Frame {
    /// Move that produced this position; `None` for the opening.
    mv: Option<Move>,
    /// Read-only view of the position.
    snapshot: Snapshot,
    /// Black discs.
    black: Plane,
    /// White discs.
    white: Plane,
}

impl Frame {
    fn new(mv: Option<Move>, board: &Board, snapshot: Snapshot) -> Self {
        Self {
            mv,
            snapshot,
            black: board.plane(Side::Black),
            white: board.plane(Side::White),
        }
    }
}

/// A fully replayed record.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct Replay {
    /// One frame per position, `moves + 1` in total.
    frames: Vec<Frame>,
    /// Outcome reached by the engine, if the moves ran to the end.
    outcome: Option<Outcome>,
}

impl Replay {
    /// The last position.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

/// A recorded game could not be replayed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ReplayError {
    /// A recorded placement is not legal at that point.
    #[display("Move {} ({}) is illegal: {}", index, mv, rejection)]
    Illegal {
        /// Zero-based move index.
        index: usize,
        /// The recorded move.
        mv: Move,
        /// Why the engine refused it.
        rejection: Rejection,
    },
    /// Moves remain after the game ended.
    #[display("Move {} comes after the game ended", index)]
    AfterFinish {
        /// Zero-based index of the first extra move.
        index: usize,
    },
    /// The engine failed, e.g. a move for the wrong side.
    #[display("Replay failed: {}", _0)]
    Game(GameError),
}

impl std::error::Error for ReplayError {}

impl From<GameError> for ReplayError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

/// Replays `record` from the standard opening.
#[instrument(skip(record), fields(moves = record.moves().len()))]
pub fn replay(record: &GameRecord) -> Result<Replay, ReplayError> {
    let opening = GameInProgress::new();
    let mut frames = vec![Frame::new(None, opening.board(), opening.snapshot())];
    let mut game = Some(opening);
    let mut outcome = None;

    for (index, mv) in record.moves().iter().enumerate() {
        let current = game.take().ok_or(ReplayError::AfterFinish { index })?;
        match current.play(*mv)? {
            GameResult::Rejected(_, rejection) => {
                return Err(ReplayError::Illegal {
                    index,
                    mv: *mv,
                    rejection,
                });
            }
            GameResult::InProgress(next) => {
                frames.push(Frame::new(Some(*mv), next.board(), next.snapshot()));
                game = Some(next);
            }
            GameResult::Finished(done) => {
                frames.push(Frame::new(Some(*mv), done.board(), done.snapshot()));
                outcome = Some(done.outcome());
            }
        }
    }

    if let (Some(result), Some(last)) = (record.result(), frames.last()) {
        let replayed = (*last.snapshot.black(), *last.snapshot.white());
        if (*result.black(), *result.white()) != replayed {
            warn!(
                recorded_black = result.black(),
                recorded_white = result.white(),
                black = replayed.0,
                white = replayed.1,
                "Recorded result differs from replay"
            );
        }
    }

    debug!(frames = frames.len(), ?outcome, "Replay complete");
    Ok(Replay { frames, outcome })
}
