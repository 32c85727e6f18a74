//! Game record: the accepted moves in order plus the final result.
//!
//! One record is serialized per completed game as a single JSON line:
//! `{"result": {"black": 13, "white": 0}, "process": "bD6wC4..."}`.

use super::action::{Move, ParseMoveError};
use super::phases::Outcome;
use super::position::{OutOfRange, Position};
use super::types::Side;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Final disc counts and outcome, set once when the game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct FinalResult {
    /// How the game ended.
    outcome: Outcome,
    /// Black discs on the final board.
    black: u8,
    /// White discs on the final board.
    white: u8,
}

/// Move history of one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameRecord {
    moves: Vec<Move>,
    result: Option<FinalResult>,
}

impl GameRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an accepted move.
    #[instrument(level = "debug", skip(self))]
    pub fn append(&mut self, side: Side, position: Position) -> Result<(), RecordError> {
        if self.result.is_some() {
            warn!(%position, "Append after finalize");
            return Err(RecordError::AppendAfterFinalize);
        }
        position.index()?;
        self.moves.push(Move::new(side, position));
        Ok(())
    }

    /// Stores the final counts and outcome. Allowed exactly once.
    #[instrument(skip(self))]
    pub fn finalize(&mut self, outcome: Outcome, black: u8, white: u8) -> Result<(), RecordError> {
        if self.result.is_some() {
            warn!("Record finalized twice");
            return Err(RecordError::DoubleFinalize);
        }
        self.result = Some(FinalResult {
            outcome,
            black,
            white,
        });
        debug!(moves = self.moves.len(), "Record finalized");
        Ok(())
    }

    /// Accepted moves in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Final result, once finalized.
    pub fn result(&self) -> Option<&FinalResult> {
        self.result.as_ref()
    }

    /// Returns true once [`GameRecord::finalize`] has been called.
    pub fn is_finalized(&self) -> bool {
        self.result.is_some()
    }

    /// Concatenated move tokens.
    pub fn process(&self) -> String {
        // Positions are checked on append, so every move encodes.
        self.moves
            .iter()
            .filter_map(|mv| mv.token().ok())
            .collect()
    }

    /// Serializes the finalized record as one JSON line (no trailing newline).
    #[instrument(skip(self))]
    pub fn to_line(&self) -> Result<String, RecordError> {
        let result = self.result.ok_or(RecordError::NotFinalized)?;
        let line = RecordLine {
            result: ResultCounts {
                black: result.black,
                white: result.white,
            },
            process: self.process(),
        };
        serde_json::to_string(&line).map_err(|e| RecordError::Encode(e.to_string()))
    }

    /// Parses a serialized record. The outcome is derived from the counts.
    #[instrument(skip(line), fields(len = line.len()))]
    pub fn from_line(line: &str) -> Result<Self, RecordError> {
        let parsed: RecordLine =
            serde_json::from_str(line.trim()).map_err(|e| RecordError::Decode(e.to_string()))?;
        let moves = Move::parse_sequence(&parsed.process)?;
        let ResultCounts { black, white } = parsed.result;
        Ok(Self {
            moves,
            result: Some(FinalResult {
                outcome: Outcome::from_counts(black, white),
                black,
                white,
            }),
        })
    }
}

/// Serialized form of a completed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RecordLine {
    result: ResultCounts,
    process: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct ResultCounts {
    black: u8,
    // Older logs spell the key "wihte".
    #[serde(alias = "wihte")]
    white: u8,
}

/// Misuse of a [`GameRecord`] or a malformed serialized record.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RecordError {
    /// `finalize` was called a second time.
    #[display("Game record already finalized")]
    DoubleFinalize,
    /// `append` was called after `finalize`.
    #[display("Cannot append to a finalized game record")]
    AppendAfterFinalize,
    /// Serialization requested before `finalize`.
    #[display("Game record is not finalized")]
    NotFinalized,
    /// Move position is off the board.
    #[display("{}", _0)]
    OutOfRange(OutOfRange),
    /// JSON encoding failed.
    #[display("Failed to encode record: {}", _0)]
    Encode(String),
    /// JSON decoding failed.
    #[display("Failed to decode record: {}", _0)]
    Decode(String),
    /// The move sequence holds a bad token.
    #[display("Bad move token: {}", _0)]
    Token(ParseMoveError),
}

impl std::error::Error for RecordError {}

impl From<OutOfRange> for RecordError {
    fn from(err: OutOfRange) -> Self {
        Self::OutOfRange(err)
    }
}

impl From<ParseMoveError> for RecordError {
    fn from(err: ParseMoveError) -> Self {
        Self::Token(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut record = GameRecord::new();
        record.append(Side::Black, Position::new(3, 5)).unwrap();
        record.append(Side::White, Position::new(2, 3)).unwrap();
        record.append(Side::White, Position::new(2, 3)).unwrap();
        assert_eq!(record.process(), "bD6wC4wC4");
        assert_eq!(record.moves().len(), 3);
    }

    #[test]
    fn test_double_finalize_is_error() {
        let mut record = GameRecord::new();
        record.finalize(Outcome::Draw, 32, 32).unwrap();
        assert_eq!(
            record.finalize(Outcome::Draw, 32, 32),
            Err(RecordError::DoubleFinalize)
        );
    }

    #[test]
    fn test_append_after_finalize_is_error() {
        let mut record = GameRecord::new();
        record.finalize(Outcome::BlackWin, 40, 24).unwrap();
        assert_eq!(
            record.append(Side::Black, Position::new(0, 0)),
            Err(RecordError::AppendAfterFinalize)
        );
        assert!(record.moves().is_empty());
    }

    #[test]
    fn test_off_board_append_is_error() {
        let mut record = GameRecord::new();
        assert!(matches!(
            record.append(Side::Black, Position::new(0, 8)),
            Err(RecordError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_unfinalized_record_does_not_serialize() {
        let record = GameRecord::new();
        assert_eq!(record.to_line(), Err(RecordError::NotFinalized));
    }

    #[test]
    fn test_line_format() {
        let mut record = GameRecord::new();
        record.append(Side::Black, Position::new(3, 5)).unwrap();
        record.finalize(Outcome::BlackWin, 4, 1).unwrap();
        let line = record.to_line().unwrap();
        assert_eq!(line, r#"{"result":{"black":4,"white":1},"process":"bD6"}"#);
        assert_eq!(GameRecord::from_line(&line), Ok(record));
    }

    #[test]
    fn test_reads_misspelled_white_key() {
        let record =
            GameRecord::from_line(r#"{"result": {"black": 20, "wihte": 44}, "process": ""}"#)
                .unwrap();
        let result = record.result().unwrap();
        assert_eq!(*result.white(), 44);
        assert_eq!(*result.outcome(), Outcome::WhiteWin);
    }

    #[test]
    fn test_rejects_bad_process() {
        let err = GameRecord::from_line(r#"{"result": {"black": 1, "white": 1}, "process": "bZ1"}"#)
            .unwrap_err();
        assert!(matches!(err, RecordError::Token(_)));
        assert!(matches!(
            GameRecord::from_line("not json"),
            Err(RecordError::Decode(_))
        ));
    }
}
