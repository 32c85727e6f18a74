//! Self-play: automated players on both sides, records appended to a log.

use crate::config::ReversiConfig;
use crate::games::reversi::{
    GameError, GameFinished, GameInProgress, GameResult, Outcome, Position, Rejection, Side,
};
use crate::move_log::{self, LogError};
use crate::players::{AutomationExhausted, Player, RandomPlayer};
use derive_getters::Getters;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Running win/draw totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Getters)]
pub struct Tally {
    /// Games won by Black.
    black_wins: usize,
    /// Games won by White.
    white_wins: usize,
    /// Drawn games.
    draws: usize,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::BlackWin => self.black_wins += 1,
            Outcome::WhiteWin => self.white_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Games counted so far.
    pub fn games(&self) -> usize {
        self.black_wins + self.white_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: Black {} / White {} / Draw {}",
            self.games(),
            self.black_wins,
            self.white_wins,
            self.draws
        )
    }
}

/// A self-play game or run failed.
#[derive(Debug, Clone, derive_more::Display)]
pub enum SelfPlayError {
    /// The engine failed.
    #[display("{}", _0)]
    Game(GameError),
    /// A player found no placement.
    #[display("{}", _0)]
    Automation(AutomationExhausted),
    /// A player chose a placement the engine refused.
    #[display("{} chose {}, which is illegal: {}", side, position, rejection)]
    IllegalChoice {
        /// Side that chose.
        side: Side,
        /// The chosen position.
        position: Position,
        /// Why it was refused.
        rejection: Rejection,
    },
    /// The record could not be logged.
    #[display("{}", _0)]
    Log(LogError),
}

impl std::error::Error for SelfPlayError {}

impl From<GameError> for SelfPlayError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

impl From<AutomationExhausted> for SelfPlayError {
    fn from(err: AutomationExhausted) -> Self {
        Self::Automation(err)
    }
}

impl From<LogError> for SelfPlayError {
    fn from(err: LogError) -> Self {
        Self::Log(err)
    }
}

/// Plays one game from the standard opening to the end.
#[instrument(skip_all, fields(black = black.name(), white = white.name()))]
pub fn play_game(
    black: &mut dyn Player,
    white: &mut dyn Player,
) -> Result<GameFinished, SelfPlayError> {
    let mut game = GameInProgress::new();
    loop {
        let side = game.to_move();
        let player: &mut dyn Player = match side {
            Side::Black => &mut *black,
            Side::White => &mut *white,
        };
        let position = player.choose(game.board(), side)?;
        debug!(?side, %position, "Automated placement");

        game = match game.place(position)? {
            GameResult::InProgress(next) => next,
            GameResult::Finished(finished) => return Ok(finished),
            GameResult::Rejected(_, rejection) => {
                return Err(SelfPlayError::IllegalChoice {
                    side,
                    position,
                    rejection,
                });
            }
        };
    }
}

/// Runs `config.games()` random-vs-random games, writing each record to `sink`.
///
/// With a seed, Black's player uses it and White's uses the next value, so a
/// run is reproducible.
#[instrument(skip_all, fields(games = config.games()))]
pub fn run<W: Write>(config: &ReversiConfig, sink: &mut W) -> Result<Tally, SelfPlayError> {
    let ceiling = *config.retry_ceiling();
    let mut black = RandomPlayer::new(*config.seed(), ceiling).with_name("Random (Black)");
    let mut white = RandomPlayer::new(config.seed().map(|s| s.wrapping_add(1)), ceiling)
        .with_name("Random (White)");

    let mut tally = Tally::default();
    for game in 0..*config.games() {
        let finished = play_game(&mut black, &mut white)?;
        tally.record(finished.outcome());
        move_log::write_record(sink, finished.record())?;
        info!(
            game,
            outcome = %finished.outcome(),
            moves = finished.record().moves().len(),
            "Self-play game complete"
        );
    }

    info!(%tally, "Self-play run complete");
    Ok(tally)
}
