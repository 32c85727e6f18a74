//! Strictly Reversi - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command, ReplayFormat, SideArg};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use strictly_reversi::{
    BoardView, GameInProgress, GameResult, Player, RandomPlayer, ReversiConfig, Side, move_log,
    replay, selfplay,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ReversiConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Selfplay { games, log, seed } => {
            let mut config = config;
            if let Some(games) = games {
                config = config.with_games(games);
            }
            if let Some(log) = log {
                config = config.with_log_path(log);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            run_selfplay(&config)
        }
        Command::Play { side, log, seed } => {
            let mut config = config;
            if let Some(log) = log {
                config = config.with_log_path(log);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            run_play(&config, side)
        }
        Command::Replay { log, game, format } => {
            let path = log.unwrap_or_else(|| config.log_path().clone());
            run_replay(path, game, format)
        }
    }
}

/// Run automated games and append them to the move log
#[instrument(skip(config))]
fn run_selfplay(config: &ReversiConfig) -> Result<()> {
    info!(games = config.games(), log = %config.log_path().display(), "Starting self-play");
    let mut file = move_log::open_append(config.log_path())?;
    let tally = selfplay::run(config, &mut file)?;
    println!("{tally}");
    Ok(())
}

/// Play a game against the automated player on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &ReversiConfig, side: SideArg) -> Result<()> {
    let human = Side::from(side);
    let mut bot = RandomPlayer::new(*config.seed(), *config.retry_ceiling());
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = std::io::stdout();

    let mut game = GameInProgress::new();
    let finished = loop {
        writeln!(stdout, "\n{}", BoardView(&game.snapshot()))?;
        if game.after_pass() {
            writeln!(stdout, "{} has no placement and passes.", game.to_move().other())?;
        }

        let position = if game.to_move() == human {
            write!(stdout, "Your move (e.g. C5, q to quit): ")?;
            stdout.flush()?;
            let Some(line) = lines.next() else {
                bail!("Input closed before the game finished");
            };
            let line = line?;
            let input = line.trim();
            if input.eq_ignore_ascii_case("q") {
                info!("Game abandoned");
                return Ok(());
            }
            match input.parse() {
                Ok(position) => position,
                Err(e) => {
                    writeln!(stdout, "Cannot read {input:?}: {e}")?;
                    continue;
                }
            }
        } else {
            let position = bot.choose(game.board(), game.to_move())?;
            writeln!(stdout, "{} plays {}", bot.name(), position)?;
            position
        };

        game = match game.place(position)? {
            GameResult::InProgress(next) => next,
            GameResult::Finished(finished) => break finished,
            GameResult::Rejected(unchanged, rejection) => {
                warn!(%position, %rejection, "Placement refused");
                writeln!(stdout, "{position}: {rejection}")?;
                unchanged
            }
        };
    };

    writeln!(stdout, "\n{}", BoardView(&finished.snapshot()))?;
    move_log::append_to_path(config.log_path(), finished.record())
        .with_context(|| format!("Saving game to {}", config.log_path().display()))?;
    Ok(())
}

/// Print every position of a logged game
#[instrument]
fn run_replay(path: PathBuf, game: usize, format: ReplayFormat) -> Result<()> {
    let records = move_log::read_path(&path)?;
    let Some(record) = records.get(game) else {
        bail!("{} holds {} games, no game {}", path.display(), records.len(), game);
    };
    let replay = replay::replay(record)?;

    match format {
        ReplayFormat::Json => println!("{}", serde_json::to_string_pretty(replay.frames())?),
        ReplayFormat::Text => {
            for (index, frame) in replay.frames().iter().enumerate() {
                match frame.mv() {
                    Some(mv) => println!("Move {index}: {mv}"),
                    None => println!("Opening"),
                }
                println!("{}\n", BoardView(frame.snapshot()));
            }
        }
    }
    Ok(())
}
