//! Command-line interface for strictly_reversi.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_reversi::Side;

/// Strictly Reversi - a rule-checked Reversi engine
#[derive(Parser, Debug)]
#[command(name = "strictly_reversi")]
#[command(about = "Reversi engine with self-play, terminal play and replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "reversi.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play random-vs-random games and append them to the move log
    Selfplay {
        /// Number of games
        #[arg(short = 'n', long)]
        games: Option<usize>,

        /// Move log to append to
        #[arg(long)]
        log: Option<PathBuf>,

        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play against the automated player in the terminal
    Play {
        /// Side you play
        #[arg(long, value_enum, default_value_t = SideArg::Black)]
        side: SideArg,

        /// Move log to append the finished game to
        #[arg(long)]
        log: Option<PathBuf>,

        /// Seed for the automated player
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Replay a logged game position by position
    Replay {
        /// Move log to read
        #[arg(long)]
        log: Option<PathBuf>,

        /// Zero-based game index in the log
        #[arg(short, long, default_value_t = 0)]
        game: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReplayFormat::Text)]
        format: ReplayFormat,
    },
}

/// Side selector for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    /// Black moves first.
    Black,
    /// White.
    White,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Black => Side::Black,
            SideArg::White => Side::White,
        }
    }
}

/// How replay frames are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReplayFormat {
    /// Board diagrams.
    Text,
    /// Frames as JSON.
    Json,
}
