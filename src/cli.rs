/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{path::PathBuf, str::FromStr};

use clap::Parser;

use crate::Square;

/// Command-line options for the arbiter binary.
#[derive(Debug, Clone, Default, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Resume the game stored in this JSON file (as printed by `snapshot`) instead of waiting for `start`.
    #[arg(short, long)]
    pub restore: Option<PathBuf>,

    /// After every accepted move, print the new position and the move record as JSON.
    #[arg(long, default_value = "false")]
    pub records: bool,

    /// Commands to execute on startup, before reading from stdin. Quote commands that take arguments.
    pub commands: Vec<String>,
}

/// A command to be sent to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(multicall = true, about, rename_all = "lower")]
pub enum EngineCommand {
    /// Start a new game from the standard starting layout.
    #[command(alias = "new")]
    Start,

    /// Move the piece on `from` to `to`, if it is a legal move for the side to move.
    #[command(alias = "m")]
    Move { from: String, to: String },

    /// Show every square the piece on `square` may move to.
    Moves { square: Square },

    /// Take back the last full round (both sides' most recent moves).
    Undo,

    /// Stop the current game.
    End,

    /// Print whose turn it is, or how the game finished.
    Status,

    /// Print both sides' material scores.
    Score {
        /// If set, every piece's contribution is shown on a board.
        #[arg(short, long, default_value = "false")]
        pretty: bool,
    },

    /// Print a visual representation of the current board.
    #[command(alias = "d")]
    Display,

    /// Print the current position as JSON, suitable for `--restore`.
    Snapshot,

    /// Print every move played so far.
    History,

    /// Quit the engine.
    #[command(alias = "quit")]
    Exit,
}

impl FromStr for EngineCommand {
    type Err = clap::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse_from(s.split_ascii_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("start".parse::<EngineCommand>().unwrap(), EngineCommand::Start);
        assert_eq!(
            "move e2 e4".parse::<EngineCommand>().unwrap(),
            EngineCommand::Move {
                from: "e2".into(),
                to: "e4".into()
            }
        );
        assert_eq!(
            "moves g1".parse::<EngineCommand>().unwrap(),
            EngineCommand::Moves { square: Square::G1 }
        );
        assert_eq!(
            "score --pretty".parse::<EngineCommand>().unwrap(),
            EngineCommand::Score { pretty: true }
        );
        assert_eq!("d".parse::<EngineCommand>().unwrap(), EngineCommand::Display);
        assert_eq!("quit".parse::<EngineCommand>().unwrap(), EngineCommand::Exit);
    }

    #[test]
    fn test_reject_bad_commands() {
        assert!("moves z9".parse::<EngineCommand>().is_err());
        assert!("move e2".parse::<EngineCommand>().is_err());
        assert!("castle".parse::<EngineCommand>().is_err());
    }

    #[test]
    fn test_cli_args() {
        let cli = Cli::try_parse_from(["chess-arbiter", "--records", "start", "move e2 e4"]).unwrap();
        assert!(cli.records);
        assert_eq!(cli.restore, None);
        assert_eq!(cli.commands, vec!["start", "move e2 e4"]);
    }
}
