/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fs,
    io::{self, Write},
    path::Path,
    sync::mpsc::{channel, Receiver, Sender},
    thread,
};

use anyhow::{bail, Context, Result};
use serde_json::json;

use crate::{Cli, EngineCommand, Evaluator, GameRecord, GameState, GameStatus, MoveOutcome, Outcome};

/// Drives a single game from text commands.
#[derive(Debug)]
pub struct Engine {
    /// The game being played.
    ///
    /// Replaced whenever a new game is started.
    game: GameState,

    /// If set, every accepted move is followed by its records, printed as JSON.
    print_records: bool,

    /// One half of a channel, responsible for sending commands to the engine to execute.
    sender: Sender<EngineCommand>,

    /// One half of a channel, responsible for receiving commands for the engine to execute.
    receiver: Receiver<EngineCommand>,
}

impl Engine {
    /// Constructs a new [`Engine`] instance to be executed with [`Engine::run`].
    pub fn new() -> Self {
        let (sender, receiver) = channel();

        Self {
            game: GameState::new(),
            print_records: false,
            sender,
            receiver,
        }
    }

    /// Constructs an [`Engine`] configured by the command-line options, restoring a stored game if one was given.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut engine = Self::new();
        engine.print_records = cli.records;

        if let Some(path) = &cli.restore {
            engine.game = load_game(path)?;
        }

        Ok(engine)
    }

    /// Returns a string of the engine's name and current version.
    pub fn name(&self) -> String {
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// The game currently being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Sends an [`EngineCommand`] to the engine to be executed.
    pub fn send_command(&self, command: EngineCommand) -> Result<()> {
        self.sender
            .send(command)
            .context("Failed to send command to engine")
    }

    /// Execute the main event loop for the engine.
    ///
    /// This function spawns a thread to handle input from `stdin` and waits on received commands.
    pub fn run(&mut self) -> Result<()> {
        // Spawn a separate thread for handling user input
        let sender = self.sender.clone();
        thread::spawn(|| {
            if let Err(err) = input_handler(sender) {
                eprintln!("Input handler thread stopping after fatal error: {err}");
            }
        });

        let mut stdout = io::stdout().lock();
        while let Ok(cmd) = self.receiver.recv() {
            match self.execute(cmd, &mut stdout) {
                Ok(true) => {}
                Ok(false) => break,

                // Keep running, even on error
                Err(e) => eprintln!("Error: {e}"),
            }
        }

        Ok(())
    }

    /// Executes a single command, writing its output to `out`.
    ///
    /// Returns `false` once the engine should stop.
    pub fn execute(&mut self, cmd: EngineCommand, out: &mut impl Write) -> Result<bool> {
        match cmd {
            EngineCommand::Start => {
                self.game.initialize()?;
                writeln!(out, "{}", self.game)?;
            }

            EngineCommand::Move { from, to } => {
                let outcome = self.game.apply_move(&from, &to)?;
                self.report_move(&outcome, out)?;
            }

            EngineCommand::Moves { square } => {
                let targets = self.game.board().legal_targets(square);

                let moves_string = if targets.is_empty() {
                    String::from("(none)")
                } else {
                    targets
                        .into_iter()
                        .map(|sq| sq.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                writeln!(out, "{moves_string}")?;
            }

            EngineCommand::Undo => self.undo_round(out)?,

            EngineCommand::End => {
                self.game.end()?;
                writeln!(out, "Game ended. {}", self.game.scores())?;
            }

            EngineCommand::Status => writeln!(out, "{}", self.status())?,

            EngineCommand::Score { pretty } => {
                let evaluator = Evaluator::new(self.game.board());
                if pretty {
                    writeln!(out, "{evaluator}")?;
                } else {
                    writeln!(out, "{}", evaluator.scores())?;
                }
            }

            EngineCommand::Display => writeln!(out, "{}", self.game.board())?,

            EngineCommand::Snapshot => {
                let record = self.game.record();
                writeln!(out, "{}", serde_json::to_string(&record)?)?;
            }

            EngineCommand::History => {
                for (i, record) in self.game.history().iter().enumerate() {
                    writeln!(out, "{:>3}. {record}", i + 1)?;
                }
            }

            EngineCommand::Exit => return Ok(false),
        }

        Ok(true)
    }

    /// Describes where the game stands.
    fn status(&self) -> String {
        match (self.game.status(), self.game.outcome()) {
            (GameStatus::NotStarted, _) => String::from("No game running. Type `start` to begin."),
            (GameStatus::Ongoing, _) => format!("{} to move", self.game.turn()),
            (_, Some(Outcome::KingCaptured { winner })) => {
                format!("{winner} captured the King. {}", self.game.scores())
            }
            (_, _) => {
                let scores = self.game.scores();
                match scores.leader() {
                    Some(leader) => format!(
                        "Game ended, {leader} ahead by {} on material. {scores}",
                        scores.margin(leader)
                    ),
                    None => format!("Game ended, level on material. {scores}"),
                }
            }
        }
    }

    /// Prints an accepted move, and its records if requested.
    fn report_move(&self, outcome: &MoveOutcome, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", outcome.record)?;

        if self.print_records {
            let records = json!({ "position": outcome.position, "move": outcome.record });
            writeln!(out, "{records}")?;
        }

        if outcome.finished {
            writeln!(out, "{}", self.status())?;
        }

        Ok(())
    }

    /// Takes back the last move of each side, or just one move if only one has been played.
    fn undo_round(&mut self, out: &mut impl Write) -> Result<()> {
        let last = self.game.undo()?;
        writeln!(out, "Took back {last}")?;

        if !self.game.history().is_empty() {
            let previous = self.game.undo()?;
            writeln!(out, "Took back {previous}")?;
        }

        writeln!(out, "{}", self.status())?;
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a game stored as a JSON [`GameRecord`] and resumes it.
fn load_game(path: &Path) -> Result<GameState> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stored game from {}", path.display()))?;

    let record: GameRecord = serde_json::from_str(&contents)
        .with_context(|| format!("{} does not hold a stored game", path.display()))?;

    Ok(GameState::restore_from(&record.board, record.turn.code())?)
}

/// Loops endlessly to await input via `stdin`, sending all successfully-parsed commands through the supplied `sender`.
fn input_handler(sender: Sender<EngineCommand>) -> Result<()> {
    let mut buffer = String::with_capacity(256);

    loop {
        // Clear the buffer, read input, and trim the trailing newline
        buffer.clear();
        let bytes = io::stdin()
            .read_line(&mut buffer)
            .context("Failed to read line when parsing commands")?;

        // For ctrl + d
        if 0 == bytes {
            sender
                .send(EngineCommand::Exit)
                .context("Failed to send 'exit' command after receiving empty input")?;

            bail!("Engine received input of 0 bytes and is quitting");
        }

        let buf = buffer.trim();

        // Ignore empty lines
        if buf.is_empty() {
            continue;
        }

        match buf.parse::<EngineCommand>() {
            Ok(cmd) => sender
                .send(cmd)
                .context("Failed to send command to engine")?,

            // If an invalid command was received, just print the error and continue running
            Err(err) => eprintln!("{err}"),
        }
    }
}
