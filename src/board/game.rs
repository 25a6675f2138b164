/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use super::{Board, BoardSnapshot, Camp, GameRecord, MoveRecord, Piece, PieceKind, Square};
use crate::{ChessError, Evaluator, Result, Score, Scores};

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Ongoing,
    Finished,
}

/// Why a game finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// `winner` captured the opposing King.
    KingCaptured { winner: Camp },

    /// The game was stopped with [`GameState::end`].
    Ended,
}

/// Everything produced by an accepted move, ready to be handed to storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move itself, including what it captured.
    pub record: MoveRecord,

    /// The whole board after the move, along with the camp now to move.
    pub position: GameRecord,

    /// `true` if this move captured a King.
    pub finished: bool,
}

/// A single game of chess: the board, whose turn it is, and whether the game is still running.
///
/// Each instance is fully independent, so any number of games can be driven side by side.
///
/// The methods you're probably looking for are [`GameState::initialize`], [`GameState::make_move`] and [`GameState::scores`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    board: Board,

    /// The camp whose turn it is.
    turn: Camp,

    status: GameStatus,

    /// Set once the game reaches [`GameStatus::Finished`].
    outcome: Option<Outcome>,

    /// Every accepted move, oldest first.
    history: Vec<MoveRecord>,
}

impl GameState {
    /// A game that has not started yet. The board holds the starting layout.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes a stored game from its board snapshot and the code of the camp to move.
    ///
    /// The returned game is already running, with an empty move history.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::*;
    /// let snapshot = Board::default().snapshot();
    /// let game = GameState::restore_from(&snapshot, "BLACK").unwrap();
    /// assert_eq!(game.turn(), Camp::Black);
    /// assert_eq!(game.status(), GameStatus::Ongoing);
    /// ```
    pub fn restore_from(snapshot: &BoardSnapshot, camp_code: &str) -> Result<Self> {
        let turn = Camp::from_code(camp_code)?;
        let board = Board::from_snapshot(snapshot)?;

        Ok(Self::from_board(board, turn))
    }

    /// Starts a game on an arbitrary `board`, with `turn` to move.
    pub fn from_board(board: Board, turn: Camp) -> Self {
        Self {
            board,
            turn,
            status: GameStatus::Ongoing,
            outcome: None,
            history: Vec::new(),
        }
    }

    /// Starts the game from the standard starting layout, with White to move.
    ///
    /// A finished game may be started over. A running game may not.
    pub fn initialize(&mut self) -> Result<()> {
        if self.is_running() {
            return Err(ChessError::AlreadyRunning);
        }

        *self = Self::from_board(Board::default(), Camp::White);
        Ok(())
    }

    /// Moves the piece on `from` to `to` for the camp whose turn it is.
    ///
    /// On success the turn passes to the other camp, and capturing a King finishes the game.
    /// On failure nothing about the game changes.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::*;
    /// let mut game = GameState::new();
    /// game.initialize().unwrap();
    ///
    /// let outcome = game.make_move(Square::E2, Square::E4).unwrap();
    /// assert_eq!(outcome.position.turn, Camp::Black);
    ///
    /// // Still Black's turn
    /// let err = game.make_move(Square::D2, Square::D4).unwrap_err();
    /// assert!(matches!(err, ChessError::WrongCamp { .. }));
    /// ```
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome> {
        if !self.is_running() {
            return Err(ChessError::NotRunning);
        }

        let mover = self.turn;
        if !self.board.is_camp(from, mover) {
            return Err(ChessError::WrongCamp {
                square: from,
                expected: mover,
            });
        }

        let captured = self.board.apply_move(from, to)?;
        let record = MoveRecord::new(from, to, captured.kind());

        self.history.push(record);
        self.turn = mover.opposite();

        if captured.kind() == PieceKind::King {
            self.finish(Outcome::KingCaptured { winner: mover });
        }

        Ok(MoveOutcome {
            record,
            position: self.record(),
            finished: self.is_finished(),
        })
    }

    /// Same as [`GameState::make_move`], but takes square codes such as `"e2"` and `"e4"`.
    ///
    /// Malformed codes fail with [`ChessError::Parse`] before any rule is consulted.
    pub fn apply_move(&mut self, origin: &str, target: &str) -> Result<MoveOutcome> {
        let from = Square::from_uci(origin)?;
        let to = Square::from_uci(target)?;

        self.make_move(from, to)
    }

    /// Stops a running game, as by resignation or agreement.
    pub fn end(&mut self) -> Result<()> {
        if !self.is_running() {
            return Err(ChessError::NotRunning);
        }

        self.finish(Outcome::Ended);
        Ok(())
    }

    /// Takes back the most recent move, restoring whatever it captured.
    ///
    /// Taking back a King capture resumes the game. A game stopped with [`GameState::end`] stays stopped.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::*;
    /// let mut game = GameState::new();
    /// game.initialize().unwrap();
    /// game.apply_move("g1", "f3").unwrap();
    ///
    /// let undone = game.undo().unwrap();
    /// assert_eq!(undone.origin, Square::G1);
    /// assert_eq!(game.board(), &Board::default());
    /// assert_eq!(game.turn(), Camp::White);
    /// ```
    pub fn undo(&mut self) -> Result<MoveRecord> {
        match (self.status, self.outcome) {
            (GameStatus::NotStarted, _) | (_, Some(Outcome::Ended)) => {
                return Err(ChessError::NotRunning)
            }
            _ => {}
        }

        let record = self.history.pop().ok_or(ChessError::NothingToUndo)?;
        let mover = self.turn.opposite();

        let piece = self.board.take(record.target);
        self.board.place(piece, record.origin);
        self.board
            .place(Piece::new(mover.opposite(), record.captured), record.target);

        self.turn = mover;
        self.status = GameStatus::Ongoing;
        self.outcome = None;

        Ok(record)
    }

    /// The current position.
    #[inline(always)]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The camp whose turn it is.
    #[inline(always)]
    pub const fn turn(&self) -> Camp {
        self.turn
    }

    #[inline(always)]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline(always)]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline(always)]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Ongoing
    }

    /// Returns `true` once a King has been captured or the game has been ended.
    #[inline(always)]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Every accepted move, oldest first.
    #[inline(always)]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The current position as a storable record.
    pub fn record(&self) -> GameRecord {
        GameRecord {
            board: self.board.snapshot(),
            turn: self.turn,
        }
    }

    /// Material score of `camp` on the current board.
    #[inline(always)]
    pub fn score(&self, camp: Camp) -> Score {
        Evaluator::new(&self.board).score(camp)
    }

    /// Material scores of both camps on the current board.
    #[inline(always)]
    pub fn scores(&self) -> Scores {
        Evaluator::new(&self.board).scores()
    }

    fn finish(&mut self, outcome: Outcome) {
        self.status = GameStatus::Finished;
        self.outcome = Some(outcome);
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", self.board)?;
        match (self.status, self.outcome) {
            (GameStatus::NotStarted, _) => write!(f, "Not started"),
            (GameStatus::Ongoing, _) => write!(f, "{} to move", self.turn),
            (_, Some(Outcome::KingCaptured { winner })) => write!(f, "{winner} wins"),
            _ => write!(f, "Game ended"),
        }
    }
}
