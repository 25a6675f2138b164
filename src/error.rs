/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

use crate::{Camp, Square};

/// Alias for results whose error is a [`ChessError`].
pub type Result<T, E = ChessError> = std::result::Result<T, E>;

/// Every way an operation on a board or a game can be refused.
///
/// None of these are fatal. A refused move leaves the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A coordinate outside the `8x8` board was requested.
    #[error("Coordinate ({file}, {rank}) is outside the board: both axes must be between [0, 7]")]
    OutOfRange { file: i16, rank: i16 },

    /// `to` is not reachable from `from` by the moving piece's geometry.
    #[error("{from} -> {to} is not a path this piece can travel")]
    NoSuchPath { from: Square, to: Square },

    /// The piece would have to pass over the occupant of `at`, or push a pawn onto it.
    #[error("Path {from} -> {to} is blocked at {at}")]
    BlockedPath { from: Square, to: Square, at: Square },

    /// The target holds a piece of the mover's own camp.
    #[error("Cannot capture a friendly piece on {0}")]
    FriendlyFire(Square),

    /// The origin does not hold a piece of the camp whose turn it is.
    #[error("{square} does not hold a {expected} piece")]
    WrongCamp { square: Square, expected: Camp },

    /// The origin square is empty.
    #[error("There is no piece on {0} to move")]
    EmptyOrigin(Square),

    /// A move, `end` or `undo` was requested while no game is running.
    #[error("No game is running")]
    NotRunning,

    /// A new game was requested while one is still running.
    #[error("A game is already running")]
    AlreadyRunning,

    /// There is no move left to take back.
    #[error("No moves to undo")]
    NothingToUndo,

    /// Malformed input at the boundary (square codes, piece codes, camp codes, placements).
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ChessError {
    /// Returns `true` if this error rejects a single move rather than a lifecycle operation or some input.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::{ChessError, Square};
    /// assert!(ChessError::FriendlyFire(Square::A5).is_illegal_move());
    /// assert!(!ChessError::NotRunning.is_illegal_move());
    /// ```
    pub const fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. }
                | Self::NoSuchPath { .. }
                | Self::BlockedPath { .. }
                | Self::FriendlyFire(_)
                | Self::WrongCamp { .. }
                | Self::EmptyOrigin(_)
        )
    }

    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
