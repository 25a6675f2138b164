/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// The state machine driving a single game: turns, captures of the King, undo.
mod game;

/// Movement geometry and the legality check that combines it with occupancy.
mod movegen;

/// Camps, piece kinds, and the pieces made from them.
mod piece;

/// The 64-square board and everything that reads or rewrites it.
mod position;

/// Plain records handed to whoever stores games.
mod record;

/// Squares, files and ranks.
mod square;

pub use game::*;
pub use movegen::*;
pub use piece::*;
pub use position::*;
pub use record::*;
pub use square::*;
