/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Squares, pieces, the board, and the rules of moving on it.
mod board;

/// Command-line options and the commands understood by the engine.
mod cli;

/// Text front-end that drives a single game.
mod engine;

/// Every way an operation can be refused.
mod error;

/// Material scoring of a position.
mod eval;

/// The score type produced by the evaluator.
mod score;

pub use board::*;
pub use cli::*;
pub use engine::*;
pub use error::*;
pub use eval::*;
pub use score::*;
