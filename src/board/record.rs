/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use super::{Camp, PieceKind, Square};

/// Square code (`"a1"`..`"h8"`) to piece code (`"K"`, `"p"`, `"."` ...).
///
/// Ordered by square code so that serialized snapshots are stable.
pub type BoardSnapshot = BTreeMap<String, String>;

/// A stored position: every square's occupant, and whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub board: BoardSnapshot,
    pub turn: Camp,
}

/// One accepted move, as kept in a game's history.
///
/// `captured` is whatever stood on `target` before the move, which is [`PieceKind::Empty`] for a quiet move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub origin: Square,
    pub target: Square,
    pub captured: PieceKind,
}

impl MoveRecord {
    #[inline(always)]
    pub const fn new(origin: Square, target: Square, captured: PieceKind) -> Self {
        Self {
            origin,
            target,
            captured,
        }
    }

    /// Returns `true` if this move removed a piece from the board.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.captured != PieceKind::Empty
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_capture() {
            write!(f, "{}x{} ({})", self.origin, self.target, self.captured)
        } else {
            write!(f, "{}{}", self.origin, self.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_record_wire_shape() {
        let record = MoveRecord::new(Square::A1, Square::A5, PieceKind::Pawn);
        let json = serde_json::to_value(record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "origin": "a1", "target": "a5", "captured": "PAWN" })
        );
        assert_eq!(serde_json::from_value::<MoveRecord>(json).unwrap(), record);
    }

    #[test]
    fn test_game_record_wire_shape() {
        let mut board = BoardSnapshot::new();
        board.insert("e1".into(), "K".into());
        let record = GameRecord {
            board,
            turn: Camp::Black,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"board":{"e1":"K"},"turn":"BLACK"}"#);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            MoveRecord::new(Square::E2, Square::E4, PieceKind::Empty).to_string(),
            "e2e4"
        );
        assert_eq!(
            MoveRecord::new(Square::D1, Square::D8, PieceKind::Queen).to_string(),
            "d1xd8 (QUEEN)"
        );
    }
}
