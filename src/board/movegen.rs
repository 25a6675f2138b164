/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{Board, Movement, Piece, Rank, Square};
use crate::{ChessError, Result};

/// What the final square of a [`MovePath`] may hold for the move to be legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetRule {
    /// Empty, or holding an enemy piece.
    EmptyOrEnemy,

    /// Empty only. Pawns pushing forward.
    EmptyOnly,

    /// An enemy piece only. Pawns moving diagonally.
    CaptureOnly,
}

/// The squares a piece passes through on its way to a target, ending with the target itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePath {
    squares: Vec<Square>,
    rule: TargetRule,
}

impl MovePath {
    /// Every square on the path, in travel order, ending with the target.
    #[inline(always)]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Squares strictly between the origin and the target.
    #[inline(always)]
    pub fn transit(&self) -> &[Square] {
        &self.squares[..self.squares.len() - 1]
    }

    #[inline(always)]
    pub fn target(&self) -> Square {
        self.squares[self.squares.len() - 1]
    }

    #[inline(always)]
    pub const fn rule(&self) -> TargetRule {
        self.rule
    }
}

/// Computes the path `piece` would take from `from` to `to`, based purely on its movement geometry.
///
/// Sliders yield every square strictly between `from` and `to`, followed by `to`.
/// Stepping pieces yield just `to`, except for a pawn's double-step, which also yields the square it skips.
///
/// Occupancy is not consulted here; see [`validate_move`] for that.
///
/// # Example
/// ```
/// # use chess_arbiter::*;
/// let rook = Piece::new(Camp::White, PieceKind::Rook);
/// let path = fetch_move_path(rook, Square::A1, Square::A4).unwrap();
/// assert_eq!(path.squares(), &[Square::A2, Square::A3, Square::A4]);
///
/// assert!(fetch_move_path(rook, Square::A1, Square::B2).is_err());
/// ```
pub fn fetch_move_path(piece: Piece, from: Square, to: Square) -> Result<MovePath> {
    let no_path = ChessError::NoSuchPath { from, to };

    // A zero-length move is never a move
    if from == to {
        return Err(no_path);
    }

    let (Some(camp), Some(movement)) = (piece.camp(), piece.kind().movement()) else {
        return Err(no_path);
    };

    let (df, dr) = from.delta(to);

    let path = match movement {
        Movement::Sliding(directions) => {
            let distance = df.abs().max(dr.abs());
            let direction = (df / distance, dr / distance);

            // Not on a straight line from `from`, or not along one of this piece's lines
            if direction.0 * distance != df
                || direction.1 * distance != dr
                || !directions.contains(&direction)
            {
                return Err(no_path);
            }

            let squares = (1..=distance)
                .filter_map(|step| from.offset(direction.0 * step, direction.1 * step))
                .collect();

            MovePath {
                squares,
                rule: TargetRule::EmptyOrEnemy,
            }
        }

        Movement::Stepping(offsets) => {
            if !offsets.contains(&(df, dr)) {
                return Err(no_path);
            }

            MovePath {
                squares: vec![to],
                rule: TargetRule::EmptyOrEnemy,
            }
        }

        Movement::Pawn => {
            let forward = camp.forward();

            if (df, dr) == (0, forward) {
                MovePath {
                    squares: vec![to],
                    rule: TargetRule::EmptyOnly,
                }
            } else if (df, dr) == (0, forward * 2) && from.rank() == Rank::second(camp) {
                let skipped = from.offset(0, forward).ok_or(no_path)?;
                MovePath {
                    squares: vec![skipped, to],
                    rule: TargetRule::EmptyOnly,
                }
            } else if df.abs() == 1 && dr == forward {
                MovePath {
                    squares: vec![to],
                    rule: TargetRule::CaptureOnly,
                }
            } else {
                return Err(no_path);
            }
        }
    };

    Ok(path)
}

/// Checks whether the piece on `from` may legally move to `to` on `board`.
///
/// On success, returns the occupant of `to` (which is [`Piece::EMPTY`] for a non-capturing move).
/// The board is never modified.
///
/// Rejections, in the order they are checked:
/// 1. [`ChessError::EmptyOrigin`] if there is nothing on `from`.
/// 2. [`ChessError::NoSuchPath`] if the piece's geometry cannot reach `to`.
/// 3. [`ChessError::BlockedPath`] if any square strictly between `from` and `to` is occupied.
/// 4. [`ChessError::FriendlyFire`] if `to` holds a piece of the mover's camp.
/// 5. Pawns only: [`ChessError::BlockedPath`] for a push onto an enemy piece,
///    [`ChessError::NoSuchPath`] for a diagonal onto an empty square.
pub fn validate_move(board: &Board, from: Square, to: Square) -> Result<Piece> {
    let piece = board.get(from);
    let Some(camp) = piece.camp() else {
        return Err(ChessError::EmptyOrigin(from));
    };

    let path = fetch_move_path(piece, from, to)?;

    if let Some(&at) = path.transit().iter().find(|&&sq| !board.get(sq).is_empty()) {
        return Err(ChessError::BlockedPath { from, to, at });
    }

    let occupant = board.get(to);
    if occupant.is_camp(camp) {
        return Err(ChessError::FriendlyFire(to));
    }

    match path.rule() {
        TargetRule::EmptyOnly if !occupant.is_empty() => {
            Err(ChessError::BlockedPath { from, to, at: to })
        }
        TargetRule::CaptureOnly if occupant.is_empty() => Err(ChessError::NoSuchPath { from, to }),
        _ => Ok(occupant),
    }
}

/// Every square `piece` could reach from `from` on an empty board.
pub fn reachable_squares(piece: Piece, from: Square) -> impl Iterator<Item = Square> {
    Square::iter().filter(move |&to| fetch_move_path(piece, from, to).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camp, PieceKind};

    fn white(kind: PieceKind) -> Piece {
        Piece::new(Camp::White, kind)
    }

    fn black(kind: PieceKind) -> Piece {
        Piece::new(Camp::Black, kind)
    }

    #[test]
    fn test_rook_path_up_the_file() {
        let path = fetch_move_path(white(PieceKind::Rook), Square::A1, Square::A8).unwrap();
        assert_eq!(
            path.squares(),
            &[
                Square::A2,
                Square::A3,
                Square::A4,
                Square::A5,
                Square::A6,
                Square::A7,
                Square::A8
            ]
        );
        assert_eq!(path.target(), Square::A8);
        assert_eq!(path.transit().len(), 6);
    }

    #[test]
    fn test_queen_paths() {
        let queen = white(PieceKind::Queen);

        // (1, 3) -> (5, 7): b4 -> f8
        let diagonal = fetch_move_path(queen, Square::B4, Square::F8).unwrap();
        assert_eq!(
            diagonal.squares(),
            &[Square::C5, Square::D6, Square::E7, Square::F8]
        );

        // (1, 3) -> (4, 3): b4 -> e4
        let straight = fetch_move_path(queen, Square::B4, Square::E4).unwrap();
        assert_eq!(straight.squares(), &[Square::C4, Square::D4, Square::E4]);

        // (1, 3) -> (2, 5): b4 -> c6 is a knight's move
        assert_eq!(
            fetch_move_path(queen, Square::B4, Square::C6),
            Err(ChessError::NoSuchPath {
                from: Square::B4,
                to: Square::C6
            })
        );
    }

    #[test]
    fn test_bishop_and_rook_lines_are_disjoint() {
        let bishop = white(PieceKind::Bishop);
        let rook = white(PieceKind::Rook);

        assert!(fetch_move_path(bishop, Square::C1, Square::H6).is_ok());
        assert!(fetch_move_path(bishop, Square::C1, Square::C4).is_err());
        assert!(fetch_move_path(rook, Square::C1, Square::C4).is_ok());
        assert!(fetch_move_path(rook, Square::C1, Square::H6).is_err());
    }

    #[test]
    fn test_zero_length_move_is_never_reachable() {
        for kind in PieceKind::all() {
            for sq in Square::iter() {
                assert!(fetch_move_path(white(kind), sq, sq).is_err(), "{kind} on {sq}");
            }
        }
    }

    #[test]
    fn test_empty_cannot_move() {
        assert!(fetch_move_path(Piece::EMPTY, Square::E2, Square::E3).is_err());
    }

    #[test]
    fn test_stepping_pieces_yield_only_the_target() {
        let knight = white(PieceKind::Knight);
        let path = fetch_move_path(knight, Square::G1, Square::F3).unwrap();
        assert_eq!(path.squares(), &[Square::F3]);
        assert!(path.transit().is_empty());

        let king = black(PieceKind::King);
        assert!(fetch_move_path(king, Square::E8, Square::D7).is_ok());
        assert!(fetch_move_path(king, Square::E8, Square::E6).is_err());
    }

    #[test]
    fn test_reachable_square_counts() {
        let count = |piece, sq| reachable_squares(piece, sq).count();

        assert_eq!(count(white(PieceKind::Rook), Square::D4), 14);
        assert_eq!(count(white(PieceKind::Bishop), Square::D4), 13);
        assert_eq!(count(white(PieceKind::Queen), Square::D4), 27);
        assert_eq!(count(white(PieceKind::Knight), Square::D4), 8);
        assert_eq!(count(white(PieceKind::Knight), Square::A1), 2);
        assert_eq!(count(white(PieceKind::King), Square::A1), 3);
        assert_eq!(count(white(PieceKind::King), Square::E4), 8);

        // Push, double push, two diagonals
        assert_eq!(count(white(PieceKind::Pawn), Square::E2), 4);
        assert_eq!(count(white(PieceKind::Pawn), Square::E3), 3);
        assert_eq!(count(black(PieceKind::Pawn), Square::A7), 3);
    }

    #[test]
    fn test_sliding_paths_are_contiguous_lines() {
        for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
            let piece = white(kind);
            for from in Square::iter() {
                for to in reachable_squares(piece, from) {
                    let path = fetch_move_path(piece, from, to).unwrap();
                    let (df, dr) = from.delta(to);
                    let distance = df.abs().max(dr.abs());
                    let step = (df / distance, dr / distance);

                    assert_eq!(path.squares().len(), distance as usize);
                    let mut prev = from;
                    for &sq in path.squares() {
                        assert_eq!(prev.delta(sq), step, "{kind} {from} -> {to}");
                        prev = sq;
                    }
                    assert_eq!(prev, to);
                }
            }
        }
    }

    #[test]
    fn test_pawn_directions() {
        let pawn = white(PieceKind::Pawn);
        assert!(fetch_move_path(pawn, Square::E2, Square::E4).is_ok());
        assert!(fetch_move_path(pawn, Square::E3, Square::E5).is_err());
        assert!(fetch_move_path(pawn, Square::E3, Square::E2).is_err());

        let pawn = black(PieceKind::Pawn);
        let path = fetch_move_path(pawn, Square::D7, Square::D5).unwrap();
        assert_eq!(path.squares(), &[Square::D6, Square::D5]);
        assert_eq!(path.rule(), TargetRule::EmptyOnly);

        let capture = fetch_move_path(pawn, Square::D7, Square::C6).unwrap();
        assert_eq!(capture.rule(), TargetRule::CaptureOnly);
        assert!(fetch_move_path(pawn, Square::D7, Square::C8).is_err());
    }

    #[test]
    fn test_validate_move_on_start_position() {
        let board = Board::default();

        assert_eq!(validate_move(&board, Square::E2, Square::E4), Ok(Piece::EMPTY));
        assert_eq!(validate_move(&board, Square::G1, Square::F3), Ok(Piece::EMPTY));
        assert_eq!(
            validate_move(&board, Square::E4, Square::E5),
            Err(ChessError::EmptyOrigin(Square::E4))
        );
        assert_eq!(
            validate_move(&board, Square::A1, Square::A3),
            Err(ChessError::BlockedPath {
                from: Square::A1,
                to: Square::A3,
                at: Square::A2
            })
        );
        assert_eq!(
            validate_move(&board, Square::D1, Square::D2),
            Err(ChessError::FriendlyFire(Square::D2))
        );
        assert_eq!(
            validate_move(&board, Square::E2, Square::D3),
            Err(ChessError::NoSuchPath {
                from: Square::E2,
                to: Square::D3
            })
        );
    }

    #[test]
    fn test_pawn_occupancy_rules() {
        // White pawns on e2 and d4, black pawn on e3 and c5
        let board = Board::from_placement("8/8/8/2p5/3P4/4p3/4P3/8").unwrap();

        // Blocked directly ahead by an enemy
        assert_eq!(
            validate_move(&board, Square::E2, Square::E3),
            Err(ChessError::BlockedPath {
                from: Square::E2,
                to: Square::E3,
                at: Square::E3
            })
        );

        // Cannot jump over it either
        assert_eq!(
            validate_move(&board, Square::E2, Square::E4),
            Err(ChessError::BlockedPath {
                from: Square::E2,
                to: Square::E4,
                at: Square::E3
            })
        );

        // Diagonal capture is fine, diagonal onto empty is not
        let black_pawn = Piece::new(Camp::Black, PieceKind::Pawn);
        assert_eq!(validate_move(&board, Square::D4, Square::C5), Ok(black_pawn));
        assert!(validate_move(&board, Square::D4, Square::E5).is_err());

        // Black captures the other way
        let white_pawn = Piece::new(Camp::White, PieceKind::Pawn);
        assert_eq!(validate_move(&board, Square::C5, Square::D4), Ok(white_pawn));
    }
}
