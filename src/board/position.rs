/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, ops::Index, str::FromStr};

use super::{validate_move, BoardSnapshot, Camp, File, Piece, PieceKind, Rank, Square};
use crate::{ChessError, Result};

/// Piece placement of the standard starting position, in FEN notation.
pub const FEN_STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Back-rank layout, from the a-file to the h-file.
const BACK_RANK: [PieceKind; File::COUNT] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The occupant of every one of the 64 squares.
///
/// Unoccupied squares hold [`Piece::EMPTY`], so a lookup never fails.
/// [`Board::default`] is the standard starting layout.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Piece; Square::COUNT],
}

impl Board {
    /// A board with no pieces on it.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::{Board, Piece, Square};
    /// let board = Board::empty();
    /// assert!(Square::iter().all(|sq| board.get(sq) == Piece::EMPTY));
    /// ```
    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            squares: [Piece::EMPTY; Square::COUNT],
        }
    }

    /// The standard starting layout: back ranks on `1`/`8`, pawns on `2`/`7`.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();

        for camp in Camp::all() {
            for file in File::iter() {
                let back = Square::new(file, Rank::first(camp));
                let pawns = Square::new(file, Rank::second(camp));

                board.place(Piece::new(camp, BACK_RANK[file]), back);
                board.place(Piece::new(camp, PieceKind::Pawn), pawns);
            }
        }

        board
    }

    /// Parses the piece-placement field of a FEN string, starting at rank `8`.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::*;
    /// let board = Board::from_placement("8/8/8/8/8/8/8/R7").unwrap();
    /// assert_eq!(board.get(Square::A1), Piece::new(Camp::White, PieceKind::Rook));
    /// assert_eq!(board, Board::from_placement(&board.to_placement()).unwrap());
    /// ```
    pub fn from_placement(placements: &str) -> Result<Self> {
        let mut board = Self::empty();
        let ranks = placements.trim().split('/').collect::<Vec<_>>();

        if ranks.len() != Rank::COUNT {
            return Err(ChessError::parse(format!(
                "Placement must have {} ranks separated by '/'. Got {placements:?}",
                Rank::COUNT
            )));
        }

        for (rank, row) in Rank::iter().rev().zip(ranks) {
            let mut file = 0usize;

            for c in row.chars() {
                if let Some(empties) = c.to_digit(10) {
                    file += empties as usize;
                    continue;
                }

                let square = u8::try_from(file)
                    .ok()
                    .and_then(File::new)
                    .map(|file| Square::new(file, rank))
                    .ok_or_else(|| ChessError::parse(format!("Rank {rank} is too long: {row:?}")))?;

                let piece = Piece::from_char(c)?;
                if piece.is_empty() {
                    return Err(ChessError::parse(format!(
                        "Empty squares are written as digits. Got {c:?} in {row:?}"
                    )));
                }

                board.place(piece, square);
                file += 1;
            }

            if file != File::COUNT {
                return Err(ChessError::parse(format!(
                    "Rank {rank} must describe {} squares. Got {row:?}",
                    File::COUNT
                )));
            }
        }

        Ok(board)
    }

    /// Writes this board as the piece-placement field of a FEN string.
    pub fn to_placement(&self) -> String {
        let mut placement = String::with_capacity(64);

        for rank in Rank::iter().rev() {
            let mut empty_spaces = 0;
            for file in File::iter() {
                let piece = self.get(Square::new(file, rank));
                if piece.is_empty() {
                    empty_spaces += 1;
                    continue;
                }

                if empty_spaces != 0 {
                    placement += &empty_spaces.to_string();
                    empty_spaces = 0;
                }
                placement.push(piece.char());
            }

            if empty_spaces != 0 {
                placement += &empty_spaces.to_string();
            }

            if rank != Rank::ONE {
                placement.push('/');
            }
        }

        placement
    }

    /// Rebuilds a board from a stored snapshot. Squares missing from the snapshot are empty.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self> {
        let mut board = Self::empty();

        for (code, piece) in snapshot.iter() {
            let square = Square::from_uci(code)?;
            let mut chars = piece.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(ChessError::parse(format!(
                    "Piece codes must be a single character. Got {piece:?} on {code}"
                )));
            };

            board.place(Piece::from_char(c)?, square);
        }

        Ok(board)
    }

    /// Captures all 64 squares as a snapshot for storage.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.iter()
            .map(|(square, piece)| (square.to_uci(), piece.char().to_string()))
            .collect()
    }

    /// Fetches the occupant of `square`.
    #[inline(always)]
    pub fn get(&self, square: Square) -> Piece {
        self.squares[square]
    }

    /// Returns `true` if the piece on `square` belongs to `camp`.
    #[inline(always)]
    pub fn is_camp(&self, square: Square, camp: Camp) -> bool {
        self.get(square).is_camp(camp)
    }

    /// Places `piece` on `square`, replacing whatever was there.
    #[inline(always)]
    pub fn place(&mut self, piece: Piece, square: Square) {
        self.squares[square] = piece;
    }

    /// Empties `square`, returning its previous occupant.
    #[inline(always)]
    pub fn take(&mut self, square: Square) -> Piece {
        std::mem::replace(&mut self.squares[square], Piece::EMPTY)
    }

    /// Moves the piece on `from` to `to`, if that is a legal move.
    ///
    /// On success, `from` becomes empty and the previous occupant of `to` is returned
    /// ([`Piece::EMPTY`] if nothing was captured). On failure the board is untouched.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::*;
    /// let mut board = Board::default();
    /// assert_eq!(board.apply_move(Square::E2, Square::E4), Ok(Piece::EMPTY));
    /// assert!(board.get(Square::E2).is_empty());
    ///
    /// let before = board;
    /// assert!(board.apply_move(Square::E4, Square::E6).is_err());
    /// assert_eq!(board, before);
    /// ```
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<Piece> {
        let captured = validate_move(self, from, to)?;

        let piece = self.take(from);
        self.place(piece, to);

        Ok(captured)
    }

    /// Every square the piece on `from` may legally move to. Empty if `from` is unoccupied.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::*;
    /// let board = Board::default();
    /// assert_eq!(board.legal_targets(Square::B1), vec![Square::A3, Square::C3]);
    /// assert!(board.legal_targets(Square::A1).is_empty());
    /// ```
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        Square::iter()
            .filter(|&to| validate_move(self, from, to).is_ok())
            .collect()
    }

    /// Iterates over all 64 squares and their occupants, from `a1` to `h8`.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().map(|square| (square, self.get(square)))
    }

    /// Iterates over every square holding a piece of `camp`.
    pub fn pieces_of(&self, camp: Camp) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter().filter(move |(_, piece)| piece.is_camp(camp))
    }
}

impl Default for Board {
    #[inline(always)]
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Index<Square> for Board {
    type Output = Piece;
    #[inline(always)]
    fn index(&self, index: Square) -> &Self::Output {
        &self.squares[index]
    }
}

impl FromStr for Board {
    type Err = ChessError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_placement(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Allocate just enough capacity
        let mut board = String::with_capacity(198);

        for rank in Rank::iter().rev() {
            board += &format!("{rank}| ");

            for file in File::iter() {
                board += &format!("{} ", self.get(Square::new(file, rank)));
            }

            board += "\n"
        }
        board += " +";
        for _ in File::iter() {
            board += "--";
        }
        board += "\n   ";
        for file in File::iter() {
            board += &format!("{file} ");
        }

        write!(f, "{board}")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}
