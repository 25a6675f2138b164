/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ChessError, Result};

/// One of the two sides of a chess game.
///
/// White always moves first, and therefore [`Camp`] defaults to [`Camp::White`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Camp {
    #[default]
    White,
    Black,
}

impl Camp {
    /// Number of camps.
    pub const COUNT: usize = 2;

    /// An array of both camps, starting with White.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::White, Self::Black]
    }

    /// Returns the other camp.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::Camp;
    /// assert_eq!(Camp::White.opposite(), Camp::Black);
    /// assert_eq!(Camp::Black.opposite(), Camp::White);
    /// ```
    #[inline(always)]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Will be `0` for White, `1` for Black.
    ///
    /// Useful for indexing into lists.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Direction a pawn of this camp travels along the ranks.
    #[inline(always)]
    pub const fn forward(&self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// The code used for this camp in stored games.
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::White => "WHITE",
            Self::Black => "BLACK",
        }
    }

    /// Parses a camp code: `WHITE`/`BLACK` in any case, or `w`/`b`.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::Camp;
    /// assert_eq!(Camp::from_code("black").unwrap(), Camp::Black);
    /// assert_eq!(Camp::from_code("w").unwrap(), Camp::White);
    /// assert!(Camp::from_code("red").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Self::White),
            "black" | "b" => Ok(Self::Black),
            _ => Err(ChessError::parse(format!(
                "Camp must be one of WHITE or BLACK. Got {code:?}"
            ))),
        }
    }
}

impl FromStr for Camp {
    type Err = ChessError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Camp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.code().fmt(f)
    }
}

impl fmt::Debug for Camp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.code().fmt(f)
    }
}

/// How a piece covers distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// Repeats one of its directions until the board edge; every square passed over must be empty.
    Sliding(&'static [(i8, i8)]),

    /// Jumps by one of a fixed set of offsets, with nothing in between.
    Stepping(&'static [(i8, i8)]),

    /// Pawns: forward steps onto empty squares, diagonal steps only as captures.
    Pawn,
}

const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Represents the kind (or "role") that a chess piece can be.
///
/// [`PieceKind::Empty`] is the occupant of every square that holds no piece.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    #[default]
    Empty,
}

impl PieceKind {
    /// Number of piece variants, including [`PieceKind::Empty`].
    pub const COUNT: usize = 7;

    /// An array of all 6 real [`PieceKind`]s.
    ///
    /// In the order: `Pawn`, `Knight`, `Bishop`, `Rook`, `Queen`, `King`.
    #[inline(always)]
    pub const fn all() -> [Self; 6] {
        use PieceKind::*;
        [Pawn, Knight, Bishop, Rook, Queen, King]
    }

    /// The movement geometry shared by every piece of this kind.
    ///
    /// Returns `None` for [`PieceKind::Empty`], which cannot move.
    pub fn movement(&self) -> Option<Movement> {
        match self {
            Self::Pawn => Some(Movement::Pawn),
            Self::Knight => Some(Movement::Stepping(&KNIGHT_JUMPS)),
            Self::Bishop => Some(Movement::Sliding(&DIAGONALS)),
            Self::Rook => Some(Movement::Sliding(&ORTHOGONALS)),
            Self::Queen => Some(Movement::Sliding(&ALL_DIRECTIONS)),
            Self::King => Some(Movement::Stepping(&ALL_DIRECTIONS)),
            Self::Empty => None,
        }
    }

    /// Returns `true` for bishops, rooks and queens.
    #[inline(always)]
    pub const fn is_slider(&self) -> bool {
        matches!(self, Self::Bishop | Self::Rook | Self::Queen)
    }

    /// Upper-case name of this kind, as stored in move histories.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pawn => "PAWN",
            Self::Knight => "KNIGHT",
            Self::Bishop => "BISHOP",
            Self::Rook => "ROOK",
            Self::Queen => "QUEEN",
            Self::King => "KING",
            Self::Empty => "EMPTY",
        }
    }

    /// Lower-case single-character code, or `.` for [`PieceKind::Empty`].
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
            Self::Empty => '.',
        }
    }

    /// Parses a piece-kind name such as `QUEEN` (case-insensitive) or a single-character code such as `q`.
    pub fn from_name(name: &str) -> Result<Self> {
        let kind = match name.trim().to_ascii_lowercase().as_str() {
            "pawn" | "p" => Self::Pawn,
            "knight" | "n" => Self::Knight,
            "bishop" | "b" => Self::Bishop,
            "rook" | "r" => Self::Rook,
            "queen" | "q" => Self::Queen,
            "king" | "k" => Self::King,
            "empty" | "." => Self::Empty,
            _ => {
                return Err(ChessError::parse(format!(
                    "Unrecognized piece kind {name:?}"
                )))
            }
        };

        Ok(kind)
    }
}

impl FromStr for PieceKind {
    type Err = ChessError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

/// The occupant of a square: a [`Camp`] together with a [`PieceKind`], or [`Piece::EMPTY`].
///
/// An empty occupant has no camp, so it is never "friendly" and never capturable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece {
    camp: Option<Camp>,
    kind: PieceKind,
}

impl Piece {
    /// The occupant of every unoccupied square.
    pub const EMPTY: Self = Self {
        camp: None,
        kind: PieceKind::Empty,
    };

    /// Creates a new [`Piece`].
    ///
    /// Passing [`PieceKind::Empty`] yields [`Piece::EMPTY`], regardless of `camp`.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::{Camp, Piece, PieceKind};
    /// let rook = Piece::new(Camp::White, PieceKind::Rook);
    /// assert_eq!(rook.camp(), Some(Camp::White));
    /// assert_eq!(Piece::new(Camp::Black, PieceKind::Empty), Piece::EMPTY);
    /// ```
    #[inline(always)]
    pub const fn new(camp: Camp, kind: PieceKind) -> Self {
        match kind {
            PieceKind::Empty => Self::EMPTY,
            _ => Self {
                camp: Some(camp),
                kind,
            },
        }
    }

    #[inline(always)]
    pub const fn camp(&self) -> Option<Camp> {
        self.camp
    }

    #[inline(always)]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.camp.is_none()
    }

    /// Returns `true` if this piece belongs to `camp`. Always `false` for [`Piece::EMPTY`].
    #[inline(always)]
    pub fn is_camp(&self, camp: Camp) -> bool {
        self.camp == Some(camp)
    }

    /// Returns `true` if this piece belongs to the camp opposing `camp`.
    #[inline(always)]
    pub fn is_enemy_of(&self, camp: Camp) -> bool {
        self.camp == Some(camp.opposite())
    }

    /// Single-character code: upper-case for White, lower-case for Black, `.` for empty.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::{Camp, Piece, PieceKind};
    /// assert_eq!(Piece::new(Camp::White, PieceKind::Knight).char(), 'N');
    /// assert_eq!(Piece::new(Camp::Black, PieceKind::Knight).char(), 'n');
    /// assert_eq!(Piece::EMPTY.char(), '.');
    /// ```
    pub const fn char(&self) -> char {
        let c = self.kind.char();
        match self.camp {
            Some(Camp::White) => c.to_ascii_uppercase(),
            _ => c,
        }
    }

    /// Parses a single-character piece code; the inverse of [`Piece::char`].
    pub fn from_char(c: char) -> Result<Self> {
        let kind = PieceKind::from_name(c.encode_utf8(&mut [0; 4]))?;
        let camp = if c.is_ascii_uppercase() {
            Camp::White
        } else {
            Camp::Black
        };

        Ok(Self::new(camp, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.char().fmt(f)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.camp {
            Some(camp) => write!(f, "{}({camp})", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
