/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Camp, ChessError, Result};

/// Represents a single square on an `8x8` chess board.
///
/// Internally encoded as `square = file + rank * 8`, so a board can be stored as a flat array of 64 entries
/// and indexed directly by a [`Square`]:
/// ```text
/// 8| 56 57 58 59 60 61 62 63
/// 7| 48 49 50 51 52 53 54 55
/// 6| 40 41 42 43 44 45 46 47
/// 5| 32 33 34 35 36 37 38 39
/// 4| 24 25 26 27 28 29 30 31
/// 3| 16 17 18 19 20 21 22 23
/// 2|  8  9 10 11 12 13 14 15
/// 1|  0  1  2  3  4  5  6  7
///  +------------------------
///    a  b  c  d  e  f  g  h
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    pub const A1: Self = Self::new(File::A, Rank::ONE);
    pub const A2: Self = Self::new(File::A, Rank::TWO);
    pub const A3: Self = Self::new(File::A, Rank::THREE);
    pub const A4: Self = Self::new(File::A, Rank::FOUR);
    pub const A5: Self = Self::new(File::A, Rank::FIVE);
    pub const A6: Self = Self::new(File::A, Rank::SIX);
    pub const A7: Self = Self::new(File::A, Rank::SEVEN);
    pub const A8: Self = Self::new(File::A, Rank::EIGHT);

    pub const B1: Self = Self::new(File::B, Rank::ONE);
    pub const B2: Self = Self::new(File::B, Rank::TWO);
    pub const B3: Self = Self::new(File::B, Rank::THREE);
    pub const B4: Self = Self::new(File::B, Rank::FOUR);
    pub const B5: Self = Self::new(File::B, Rank::FIVE);
    pub const B6: Self = Self::new(File::B, Rank::SIX);
    pub const B7: Self = Self::new(File::B, Rank::SEVEN);
    pub const B8: Self = Self::new(File::B, Rank::EIGHT);

    pub const C1: Self = Self::new(File::C, Rank::ONE);
    pub const C2: Self = Self::new(File::C, Rank::TWO);
    pub const C3: Self = Self::new(File::C, Rank::THREE);
    pub const C4: Self = Self::new(File::C, Rank::FOUR);
    pub const C5: Self = Self::new(File::C, Rank::FIVE);
    pub const C6: Self = Self::new(File::C, Rank::SIX);
    pub const C7: Self = Self::new(File::C, Rank::SEVEN);
    pub const C8: Self = Self::new(File::C, Rank::EIGHT);

    pub const D1: Self = Self::new(File::D, Rank::ONE);
    pub const D2: Self = Self::new(File::D, Rank::TWO);
    pub const D3: Self = Self::new(File::D, Rank::THREE);
    pub const D4: Self = Self::new(File::D, Rank::FOUR);
    pub const D5: Self = Self::new(File::D, Rank::FIVE);
    pub const D6: Self = Self::new(File::D, Rank::SIX);
    pub const D7: Self = Self::new(File::D, Rank::SEVEN);
    pub const D8: Self = Self::new(File::D, Rank::EIGHT);

    pub const E1: Self = Self::new(File::E, Rank::ONE);
    pub const E2: Self = Self::new(File::E, Rank::TWO);
    pub const E3: Self = Self::new(File::E, Rank::THREE);
    pub const E4: Self = Self::new(File::E, Rank::FOUR);
    pub const E5: Self = Self::new(File::E, Rank::FIVE);
    pub const E6: Self = Self::new(File::E, Rank::SIX);
    pub const E7: Self = Self::new(File::E, Rank::SEVEN);
    pub const E8: Self = Self::new(File::E, Rank::EIGHT);

    pub const F1: Self = Self::new(File::F, Rank::ONE);
    pub const F2: Self = Self::new(File::F, Rank::TWO);
    pub const F3: Self = Self::new(File::F, Rank::THREE);
    pub const F4: Self = Self::new(File::F, Rank::FOUR);
    pub const F5: Self = Self::new(File::F, Rank::FIVE);
    pub const F6: Self = Self::new(File::F, Rank::SIX);
    pub const F7: Self = Self::new(File::F, Rank::SEVEN);
    pub const F8: Self = Self::new(File::F, Rank::EIGHT);

    pub const G1: Self = Self::new(File::G, Rank::ONE);
    pub const G2: Self = Self::new(File::G, Rank::TWO);
    pub const G3: Self = Self::new(File::G, Rank::THREE);
    pub const G4: Self = Self::new(File::G, Rank::FOUR);
    pub const G5: Self = Self::new(File::G, Rank::FIVE);
    pub const G6: Self = Self::new(File::G, Rank::SIX);
    pub const G7: Self = Self::new(File::G, Rank::SEVEN);
    pub const G8: Self = Self::new(File::G, Rank::EIGHT);

    pub const H1: Self = Self::new(File::H, Rank::ONE);
    pub const H2: Self = Self::new(File::H, Rank::TWO);
    pub const H3: Self = Self::new(File::H, Rank::THREE);
    pub const H4: Self = Self::new(File::H, Rank::FOUR);
    pub const H5: Self = Self::new(File::H, Rank::FIVE);
    pub const H6: Self = Self::new(File::H, Rank::SIX);
    pub const H7: Self = Self::new(File::H, Rank::SEVEN);
    pub const H8: Self = Self::new(File::H, Rank::EIGHT);

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 63;
    pub const COUNT: usize = 64;

    /// Returns an iterator over all 64 squares, starting at `a1` and ending at `h8`.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::Square;
    /// let mut iter = Square::iter();
    /// assert_eq!(iter.len(), 64);
    /// assert_eq!(iter.next().unwrap(), Square::A1);
    /// assert_eq!(iter.last().unwrap(), Square::H8);
    /// ```
    #[inline(always)]
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    /// Creates a new [`Square`] from the provided [`File`] and [`Rank`].
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::{Square, File, Rank};
    /// let c4 = Square::new(File::C, Rank::FOUR);
    /// assert_eq!(c4, Square::C4);
    /// ```
    #[inline(always)]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self(file.0 | rank.0 << 3)
    }

    /// Creates a new [`Square`] from a file index and a rank index, both of which must be in `[0, 7]`.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::{ChessError, Square};
    /// assert_eq!(Square::from_indices(4, 1), Ok(Square::E2));
    /// assert_eq!(
    ///     Square::from_indices(8, 0),
    ///     Err(ChessError::OutOfRange { file: 8, rank: 0 })
    /// );
    /// ```
    pub fn from_indices(file: i16, rank: i16) -> Result<Self> {
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return Err(ChessError::OutOfRange { file, rank });
        }

        Ok(Self::new(File(file as u8), Rank(rank as u8)))
    }

    #[inline(always)]
    pub const fn file(&self) -> File {
        File(self.0 & 0b111)
    }

    #[inline(always)]
    pub const fn rank(&self) -> Rank {
        Rank(self.0 >> 3)
    }

    /// Obtain the inner value as a `usize`.
    ///
    /// Useful for indexing.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns `(file delta, rank delta)` needed to travel from `self` to `other`.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::Square;
    /// assert_eq!(Square::B1.delta(Square::C3), (1, 2));
    /// assert_eq!(Square::H8.delta(Square::A1), (-7, -7));
    /// ```
    #[inline(always)]
    pub const fn delta(&self, other: Self) -> (i8, i8) {
        (
            other.file().0 as i8 - self.file().0 as i8,
            other.rank().0 as i8 - self.rank().0 as i8,
        )
    }

    /// Attempt to offset this [`Square`] by the provided deltas.
    ///
    /// If the result would fall off the board, `None` is returned.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::Square;
    /// assert_eq!(Square::A1.offset(1, 2), Some(Square::B3));
    /// assert_eq!(Square::A1.offset(-1, 0), None);
    /// ```
    #[inline(always)]
    pub const fn offset(&self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file().0 as i8 + file_delta;
        let rank = self.rank().0 as i8 + rank_delta;

        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Self::new(File(file as u8), Rank(rank as u8)))
        }
    }

    /// Parses a two-character square code, such as `e2`.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::Square;
    /// assert_eq!(Square::from_uci("e2").unwrap(), Square::E2);
    /// assert!(Square::from_uci("i9").is_err());
    /// assert!(Square::from_uci("E2").is_err());
    /// ```
    pub fn from_uci(square: &str) -> Result<Self> {
        let mut chars = square.chars();

        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ChessError::parse(format!(
                "Square codes must be exactly two characters, such as \"e2\". Got {square:?}"
            )));
        };

        Ok(Self::new(File::from_char(file)?, Rank::from_char(rank)?))
    }

    /// Converts this [`Square`] into its two-character code.
    #[inline(always)]
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl FromStr for Square {
    type Err = ChessError;
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_uci(s)
    }
}

impl<T> Index<Square> for [T; Square::COUNT] {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: Square) -> &Self::Output {
        &self[index.index()]
    }
}

impl<T> IndexMut<Square> for [T; Square::COUNT] {
    #[inline(always)]
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self[index.index()]
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_uci())
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::from_uci(&code).map_err(de::Error::custom)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} ({})", self.0)
    }
}

/// Represents a single rank (row) on a chess board, `1` through `8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Rank(u8);

impl Rank {
    pub const ONE: Self = Self(0);
    pub const TWO: Self = Self(1);
    pub const THREE: Self = Self(2);
    pub const FOUR: Self = Self(3);
    pub const FIVE: Self = Self(4);
    pub const SIX: Self = Self(5);
    pub const SEVEN: Self = Self(6);
    pub const EIGHT: Self = Self(7);

    pub const COUNT: usize = 8;

    #[inline(always)]
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }

    /// Creates a new [`Rank`] from an index in `[0, 7]`.
    #[inline(always)]
    pub const fn new(rank: u8) -> Option<Self> {
        if rank < Self::COUNT as u8 {
            Some(Self(rank))
        } else {
            None
        }
    }

    /// Rank on which `camp`'s pieces (other than pawns) start.
    #[inline(always)]
    pub const fn first(camp: Camp) -> Self {
        [Self::ONE, Self::EIGHT][camp.index()]
    }

    /// Rank on which `camp`'s pawns start.
    #[inline(always)]
    pub const fn second(camp: Camp) -> Self {
        [Self::TWO, Self::SEVEN][camp.index()]
    }

    pub fn from_char(rank: char) -> Result<Self> {
        rank.to_digit(10)
            .and_then(|digit| digit.checked_sub(1))
            .and_then(|index| Self::new(index as u8))
            .ok_or_else(|| {
                ChessError::parse(format!(
                    "Invalid char for Rank: Must be between [1, 8]. Got {rank:?}"
                ))
            })
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub const fn char(&self) -> char {
        (self.0 + b'1') as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.char().fmt(f)
    }
}

impl fmt::Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.char(), self.0)
    }
}

/// Represents a single file (column) on a chess board, `a` through `h`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct File(u8);

impl File {
    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const C: Self = Self(2);
    pub const D: Self = Self(3);
    pub const E: Self = Self(4);
    pub const F: Self = Self(5);
    pub const G: Self = Self(6);
    pub const H: Self = Self(7);

    pub const COUNT: usize = 8;

    #[inline(always)]
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }

    /// Creates a new [`File`] from an index in `[0, 7]`.
    #[inline(always)]
    pub const fn new(file: u8) -> Option<Self> {
        if file < Self::COUNT as u8 {
            Some(Self(file))
        } else {
            None
        }
    }

    /// Parses a lower-case file letter, `a` through `h`.
    pub fn from_char(file: char) -> Result<Self> {
        if !('a'..='h').contains(&file) {
            return Err(ChessError::parse(format!(
                "Invalid char for File: Must be between [a, h]. Got {file:?}"
            )));
        }

        Ok(Self(file as u8 - b'a'))
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub const fn char(&self) -> char {
        (self.0 + b'a') as char
    }
}

impl<T> Index<File> for [T; File::COUNT] {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: File) -> &Self::Output {
        &self[index.index()]
    }
}

impl<T> IndexMut<File> for [T; File::COUNT] {
    #[inline(always)]
    fn index_mut(&mut self, index: File) -> &mut Self::Output {
        &mut self[index.index()]
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.char().fmt(f)
    }
}

impl fmt::Debug for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.char(), self.0)
    }
}
