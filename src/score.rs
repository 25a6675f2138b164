/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    iter::Sum,
    ops::{Index, IndexMut},
};

use serde::{Serialize, Serializer};

use crate::Camp;

/// A material score, stored in half-pawn units so every value in play is exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Score(pub(crate) i32);

impl Score {
    /// Score of an empty side.
    pub const ZERO: Self = Self(0);

    /// Half a pawn; what each of several pawns sharing a file is worth.
    pub const HALF_PAWN: Self = Self(1);

    /// Creates a [`Score`] from a number of half-pawns.
    #[inline(always)]
    pub const fn from_halves(halves: i32) -> Self {
        Self(halves)
    }

    #[inline(always)]
    pub const fn halves(&self) -> i32 {
        self.0
    }

    /// The score in pawns.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::Score;
    /// assert_eq!(Score::from_halves(5).as_f64(), 2.5);
    /// ```
    #[inline(always)]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

macro_rules! impl_binary_op {
    ($trait:tt, $fn:ident) => {
        impl std::ops::$trait for Score {
            type Output = Self;

            fn $fn(self, rhs: Self) -> Self::Output {
                Self(self.0.$fn(rhs.0))
            }
        }

        impl std::ops::$trait<i32> for Score {
            type Output = Self;

            fn $fn(self, rhs: i32) -> Self::Output {
                Self(self.0.$fn(rhs))
            }
        }
    };
}

macro_rules! impl_binary_op_assign {
    ($trait:tt, $fn:ident) => {
        impl std::ops::$trait for Score {
            fn $fn(&mut self, rhs: Self) {
                self.0.$fn(rhs.0);
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);

impl_binary_op_assign!(AddAssign, add_assign);

impl Sum for Score {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, score| acc + score)
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:.1}", self.as_f64()))
    }
}

/// The material scores of both camps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Scores {
    pub white: Score,
    pub black: Score,
}

impl Scores {
    /// The camp with more material, or `None` if both are level.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::{Camp, Score, Scores};
    /// let scores = Scores { white: Score::from_halves(4), black: Score::from_halves(2) };
    /// assert_eq!(scores.leader(), Some(Camp::White));
    /// assert_eq!(Scores::default().leader(), None);
    /// ```
    pub fn leader(&self) -> Option<Camp> {
        Camp::all()
            .into_iter()
            .find(|&camp| self.margin(camp) > Score::ZERO)
    }

    /// How far `camp` is ahead of its opponent. Negative when behind.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::{Camp, Score, Scores};
    /// let scores = Scores { white: Score::from_halves(7), black: Score::from_halves(4) };
    /// assert_eq!(scores.margin(Camp::White).to_string(), "1.5");
    /// assert_eq!(scores.margin(Camp::Black).to_string(), "-1.5");
    /// ```
    #[inline(always)]
    pub fn margin(&self, camp: Camp) -> Score {
        self[camp] - self[camp.opposite()]
    }
}

impl Index<Camp> for Scores {
    type Output = Score;
    #[inline(always)]
    fn index(&self, index: Camp) -> &Self::Output {
        match index {
            Camp::White => &self.white,
            Camp::Black => &self.black,
        }
    }
}

impl IndexMut<Camp> for Scores {
    #[inline(always)]
    fn index_mut(&mut self, index: Camp) -> &mut Self::Output {
        match index {
            Camp::White => &mut self.white,
            Camp::Black => &mut self.black,
        }
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}, {}: {}", Camp::White, self.white, Camp::Black, self.black)
    }
}
