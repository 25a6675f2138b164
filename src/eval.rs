/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::{Board, Camp, File, PieceKind, Rank, Score, Scores, Square};

/// Fixed material value of a piece kind.
///
/// Kings are worth nothing: losing one ends the game instead.
#[inline(always)]
pub const fn value_of(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => Score(2),
        PieceKind::Knight => Score(5),
        PieceKind::Bishop => Score(6),
        PieceKind::Rook => Score(10),
        PieceKind::Queen => Score(18),
        PieceKind::King | PieceKind::Empty => Score(0),
    }
}

/// Initial material value of either side in a standard setup.
pub const INITIAL_MATERIAL_VALUE: Score = Score(
    value_of(PieceKind::Pawn).0 * 8
        + value_of(PieceKind::Knight).0 * 2
        + value_of(PieceKind::Bishop).0 * 2
        + value_of(PieceKind::Rook).0 * 2
        + value_of(PieceKind::Queen).0,
);

/// Counts the material on a board.
///
/// Every piece counts for its fixed value, except pawns that share a file with another pawn of
/// their own camp: each of those is worth half a pawn.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    board: &'a Board,
}

impl<'a> Evaluator<'a> {
    #[inline(always)]
    pub const fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Material score of `camp`.
    ///
    /// # Example
    /// ```
    /// # use chess_arbiter::*;
    /// // Two white pawns on the a-file, and nothing else
    /// let board = Board::from_placement("8/8/8/8/P7/8/P7/8").unwrap();
    /// assert_eq!(Evaluator::new(&board).score(Camp::White).as_f64(), 1.0);
    /// ```
    pub fn score(&self, camp: Camp) -> Score {
        let pieces = self
            .board
            .pieces_of(camp)
            .filter(|(_, piece)| piece.kind() != PieceKind::Pawn)
            .map(|(_, piece)| value_of(piece.kind()))
            .sum::<Score>();

        let pawns = self
            .pawns_per_file(camp)
            .into_iter()
            .map(|count| match count {
                0 => Score::ZERO,
                1 => value_of(PieceKind::Pawn),
                doubled => Score::HALF_PAWN * doubled,
            })
            .sum::<Score>();

        pieces + pawns
    }

    /// Material scores of both camps.
    #[inline(always)]
    pub fn scores(&self) -> Scores {
        let mut scores = Scores::default();
        for camp in Camp::all() {
            scores[camp] = self.score(camp);
        }

        scores
    }

    /// Number of `camp`'s pawns on each file.
    fn pawns_per_file(&self, camp: Camp) -> [i32; File::COUNT] {
        let mut counts = [0; File::COUNT];

        for (square, piece) in self.board.pieces_of(camp) {
            if piece.kind() == PieceKind::Pawn {
                counts[square.file()] += 1;
            }
        }

        counts
    }

    /// What the piece on `square` adds to its camp's score.
    fn value_at(&self, square: Square) -> Option<Score> {
        let piece = self.board.get(square);
        let camp = piece.camp()?;

        if piece.kind() == PieceKind::Pawn && self.pawns_per_file(camp)[square.file()] > 1 {
            Some(Score::HALF_PAWN)
        } else {
            Some(value_of(piece.kind()))
        }
    }
}

impl fmt::Display for Evaluator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  +")?;
        for _ in File::iter() {
            write!(f, "-----+")?;
        }
        writeln!(f)?;

        for rank in Rank::iter().rev() {
            write!(f, "{rank} |")?;

            // Step 1: Write the piece char
            for file in File::iter() {
                let piece = self.board.get(Square::new(file, rank));
                let piece_char = if piece.is_empty() { ' ' } else { piece.char() };
                write!(f, "  {piece_char}  |")?;
            }
            writeln!(f)?;
            write!(f, "  |")?;

            // Step 2: Write the contribution of that piece
            for file in File::iter() {
                match self.value_at(Square::new(file, rank)) {
                    Some(value) => write!(f, "{value:^5}|")?,
                    None => write!(f, "     |")?,
                }
            }
            writeln!(f)?;

            write!(f, "  +")?;
            for _ in File::iter() {
                write!(f, "-----+")?;
            }
            writeln!(f)?;
        }

        write!(f, "   ")?;
        for file in File::iter() {
            write!(f, "  {file}   ")?;
        }
        writeln!(f)?;

        write!(f, "\n{}", self.scores())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_of(placement: &str) -> Scores {
        Evaluator::new(&Board::from_placement(placement).unwrap()).scores()
    }

    #[test]
    fn test_starting_material() {
        let scores = Evaluator::new(&Board::default()).scores();
        assert_eq!(scores.white, INITIAL_MATERIAL_VALUE);
        assert_eq!(scores.black, INITIAL_MATERIAL_VALUE);
        assert_eq!(scores.white.as_f64(), 38.0);
        assert_eq!(scores.leader(), None);
    }

    #[test]
    fn test_doubled_pawns_count_half() {
        // White pawns on a2 and a4
        let scores = scores_of("8/8/8/8/P7/8/P7/8");
        assert_eq!(scores.white.as_f64(), 1.0);
        assert_eq!(scores.black, Score::ZERO);

        // Tripled black pawns on the c-file, plus a lone one on h7
        let scores = scores_of("8/2p4p/2p5/2p5/8/8/8/8");
        assert_eq!(scores.black.as_f64(), 2.5);
    }

    #[test]
    fn test_only_same_camp_pawns_are_doubled() {
        // White on e4, black on e5: both full value
        let scores = scores_of("8/8/8/4p3/4P3/8/8/8");
        assert_eq!(scores.white.as_f64(), 1.0);
        assert_eq!(scores.black.as_f64(), 1.0);
    }

    #[test]
    fn test_pieces_are_never_halved() {
        // Two rooks and a queen stacked on the d-file, king on e1
        let scores = scores_of("3r4/8/3R4/8/3R4/8/3Q4/4K3");
        assert_eq!(scores.white.as_f64(), 19.0);
        assert_eq!(scores.black.as_f64(), 5.0);
        assert_eq!(scores.leader(), Some(Camp::White));
    }

    #[test]
    fn test_knight_value() {
        assert_eq!(scores_of("8/8/8/8/8/8/8/1N6").white.as_f64(), 2.5);
    }

    #[test]
    fn test_display_lists_contributions() {
        let board = Board::from_placement("8/8/8/8/P7/8/P7/8").unwrap();
        let shown = Evaluator::new(&board).to_string();
        assert!(shown.contains(" 0.5 "));
        assert!(shown.ends_with("WHITE: 1.0, BLACK: 0.0"));
    }
}
