//! Board coordinates.

use std::fmt;

use crate::direction::Direction;
use crate::file::File;
use crate::rank::Rank;

/// A board coordinate: a rank and a file.
///
/// Squares are ordered rank-major from a1 (White's queen-rook corner) to h8,
/// which is also the order board scans visit them in.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    rank: Rank,
    file: File,
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    #[inline]
    pub const fn new(rank: Rank, file: File) -> Square {
        Square { rank, file }
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(rank, file))
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> File {
        self.file
    }

    /// The square one `dir` step away, `None` if it falls off the board.
    #[inline]
    pub const fn offset(self, dir: Direction) -> Option<Square> {
        let Some(rank) = self.rank.offset(dir.d_rank) else {
            return None;
        };
        let Some(file) = self.file.offset(dir.d_file) else {
            return None;
        };
        Some(Square::new(rank, file))
    }

    /// King-step distance: the larger of the rank and file differences.
    pub fn distance(self, other: Square) -> usize {
        let dr = self.rank.index().abs_diff(other.rank.index());
        let df = self.file.index().abs_diff(other.file.index());
        dr.max(df)
    }

    /// All 64 squares, a1, b1, ..., h8.
    pub fn all() -> impl Iterator<Item = Square> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| File::ALL.into_iter().map(move |file| Square::new(rank, file)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::direction::Direction;
    use crate::file::File;
    use crate::rank::Rank;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn algebraic_roundtrip() {
        for square in Square::all() {
            assert_eq!(Square::from_algebraic(&square.to_string()), Some(square));
        }
        assert_eq!(sq("e4"), Square::new(Rank::Rank4, File::FileE));
    }

    #[test]
    fn algebraic_invalid() {
        for bad in ["", "e", "i1", "a9", "a0", "E4", "e44"] {
            assert!(Square::from_algebraic(bad).is_none(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn offset_respects_edges() {
        assert_eq!(sq("e4").offset(Direction::NORTH_EAST), Some(sq("f5")));
        assert_eq!(sq("a1").offset(Direction::SOUTH_WEST), None);
        assert_eq!(sq("h4").offset(Direction::EAST), None);
        assert_eq!(sq("g1").offset(Direction::new(2, -1)), Some(sq("f3")));
    }

    #[test]
    fn distance_is_chebyshev() {
        assert_eq!(sq("e4").distance(sq("e4")), 0);
        assert_eq!(sq("e4").distance(sq("f5")), 1);
        assert_eq!(sq("a1").distance(sq("h8")), 7);
        assert_eq!(sq("b1").distance(sq("c3")), 2);
    }

    #[test]
    fn all_is_rank_major() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(squares.len(), Square::COUNT);
        assert_eq!(squares[0], sq("a1"));
        assert_eq!(squares[1], sq("b1"));
        assert_eq!(squares[8], sq("a2"));
        assert_eq!(squares[63], sq("h8"));
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", sq("e4")), "Square(e4)");
    }
}
