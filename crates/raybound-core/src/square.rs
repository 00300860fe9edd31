//! Board squares using Little-Endian Rank-File (LERF) encoding.

use std::fmt;

use crate::direction::Direction;
use crate::file::File;
use crate::rank::Rank;

/// A square on the board, encoded as a `u8` in LERF format.
///
/// Index = rank * 8 + file, so A1 = 0, B1 = 1, ..., H8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    pub const A1: Square = Square(0);
    pub const H1: Square = Square(7);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const A8: Square = Square(56);
    pub const H8: Square = Square(63);

    /// The four corners, where two orthogonal and one or more diagonal rays are empty.
    pub const CORNERS: [Square; 4] = [Square::A1, Square::H1, Square::A8, Square::H8];

    /// Create a square from a rank and file.
    #[inline]
    pub const fn new(rank: Rank, file: File) -> Square {
        Square(rank.index() as u8 * 8 + file.index() as u8)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if (index as usize) < Square::COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse an algebraic coordinate such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank_char = chars.next()?;
        if chars.next().is_some() || !('1'..='8').contains(&rank_char) {
            return None;
        }
        let rank = Rank::from_index(rank_char as u8 - b'1')?;
        Some(Square::new(rank, file))
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Step once along `dir` in flattened index space.
    ///
    /// Returns `None` only when the index leaves 0..63; a step off the a- or
    /// h-file wraps onto the neighbouring rank, so callers must bound the
    /// walk with the distance table.
    #[inline]
    pub const fn offset(self, dir: Direction) -> Option<Square> {
        let next = self.0 as i16 + dir.offset() as i16;
        if next >= 0 && next < Square::COUNT as i16 {
            Some(Square(next as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in index order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
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

    #[test]
    fn rank_file_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::new(sq.rank(), sq.file()), sq);
            assert_eq!(sq.index(), sq.rank().index() * 8 + sq.file().index());
        }
    }

    #[test]
    fn from_index_bounds() {
        assert_eq!(Square::from_index(63), Some(Square::H8));
        assert!(Square::from_index(64).is_none());
        assert!(Square::from_index(255).is_none());
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(Square::from_algebraic("d4"), Some(Square::D4));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::H8));
        assert_eq!(format!("{}", Square::E4), "e4");
        assert_eq!(format!("{:?}", Square::D5), "Square(d5)");
    }

    #[test]
    fn algebraic_invalid() {
        for bad in ["i1", "a9", "a0", "", "a", "a1b", "A1", "1a"] {
            assert!(Square::from_algebraic(bad).is_none(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn named_squares_decompose() {
        assert_eq!(Square::D4, Square::new(Rank::Rank4, File::FileD));
        assert_eq!(Square::E5, Square::new(Rank::Rank5, File::FileE));
        assert_eq!(Square::H1.index(), 7);
        assert_eq!(Square::A8.index(), 56);
    }

    #[test]
    fn offset_wraps_across_files() {
        // H1 + East lands on A2: the wrap the distance table exists to prevent.
        assert_eq!(Square::H1.offset(Direction::East), Some(Square::new(Rank::Rank2, File::FileA)));
        assert_eq!(Square::A1.offset(Direction::North), None);
        assert_eq!(Square::H8.offset(Direction::SouthEast), None);
    }
}
