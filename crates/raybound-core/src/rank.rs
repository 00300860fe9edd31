//! Board ranks (rows 1–8) and their distances to the top and bottom edges.

use std::fmt;

/// A rank (row) of the board, from Rank1 (index 0) to Rank8 (index 7).
///
/// The table's "north" walks toward Rank1 (decreasing index) and "south"
/// toward Rank8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// Total number of ranks.
    pub const COUNT: usize = 8;

    /// All ranks in index order.
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// Return the index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a rank from a zero-based index (0 = Rank1, 7 = Rank8).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rank> {
        if (index as usize) < Rank::COUNT {
            Some(Rank::ALL[index as usize])
        } else {
            None
        }
    }

    /// Steps available toward decreasing rank before leaving the board.
    #[inline]
    pub const fn steps_north(self) -> u8 {
        self as u8
    }

    /// Steps available toward increasing rank before leaving the board.
    #[inline]
    pub const fn steps_south(self) -> u8 {
        (Rank::COUNT as u8 - 1) - self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}
