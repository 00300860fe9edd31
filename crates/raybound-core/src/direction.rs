//! The eight sliding directions, in the order every table row uses.

use std::fmt;

/// A sliding direction.
///
/// The discriminant is the column of the direction in every
/// [`DistanceTable`](crate::DistanceTable) row. Consumers index rows
/// positionally, so the order of the variants is part of the table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    South = 1,
    West = 2,
    East = 3,
    NorthWest = 4,
    NorthEast = 5,
    SouthWest = 6,
    SouthEast = 7,
}

impl Direction {
    /// Total number of directions.
    pub const COUNT: usize = 8;

    /// All directions in table column order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// Rook directions (columns 0..4).
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Bishop directions (columns 4..8).
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// Return the table column (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Signed step in flattened square-index space.
    ///
    /// North is toward rank 1 (−8), west toward the a-file (−1).
    #[inline]
    pub const fn offset(self) -> i8 {
        match self {
            Direction::North => -8,
            Direction::South => 8,
            Direction::West => -1,
            Direction::East => 1,
            Direction::NorthWest => -9,
            Direction::NorthEast => -7,
            Direction::SouthWest => 7,
            Direction::SouthEast => 9,
        }
    }

    /// The direction pointing the other way (offset negated).
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::NorthWest => Direction::SouthEast,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::SouthEast => Direction::NorthWest,
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.index() >= 4
    }

    /// The two orthogonal directions whose edges bound a diagonal.
    ///
    /// Returns `None` for orthogonal directions.
    pub const fn components(self) -> Option<(Direction, Direction)> {
        match self {
            Direction::NorthWest => Some((Direction::North, Direction::West)),
            Direction::NorthEast => Some((Direction::North, Direction::East)),
            Direction::SouthWest => Some((Direction::South, Direction::West)),
            Direction::SouthEast => Some((Direction::South, Direction::East)),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
            Direction::NorthWest => "northwest",
            Direction::NorthEast => "northeast",
            Direction::SouthWest => "southwest",
            Direction::SouthEast => "southeast",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
