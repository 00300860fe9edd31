//! Precomputed edge distances for sliding pieces.
//!
//! Each entry counts the single steps a slider can take from a square in one
//! direction before it would leave the board. A move generator walks a ray
//! with `for _ in 0..distance` and never needs a wrap check.

use std::iter::FusedIterator;

use crate::direction::Direction;
use crate::square::Square;

/// Maximum sliding distance for every square (rows) and direction (columns).
///
/// Values are in 0..=7. Columns follow [`Direction::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DistanceTable([[u8; Direction::COUNT]; Square::COUNT]);

/// The table, computed at compile time.
pub static MAX_SLIDING_DISTANCE: DistanceTable = generate();

const fn min(a: u8, b: u8) -> u8 {
    if a < b { a } else { b }
}

/// Distances from `sq` to the board edge along each direction.
///
/// Orthogonal distances come from rank/file arithmetic; a diagonal stops at
/// whichever of its two edges is nearer.
const fn edge_distances(sq: Square) -> [u8; Direction::COUNT] {
    let rank = sq.rank();
    let file = sq.file();

    let north = rank.steps_north();
    let south = rank.steps_south();
    let west = file.steps_west();
    let east = file.steps_east();

    let mut row = [0u8; Direction::COUNT];
    row[Direction::North.index()] = north;
    row[Direction::South.index()] = south;
    row[Direction::West.index()] = west;
    row[Direction::East.index()] = east;
    row[Direction::NorthWest.index()] = min(north, west);
    row[Direction::NorthEast.index()] = min(north, east);
    row[Direction::SouthWest.index()] = min(south, west);
    row[Direction::SouthEast.index()] = min(south, east);
    row
}

/// Build the full 64×8 distance table.
///
/// Pure and total: every call returns the same table as
/// [`MAX_SLIDING_DISTANCE`].
pub const fn generate() -> DistanceTable {
    let mut table = [[0u8; Direction::COUNT]; Square::COUNT];
    let mut sq = 0usize;
    while sq < Square::COUNT {
        table[sq] = edge_distances(Square::from_index_unchecked(sq as u8));
        sq += 1;
    }
    DistanceTable(table)
}

impl DistanceTable {
    /// Steps available from `sq` along `dir`.
    #[inline]
    pub const fn distance(&self, sq: Square, dir: Direction) -> u8 {
        self.0[sq.index()][dir.index()]
    }

    /// All eight distances for `sq`, in [`Direction::ALL`] order.
    #[inline]
    pub const fn row(&self, sq: Square) -> &[u8; Direction::COUNT] {
        &self.0[sq.index()]
    }

    /// The raw array, for embedding or serialization.
    #[inline]
    pub const fn as_array(&self) -> &[[u8; Direction::COUNT]; Square::COUNT] {
        &self.0
    }

    /// Iterate over rows in square order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8; Direction::COUNT]> + '_ {
        self.0.iter()
    }

    /// Squares reached by sliding from `sq` along `dir` on an empty board.
    ///
    /// The origin is not included. The walk is bounded by the table entry, so
    /// it stops at the edge instead of wrapping onto the next rank.
    pub fn ray(&self, sq: Square, dir: Direction) -> Ray {
        Ray {
            current: sq,
            dir,
            remaining: self.distance(sq, dir),
        }
    }
}

/// Iterator over the squares of one ray. See [`DistanceTable::ray`].
#[derive(Debug, Clone)]
pub struct Ray {
    current: Square,
    dir: Direction,
    remaining: u8,
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.current = self.current.offset(self.dir)?;
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Ray {}

impl FusedIterator for Ray {}
