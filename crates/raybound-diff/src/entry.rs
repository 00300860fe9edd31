//! Parsing of perft divide lines such as `e7e8q: 42`.

use std::fmt;

use raybound_core::Square;

/// Piece a pawn promotes to, written as the trailing letter of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    pub const fn from_char(c: char) -> Option<Promotion> {
        match c {
            'q' => Some(Promotion::Queen),
            'r' => Some(Promotion::Rook),
            'b' => Some(Promotion::Bishop),
            'n' => Some(Promotion::Knight),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Promotion::Queen => 'q',
            Promotion::Rook => 'r',
            Promotion::Bishop => 'b',
            Promotion::Knight => 'n',
        }
    }
}

/// A move in long algebraic form: source, destination, optional promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DivideMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Promotion>,
}

impl DivideMove {
    /// Parse `e2e4` or `e7e8q`. Returns `None` for anything else.
    pub fn from_uci(s: &str) -> Option<DivideMove> {
        let from = Square::from_algebraic(s.get(0..2)?)?;
        let to = Square::from_algebraic(s.get(2..4)?)?;
        let mut rest = s.get(4..)?.chars();
        let promotion = match rest.next() {
            None => None,
            Some(c) => Some(Promotion::from_char(c)?),
        };
        if rest.next().is_some() {
            return None;
        }
        Some(DivideMove {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for DivideMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// One `move: count` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DivideEntry {
    pub mv: DivideMove,
    pub count: u64,
}

impl DivideEntry {
    pub fn new(mv: DivideMove, count: u64) -> Self {
        Self { mv, count }
    }
}

impl fmt::Display for DivideEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.mv, self.count)
    }
}

/// Parse one divide line.
///
/// The move must start the line and be followed by `": "` and at least one
/// digit. Anything after the digits is ignored. Lines that do not fit yield
/// `None`. A count that overflows `u64` is also rejected; no perft total gets
/// near that bound.
pub fn parse_line(line: &str) -> Option<DivideEntry> {
    let (mv, rest) = line.split_once(": ")?;
    let mv = DivideMove::from_uci(mv)?;
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let count = rest[..digits_end].parse().ok()?;
    Some(DivideEntry { mv, count })
}
