use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::board::EXTENDED_SIDE;

/// A board square named by column ('a'..='g') and row ('1'..='7') characters.
///
/// Squares up to two columns/rows outside the playable range are also
/// representable; they address the always-blocked border region, which lets
/// move probes land there and be rejected by the ordinary legality rule
/// instead of by bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    col: char,
    row: char,
}

impl Square {
    /// A square in the extended region, or `None` if out of range entirely.
    pub fn new(col: char, row: char) -> Option<Square> {
        let c = col as i32 - 'a' as i32;
        let r = row as i32 - '1' as i32;
        if (-2..7 + 2).contains(&c) && (-2..7 + 2).contains(&r) {
            Some(Square { col, row })
        } else {
            None
        }
    }

    pub fn col(&self) -> char {
        self.col
    }

    pub fn row(&self) -> char {
        self.row
    }

    /// True iff this square lies on the playable 7x7 grid.
    pub fn is_interior(&self) -> bool {
        ('a'..='g').contains(&self.col) && ('1'..='7').contains(&self.row)
    }

    /// Linearized index into the extended (7+4)x(7+4) grid, row-major.
    pub fn index(&self) -> usize {
        let c = self.col as i32 - 'a' as i32 + 2;
        let r = self.row as i32 - '1' as i32 + 2;
        (r * EXTENDED_SIDE as i32 + c) as usize
    }

    /// The square displaced by (dc, dr), if still in the extended region.
    pub fn offset(&self, dc: i32, dr: i32) -> Option<Square> {
        let col = char::from_u32((self.col as i32 + dc) as u32)?;
        let row = char::from_u32((self.row as i32 + dr) as u32)?;
        Square::new(col, row)
    }

    /// Chebyshev (king-move) distance to another square.
    pub fn distance(&self, other: Square) -> u32 {
        let dc = (self.col as i32 - other.col as i32).unsigned_abs();
        let dr = (self.row as i32 - other.row as i32).unsigned_abs();
        dc.max(dr)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col, self.row)
    }
}

/// Failure to interpret text as a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a move: '{0}'")]
pub struct ParseMoveError(pub String);

/// One Ataxx action. Extends and jumps carry their geometry in the variant:
/// an extend's destination is at Chebyshev distance 1 from its source, a
/// jump's at distance 2. `Move::new` is the only way to build the
/// coordinate-carrying variants, so the invariant holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Pass,
    Extend { from: Square, to: Square },
    Jump { from: Square, to: Square },
}

impl Move {
    /// Classify a source/destination pair as an extend or a jump.
    /// Returns `None` when the pair has neither shape (distance 0 or > 2).
    pub fn new(from: Square, to: Square) -> Option<Move> {
        match from.distance(to) {
            1 => Some(Move::Extend { from, to }),
            2 => Some(Move::Jump { from, to }),
            _ => None,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    pub fn is_extend(&self) -> bool {
        matches!(self, Move::Extend { .. })
    }

    pub fn is_jump(&self) -> bool {
        matches!(self, Move::Jump { .. })
    }

    /// Source square, `None` for a pass.
    pub fn from_sq(&self) -> Option<Square> {
        match self {
            Move::Pass => None,
            Move::Extend { from, .. } | Move::Jump { from, .. } => Some(*from),
        }
    }

    /// Destination square, `None` for a pass.
    pub fn to_sq(&self) -> Option<Square> {
        match self {
            Move::Pass => None,
            Move::Extend { to, .. } | Move::Jump { to, .. } => Some(*to),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses the textual protocol: `"c2-c4"`, or `"pass"` / `"-"`.
    /// Only interior squares can be named in text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError(s.to_string());
        if s == "pass" || s == "-" {
            return Ok(Move::Pass);
        }
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 5 || chars[2] != '-' {
            return Err(err());
        }
        let from = Square::new(chars[0], chars[1]).ok_or_else(err)?;
        let to = Square::new(chars[3], chars[4]).ok_or_else(err)?;
        if !from.is_interior() || !to.is_interior() {
            return Err(err());
        }
        Move::new(from, to).ok_or_else(err)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Pass => write!(f, "pass"),
            Move::Extend { from, to } | Move::Jump { from, to } => {
                write!(f, "{}-{}", from, to)
            }
        }
    }
}
