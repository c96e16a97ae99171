use std::fmt;

/// Contents of a single board cell. `Blocked` covers both placed blocks
/// and the artificial border region around the playable grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Empty,
    Blocked,
    Red,
    Blue,
}

impl PieceColor {
    /// The opponent of a player color. Panics on `Empty`/`Blocked`,
    /// which have no opponent.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
            _ => panic!("opposite() is only defined for player colors"),
        }
    }

    /// True iff this denotes a piece rather than an empty cell or block.
    pub fn is_piece(&self) -> bool {
        matches!(self, Self::Red | Self::Blue)
    }

    /// Parse a player name as used by the `auto`/`manual` commands.
    pub fn player_from_str(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "red" => Some(Self::Red),
            "blue" => Some(Self::Blue),
            _ => None,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "Empty",
            Self::Blocked => "Blocked",
            Self::Red => "Red",
            Self::Blue => "Blue",
        };
        write!(f, "{}", name)
    }
}
