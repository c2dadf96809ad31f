use serde::{Deserialize, Serialize};

/// Content of a single field cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Hole,
    Hat,
    /// Cell the player already stepped on, including the start.
    Path,
}

impl Cell {
    pub const HAT: char = '^';
    pub const HOLE: char = 'O';
    pub const EMPTY: char = '░';
    pub const PATH: char = '*';

    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => Self::EMPTY,
            Self::Hole => Self::HOLE,
            Self::Hat => Self::HAT,
            Self::Path => Self::PATH,
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            Self::EMPTY => Some(Self::Empty),
            Self::HOLE => Some(Self::Hole),
            Self::HAT => Some(Self::Hat),
            Self::PATH => Some(Self::Path),
            _ => None,
        }
    }

    pub const fn is_hole(self) -> bool {
        matches!(self, Self::Hole)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}
