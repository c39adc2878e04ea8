#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DIFFICULT_COST, OPEN_COST};

/// The kind of ground covering a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TerrainKind {
    #[default]
    Open,
    /// Passable, but entering costs twice as much as [Open](TerrainKind::Open).
    Difficult,
    Blocked,
}

impl TerrainKind {
    /// Cost of entering a cell of this kind, [None] if it cannot be entered.
    pub fn cost(self) -> Option<i32> {
        match self {
            TerrainKind::Open => Some(OPEN_COST),
            TerrainKind::Difficult => Some(DIFFICULT_COST),
            TerrainKind::Blocked => None,
        }
    }

    pub fn is_blocked(self) -> bool {
        self == TerrainKind::Blocked
    }

    /// Character used in the ASCII form of a [Board](crate::Board).
    pub fn symbol(self) -> char {
        match self {
            TerrainKind::Open => '.',
            TerrainKind::Difficult => '~',
            TerrainKind::Blocked => '#',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<TerrainKind> {
        match symbol {
            '.' => Some(TerrainKind::Open),
            '~' => Some(TerrainKind::Difficult),
            '#' => Some(TerrainKind::Blocked),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs() {
        assert_eq!(TerrainKind::Open.cost(), Some(1));
        assert_eq!(TerrainKind::Difficult.cost(), Some(2));
        assert_eq!(TerrainKind::Blocked.cost(), None);
        assert!(TerrainKind::Blocked.is_blocked());
        assert!(!TerrainKind::Difficult.is_blocked());
    }

    #[test]
    fn symbols() {
        for kind in [
            TerrainKind::Open,
            TerrainKind::Difficult,
            TerrainKind::Blocked,
        ] {
            assert_eq!(TerrainKind::from_symbol(kind.symbol()), Some(kind));
        }
        assert_eq!(TerrainKind::from_symbol('S'), None);
    }
}
