use core::fmt;

/// The semantic state of a single grid square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Path,
    Start,
    Finish,
    Visited,
}

impl CellKind {
    /// Only walls block movement; markers and path overlays are walkable.
    pub fn is_walkable(self) -> bool {
        self != CellKind::Wall
    }

    /// Path and visited markings are recomputed every tick.
    pub fn is_overlay(self) -> bool {
        matches!(self, CellKind::Path | CellKind::Visited)
    }

    /// Cells the search may mark as part of the path.
    pub fn is_vacant(self) -> bool {
        matches!(self, CellKind::Empty | CellKind::Path | CellKind::Visited)
    }

    pub fn symbol(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Wall => '#',
            CellKind::Path => '*',
            CellKind::Start => 'S',
            CellKind::Finish => 'G',
            CellKind::Visited => 'o',
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
