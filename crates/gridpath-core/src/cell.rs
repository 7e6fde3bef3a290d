//! Terrain codes.
//!
//! [`Cell`] is a newtype over the raw integer code stored in a grid.
//! Search only cares whether a cell is blocked (`0`) or not; the remaining
//! codes are markers for whoever renders the map.

/// A raw terrain code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub i32);

/// Known terrain codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Terrain {
    Blocked = 0,
    Open = 1,
    Start = 2,
    Goal = 3,
    /// Written back by the caller after a successful search.
    PathMark = 4,
}

impl Terrain {
    /// The cell holding this terrain code.
    pub const fn cell(self) -> Cell {
        Cell(self as i32)
    }
}

impl Cell {
    pub const BLOCKED: Cell = Terrain::Blocked.cell();
    pub const OPEN: Cell = Terrain::Open.cell();
    pub const PATH: Cell = Terrain::PathMark.cell();

    /// Create a new cell with the given code.
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the underlying code.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whether movement into this cell is forbidden. Only code `0` blocks;
    /// every other code, known or not, is traversable.
    pub const fn is_blocked(self) -> bool {
        self.0 == 0
    }

    /// Interpret the code, or `None` for codes outside the known set.
    pub fn terrain(self) -> Option<Terrain> {
        match self.0 {
            0 => Some(Terrain::Blocked),
            1 => Some(Terrain::Open),
            2 => Some(Terrain::Start),
            3 => Some(Terrain::Goal),
            4 => Some(Terrain::PathMark),
            _ => None,
        }
    }

    /// Blocked cells become open, anything else becomes blocked.
    pub const fn toggled(self) -> Self {
        if self.is_blocked() {
            Self::OPEN
        } else {
            Self::BLOCKED
        }
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl From<Cell> for i32 {
    fn from(c: Cell) -> Self {
        c.0
    }
}

impl From<Terrain> for Cell {
    fn from(t: Terrain) -> Self {
        t.cell()
    }
}
