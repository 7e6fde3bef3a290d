use gridpath_core::{Coord, Map};

/// An ordered route from a start cell to an end cell, both inclusive.
///
/// A path is never empty; when start and end coincide it holds one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Coord>"))]
pub struct Path(Vec<Coord>);

impl Path {
    /// Wrap a coordinate sequence, or `None` if it is empty.
    pub fn new(coords: Vec<Coord>) -> Option<Self> {
        if coords.is_empty() {
            None
        } else {
            Some(Self(coords))
        }
    }

    pub(crate) fn from_vec(coords: Vec<Coord>) -> Self {
        debug_assert!(!coords.is_empty());
        Self(coords)
    }

    /// The coordinates in travel order.
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves (edges), one less than [`len`](Self::len).
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    /// First cell.
    pub fn start(&self) -> Coord {
        self.0[0]
    }

    /// Last cell.
    pub fn end(&self) -> Coord {
        self.0[self.0.len() - 1]
    }

    /// Whether every consecutive pair is 4-adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Whether this path walks `map` legally: it runs from the map's start
    /// to its end, is contiguous, and never steps onto a blocked cell after
    /// leaving the start.
    pub fn is_walkable(&self, map: &Map) -> bool {
        self.start() == map.start()
            && self.end() == map.end()
            && self.is_contiguous()
            && self.0[1..].iter().all(|&c| map.grid().is_passable(c))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Coord> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Vec<Coord>> for Path {
    type Error = &'static str;

    fn try_from(coords: Vec<Coord>) -> Result<Self, Self::Error> {
        Path::new(coords).ok_or("path must hold at least one cell")
    }
}

impl AsRef<[Coord]> for Path {
    fn as_ref(&self) -> &[Coord] {
        &self.0
    }
}
