//! A terrain grid plus the two endpoints of a search.

use crate::cell::{Cell, Terrain};
use crate::error::MapError;
use crate::geom::Coord;
use crate::grid::TerrainGrid;

/// Side length of the map created when nothing has been loaded.
pub const DEFAULT_MAP_SIZE: usize = 12;

/// A grid with designated start and end coordinates.
///
/// Both endpoints are guaranteed to be in bounds. Their own terrain is not
/// checked: a search always leaves from `start`, but never enters a blocked
/// `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MapParts"))]
pub struct Map {
    grid: TerrainGrid,
    start: Coord,
    end: Coord,
}

impl Map {
    /// Create a map, checking that both endpoints are inside the grid.
    pub fn new(grid: TerrainGrid, start: Coord, end: Coord) -> Result<Self, MapError> {
        for (what, at) in [("start", start), ("end", end)] {
            if !grid.contains(at) {
                return Err(MapError::OutOfBounds {
                    what,
                    at,
                    rows: grid.rows(),
                    cols: grid.cols(),
                });
            }
        }
        Ok(Self { grid, start, end })
    }

    /// Create a map running from the top-left to the bottom-right corner.
    pub fn with_corners(grid: TerrainGrid) -> Self {
        let end = Coord::new(grid.rows() as i32 - 1, grid.cols() as i32 - 1);
        Self {
            grid,
            start: Coord::ZERO,
            end,
        }
    }

    /// An all-open `n × n` map from corner to corner.
    pub fn open_square(n: usize) -> Self {
        Self::with_corners(TerrainGrid::open(n, n))
    }

    /// The terrain grid.
    #[inline]
    pub fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    /// Where searches begin.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Where searches aim.
    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Flip a cell between blocked and open. Returns `false` if `c` is out
    /// of bounds.
    pub fn toggle(&mut self, c: Coord) -> bool {
        match self.grid.at(c) {
            Some(cell) => self.grid.set(c, cell.toggled()),
            None => false,
        }
    }

    /// Write [`Terrain::PathMark`] on every cell of `path` except the
    /// endpoints. Coordinates outside the grid are ignored.
    pub fn mark_path(&mut self, path: &[Coord]) {
        for &c in path {
            if c != self.start && c != self.end {
                self.grid.set(c, Terrain::PathMark.cell());
            }
        }
    }

    /// Reset every path marker back to open terrain.
    pub fn clear_marks(&mut self) -> usize {
        let marked: Vec<Coord> = self
            .grid
            .iter()
            .filter(|&(_, cell)| cell == Cell::PATH)
            .map(|(c, _)| c)
            .collect();
        for &c in &marked {
            self.grid.set(c, Cell::OPEN);
        }
        marked.len()
    }
}

/// Unvalidated form of [`Map`] read by serde.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MapParts {
    grid: TerrainGrid,
    start: Coord,
    end: Coord,
}

#[cfg(feature = "serde")]
impl TryFrom<MapParts> for Map {
    type Error = MapError;

    fn try_from(parts: MapParts) -> Result<Self, Self::Error> {
        Map::new(parts.grid, parts.start, parts.end)
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::open_square(DEFAULT_MAP_SIZE)
    }
}
