//! A fixed-size rectangular grid of terrain cells.

use crate::cell::Cell;
use crate::error::MapError;
use crate::geom::Coord;

/// A `rows × cols` matrix of [`Cell`] values stored row-major.
///
/// The size is fixed at construction and is always at least 1×1. Cell
/// contents may change between searches, never during one.
///
/// With the `serde` feature a grid serializes as its rows of raw codes and
/// is validated on the way back in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")
)]
pub struct TerrainGrid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl TerrainGrid {
    /// Create a grid filled with `cell`. Zero dimensions are clamped to 1.
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            cells: vec![cell; rows * cols],
            rows,
            cols,
        }
    }

    /// Create an all-open grid.
    pub fn open(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, Cell::OPEN)
    }

    /// Build a grid from rows of raw terrain codes.
    ///
    /// Every row must have the same, non-zero, length.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, MapError> {
        let first = rows.first().ok_or(MapError::Empty)?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(MapError::Empty);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MapError::InconsistentRow {
                    line: i + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().copied().map(Cell));
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies within the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.idx(c).is_some()
    }

    /// Convert a coordinate to a flat row-major index. `None` if out of bounds.
    #[inline]
    pub fn idx(&self, c: Coord) -> Option<usize> {
        c.index_in(self.rows, self.cols)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Get the cell at `c`, or `None` if out of bounds.
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.idx(c).map(|i| self.cells[i])
    }

    /// Set the cell at `c`. Returns `false` if `c` is out of bounds.
    pub fn set(&mut self, c: Coord, cell: Cell) -> bool {
        match self.idx(c) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether `c` is in bounds and not blocked.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(|cell| !cell.is_blocked())
    }

    /// Count cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (self.coord(i), cell))
    }

    /// Iterate the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// Copy the grid out as rows of raw codes.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.row_slices()
            .map(|row| row.iter().map(|c| c.0).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<i32>>> for TerrainGrid {
    type Error = MapError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<TerrainGrid> for Vec<Vec<i32>> {
    fn from(grid: TerrainGrid) -> Self {
        grid.to_rows()
    }
}
