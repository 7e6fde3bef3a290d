//! Predecessor links and path reconstruction.

use gridpath_core::{Coord, Map, TerrainGrid};

use crate::error::{ReconstructError, SearchError};
use crate::path::Path;
use crate::strategy::Algorithm;

/// For each visited cell, the cell it was first reached from.
///
/// Storage is a flat row-major array sized to the grid the search runs on.
/// One map is built per search and dropped afterwards.
#[derive(Debug, Clone)]
pub struct PredecessorMap {
    rows: usize,
    cols: usize,
    links: Vec<Option<Coord>>,
    count: usize,
}

impl PredecessorMap {
    /// An empty map covering `grid`.
    pub fn new(grid: &TerrainGrid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            links: vec![None; grid.len()],
            count: 0,
        }
    }

    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        c.index_in(self.rows, self.cols)
    }

    /// Record that `at` was reached from `from`, replacing any earlier link.
    /// Returns `false` if `at` lies outside the grid.
    pub fn insert(&mut self, at: Coord, from: Coord) -> bool {
        let Some(i) = self.idx(at) else {
            return false;
        };
        if self.links[i].is_none() {
            self.count += 1;
        }
        self.links[i] = Some(from);
        true
    }

    /// The cell `at` was reached from, if any.
    pub fn get(&self, at: Coord) -> Option<Coord> {
        self.idx(at).and_then(|i| self.links[i])
    }

    /// Number of recorded links.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no link has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Walk predecessor links from `end` back to `start` and return the route
/// in travel order.
///
/// Fails if a link is missing or the chain loops; either means the links
/// were not produced by a successful search.
pub fn reconstruct(
    preds: &PredecessorMap,
    start: Coord,
    end: Coord,
) -> Result<Path, ReconstructError> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = preds
            .get(current)
            .ok_or(ReconstructError::MissingLink { at: current })?;
        path.push(current);
        // A loop-free chain visits each link at most once.
        if path.len() > preds.len() + 1 {
            return Err(ReconstructError::Cycle { at: current });
        }
    }
    path.reverse();
    Ok(Path::from_vec(path))
}

/// Turn the end state of a search into its result and log a summary.
pub(crate) fn conclude(
    algorithm: Algorithm,
    map: &Map,
    preds: &PredecessorMap,
    found: bool,
    expanded: usize,
) -> Result<Option<Path>, SearchError> {
    if !found {
        log::debug!(
            "{}: no path {} -> {} after expanding {expanded} cells",
            algorithm.key(),
            map.start(),
            map.end()
        );
        return Ok(None);
    }
    match reconstruct(preds, map.start(), map.end()) {
        Ok(path) => {
            log::debug!(
                "{}: found {}-step path {} -> {} after expanding {expanded} cells",
                algorithm.key(),
                path.steps(),
                map.start(),
                map.end()
            );
            Ok(Some(path))
        }
        Err(cause) => {
            log::error!("{}: reconstruction failed: {cause}", algorithm.key());
            Err(SearchError::InvalidReconstruction { algorithm, cause })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn insert_and_get() {
        let grid = TerrainGrid::open(3, 3);
        let mut preds = PredecessorMap::new(&grid);
        assert!(preds.is_empty());
        assert!(preds.insert(c(1, 0), c(0, 0)));
        assert!(preds.insert(c(1, 0), c(1, 1)));
        assert_eq!(preds.len(), 1);
        assert_eq!(preds.get(c(1, 0)), Some(c(1, 1)));
        assert_eq!(preds.get(c(2, 2)), None);
        assert!(!preds.insert(c(3, 0), c(2, 0)));
        assert_eq!(preds.get(c(-1, 0)), None);
    }

    #[test]
    fn reconstruct_reverses_chain() {
        let grid = TerrainGrid::open(3, 3);
        let mut preds = PredecessorMap::new(&grid);
        preds.insert(c(1, 0), c(0, 0));
        preds.insert(c(2, 0), c(1, 0));
        preds.insert(c(2, 1), c(2, 0));
        // A dead branch that must not appear in the result.
        preds.insert(c(0, 1), c(0, 0));

        let path = reconstruct(&preds, c(0, 0), c(2, 1)).unwrap();
        assert_eq!(path.coords(), &[c(0, 0), c(1, 0), c(2, 0), c(2, 1)]);
        assert!(path.is_contiguous());
    }

    #[test]
    fn start_equal_end_needs_no_links() {
        let grid = TerrainGrid::open(2, 2);
        let preds = PredecessorMap::new(&grid);
        let path = reconstruct(&preds, c(1, 1), c(1, 1)).unwrap();
        assert_eq!(path.coords(), &[c(1, 1)]);
    }

    #[test]
    fn missing_link_fails() {
        let grid = TerrainGrid::open(3, 3);
        let mut preds = PredecessorMap::new(&grid);
        preds.insert(c(2, 2), c(2, 1));
        let err = reconstruct(&preds, c(0, 0), c(2, 2)).unwrap_err();
        assert_eq!(err, ReconstructError::MissingLink { at: c(2, 1) });
    }

    #[test]
    fn unreached_end_fails() {
        let grid = TerrainGrid::open(3, 3);
        let preds = PredecessorMap::new(&grid);
        let err = reconstruct(&preds, c(0, 0), c(2, 2)).unwrap_err();
        assert_eq!(err, ReconstructError::MissingLink { at: c(2, 2) });
    }

    #[test]
    fn truncated_chain_reports_where_it_stops() {
        let grid = TerrainGrid::open(3, 3);
        let mut preds = PredecessorMap::new(&grid);
        preds.insert(c(2, 2), c(2, 1));
        preds.insert(c(2, 1), c(2, 0));
        let err = reconstruct(&preds, c(0, 0), c(2, 2)).unwrap_err();
        assert_eq!(err, ReconstructError::MissingLink { at: c(2, 0) });
    }

    #[test]
    fn chain_using_every_link_is_not_a_cycle() {
        let grid = TerrainGrid::open(1, 3);
        let mut preds = PredecessorMap::new(&grid);
        preds.insert(c(0, 1), c(0, 0));
        preds.insert(c(0, 2), c(0, 1));
        let path = reconstruct(&preds, c(0, 0), c(0, 2)).unwrap();
        assert_eq!(path.coords(), &[c(0, 0), c(0, 1), c(0, 2)]);
    }

    #[test]
    fn cycle_fails() {
        let grid = TerrainGrid::open(3, 3);
        let mut preds = PredecessorMap::new(&grid);
        preds.insert(c(1, 1), c(1, 2));
        preds.insert(c(1, 2), c(1, 1));
        let err = reconstruct(&preds, c(0, 0), c(1, 1)).unwrap_err();
        assert!(matches!(err, ReconstructError::Cycle { .. }));
    }

    #[test]
    fn conclude_maps_broken_chain_to_error() {
        let map = Map::open_square(3);
        let preds = PredecessorMap::new(map.grid());
        let err = conclude(Algorithm::BreadthFirst, &map, &preds, true, 0).unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidReconstruction {
                algorithm: Algorithm::BreadthFirst,
                cause: ReconstructError::MissingLink { .. },
            }
        ));
        assert_eq!(
            conclude(Algorithm::BreadthFirst, &map, &preds, false, 0),
            Ok(None)
        );
    }
}
