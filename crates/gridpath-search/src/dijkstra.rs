use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::{Coord, Map};

use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::path::Path;
use crate::predecessor::{PredecessorMap, conclude};
use crate::strategy::Algorithm;
use crate::traits::PathFinder;

/// Sentinel distance for cells not yet reached.
pub const UNREACHABLE: u32 = u32::MAX;

/// Every move costs the same.
const STEP_COST: u32 = 1;

/// Uniform-cost (Dijkstra) search.
///
/// Frontier entries are ordered by distance, then by the order in which
/// they were pushed, so equal-distance cells are finalized first-come
/// first-served. With unit step costs this finalizes cells in exactly the
/// order [`BreadthFirst`](crate::BreadthFirst) dequeues them, and the two
/// return identical paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

/// Frontier entry, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    dist: u32,
    seq: u64,
    at: Coord,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest distance, and
        // among equals the earliest push, first.
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PathFinder for Dijkstra {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn find_path(&self, map: &Map) -> Result<Option<Path>, SearchError> {
        let grid = map.grid();
        let goal = map.end();

        let mut dist = vec![UNREACHABLE; grid.len()];
        let mut finalized = vec![false; grid.len()];
        let mut preds = PredecessorMap::new(grid);
        let mut open: BinaryHeap<Entry> = BinaryHeap::new();
        let mut nb = Neighbors::new();

        if let Some(si) = grid.idx(map.start()) {
            dist[si] = 0;
        }
        open.push(Entry {
            dist: 0,
            seq: 0,
            at: map.start(),
        });
        let mut seq = 1;

        let mut expanded = 0;
        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let Some(ci) = grid.idx(current.at) else {
                continue;
            };
            // Skip stale entries.
            if finalized[ci] {
                continue;
            }
            finalized[ci] = true;

            if current.at == goal {
                break 'search true;
            }
            expanded += 1;
            log::trace!("dijkstra: finalize {} at {}", current.at, current.dist);

            for &n in nb.cardinal(current.at, |c| grid.is_passable(c)) {
                let Some(ni) = grid.idx(n) else {
                    continue;
                };
                let tentative = current.dist + STEP_COST;
                if tentative >= dist[ni] {
                    continue;
                }
                dist[ni] = tentative;
                preds.insert(n, current.at);
                open.push(Entry {
                    dist: tentative,
                    seq,
                    at: n,
                });
                seq += 1;
            }
        };

        conclude(Algorithm::Dijkstra, map, &preds, found, expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BreadthFirst;
    use gridpath_core::TerrainGrid;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn heap_pops_by_distance_then_push_order() {
        let mut heap: BinaryHeap<Entry> = [(2, 0, c(0, 0)), (1, 2, c(0, 1)), (1, 1, c(0, 2))]
            .into_iter()
            .map(|(dist, seq, at)| Entry { dist, seq, at })
            .collect();
        let order: Vec<Coord> = std::iter::from_fn(|| heap.pop().map(|e| e.at)).collect();
        assert_eq!(order, vec![c(0, 2), c(0, 1), c(0, 0)]);
    }

    #[test]
    fn open_grid_shortest_path() {
        let m = Map::open_square(4);
        let path = Dijkstra.find_path(&m).unwrap().unwrap();
        assert_eq!(path.steps(), 6);
        assert!(path.is_walkable(&m));
    }

    #[test]
    fn equal_routes_around_obstacle_match_bfs() {
        let grid = TerrainGrid::from_rows(&[
            [1, 1, 1, 1],
            [1, 0, 0, 1],
            [1, 0, 0, 1],
            [1, 1, 1, 1],
        ])
        .unwrap();
        let m = Map::with_corners(grid);
        let d = Dijkstra.find_path(&m).unwrap().unwrap();
        let b = BreadthFirst.find_path(&m).unwrap().unwrap();
        assert_eq!(d, b);
        assert_eq!(
            d.coords(),
            &[c(0, 0), c(1, 0), c(2, 0), c(3, 0), c(3, 1), c(3, 2), c(3, 3)]
        );
    }

    #[test]
    fn walled_goal_has_no_path() {
        let grid = TerrainGrid::from_rows(&[
            [1, 1, 1, 1],
            [1, 1, 1, 1],
            [1, 1, 1, 0],
            [1, 1, 0, 1],
        ])
        .unwrap();
        let m = Map::with_corners(grid);
        assert_eq!(Dijkstra.find_path(&m), Ok(None));
    }

    #[test]
    fn blocked_start_can_still_leave() {
        let grid = TerrainGrid::from_rows(&[[0, 1], [1, 1]]).unwrap();
        let m = Map::with_corners(grid);
        let path = Dijkstra.find_path(&m).unwrap().unwrap();
        assert_eq!(path.coords(), &[c(0, 0), c(1, 0), c(1, 1)]);
    }
}
