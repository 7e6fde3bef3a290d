use std::collections::VecDeque;

use gridpath_core::Map;

use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::path::Path;
use crate::predecessor::{PredecessorMap, conclude};
use crate::strategy::Algorithm;
use crate::traits::PathFinder;

/// Breadth-first search. Returns a path with the fewest possible steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl PathFinder for BreadthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BreadthFirst
    }

    fn find_path(&self, map: &Map) -> Result<Option<Path>, SearchError> {
        let grid = map.grid();
        let goal = map.end();

        let mut visited = vec![false; grid.len()];
        let mut preds = PredecessorMap::new(grid);
        let mut queue = VecDeque::new();
        let mut nb = Neighbors::new();

        // The start is entered whatever its terrain.
        if let Some(si) = grid.idx(map.start()) {
            visited[si] = true;
        }
        queue.push_back(map.start());

        let mut expanded = 0;
        let found = loop {
            let Some(current) = queue.pop_front() else {
                break false;
            };
            if current == goal {
                break true;
            }
            expanded += 1;
            log::trace!("bfs: expand {current}");

            for &n in nb.cardinal(current, |c| grid.is_passable(c)) {
                let Some(ni) = grid.idx(n) else {
                    continue;
                };
                // Marked on enqueue so nothing is queued twice.
                if visited[ni] {
                    continue;
                }
                visited[ni] = true;
                preds.insert(n, current);
                queue.push_back(n);
            }
        };

        conclude(Algorithm::BreadthFirst, map, &preds, found, expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::{Coord, TerrainGrid};

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    fn map(rows: &[[i32; 4]]) -> Map {
        Map::with_corners(TerrainGrid::from_rows(rows).unwrap())
    }

    #[test]
    fn open_grid_follows_direction_order() {
        let m = Map::open_square(4);
        let path = BreadthFirst.find_path(&m).unwrap().unwrap();
        assert_eq!(path.steps(), 6);
        assert_eq!(
            path.coords(),
            &[c(0, 0), c(1, 0), c(2, 0), c(3, 0), c(3, 1), c(3, 2), c(3, 3)]
        );
    }

    #[test]
    fn routes_through_single_gap() {
        let m = map(&[[1, 1, 1, 1], [1, 0, 0, 0], [1, 1, 1, 1], [1, 1, 1, 1]]);
        let path = BreadthFirst.find_path(&m).unwrap().unwrap();
        assert!(path.coords().contains(&c(1, 0)));
        assert_eq!(path.steps(), 6);
        assert!(path.is_walkable(&m));
    }

    #[test]
    fn detours_when_direct_route_is_walled() {
        // Only gap in row 1 is at the far right; the end sits bottom-left.
        let grid =
            TerrainGrid::from_rows(&[[1, 1, 1, 1], [0, 0, 0, 1], [1, 1, 1, 1], [1, 0, 0, 0]])
                .unwrap();
        let m = Map::new(grid, c(0, 0), c(3, 0)).unwrap();
        let path = BreadthFirst.find_path(&m).unwrap().unwrap();
        assert_eq!(
            path.coords(),
            &[
                c(0, 0),
                c(0, 1),
                c(0, 2),
                c(0, 3),
                c(1, 3),
                c(2, 3),
                c(2, 2),
                c(2, 1),
                c(2, 0),
                c(3, 0),
            ]
        );
    }

    #[test]
    fn walled_goal_has_no_path() {
        let m = map(&[[1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 0], [1, 1, 0, 1]]);
        assert_eq!(BreadthFirst.find_path(&m), Ok(None));
    }

    #[test]
    fn blocked_start_can_still_leave() {
        let m = map(&[[0, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 1]]);
        let path = BreadthFirst.find_path(&m).unwrap().unwrap();
        assert_eq!(path.start(), c(0, 0));
        assert_eq!(path.steps(), 6);
    }

    #[test]
    fn blocked_goal_is_never_entered() {
        let m = map(&[[1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 0]]);
        assert_eq!(BreadthFirst.find_path(&m), Ok(None));
    }

    #[test]
    fn does_not_modify_map() {
        let m = map(&[[1, 1, 1, 1], [1, 0, 0, 1], [1, 1, 0, 1], [1, 1, 1, 1]]);
        let before = m.clone();
        let _ = BreadthFirst.find_path(&m);
        assert_eq!(m, before);
    }
}
