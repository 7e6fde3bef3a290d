//! Depth-first search with an explicit stack.
//!
//! The traversal is the same as the textbook recursive version: enter a
//! cell, mark it visited, then try each direction in [`DIRECTIONS`] order,
//! descending into the first open unvisited neighbour before trying the
//! next direction. Each stack frame remembers which direction to try next,
//! so depth is bounded by heap memory rather than the call stack.

use gridpath_core::{Coord, Map};

use crate::error::SearchError;
use crate::neighbors::DIRECTIONS;
use crate::path::Path;
use crate::predecessor::{PredecessorMap, conclude};
use crate::strategy::Algorithm;
use crate::traits::PathFinder;

/// Depth-first search. Finds *a* path, usually not the shortest one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

struct Frame {
    at: Coord,
    next_dir: usize,
}

impl PathFinder for DepthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::DepthFirst
    }

    fn find_path(&self, map: &Map) -> Result<Option<Path>, SearchError> {
        let grid = map.grid();
        let start = map.start();
        let goal = map.end();

        let mut preds = PredecessorMap::new(grid);
        if start == goal {
            return conclude(Algorithm::DepthFirst, map, &preds, true, 0);
        }

        let mut visited = vec![false; grid.len()];
        if let Some(si) = grid.idx(start) {
            visited[si] = true;
        }
        let mut stack = vec![Frame {
            at: start,
            next_dir: 0,
        }];

        let mut expanded = 1;
        let found = loop {
            let Some(frame) = stack.last_mut() else {
                break false;
            };
            let Some(&d) = DIRECTIONS.get(frame.next_dir) else {
                // Every direction tried: backtrack.
                stack.pop();
                continue;
            };
            frame.next_dir += 1;
            let current = frame.at;

            let n = current + d;
            let Some(ni) = grid.idx(n) else {
                continue;
            };
            if visited[ni] || !grid.is_passable(n) {
                continue;
            }

            preds.insert(n, current);
            if n == goal {
                break true;
            }
            visited[ni] = true;
            expanded += 1;
            log::trace!("dfs: enter {n}");
            stack.push(Frame { at: n, next_dir: 0 });
        };

        conclude(Algorithm::DepthFirst, map, &preds, found, expanded)
    }
}
