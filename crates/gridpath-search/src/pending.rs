//! Registered strategies that have no search behaviour yet.
//!
//! Each one refuses every map with [`SearchError::Unimplemented`] rather
//! than returning an empty or made-up path.

use gridpath_core::Map;

use crate::error::SearchError;
use crate::path::Path;
use crate::strategy::Algorithm;
use crate::traits::PathFinder;

/// Greedy best-first search (not implemented).
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFirst;

/// A* search (not implemented).
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

/// Hill-climbing search (not implemented).
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbing;

fn refuse(algorithm: Algorithm) -> Result<Option<Path>, SearchError> {
    log::warn!("{} selected but not implemented", algorithm.key());
    Err(SearchError::Unimplemented(algorithm))
}

impl PathFinder for BestFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BestFirst
    }

    fn find_path(&self, _map: &Map) -> Result<Option<Path>, SearchError> {
        refuse(self.algorithm())
    }
}

impl PathFinder for AStar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn find_path(&self, _map: &Map) -> Result<Option<Path>, SearchError> {
        refuse(self.algorithm())
    }
}

impl PathFinder for HillClimbing {
    fn algorithm(&self) -> Algorithm {
        Algorithm::HillClimbing
    }

    fn find_path(&self, _map: &Map) -> Result<Option<Path>, SearchError> {
        refuse(self.algorithm())
    }
}
