//! The strategy registry.
//!
//! Callers pick a strategy with an [`Algorithm`] value, usually parsed from
//! a case-insensitive key such as `"bfs"` or `"Dijkstra"`, and get back a
//! boxed [`PathFinder`].

use std::fmt;
use std::str::FromStr;

use gridpath_core::Map;

use crate::bfs::BreadthFirst;
use crate::dfs::DepthFirst;
use crate::dijkstra::Dijkstra;
use crate::error::{SearchError, UnknownAlgorithm};
use crate::path::Path;
use crate::pending::{AStar, BestFirst, HillClimbing};
use crate::traits::PathFinder;

/// Every search strategy that can be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    BreadthFirst,
    #[cfg_attr(feature = "serde", serde(rename = "dfs"))]
    DepthFirst,
    #[cfg_attr(feature = "serde", serde(rename = "dijkstra"))]
    Dijkstra,
    #[cfg_attr(feature = "serde", serde(rename = "best"))]
    BestFirst,
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar,
    #[cfg_attr(feature = "serde", serde(rename = "hill"))]
    HillClimbing,
}

impl Algorithm {
    /// All registered algorithms, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::HillClimbing,
        Algorithm::BestFirst,
        Algorithm::AStar,
        Algorithm::Dijkstra,
    ];

    /// The lookup key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::BestFirst => "best",
            Self::AStar => "astar",
            Self::HillClimbing => "hill",
        }
    }

    /// Whether selecting this algorithm can produce a path.
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::BreadthFirst | Self::DepthFirst | Self::Dijkstra)
    }

    /// Construct the strategy.
    pub fn finder(self) -> Box<dyn PathFinder> {
        match self {
            Self::BreadthFirst => Box::new(BreadthFirst),
            Self::DepthFirst => Box::new(DepthFirst),
            Self::Dijkstra => Box::new(Dijkstra),
            Self::BestFirst => Box::new(BestFirst),
            Self::AStar => Box::new(AStar),
            Self::HillClimbing => Box::new(HillClimbing),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| UnknownAlgorithm(key.to_string()))
    }
}

/// Run `algorithm` on `map`.
pub fn find_path(algorithm: Algorithm, map: &Map) -> Result<Option<Path>, SearchError> {
    algorithm.finder().find_path(map)
}
