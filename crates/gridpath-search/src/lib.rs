//! Interchangeable search strategies for 4-connected terrain grids.
//!
//! Every strategy implements [`PathFinder`] over a [`gridpath_core::Map`]
//! and is selected through the [`Algorithm`] registry:
//!
//! - **Breadth-first** ([`BreadthFirst`]) fewest-step paths
//! - **Depth-first** ([`DepthFirst`]) some path, explicit-stack traversal
//! - **Dijkstra** ([`Dijkstra`]) uniform-cost search, same paths as BFS
//! - **Best-first**, **A\***, **hill-climbing**: registered, refuse with
//!   [`SearchError::Unimplemented`]
//!
//! Moves are up, down, left and right, explored in the fixed order of
//! [`DIRECTIONS`]. Blocked cells (code `0`) are never entered; the start is
//! always left from whatever its terrain. All search state (visited sets,
//! distances, [`PredecessorMap`]) lives only for the duration of one call,
//! so one `&Map` can be searched from many threads at once.
//!
//! # Outcomes
//!
//! | Result | Meaning |
//! |---|---|
//! | `Ok(Some(path))` | start-to-end route, endpoints included |
//! | `Ok(None)` | the end is unreachable |
//! | `Err(SearchError::Unimplemented(_))` | placeholder strategy selected |
//! | `Err(SearchError::InvalidReconstruction { .. })` | internal defect |

mod bfs;
mod dfs;
mod dijkstra;
mod error;
mod neighbors;
mod path;
mod pending;
mod predecessor;
mod strategy;
mod traits;

pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::{Dijkstra, UNREACHABLE};
pub use error::{ReconstructError, SearchError, UnknownAlgorithm};
pub use neighbors::{DIRECTIONS, Neighbors};
pub use path::Path;
pub use pending::{AStar, BestFirst, HillClimbing};
pub use predecessor::{PredecessorMap, reconstruct};
pub use strategy::{Algorithm, find_path};
pub use traits::PathFinder;
