//! **gridpath-core**: terrain grid model for grid pathfinding (core types).
//!
//! This crate provides the map representation consumed by the search
//! strategies in `gridpath-search`: coordinates, terrain codes, a
//! fixed-size terrain grid, a map with start and end points, and the
//! plain-text map source format.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod map;
pub mod source;

pub use cell::{Cell, Terrain};
pub use error::MapError;
pub use geom::Coord;
pub use grid::TerrainGrid;
pub use map::{DEFAULT_MAP_SIZE, Map};
pub use source::{format_grid, load_grid, parse_grid};
