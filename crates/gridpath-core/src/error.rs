use std::fmt;
use std::io;

use crate::geom::Coord;

/// Errors that can occur when building or loading a map.
#[derive(Debug)]
pub enum MapError {
    /// The source contained no cells.
    Empty,
    /// A row's column count differs from the first row's.
    InconsistentRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A token could not be read as an integer terrain code.
    InvalidToken { line: usize, token: String },
    /// Start or end lies outside the grid.
    OutOfBounds {
        what: &'static str,
        at: Coord,
        rows: usize,
        cols: usize,
    },
    /// The map file could not be read.
    Io(io::Error),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no cells"),
            Self::InconsistentRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} has {found} columns, expected {expected}"
            ),
            Self::InvalidToken { line, token } => {
                write!(f, "map: invalid terrain code \u{201c}{token}\u{201d} on line {line}")
            }
            Self::OutOfBounds {
                what,
                at,
                rows,
                cols,
            } => write!(f, "map: {what} {at} outside {rows}x{cols} grid"),
            Self::Io(err) => write!(f, "map: {err}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MapError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
