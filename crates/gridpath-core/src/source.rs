//! Plain-text map sources.
//!
//! Each non-blank line is one row of integer terrain codes separated by
//! commas and/or spaces:
//!
//! ```text
//! 1, 1, 0, 1
//! 1 0 0 1
//! 1,1,1,1
//! ```
//!
//! All rows must have the same number of columns.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::MapError;
use crate::grid::TerrainGrid;
use crate::map::Map;

/// Parse a grid from text.
pub fn parse_grid(s: &str) -> Result<TerrainGrid, MapError> {
    let mut rows: Vec<Vec<i32>> = Vec::new();

    for (i, line) in s.lines().enumerate() {
        let lineno = i + 1;
        let mut row = Vec::new();
        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let code = token.parse::<i32>().map_err(|_| MapError::InvalidToken {
                line: lineno,
                token: token.to_string(),
            })?;
            row.push(code);
        }
        if row.is_empty() {
            continue;
        }
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(MapError::InconsistentRow {
                    line: lineno,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }

    TerrainGrid::from_rows(&rows)
}

/// Read and parse a grid file.
pub fn load_grid(path: impl AsRef<Path>) -> Result<TerrainGrid, MapError> {
    let path = path.as_ref();
    let loaded = fs::read_to_string(path)
        .map_err(MapError::from)
        .and_then(|text| parse_grid(&text));
    match loaded {
        Ok(grid) => {
            log::debug!(
                "loaded {}x{} grid from {}",
                grid.rows(),
                grid.cols(),
                path.display()
            );
            Ok(grid)
        }
        Err(err) => {
            log::warn!("failed to load {}: {err}", path.display());
            Err(err)
        }
    }
}

/// Write a grid in the source format, one comma-separated row per line.
pub fn format_grid(grid: &TerrainGrid) -> String {
    let mut out = String::with_capacity(grid.len() * 3);
    for row in grid.row_slices() {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "{}", cell.value());
        }
        out.push('\n');
    }
    out
}

/// Parses a grid and runs the map between its opposite corners.
impl FromStr for Map {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_grid(s).map(Map::with_corners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coord};
    use std::sync::{Mutex, Once};

    #[test]
    fn parses_mixed_separators() {
        let g = parse_grid("1, 1, 0\n1 0 1\n0,1,1\n").unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.at(Coord::new(0, 2)), Some(Cell(0)));
        assert_eq!(g.at(Coord::new(1, 1)), Some(Cell(0)));
        assert_eq!(g.at(Coord::new(2, 0)), Some(Cell(0)));
        assert_eq!(g.count(Cell(1)), 6);
    }

    #[test]
    fn skips_blank_lines_and_repeated_separators() {
        let g = parse_grid("\n1,,1  ,1\n\n  2 , 3 ,4\n").unwrap();
        assert_eq!(g.to_rows(), vec![vec![1, 1, 1], vec![2, 3, 4]]);
    }

    #[test]
    fn rejects_ragged_rows() {
        match parse_grid("1 1 1\n\n1 1\n") {
            Err(MapError::InconsistentRow {
                line,
                expected,
                found,
            }) => assert_eq!((line, expected, found), (3, 3, 2)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_non_integer_tokens() {
        match parse_grid("1 1\n1 x\n") {
            Err(MapError::InvalidToken { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_source() {
        assert!(matches!(parse_grid(""), Err(MapError::Empty)));
        assert!(matches!(parse_grid(" \n , \n"), Err(MapError::Empty)));
    }

    #[test]
    fn format_is_parseable() {
        let g = parse_grid("1 0 1\n4 1 3\n").unwrap();
        let text = format_grid(&g);
        assert_eq!(text, "1,0,1\n4,1,3\n");
        assert_eq!(parse_grid(&text).unwrap(), g);
    }

    #[test]
    fn map_from_str_uses_corners() {
        let m: Map = "1 1 1 1\n1 0 0 1\n".parse().unwrap();
        assert_eq!(m.start(), Coord::new(0, 0));
        assert_eq!(m.end(), Coord::new(1, 3));
    }

    /// Collects warnings so tests can check what a load reported.
    struct WarnCapture(Mutex<Vec<String>>);

    impl log::Log for WarnCapture {
        fn enabled(&self, meta: &log::Metadata) -> bool {
            meta.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            if let Ok(mut seen) = self.0.lock() {
                seen.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static WARNINGS: WarnCapture = WarnCapture(Mutex::new(Vec::new()));

    fn warnings() -> &'static WarnCapture {
        static INSTALL: Once = Once::new();
        INSTALL.call_once(|| {
            if log::set_logger(&WARNINGS).is_ok() {
                log::set_max_level(log::LevelFilter::Warn);
            }
        });
        &WARNINGS
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_grid("/definitely/not/a/map.txt").unwrap_err();
        assert!(matches!(err, MapError::Io(_)));
    }

    #[test]
    fn load_failures_are_warned_about() {
        let capture = warnings();
        let missing = "/definitely/not/a/warned-map.txt";
        assert!(load_grid(missing).is_err());

        let ragged = std::env::temp_dir()
            .join(format!("gridpath-ragged-{}.txt", std::process::id()));
        fs::write(&ragged, "1 1\n1\n").unwrap();
        let err = load_grid(&ragged).unwrap_err();
        fs::remove_file(&ragged).unwrap();
        assert!(matches!(err, MapError::InconsistentRow { .. }));

        let seen = capture.0.lock().unwrap();
        assert!(seen.iter().any(|m| m.contains(missing)), "{seen:?}");
        let ragged = ragged.display().to_string();
        assert!(seen.iter().any(|m| m.contains(&ragged)), "{seen:?}");
    }
}
