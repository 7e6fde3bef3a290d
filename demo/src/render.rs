//! Text rendering of a map, one character per cell.

use gridpath_core::{Coord, Map, Terrain};

/// Character for a cell's terrain code.
pub fn glyph(terrain: Option<Terrain>) -> char {
    match terrain {
        Some(Terrain::Blocked) => '#',
        Some(Terrain::Open) => '.',
        Some(Terrain::Start) => 'S',
        Some(Terrain::Goal) => 'G',
        Some(Terrain::PathMark) => '*',
        None => '?',
    }
}

/// Draw `map` with its start and end overlaid as `S` and `G`.
pub fn render(map: &Map) -> String {
    let grid = map.grid();
    let mut out = String::with_capacity(grid.len() + grid.rows());
    for (c, cell) in grid.iter() {
        let ch = if c == map.start() {
            'S'
        } else if c == map.end() {
            'G'
        } else {
            glyph(cell.terrain())
        };
        out.push(ch);
        if c.col as usize == grid.cols() - 1 {
            out.push('\n');
        }
    }
    out
}

/// Parse `ROW,COL` into a coordinate.
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad row \u{201c}{row}\u{201d}: {e}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad column \u{201c}{col}\u{201d}: {e}"))?;
    Ok(Coord::new(row, col))
}
