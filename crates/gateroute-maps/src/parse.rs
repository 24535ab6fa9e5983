//! Reading grids from text.
//!
//! One line per row, one character per cell. Whitespace around each line is
//! ignored, as are blank lines at the end of the text.

use std::fs;
use std::path::Path;

use gateroute_core::{GridError, Point, SymbolGrid};

use crate::error::MapError;

/// Parse a grid from its textual form.
pub fn parse_grid(text: &str) -> Result<SymbolGrid, GridError> {
    let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    SymbolGrid::from_lines(lines)
}

/// Read and parse the grid stored at `path`.
pub fn load_grid(path: &Path) -> Result<SymbolGrid, MapError> {
    let text = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_grid(&text).map_err(|source| MapError::Grid {
        map: path.display().to_string(),
        source,
    })?;
    log::debug!(
        "loaded {}: {}x{}",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(grid)
}

/// Position of the first `marker` in `grid`, scanning rows top to bottom.
pub fn locate(grid: &SymbolGrid, marker: char, map: &str) -> Result<Point, MapError> {
    grid.find(marker).ok_or_else(|| MapError::MissingMarker {
        map: map.to_string(),
        marker,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_lines_and_trailing_blanks() {
        let g = parse_grid("  8001 \n0A07\r\n\n\n").unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 2);
        assert_eq!(g.at(Point::new(0, 0)), Some('8'));
        assert_eq!(g.at(Point::new(1, 1)), Some('A'));
    }

    #[test]
    fn parse_rejects_ragged_and_empty_text() {
        assert!(matches!(parse_grid("000\n00"), Err(GridError::Ragged { .. })));
        assert!(matches!(parse_grid("000\n\n000"), Err(GridError::Ragged { .. })));
        assert_eq!(parse_grid("\n\n"), Err(GridError::Empty));
    }

    #[test]
    fn locate_reports_missing_marker() {
        let g = parse_grid("0A0\n007").unwrap();
        assert_eq!(locate(&g, '7', "world").unwrap(), Point::new(2, 1));
        let err = locate(&g, 'B', "world").unwrap_err();
        assert!(matches!(err, MapError::MissingMarker { marker: 'B', .. }));
        assert_eq!(err.to_string(), "map world: marker \u{201c}B\u{201d} not found");
    }

    #[test]
    fn load_grid_reports_missing_file() {
        let err = load_grid(Path::new("/nonexistent/gateroute/world.txt")).unwrap_err();
        assert!(matches!(err, MapError::Io { .. }));
    }
}
