//! The [`SymbolGrid`] type: an immutable 2D grid of terrain symbols.
//!
//! Every cell holds a single character whose meaning (and traversal cost) is
//! decided by a [`CostTable`](crate::CostTable). A grid is rectangular and
//! never empty; it cannot be modified after construction.

use std::fmt;

use crate::geom::{Point, Range};

/// A rectangular, immutable grid of terrain symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolGrid {
    cells: Vec<char>,
    bounds: Range,
}

impl SymbolGrid {
    /// Build a grid from rows of symbols.
    ///
    /// Fails if there are no rows, if the first row is empty, or if any row
    /// differs in length from the first one.
    pub fn from_rows<R, I>(rows: R) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = char>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (y, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row);
            let found = cells.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        row: y,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width as i32, height as i32),
        })
    }

    /// Build a grid from string rows, one character per cell.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self, GridError> {
        Self::from_rows(lines.into_iter().map(str::chars))
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside this grid's bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// The symbol at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<char> {
        self.index(p).map(|i| self.cells[i])
    }

    /// In-bounds cardinal neighbours of `p`, in the order up, down, left,
    /// right.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.cardinal().into_iter().filter(|&n| self.contains(n))
    }

    /// First position holding `symbol`, scanning rows top to bottom.
    pub fn find(&self, symbol: char) -> Option<Point> {
        self.iter().find(|&(_, ch)| ch == symbol).map(|(p, _)| p)
    }

    /// Row-major iterator over `(Point, char)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Iterator over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width() as usize)
    }
}

impl fmt::Display for SymbolGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when building a [`SymbolGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows without any symbol.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no symbols"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} symbols, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}
