//! Connected map regions and their bounding rectangles

use std::fmt;

use crate::spatial::grid::Cell;

/// Inclusive axis-aligned bounding rectangle in cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Leftmost column
    pub left: usize,
    /// Topmost row
    pub top: usize,
    /// Rightmost column
    pub right: usize,
    /// Bottom row
    pub bottom: usize,
}

impl Bounds {
    /// Bounds covering a single position
    pub const fn at(x: usize, y: usize) -> Self {
        Self {
            left: x,
            top: y,
            right: x,
            bottom: y,
        }
    }

    /// Grow to include `(x, y)`
    pub fn include(&mut self, x: usize, y: usize) {
        if x < self.left {
            self.left = x;
        }
        if x > self.right {
            self.right = x;
        }
        if y < self.top {
            self.top = y;
        }
        if y > self.bottom {
            self.bottom = y;
        }
    }

    /// Number of columns covered
    pub const fn width(&self) -> usize {
        self.right - self.left + 1
    }

    /// Number of rows covered
    pub const fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    /// Center position, rounded toward the top-left for even sizes
    pub const fn center(&self) -> (usize, usize) {
        (
            self.left + self.width() / 2,
            self.top + self.height() / 2,
        )
    }

    /// Check if a position is within the bounds
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{x: {}, y: {}, width: {}, height: {}}}",
            self.left,
            self.top,
            self.width(),
            self.height()
        )
    }
}

/// Maximal 4-connected group of cells sharing the same walkable state
///
/// Cells are kept in discovery order so that everything derived from a section is
/// reproducible for a given map.
#[derive(Debug, Clone, Default)]
pub struct MapSection {
    cells: Vec<Cell>,
    bounds: Option<Bounds>,
}

impl MapSection {
    /// Create an empty section
    pub const fn new() -> Self {
        Self {
            cells: Vec::new(),
            bounds: None,
        }
    }

    /// Add a member cell and grow the bounds around it
    pub fn add_cell(&mut self, cell: Cell) {
        let mut bounds = self.bounds.unwrap_or(Bounds::at(cell.x, cell.y));
        bounds.include(cell.x, cell.y);
        self.bounds = Some(bounds);
        self.cells.push(cell);
    }

    /// Member cells in discovery order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of member cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell has been added
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding rectangle, `None` for an empty section
    pub const fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Center of the bounding rectangle
    pub fn center(&self) -> Option<(usize, usize)> {
        self.bounds.map(|bounds| bounds.center())
    }

    /// Walkable state shared by every member
    pub fn is_walkable(&self) -> Option<bool> {
        self.cells.first().map(|cell| cell.is_walkable)
    }

    /// Membership test by position
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.bounds.is_some_and(|bounds| bounds.contains(x, y))
            && self.cells.iter().any(|cell| cell.x == x && cell.y == y)
    }
}

impl fmt::Display for MapSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds {
            Some(bounds) => write!(f, "Bounds: {bounds}"),
            None => write!(f, "Bounds: empty"),
        }
    }
}
