//! Cell storage capability and the dense grid that implements it
//!
//! Generation algorithms are written against the [`Map`] trait so callers can plug in
//! their own storage. [`Grid`] is the bundled implementation backed by an `ndarray`
//! matrix indexed `[y, x]`.

use std::fmt;

use ndarray::Array2;

use crate::io::error::{MapError, Result};

/// Snapshot of a single grid position
///
/// Cells are plain values without identity. Code that needs membership tests keys
/// them by [`Cell::index`] instead of comparing snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
    /// Whether the cell can be walked on
    pub is_walkable: bool,
    /// Whether the cell lets light through
    pub is_transparent: bool,
}

impl Cell {
    /// Linear row-major index of this cell in a map of the given width
    pub const fn index(&self, width: usize) -> usize {
        self.y * width + self.x
    }

    /// Text glyph used by [`Grid`]'s `Display` and [`Grid::parse`]
    pub const fn glyph(&self) -> char {
        match (self.is_walkable, self.is_transparent) {
            (true, true) => '.',
            (true, false) => 's',
            (false, true) => 'o',
            (false, false) => '#',
        }
    }
}

/// Grid capability consumed by every generation algorithm
///
/// Implementors only provide storage; neighborhood, iteration and line queries have
/// default implementations built on [`Map::cell`].
pub trait Map: Clone + Default {
    /// Reset the map to `width` x `height` solid cells
    fn initialize(&mut self, width: usize, height: usize);

    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Snapshot of the cell at `(x, y)`, `None` outside the map
    fn cell(&self, x: usize, y: usize) -> Option<Cell>;

    /// Overwrite both flags of the cell at `(x, y)`
    ///
    /// Positions outside the map are ignored.
    fn set_cell_properties(&mut self, x: usize, y: usize, is_walkable: bool, is_transparent: bool);

    /// All cells in row-major order
    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height())
            .flat_map(move |y| (0..self.width()).filter_map(move |x| self.cell(x, y)))
    }

    /// Cells in the square of half-side `distance` centered on `(x, y)`, clipped to the map
    ///
    /// The center cell is included.
    fn cells_in_square(
        &self,
        x: usize,
        y: usize,
        distance: usize,
    ) -> impl Iterator<Item = Cell> + '_ {
        let x_min = x.saturating_sub(distance);
        let y_min = y.saturating_sub(distance);
        let x_max = x
            .saturating_add(distance)
            .min(self.width().saturating_sub(1));
        let y_max = y
            .saturating_add(distance)
            .min(self.height().saturating_sub(1));

        (y_min..=y_max).flat_map(move |cy| (x_min..=x_max).filter_map(move |cx| self.cell(cx, cy)))
    }

    /// Cells on the Bresenham line from `(x1, y1)` to `(x2, y2)`, both endpoints included
    fn cells_along_line(&self, x1: usize, y1: usize, x2: usize, y2: usize) -> Vec<Cell> {
        bresenham_line([x1 as i64, y1 as i64], [x2 as i64, y2 as i64])
            .into_iter()
            .filter_map(|[x, y]| self.cell(x as usize, y as usize))
            .collect()
    }

    /// Whether `(x, y)` lies on the outer ring of the map
    fn is_border_cell(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width() || y + 1 == self.height()
    }
}

/// Integer points on the line between two positions
///
/// Always contains at least the start point.
pub fn bresenham_line(start: [i64; 2], end: [i64; 2]) -> Vec<[i64; 2]> {
    let dx = (end[0] - start[0]).abs();
    let dy = (end[1] - start[1]).abs();
    let step_x = if start[0] < end[0] { 1 } else { -1 };
    let step_y = if start[1] < end[1] { 1 } else { -1 };

    let mut points = Vec::with_capacity((dx.max(dy) + 1) as usize);
    let mut error = dx - dy;
    let [mut x, mut y] = start;

    loop {
        points.push([x, y]);
        if x == end[0] && y == end[1] {
            break;
        }
        let doubled = 2 * error;
        if doubled > -dy {
            error -= dy;
            x += step_x;
        }
        if doubled < dx {
            error += dx;
            y += step_y;
        }
    }

    points
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CellState {
    walkable: bool,
    transparent: bool,
}

/// Dense in-memory map storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    states: Array2<CellState>,
}

impl Grid {
    /// Create a solid grid of the given size
    pub fn new(width: usize, height: usize) -> Self {
        let mut grid = Self::default();
        grid.initialize(width, height);
        grid
    }

    /// Parse the text form produced by `Display`
    ///
    /// Each line is one row. `.` is walkable and transparent, `s` walkable only,
    /// `o` transparent only and `#` neither. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if rows have different lengths or contain an unknown glyph
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();

        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut grid = Self::new(width, height);

        for (y, row) in rows.iter().enumerate() {
            let length = row.chars().count();
            if length != width {
                return Err(MapError::InvalidMapText {
                    line: y,
                    reason: format!("expected {width} cells, found {length}"),
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let (is_walkable, is_transparent) = match glyph {
                    '.' => (true, true),
                    's' => (true, false),
                    'o' => (false, true),
                    '#' => (false, false),
                    other => {
                        return Err(MapError::InvalidMapText {
                            line: y,
                            reason: format!("unknown glyph '{other}' at column {x}"),
                        });
                    }
                };
                grid.set_cell_properties(x, y, is_walkable, is_transparent);
            }
        }

        Ok(grid)
    }

    /// Number of walkable cells
    pub fn walkable_count(&self) -> usize {
        self.states.iter().filter(|state| state.walkable).count()
    }
}

impl Map for Grid {
    fn initialize(&mut self, width: usize, height: usize) {
        self.states = Array2::from_elem((height, width), CellState::default());
    }

    fn width(&self) -> usize {
        self.states.ncols()
    }

    fn height(&self) -> usize {
        self.states.nrows()
    }

    fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.states.get([y, x]).map(|state| Cell {
            x,
            y,
            is_walkable: state.walkable,
            is_transparent: state.transparent,
        })
    }

    fn set_cell_properties(&mut self, x: usize, y: usize, is_walkable: bool, is_transparent: bool) {
        if let Some(state) = self.states.get_mut([y, x]) {
            state.walkable = is_walkable;
            state.transparent = is_transparent;
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                if let Some(cell) = self.cell(x, y) {
                    write!(f, "{}", cell.glyph())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
