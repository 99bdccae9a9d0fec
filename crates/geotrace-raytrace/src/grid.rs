//! 2D ray tracing over a rectangular pixel grid.
//!
//! A ray is cast across a grid of equally sized pixels; every pixel the
//! ray passes through gets its entry point, exit point, and the ray
//! length accumulated before entry. Intersections are computed against
//! the grid's horizontal and vertical lines, binned into pixels, and
//! reduced to the nearest entry/exit pair per pixel.

use geotrace_math::Point2;
use serde::{Deserialize, Serialize};

use crate::error::{RaytraceError, Result};
use crate::ray::Ray2;

/// Tolerance when assigning a grid-line intersection to a pixel column
/// or row. Every binned point sits exactly on a grid line, so plain
/// truncation would flip on the last bit of rounding noise; the nudge
/// snaps on-line points to the pixel on the line's increasing side.
const BIN_EPSILON: f64 = 1e-7;

/// Marker stored per pixel once a traced ray has touched it.
const VISITED: u8 = 255;

/// Rectangular grid of pixels anchored at `origin` (lower-left corner).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PixelGrid {
    /// Number of pixel columns (X direction).
    pub columns: usize,
    /// Number of pixel rows (Y direction).
    pub rows: usize,
    /// Pixel width in world units.
    pub pixel_width: f64,
    /// Pixel height in world units.
    pub pixel_height: f64,
    /// World coordinates of the grid's lower-left corner.
    pub origin: Point2,
    /// Per-pixel visit flags, row-major with X fastest.
    #[serde(default)]
    visited: Vec<u8>,
}

impl PixelGrid {
    /// Create a grid with all pixels unvisited.
    pub fn new(
        columns: usize,
        rows: usize,
        pixel_width: f64,
        pixel_height: f64,
        origin: Point2,
    ) -> Result<Self> {
        let grid = Self {
            columns,
            rows,
            pixel_width,
            pixel_height,
            origin,
            visited: vec![0; columns * rows],
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Check the grid dimensions are usable for tracing.
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(RaytraceError::InvalidGrid(format!(
                "grid must have at least one pixel, got {}x{}",
                self.columns, self.rows
            )));
        }
        if !(self.pixel_width > 0.0) || !(self.pixel_height > 0.0) {
            return Err(RaytraceError::InvalidGrid(format!(
                "pixel size must be positive, got {}x{}",
                self.pixel_width, self.pixel_height
            )));
        }
        // An empty buffer is fine (a grid fresh off deserialization);
        // tracing allocates it on first use.
        if !self.visited.is_empty() && self.visited.len() != self.columns * self.rows {
            return Err(RaytraceError::InvalidGrid(format!(
                "visit buffer holds {} entries for {} pixels",
                self.visited.len(),
                self.columns * self.rows
            )));
        }
        Ok(())
    }

    /// Visit flag for pixel `(col, row)`; `VISITED` once a ray crossed it.
    pub fn visited(&self, col: usize, row: usize) -> u8 {
        self.visited
            .get(row * self.columns + col)
            .copied()
            .unwrap_or(0)
    }

    /// Total grid width in world units.
    pub fn width(&self) -> f64 {
        self.columns as f64 * self.pixel_width
    }

    /// Total grid height in world units.
    pub fn height(&self) -> f64 {
        self.rows as f64 * self.pixel_height
    }

    fn mark(&mut self, col: usize, row: usize) {
        self.visited[row * self.columns + col] = VISITED;
    }

    /// True when `p` lies inside the grid's world rectangle, far
    /// boundaries excluded. Non-finite coordinates fail every
    /// comparison, so parallel-line intersection points drop out here.
    fn contains(&self, p: &Point2) -> bool {
        p.x >= self.origin.x
            && p.x < self.origin.x + self.width()
            && p.y >= self.origin.y
            && p.y < self.origin.y + self.height()
    }

    /// Pixel column holding `x`, snapping points on a vertical grid line
    /// to the column on its right. May return `columns` for a point
    /// within [`BIN_EPSILON`] below the far boundary; callers bounds-check.
    fn column_of(&self, x: f64) -> usize {
        ((x - self.origin.x + BIN_EPSILON) / self.pixel_width) as usize
    }

    /// Pixel row holding `y`, snapping points on a horizontal grid line
    /// to the row above.
    fn row_of(&self, y: f64) -> usize {
        ((y - self.origin.y + BIN_EPSILON) / self.pixel_height) as usize
    }
}

/// Entry/exit pair of a ray through one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellCrossing {
    /// Where the ray enters the pixel.
    pub entry: Point2,
    /// Where the ray leaves the pixel.
    pub exit: Point2,
    /// Ray length accumulated from the source up to `entry`.
    pub prior_length: f64,
}

impl CellCrossing {
    /// Chord length inside the pixel.
    pub fn inner_length(&self) -> f64 {
        (self.exit - self.entry).norm()
    }
}

/// Per-pixel trace results for one ray.
#[derive(Debug, Clone)]
pub struct TraceMap {
    columns: usize,
    cells: Vec<Option<CellCrossing>>,
}

impl TraceMap {
    fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            cells: vec![None; columns * rows],
        }
    }

    /// Crossing for pixel `(col, row)`, if the ray passed through it.
    pub fn get(&self, col: usize, row: usize) -> Option<&CellCrossing> {
        self.cells[row * self.columns + col].as_ref()
    }

    fn set(&mut self, col: usize, row: usize, crossing: CellCrossing) {
        self.cells[row * self.columns + col] = Some(crossing);
    }

    /// Number of pixels the ray crossed.
    pub fn crossed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterator over `(col, row, crossing)` for every crossed pixel.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &CellCrossing)> {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.as_ref().map(|c| (i % columns, i / columns, c)))
    }
}

/// Trace `ray` across `grid`, marking visited pixels and returning the
/// per-pixel crossings.
///
/// Every grid line is intersected against the ray's carrying line; the
/// intersection points are sorted by distance from the source and
/// walked as consecutive pairs, each pair binned into the pixel holding
/// its first point. Per pixel, the distinct candidate points nearest
/// the source become the entry and exit, accepted only when the entry
/// lies in the ray's forward direction (dot-product checks against the
/// source position vector and the direction). A pixel needs two
/// distinct candidates, so a ray that merely clips a corner leaves no
/// entry in the map.
pub fn trace_grid(ray: &Ray2, grid: &mut PixelGrid) -> Result<TraceMap> {
    grid.validate()?;
    if grid.visited.is_empty() {
        grid.visited = vec![0; grid.columns * grid.rows];
    }

    // Every grid line meets the ray somewhere; parallel pairs yield
    // non-finite points that sort last and fail the rectangle check.
    let mut hits: Vec<Point2> = Vec::with_capacity(grid.columns + grid.rows + 2);
    for col in 0..=grid.columns {
        let x = grid.origin.x + col as f64 * grid.pixel_width;
        let line = Ray2::between(Point2::new(x, 0.0), Point2::new(x, 1.0));
        hits.push(line.intersect(ray));
    }
    for row in 0..=grid.rows {
        let y = grid.origin.y + row as f64 * grid.pixel_height;
        let line = Ray2::between(Point2::new(0.0, y), Point2::new(1.0, y));
        hits.push(line.intersect(ray));
    }
    hits.sort_by(|a, b| {
        (a - ray.source)
            .norm()
            .total_cmp(&(b - ray.source).norm())
    });

    // Bin consecutive pairs into the pixel holding the pair's first
    // point. The epsilon snap can land a point one index past the last
    // pixel, hence the bounds check.
    let mut bins: Vec<Vec<Point2>> = vec![Vec::new(); grid.columns * grid.rows];
    for pair in hits.windows(2) {
        let p = pair[0];
        if !grid.contains(&p) {
            continue;
        }
        let col = grid.column_of(p.x);
        let row = grid.row_of(p.y);
        if col >= grid.columns || row >= grid.rows {
            continue;
        }
        bins[row * grid.columns + col].extend([pair[0], pair[1]]);
    }

    let mut map = TraceMap::new(grid.columns, grid.rows);
    for row in 0..grid.rows {
        for col in 0..grid.columns {
            let bin = &bins[row * grid.columns + col];
            if bin.is_empty() {
                continue;
            }
            // A crossing near a lattice point arrives once from the
            // vertical line and once from the horizontal one, differing
            // in the last bits; exact dedup would keep both and pair
            // them as a zero-length chord.
            let mut in_order: Vec<Point2> = Vec::with_capacity(bin.len());
            for p in bin {
                if !in_order.iter().any(|q| (q - p).norm() <= BIN_EPSILON) {
                    in_order.push(*p);
                }
            }
            in_order.sort_by(|a, b| {
                (a - ray.source)
                    .norm()
                    .total_cmp(&(b - ray.source).norm())
            });
            // A corner graze collapses to a single distinct point.
            if in_order.len() < 2 {
                continue;
            }

            let entry_vec = in_order[0] - ray.source;
            if entry_vec.dot(&ray.source.coords) >= 0.0 && entry_vec.dot(&ray.dir) >= 0.0 {
                map.set(
                    col,
                    row,
                    CellCrossing {
                        entry: in_order[0],
                        exit: in_order[1],
                        prior_length: entry_vec.norm(),
                    },
                );
                grid.mark(col, row);
            }
        }
    }

    Ok(map)
}
