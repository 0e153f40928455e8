use super::types::{Point, SnakeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cell_pixel_size: u32,
    draw_grid: bool,
}

impl Grid {
    /// Zero dimensions are clamped to one so a grid always has a cell.
    pub fn new(columns: usize, rows: usize, cell_pixel_size: u32, draw_grid: bool) -> Self {
        Self {
            columns: columns.max(1),
            rows: rows.max(1),
            cell_pixel_size: cell_pixel_size.max(1),
            draw_grid,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_pixel_size(&self) -> u32 {
        self.cell_pixel_size
    }

    pub fn draw_grid(&self) -> bool {
        self.draw_grid
    }

    pub fn set_draw_grid(&mut self, draw_grid: bool) {
        self.draw_grid = draw_grid;
    }

    /// Replaces the dimensions. Body and food must be renormalized by the caller.
    pub fn resize(&mut self, columns: usize, rows: usize, cell_pixel_size: u32) {
        self.columns = columns.max(1);
        self.rows = rows.max(1);
        self.cell_pixel_size = cell_pixel_size.max(1);
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.columns && y < self.rows
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<Point, SnakeError> {
        if self.contains(x, y) {
            Ok(Point::new(x, y))
        } else {
            Err(SnakeError::OutOfBounds { x, y })
        }
    }
}
