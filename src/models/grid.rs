// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Grid dimensions.
//!
//! A `GridSpec` is built once and then only read. Per-cell sizes are
//! derived at construction.

use crate::error::{Result, TriangleError};
use crate::models::designator::MAX_ROWS;
use crate::models::triangle::Point;

/// Largest column count whose triangle numbers (`2 * cols`) fit in a `u32`.
pub const MAX_COLS: usize = (u32::MAX / 2) as usize;

/// Immutable description of a grid of `rows x cols` rectangular cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    rows: usize,
    cols: usize,
    total_width: f64,
    total_height: f64,
    cell_width: f64,
    cell_height: f64,
}

impl GridSpec {
    /// Create a grid covering `total_width x total_height` pixels.
    pub fn new(rows: usize, cols: usize, total_width: f64, total_height: f64) -> Result<Self> {
        if rows < 1 || rows > MAX_ROWS {
            return Err(TriangleError::InvalidGrid(format!(
                "rows must be in 1..={}, got {}",
                MAX_ROWS, rows
            )));
        }
        if cols < 1 || cols > MAX_COLS {
            return Err(TriangleError::InvalidGrid(format!(
                "cols must be in 1..={}, got {}",
                MAX_COLS, cols
            )));
        }
        // Written this way round so NaN is rejected too.
        if !(total_width > 0.0) || !total_width.is_finite() {
            return Err(TriangleError::InvalidGrid(format!(
                "total width must be positive, got {}",
                total_width
            )));
        }
        if !(total_height > 0.0) || !total_height.is_finite() {
            return Err(TriangleError::InvalidGrid(format!(
                "total height must be positive, got {}",
                total_height
            )));
        }

        Ok(Self {
            rows,
            cols,
            total_width,
            total_height,
            cell_width: total_width / cols as f64,
            cell_height: total_height / rows as f64,
        })
    }

    /// Create a grid from the size of a single cell.
    pub fn from_cell_size(rows: usize, cols: usize, cell_width: f64, cell_height: f64) -> Result<Self> {
        Self::new(rows, cols, cols as f64 * cell_width, rows as f64 * cell_height)
    }

    /// Number of rows (`A..`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cell columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid width in pixels.
    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    /// Grid height in pixels.
    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    /// Width of one cell in pixels.
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Height of one cell in pixels.
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Top-left corner of every cell, row by row.
    pub fn cell_origins(&self) -> impl Iterator<Item = (usize, Vec<Point>)> + '_ {
        (0..self.rows).map(move |row| {
            let origins = (0..self.cols)
                .map(|col| Point {
                    x: col as f64 * self.cell_width,
                    y: row as f64 * self.cell_height,
                })
                .collect();
            (row, origins)
        })
    }
}

/// Build a grid; free-function form of [`GridSpec::new`].
pub fn make_grid(rows: usize, cols: usize, total_width: f64, total_height: f64) -> Result<GridSpec> {
    GridSpec::new(rows, cols, total_width, total_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_cell_size() {
        let grid = make_grid(2, 2, 150.0, 100.0).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.total_width(), 150.0);
        assert_eq!(grid.total_height(), 100.0);
        assert_eq!(grid.cell_width(), 75.0);
        assert_eq!(grid.cell_height(), 50.0);
    }

    #[test]
    fn test_from_cell_size() {
        let grid = GridSpec::from_cell_size(8, 8, 50.0, 40.0).unwrap();
        assert_eq!(grid.total_width(), 400.0);
        assert_eq!(grid.total_height(), 320.0);
        assert_eq!(grid.cell_width(), 50.0);
        assert_eq!(grid.cell_height(), 40.0);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let bad = [
            (0, 1, 100.0, 100.0),
            (27, 1, 100.0, 100.0),
            (1, 0, 100.0, 100.0),
            (1, 1, 0.0, 100.0),
            (1, 1, 100.0, -5.0),
            (1, 1, f64::NAN, 100.0),
            (1, 1, 100.0, f64::INFINITY),
        ];
        for (rows, cols, w, h) in bad {
            assert!(
                matches!(make_grid(rows, cols, w, h), Err(TriangleError::InvalidGrid(_))),
                "expected InvalidGrid for {rows}x{cols} {w}x{h}"
            );
        }
    }

    #[test]
    fn test_column_limit() {
        assert!(make_grid(1, MAX_COLS, MAX_COLS as f64, 1.0).is_ok());
        assert!(matches!(
            make_grid(1, MAX_COLS + 1, 1.0, 1.0),
            Err(TriangleError::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_accepts_full_alphabet() {
        assert!(make_grid(26, 1, 10.0, 10.0).is_ok());
    }

    #[test]
    fn test_cell_origins() {
        let grid = make_grid(2, 3, 150.0, 80.0).unwrap();
        let rows: Vec<_> = grid.cell_origins().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].0, 1);
        assert_eq!(rows[1].1[2], Point::new(100.0, 40.0));
    }
}
