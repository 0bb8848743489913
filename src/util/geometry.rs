// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Cell location utilities.
//!
//! This module maps pixel coordinates to grid cells and decides which side
//! of a cell's diagonal a point falls on. The diagonal runs from the cell's
//! top-left corner to its bottom-right corner (y grows downward).

use crate::error::{Result, TriangleError};
use crate::models::grid::GridSpec;
use crate::models::triangle::Point;

/// A point resolved to its cell, with the offset from the cell's top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLocation {
    /// 0-based column.
    pub column_index: usize,
    /// 0-based row.
    pub row_index: usize,
    /// Offset from the cell's left edge, in `[0, cell_width)`.
    pub local_x: f64,
    /// Offset from the cell's top edge, in `[0, cell_height)`.
    pub local_y: f64,
}

/// Find the cell containing `point`.
pub fn locate_cell(grid: &GridSpec, point: Point) -> Result<CellLocation> {
    let Point { x, y } = point;
    if x < 0.0 || y < 0.0 {
        return Err(TriangleError::NegativeCoordinate { x, y });
    }
    if !(x < grid.total_width()) || !(y < grid.total_height()) {
        return Err(TriangleError::OutOfBounds(format!(
            "point ({}, {}) outside {}x{} grid",
            x,
            y,
            grid.total_width(),
            grid.total_height()
        )));
    }

    // Division can round up to `cols` for x just below the right edge.
    let column_index = ((x / grid.cell_width()).floor() as usize).min(grid.cols() - 1);
    let row_index = ((y / grid.cell_height()).floor() as usize).min(grid.rows() - 1);

    Ok(CellLocation {
        column_index,
        row_index,
        local_x: clamp_offset(x - column_index as f64 * grid.cell_width(), grid.cell_width()),
        local_y: clamp_offset(y - row_index as f64 * grid.cell_height(), grid.cell_height()),
    })
}

/// Keep a rounded local offset inside `[0, size)`.
fn clamp_offset(offset: f64, size: f64) -> f64 {
    // size is positive and finite, so its bit pattern minus one is the next float down
    let below_size = f64::from_bits(size.to_bits() - 1);
    offset.max(0.0).min(below_size)
}

/// True when the local offset lies strictly on the top-right side of the
/// diagonal. Points exactly on the diagonal return false.
pub fn side_of_diagonal(grid: &GridSpec, local_x: f64, local_y: f64) -> bool {
    local_y < (grid.cell_height() / grid.cell_width()) * local_x
}

/// Top-left pixel corner of a cell given its 0-based row and 1-based column.
pub fn cell_top_left(grid: &GridSpec, row_index: usize, square_column: u32) -> Result<Point> {
    if row_index >= grid.rows() {
        return Err(TriangleError::OutOfBounds(format!(
            "row {} outside grid of {} rows",
            row_index,
            grid.rows()
        )));
    }
    let column = square_column as usize;
    if column < 1 || column > grid.cols() {
        return Err(TriangleError::OutOfBounds(format!(
            "column {} outside grid of {} columns",
            square_column,
            grid.cols()
        )));
    }

    Ok(Point {
        x: (column - 1) as f64 * grid.cell_width(),
        y: row_index as f64 * grid.cell_height(),
    })
}
