// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Point to designator mapping and back.
//!
//! Each cell is split by its top-left to bottom-right diagonal. The odd
//! triangle of a cell is the half holding the top-right corner; the even
//! triangle is the half holding the bottom-left corner and owns every point
//! lying exactly on the diagonal.

use crate::error::{Result, TriangleError};
use crate::models::designator::{self, Designator};
use crate::models::grid::GridSpec;
use crate::models::triangle::{Point, Triangle};
use crate::util::geometry::{cell_top_left, locate_cell, side_of_diagonal};

/// Resolve a point to the designator of the triangle containing it.
pub fn locate_triangle(grid: &GridSpec, point: Point) -> Result<Designator> {
    let cell = locate_cell(grid, point)?;
    let upper = side_of_diagonal(grid, cell.local_x, cell.local_y);

    let even = u32::try_from(cell.column_index + 1)
        .ok()
        .and_then(|column| column.checked_mul(2))
        .ok_or_else(|| {
            TriangleError::OutOfBounds(format!("column {} has no triangle number", cell.column_index))
        })?;
    let triangle_number = if upper { even - 1 } else { even };

    let designator = Designator::new(cell.row_index, triangle_number)?;
    log::debug!("({}, {}) -> {}", point.x, point.y, designator);
    Ok(designator)
}

/// Map a pixel point to its designator string, e.g. `"B3"`.
pub fn point_to_designator(grid: &GridSpec, point: impl Into<Point>) -> Result<String> {
    locate_triangle(grid, point.into()).map(|d| d.to_string())
}

/// Corners of the triangle named by an already parsed designator.
pub fn triangle_vertices(grid: &GridSpec, designator: Designator) -> Result<Triangle> {
    let origin = cell_top_left(grid, designator.row_index(), designator.square_column())?;
    let (w, h) = (grid.cell_width(), grid.cell_height());

    let top_left = origin;
    let top_right = Point::new(origin.x + w, origin.y);
    let bottom_right = Point::new(origin.x + w, origin.y + h);
    let bottom_left = Point::new(origin.x, origin.y + h);

    let triangle = if designator.is_upper() {
        Triangle::new(top_left, top_right, bottom_right)
    } else {
        Triangle::new(top_left, bottom_right, bottom_left)
    };
    log::debug!("{} -> {:?}", designator, triangle.to_pairs());
    Ok(triangle)
}

/// Parse a designator and return the corners of its triangle.
pub fn designator_to_vertices(grid: &GridSpec, text: &str) -> Result<Triangle> {
    let designator = designator::parse(text)?;
    triangle_vertices(grid, designator)
}
