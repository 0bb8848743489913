// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Point and triangle value types.
//!
//! Points are pixel coordinates with y growing downward. A triangle is the
//! ordered vertex triple returned by the mapper.

/// A 2D point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// One half of a grid cell, described by its three corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Absolute area (shoelace formula).
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        0.5 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)).abs()
    }

    /// Arithmetic mean of the three vertices.
    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.vertices;
        Point {
            x: (a.x + b.x + c.x) / 3.0,
            y: (a.y + b.y + c.y) / 3.0,
        }
    }

    /// Vertices as plain `(x, y)` pairs.
    pub fn to_pairs(&self) -> [(f64, f64); 3] {
        self.vertices.map(|p| (p.x, p.y))
    }
}
