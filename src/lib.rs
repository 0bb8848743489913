// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Triangle Mapper
//!
//! Maps pixel coordinates to the triangular halves of a rectangular grid
//! whose cells are each split by a diagonal, and back again. Triangles are
//! named `<RowLetter><TriangleNumber>`, e.g. `"B3"`.
//!
//! ```
//! use trimap::{designator_to_vertices, make_grid, point_to_designator};
//!
//! let grid = make_grid(2, 2, 150.0, 100.0).unwrap();
//! assert_eq!(point_to_designator(&grid, (140.0, 10.0)).unwrap(), "A3");
//! let triangle = designator_to_vertices(&grid, "A3").unwrap();
//! assert_eq!(triangle.area(), 1875.0);
//! ```

pub mod error;
pub mod io;
pub mod mapper;
pub mod models;
pub mod util;

pub use error::{Result, TriangleError};
pub use mapper::{designator_to_vertices, point_to_designator};
pub use models::designator::Designator;
pub use models::grid::{make_grid, GridSpec};
pub use models::triangle::{Point, Triangle};
