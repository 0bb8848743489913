// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for the mapping core.
//!
//! Every failure stems from caller-supplied data and is reported at the
//! point where the offending input is first seen.

use thiserror::Error;

/// Errors produced by grid construction, designator parsing and mapping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangleError {
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("negative coordinate: ({x}, {y})")]
    NegativeCoordinate { x: f64, y: f64 },

    #[error("out of bounds: {0}")]
    OutOfBounds(String),

    #[error("malformed designator: {0:?}")]
    MalformedDesignator(String),

    #[error("invalid triangle number: {0}")]
    InvalidTriangleNumber(i64),

    #[error("row index {0} out of range (A..Z)")]
    RowOutOfRange(usize),
}

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, TriangleError>;
