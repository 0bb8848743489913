// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Value types: grid dimensions, designators, points and triangles.

pub mod designator;
pub mod grid;
pub mod triangle;
