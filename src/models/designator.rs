// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Designator notation: `<RowLetter><TriangleNumber>`, e.g. `"C7"`.
//!
//! Rows are single letters `A..=Z`. Triangle numbers start at 1 and come in
//! pairs per cell: `2k-1` is the upper (odd) half of column `k`, `2k` the
//! lower (even) half.

use crate::error::{Result, TriangleError};
use std::fmt;
use std::str::FromStr;

/// Number of representable rows (`A..=Z`).
pub const MAX_ROWS: usize = 26;

/// A parsed designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Designator {
    row_index: usize,
    triangle_number: u32,
}

impl Designator {
    pub fn new(row_index: usize, triangle_number: u32) -> Result<Self> {
        if row_index >= MAX_ROWS {
            return Err(TriangleError::RowOutOfRange(row_index));
        }
        if triangle_number < 1 {
            return Err(TriangleError::InvalidTriangleNumber(triangle_number.into()));
        }
        Ok(Self {
            row_index,
            triangle_number,
        })
    }

    /// 0-based row, `A` = 0.
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    /// 1-based triangle number within the row.
    pub fn triangle_number(&self) -> u32 {
        self.triangle_number
    }

    /// 1-based column of the rectangular cell holding this triangle.
    pub fn square_column(&self) -> u32 {
        self.triangle_number.div_ceil(2)
    }

    /// Whether this is the odd-numbered half of its cell.
    pub fn is_upper(&self) -> bool {
        is_upper_triangle(self.triangle_number)
    }
}

impl fmt::Display for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // fields are private, so row_index < MAX_ROWS
        let letter = (b'A' + self.row_index as u8) as char;
        write!(f, "{}{}", letter, self.triangle_number)
    }
}

impl FromStr for Designator {
    type Err = TriangleError;

    fn from_str(text: &str) -> Result<Self> {
        parse(text)
    }
}

/// Row letter for a 0-based row index.
pub fn row_label(row_index: usize) -> Result<char> {
    if row_index >= MAX_ROWS {
        return Err(TriangleError::RowOutOfRange(row_index));
    }
    Ok((b'A' + row_index as u8) as char)
}

/// Format a designator string.
pub fn format(row_index: usize, triangle_number: u32) -> Result<String> {
    Ok(Designator::new(row_index, triangle_number)?.to_string())
}

/// Parse a designator string into its row index and triangle number.
///
/// Exactly one ASCII letter is accepted as the row (case-insensitive);
/// everything after it must be decimal digits.
pub fn parse(text: &str) -> Result<Designator> {
    let malformed = || TriangleError::MalformedDesignator(text.to_string());

    let split = text
        .char_indices()
        .find(|(_, c)| !c.is_alphabetic())
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let (letters, digits) = text.split_at(split);

    let mut chars = letters.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => return Err(malformed()),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let triangle_number: u32 = digits.parse().map_err(|_| malformed())?;

    Designator::new((letter as u8 - b'A') as usize, triangle_number)
}

/// 1-based cell column for a triangle number: `(n + 1) / 2`.
pub fn square_column(triangle_number: u32) -> Result<u32> {
    if triangle_number < 1 {
        return Err(TriangleError::InvalidTriangleNumber(triangle_number.into()));
    }
    Ok(triangle_number.div_ceil(2))
}

/// Odd triangle numbers are the upper half of their cell.
pub fn is_upper_triangle(triangle_number: u32) -> bool {
    triangle_number % 2 == 1
}
