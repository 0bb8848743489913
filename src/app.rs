// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Interactive console session.
//!
//! This module contains the request/response loop that reads an operation
//! choice and its argument, calls into the mapping core, and prints the
//! result. A failed request is reported and the loop carries on.

use anyhow::{anyhow, Result};
use std::io::{BufRead, Write};
use trimap::models::designator::row_label;
use trimap::{designator_to_vertices, point_to_designator, GridSpec, Point, Triangle};

/// Menu choice read from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PointToTriangle,
    TriangleToVertices,
    ShowGrid,
    Quit,
}

impl Command {
    fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "p" | "point" => Some(Self::PointToTriangle),
            "2" | "t" | "triangle" => Some(Self::TriangleToVertices),
            "3" | "g" | "grid" => Some(Self::ShowGrid),
            "4" | "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Parse `"x y"` or `"x, y"` into a point.
pub fn parse_point(input: &str) -> Result<Point> {
    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    match parts.as_slice() {
        [x, y] => {
            let x: f64 = x.parse().map_err(|_| anyhow!("Invalid x coordinate: {:?}", x))?;
            let y: f64 = y.parse().map_err(|_| anyhow!("Invalid y coordinate: {:?}", y))?;
            Ok(Point::new(x, y))
        }
        _ => Err(anyhow!("Expected two coordinates, got {:?}", input.trim())),
    }
}

/// One interactive session over a fixed grid.
pub struct Session<R, W> {
    grid: GridSpec,
    input: R,
    output: W,
    /// Number of requests answered successfully
    answered: usize,
    /// Number of requests rejected with an error
    rejected: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(grid: GridSpec, input: R, output: W) -> Self {
        Self {
            grid,
            input,
            output,
            answered: 0,
            rejected: 0,
        }
    }

    /// Print the banner and grid parameters.
    pub fn print_banner(&mut self) -> Result<()> {
        let last_row = row_label(self.grid.rows() - 1)?;
        writeln!(self.output, "Triangle Mapper Console App")?;
        writeln!(self.output, "Grid rows: {} (A..{})", self.grid.rows(), last_row)?;
        writeln!(
            self.output,
            "Grid cols: {} (triangles 1..{})",
            self.grid.cols(),
            2 * self.grid.cols()
        )?;
        writeln!(self.output, "Square width: {} pixels", self.grid.cell_width())?;
        writeln!(self.output, "Square height: {} pixels", self.grid.cell_height())?;
        Ok(())
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        log::info!("Session started");
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match Command::from_input(&line) {
                Some(Command::Quit) => break,
                Some(Command::ShowGrid) => self.print_grid()?,
                Some(Command::PointToTriangle) => {
                    self.prompt("Enter x y: ")?;
                    let Some(text) = self.read_line()? else {
                        break;
                    };
                    let result = self.point_request(&text);
                    self.report(result)?;
                }
                Some(Command::TriangleToVertices) => {
                    self.prompt("Enter triangle (e.g. A1): ")?;
                    let Some(text) = self.read_line()? else {
                        break;
                    };
                    let result = self.triangle_request(&text);
                    self.report(result)?;
                }
                None => {
                    log::warn!("Unknown menu choice: {:?}", line.trim());
                    writeln!(self.output, "Unknown choice: {}", line.trim())?;
                }
            }
        }
        log::info!(
            "Session ended: {} answered, {} rejected",
            self.answered,
            self.rejected
        );
        writeln!(self.output, "Goodbye.")?;
        Ok(())
    }

    fn point_request(&self, text: &str) -> Result<String> {
        let point = parse_point(text)?;
        let designator = point_to_designator(&self.grid, point)?;
        Ok(format!("({}, {}) -> {}", point.x, point.y, designator))
    }

    fn triangle_request(&self, text: &str) -> Result<String> {
        let text = text.trim();
        let triangle = designator_to_vertices(&self.grid, text)?;
        Ok(vertex_table(text, &triangle))
    }

    fn report(&mut self, result: Result<String>) -> Result<()> {
        match result {
            Ok(message) => {
                self.answered += 1;
                writeln!(self.output, "{}", message)?;
            }
            Err(e) => {
                self.rejected += 1;
                log::warn!("Request rejected: {}", e);
                writeln!(self.output, "error: {}", e)?;
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "1) Point -> triangle")?;
        writeln!(self.output, "2) Triangle -> vertices")?;
        writeln!(self.output, "3) Show grid")?;
        writeln!(self.output, "4) Quit")?;
        self.prompt("> ")
    }

    /// Top-left corner of every cell, one grid row per line.
    fn print_grid(&mut self) -> Result<()> {
        for (row, origins) in self.grid.cell_origins() {
            let cells: Vec<String> = origins
                .iter()
                .map(|p| format!("({}, {})", p.x, p.y))
                .collect();
            writeln!(self.output, "{}: {}", row_label(row)?, cells.join(" "))?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Render a triangle's vertices as a small table followed by its area.
fn vertex_table(label: &str, triangle: &Triangle) -> String {
    let mut table = format!("Vertices for {}\n", label);
    table.push_str("+---------+---------+\n");
    table.push_str("|    x    |    y    |\n");
    table.push_str("+---------+---------+\n");
    for p in &triangle.vertices {
        table.push_str(&format!("| {:7.1} | {:7.1} |\n", p.x, p.y));
    }
    table.push_str("+---------+---------+\n");
    table.push_str(&format!("Area: {:.1}", triangle.area()));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use trimap::make_grid;

    fn run_session(grid: GridSpec, input: &str) -> String {
        let mut output = Vec::new();
        Session::new(grid, Cursor::new(input.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("30 70").unwrap(), Point::new(30.0, 70.0));
        assert_eq!(parse_point(" 1.5, 2\n").unwrap(), Point::new(1.5, 2.0));
        assert!(parse_point("1").is_err());
        assert!(parse_point("a b").is_err());
        assert!(parse_point("1 2 3").is_err());
    }

    #[test]
    fn test_command_aliases() {
        assert_eq!(Command::from_input("1\n"), Some(Command::PointToTriangle));
        assert_eq!(Command::from_input("T"), Some(Command::TriangleToVertices));
        assert_eq!(Command::from_input("grid"), Some(Command::ShowGrid));
        assert_eq!(Command::from_input("q"), Some(Command::Quit));
        assert_eq!(Command::from_input("9"), None);
    }

    #[test_log::test]
    fn test_point_request() {
        let grid = make_grid(1, 1, 100.0, 100.0).unwrap();
        let out = run_session(grid, "1\n30 30\n1\n90,10\n4\n");
        assert!(out.contains("(30, 30) -> A2"));
        assert!(out.contains("(90, 10) -> A1"));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test_log::test]
    fn test_errors_do_not_end_session() {
        let grid = make_grid(1, 1, 100.0, 100.0).unwrap();
        let out = run_session(grid, "1\n-1 0\n1\n1000 1000\n2\nAB1\n1\n10 90\nq\n");
        assert!(out.contains("error: negative coordinate"));
        assert!(out.contains("error: out of bounds"));
        assert!(out.contains("error: malformed designator"));
        assert!(out.contains("(10, 90) -> A2"));
    }

    #[test]
    fn test_triangle_request_table() {
        let grid = make_grid(2, 2, 150.0, 100.0).unwrap();
        let out = run_session(grid, "2\n B3 \n");
        assert!(out.contains("Vertices for B3"));
        assert!(out.contains("|    75.0 |    50.0 |"));
        assert!(out.contains("|   150.0 |   100.0 |"));
        assert!(out.contains("Area: 1875.0"));
    }

    #[test]
    fn test_show_grid_and_unknown_choice() {
        let grid = make_grid(2, 2, 100.0, 80.0).unwrap();
        let out = run_session(grid, "3\nzz\n");
        assert!(out.contains("A: (0, 0) (50, 0)"));
        assert!(out.contains("B: (0, 40) (50, 40)"));
        assert!(out.contains("Unknown choice: zz"));
    }

    #[test]
    fn test_banner() {
        let grid = GridSpec::from_cell_size(8, 8, 50.0, 40.0).unwrap();
        let mut output = Vec::new();
        Session::new(grid, Cursor::new(&b""[..]), &mut output)
            .print_banner()
            .unwrap();
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Grid rows: 8 (A..H)"));
        assert!(out.contains("Square width: 50 pixels"));
    }
}
