// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command line arguments for the interactive mapper.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use trimap::io::serialization;
use trimap::GridSpec;

#[derive(Parser, Debug)]
#[command(name = "trimap", version, about = "Triangle Mapper console app")]
pub struct Args {
    /// Number of grid rows (A..Z, at most 26).
    #[arg(long, default_value_t = 8)]
    pub rows: usize,

    /// Number of grid columns.
    #[arg(long, default_value_t = 8)]
    pub cols: usize,

    /// Width of one cell in pixels.
    #[arg(long = "cell-width", short = 'w', default_value_t = 50.0)]
    pub cell_width: f64,

    /// Height of one cell in pixels.
    #[arg(long = "cell-height", short = 'H', default_value_t = 40.0)]
    pub cell_height: f64,

    /// Load the grid from a YAML or JSON file instead of the flags above.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the grid to a YAML or JSON file and exit.
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}

impl Args {
    /// Build the grid these arguments describe.
    pub fn grid(&self) -> Result<GridSpec> {
        match &self.config {
            Some(path) => serialization::load_grid(path),
            None => Ok(GridSpec::from_cell_size(
                self.rows,
                self.cols,
                self.cell_width,
                self.cell_height,
            )?),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["trimap"]);
        let grid = args.grid().unwrap();
        assert_eq!(grid.rows(), 8);
        assert_eq!(grid.cols(), 8);
        assert_eq!(grid.cell_width(), 50.0);
        assert_eq!(grid.cell_height(), 40.0);
    }

    #[test]
    fn test_custom_dimensions() {
        let args = Args::parse_from(["trimap", "--rows", "2", "--cols", "3", "-w", "10", "-H", "20"]);
        let grid = args.grid().unwrap();
        assert_eq!(grid.total_width(), 30.0);
        assert_eq!(grid.total_height(), 40.0);
    }

    #[test]
    fn test_too_many_rows() {
        let args = Args::parse_from(["trimap", "--rows", "27"]);
        assert!(args.grid().is_err());
    }

    #[test]
    fn test_config_overrides_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.json");
        std::fs::write(&path, r#"{"rows": 1, "cols": 1, "width": 100, "height": 100}"#).unwrap();

        let args = Args::parse_from(["trimap", "--rows", "5", "--config", path.to_str().unwrap()]);
        let grid = args.grid().unwrap();
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cell_width(), 100.0);
    }
}
