// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Grid configuration serialization and deserialization.
//!
//! This module handles exporting and importing grid dimensions in YAML
//! and JSON formats. The format is picked from the file extension.

use crate::models::grid::GridSpec;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk grid description. Widths and heights are grid totals in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub width: f64,
    pub height: f64,
}

impl GridConfig {
    /// Validate and build the grid.
    pub fn to_grid(&self) -> Result<GridSpec> {
        let grid = GridSpec::new(self.rows, self.cols, self.width, self.height)?;
        Ok(grid)
    }
}

impl From<&GridSpec> for GridConfig {
    fn from(grid: &GridSpec) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            width: grid.total_width(),
            height: grid.total_height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

fn format_for(path: &Path) -> Result<Format> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        other => bail!("Unsupported file extension: {:?}", other),
    }
}

/// Export grid configuration to YAML format.
pub fn export_yaml(config: &GridConfig, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export grid configuration to JSON format.
pub fn export_json(config: &GridConfig, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import grid configuration from YAML format.
pub fn import_yaml(path: &Path) -> Result<GridConfig> {
    let yaml = std::fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&yaml)?;
    Ok(config)
}

/// Import grid configuration from JSON format.
pub fn import_json(path: &Path) -> Result<GridConfig> {
    let json = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&json)?;
    Ok(config)
}

/// Load and validate a grid from a `.yaml`/`.yml`/`.json` file.
pub fn load_grid(path: &Path) -> Result<GridSpec> {
    let config = match format_for(path)? {
        Format::Yaml => import_yaml(path),
        Format::Json => import_json(path),
    }
    .with_context(|| format!("Failed to read grid config {}", path.display()))?;

    let grid = config
        .to_grid()
        .with_context(|| format!("Invalid grid in {}", path.display()))?;
    log::info!(
        "Loaded grid {}x{} ({}x{} px) from {}",
        grid.rows(),
        grid.cols(),
        grid.total_width(),
        grid.total_height(),
        path.display()
    );
    Ok(grid)
}

/// Write a grid to a `.yaml`/`.yml`/`.json` file.
pub fn save_grid(grid: &GridSpec, path: &Path) -> Result<()> {
    let config = GridConfig::from(grid);
    match format_for(path)? {
        Format::Yaml => export_yaml(&config, path),
        Format::Json => export_json(&config, path),
    }
    .with_context(|| format!("Failed to write grid config {}", path.display()))?;
    log::info!("Exported grid to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TriangleError;
    use crate::models::grid::make_grid;

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.yaml");
        let grid = make_grid(8, 8, 400.0, 320.0).unwrap();

        save_grid(&grid, &path).unwrap();
        assert_eq!(load_grid(&path).unwrap(), grid);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.JSON");
        let grid = make_grid(3, 5, 150.0, 90.0).unwrap();

        save_grid(&grid, &path).unwrap();
        assert_eq!(load_grid(&path).unwrap(), grid);
    }

    #[test]
    fn test_import_handwritten_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.yml");
        std::fs::write(&path, "rows: 2\ncols: 2\nwidth: 150\nheight: 100\n").unwrap();

        let grid = load_grid(&path).unwrap();
        assert_eq!(grid.cell_width(), 75.0);
        assert_eq!(grid.cell_height(), 50.0);
    }

    #[test]
    fn test_invalid_grid_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.json");
        std::fs::write(&path, r#"{"rows": 30, "cols": 2, "width": 10, "height": 10}"#).unwrap();

        let err = load_grid(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TriangleError>(),
            Some(TriangleError::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.toml");
        let grid = make_grid(1, 1, 10.0, 10.0).unwrap();
        assert!(save_grid(&grid, &path).is_err());
        assert!(load_grid(&path).is_err());
    }
}
