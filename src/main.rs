// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Triangle Mapper console app
//!
//! Reads operation choices from stdin and maps pixel points to triangle
//! designators, or designators to triangle vertices, on a fixed grid.

mod app;
mod cli;

use anyhow::Result;
use app::Session;
use trimap::io::serialization;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = cli::parse();
    let grid = args.grid()?;

    if let Some(path) = &args.export {
        serialization::save_grid(&grid, path)?;
        return Ok(());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(grid, stdin.lock(), stdout.lock());
    session.print_banner()?;
    session.run()?;

    Ok(())
}
