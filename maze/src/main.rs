//! `maze` — solve a text maze and print the result.
//!
//! Run: cargo run --bin maze -- --strategy all maze/mazes/rooms.txt

mod config;

use std::io::{self, Write};

use maze_core::Grid;
use maze_search::solve_all;
use maze_term::{Renderer, summary};

use config::{ArgsError, Config, Selection, USAGE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let no_color = std::env::var_os("NO_COLOR").is_some();
    let config = match Config::from_args(std::env::args().skip(1), no_color) {
        Ok(c) => c,
        Err(ArgsError::Help) => {
            print!("{USAGE}");
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    run(&config)
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid::from_file(&config.path)?;
    log::info!(
        "loaded {} ({}x{}, {} open cells)",
        config.path.display(),
        grid.height(),
        grid.width(),
        grid.open_cells()
    );

    let renderer = if config.styled {
        Renderer::styled()
    } else {
        Renderer::plain()
    }
    .with_explored(config.show_explored);

    let reports = match config.selection {
        Selection::One(s) => vec![(s, s.solve(&grid))],
        Selection::All => solve_all(&grid),
    };

    let mut out = io::stdout().lock();
    writeln!(out, "Maze:")?;
    renderer.render(&mut out, &grid, None)?;
    for (strategy, report) in &reports {
        writeln!(out)?;
        writeln!(out, "{}", summary(*strategy, report))?;
        renderer.render(&mut out, &grid, Some(report))?;
    }
    Ok(())
}
