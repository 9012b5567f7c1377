//! Console rendering for mazes and search reports.
//!
//! Provides a [`Renderer`] that writes a [`Grid`] (optionally overlaid with
//! a [`Search`] report) to any [`io::Write`], either as plain characters or
//! with ANSI styling through crossterm.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, SetAttribute, SetForegroundColor},
};

use maze_core::{Cell, Grid};
use maze_search::{Search, SearchResult, Strategy};

/// What a single maze cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Start,
    Goal,
    Path,
    Explored,
    Open,
}

impl Tile {
    /// Character drawn for this tile.
    pub const fn glyph(self) -> char {
        match self {
            Tile::Wall => '█',
            Tile::Start => 'A',
            Tile::Goal => 'B',
            Tile::Path => '*',
            Tile::Explored => '·',
            Tile::Open => ' ',
        }
    }

    fn color(self) -> Option<Color> {
        match self {
            Tile::Wall => Some(Color::DarkGrey),
            Tile::Start => Some(Color::Red),
            Tile::Goal => Some(Color::Green),
            Tile::Path => Some(Color::Yellow),
            Tile::Explored => Some(Color::Blue),
            Tile::Open => None,
        }
    }

    fn attribute(self) -> Option<Attribute> {
        match self {
            Tile::Start | Tile::Goal => Some(Attribute::Bold),
            Tile::Explored => Some(Attribute::Dim),
            _ => None,
        }
    }
}

/// Writes mazes as text, one line per grid row.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    styled: bool,
    show_explored: bool,
}

impl Renderer {
    /// Plain characters, no escape sequences.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Characters coloured with ANSI escape sequences.
    pub fn styled() -> Self {
        Self {
            styled: true,
            ..Self::default()
        }
    }

    /// Configure whether explored cells off the path are marked.
    pub fn with_explored(mut self, show: bool) -> Self {
        self.show_explored = show;
        self
    }

    /// Classify every cell of `grid`, row-major.
    pub fn tiles(&self, grid: &Grid, search: Option<&Search>) -> Vec<Tile> {
        let mut on_path = vec![false; grid.len()];
        if let Some(sol) = search.and_then(|s| s.result.solution()) {
            for &c in &sol.cells {
                if let Some(i) = grid.index(c) {
                    on_path[i] = true;
                }
            }
        }
        let explored = |c: Cell| {
            self.show_explored && search.is_some_and(|s| s.explored.contains(c))
        };

        grid.cells()
            .enumerate()
            .map(|(i, (c, wall))| {
                if wall {
                    Tile::Wall
                } else if c == grid.start() {
                    Tile::Start
                } else if c == grid.goal() {
                    Tile::Goal
                } else if on_path[i] {
                    Tile::Path
                } else if explored(c) {
                    Tile::Explored
                } else {
                    Tile::Open
                }
            })
            .collect()
    }

    /// Write `grid`, with `search` overlaid if given.
    pub fn render(
        &self,
        w: &mut impl Write,
        grid: &Grid,
        search: Option<&Search>,
    ) -> io::Result<()> {
        let tiles = self.tiles(grid, search);
        for row in tiles.chunks(grid.width()) {
            for &tile in row {
                self.put(w, tile)?;
            }
            writeln!(w)?;
        }
        w.flush()
    }

    fn put(&self, w: &mut impl Write, tile: Tile) -> io::Result<()> {
        if !self.styled {
            return write!(w, "{}", tile.glyph());
        }
        let color = tile.color();
        let attr = tile.attribute();
        if let Some(c) = color {
            queue!(w, SetForegroundColor(c))?;
        }
        if let Some(a) = attr {
            queue!(w, SetAttribute(a))?;
        }
        write!(w, "{}", tile.glyph())?;
        if color.is_some() || attr.is_some() {
            queue!(w, SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

/// Plain rendering collected into a `String`.
pub fn render_to_string(grid: &Grid, search: Option<&Search>, show_explored: bool) -> String {
    let mut buf = Vec::new();
    Renderer::plain()
        .with_explored(show_explored)
        .render(&mut buf, grid, search)
        .expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

/// One-line report of a search.
pub fn summary(strategy: Strategy, search: &Search) -> String {
    match &search.result {
        SearchResult::Success(sol) => format!(
            "{strategy}: {} states explored, path of {} moves",
            search.explored_count,
            sol.len()
        ),
        SearchResult::Failure(e) => {
            format!("{strategy}: {} states explored, {e}", search.explored_count)
        }
    }
}
