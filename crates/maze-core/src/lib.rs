//! **maze-core** — the grid model searched by `maze-search`.
//!
//! This crate provides the foundational types: [`Cell`] positions, the four
//! cardinal [`Action`]s, the immutable [`Grid`] wall map with its start and
//! goal, and the text parser that builds a grid from a maze description.

pub mod error;
pub mod geom;
pub mod grid;
mod parse;

pub use error::MazeError;
pub use geom::{Action, Cell};
pub use grid::Grid;
