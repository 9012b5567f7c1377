//! Error type for grid construction and parsing.

use std::fmt;
use std::io;

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Debug)]
pub enum MazeError {
    /// The text contained no lines.
    Empty,
    /// The text did not contain exactly one start marker `A`.
    StartCount(usize),
    /// The text did not contain exactly one goal marker `B`.
    GoalCount(usize),
    /// The grid parts violate a structural invariant.
    InvalidGrid(String),
    /// The maze file could not be read.
    Io(io::Error),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("maze is empty"),
            Self::StartCount(n) => {
                write!(f, "maze must have exactly one start point, found {n}")
            }
            Self::GoalCount(n) => write!(f, "maze must have exactly one goal, found {n}"),
            Self::InvalidGrid(msg) => write!(f, "invalid grid: {msg}"),
            Self::Io(e) => write!(f, "cannot read maze: {e}"),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MazeError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
