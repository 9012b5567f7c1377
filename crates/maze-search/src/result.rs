//! Search outcomes: a solution path or no solution.

use std::fmt;

use maze_core::{Action, Cell};

/// A path from start to goal.
///
/// `actions[i]` is the move that reaches `cells[i]`. Both sequences exclude
/// the start cell and end at the goal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub actions: Vec<Action>,
    pub cells: Vec<Cell>,
}

impl Solution {
    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// The goal is unreachable from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoSolution;

impl fmt::Display for NoSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no solution")
    }
}

/// Outcome of one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchResult {
    Success(Solution),
    Failure(NoSolution),
}

impl SearchResult {
    /// The solution, if the search succeeded.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Success(s) => Some(s),
            Self::Failure(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
