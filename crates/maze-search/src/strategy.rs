//! Named search strategies and their parsing.

use std::fmt;
use std::str::FromStr;

use maze_core::Grid;

use crate::engine::{CancelToken, Search, Searcher, search};
use crate::frontier::{PriorityFrontier, QueueFrontier, StackFrontier};
use crate::result::SearchResult;

/// Which frontier policy drives the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Stack frontier. Finds some path, not necessarily a shortest one.
    DepthFirst,
    /// Queue frontier. Finds a shortest path.
    BreadthFirst,
    /// Priority frontier on `path_cost + manhattan`. Finds a shortest path,
    /// usually expanding fewer cells than breadth-first.
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::DepthFirst, Strategy::BreadthFirst, Strategy::AStar];

    /// Short lowercase name: `dfs`, `bfs` or `astar`.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::AStar => "astar",
        }
    }

    /// Search `grid` with this strategy.
    pub fn solve(self, grid: &Grid) -> Search {
        let report = match self {
            Strategy::DepthFirst => search(grid, StackFrontier::new()),
            Strategy::BreadthFirst => search(grid, QueueFrontier::new()),
            Strategy::AStar => search(grid, PriorityFrontier::new(grid.goal())),
        };
        log_report(self, &report);
        report
    }

    /// Like [`solve`](Self::solve), but stops early with `None` once `cancel`
    /// is raised.
    pub fn solve_with(self, grid: &Grid, cancel: &CancelToken) -> Option<Search> {
        let report = match self {
            Strategy::DepthFirst => Searcher::new(grid, StackFrontier::new()).finish_with(cancel),
            Strategy::BreadthFirst => Searcher::new(grid, QueueFrontier::new()).finish_with(cancel),
            Strategy::AStar => {
                Searcher::new(grid, PriorityFrontier::new(grid.goal())).finish_with(cancel)
            }
        }?;
        log_report(self, &report);
        Some(report)
    }
}

fn log_report(strategy: Strategy, report: &Search) {
    match &report.result {
        SearchResult::Success(s) => log::debug!(
            "{strategy}: path of {} moves, {} states explored",
            s.len(),
            report.explored_count
        ),
        SearchResult::Failure(e) => {
            log::debug!("{strategy}: {e}, {} states explored", report.explored_count)
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy name that [`Strategy::from_str`] does not recognise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown strategy \u{201c}{}\u{201d} (expected dfs, bfs or astar)", self.0)
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(Strategy::DepthFirst),
            "bfs" => Ok(Strategy::BreadthFirst),
            "astar" | "a*" => Ok(Strategy::AStar),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}
