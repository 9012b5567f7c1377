//! Graph search over grid mazes.
//!
//! One generic loop ([`Searcher`]) runs every strategy; only the
//! [`Frontier`] policy changes:
//!
//! | Entry point | Frontier | Shortest path? |
//! |---|---|---|
//! | [`solve_dfs`] | [`StackFrontier`] (LIFO) | no |
//! | [`solve_bfs`] | [`QueueFrontier`] (FIFO) | yes |
//! | [`solve_astar`] | [`PriorityFrontier`] (`path_cost + manhattan`) | yes |
//!
//! Every call owns its frontier, node arena and explored set and returns a
//! [`Search`] report, so several searches may share one [`Grid`] at once
//! (see [`solve_all`]).

mod distance;
mod engine;
mod explored;
mod frontier;
mod node;
mod result;
mod strategy;

pub use distance::manhattan;
pub use engine::{CancelToken, Search, SearchState, Searcher, search};
pub use explored::ExploredSet;
pub use frontier::{EmptyFrontier, Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
pub use node::{NodeArena, NodeId, SearchNode};
pub use result::{NoSolution, SearchResult, Solution};
pub use strategy::{Strategy, UnknownStrategy};

use maze_core::Grid;

/// Depth-first search.
pub fn solve_dfs(grid: &Grid) -> Search {
    Strategy::DepthFirst.solve(grid)
}

/// Breadth-first search.
pub fn solve_bfs(grid: &Grid) -> Search {
    Strategy::BreadthFirst.solve(grid)
}

/// A\* search with the Manhattan heuristic.
pub fn solve_astar(grid: &Grid) -> Search {
    Strategy::AStar.solve(grid)
}

/// Run every strategy concurrently on `grid`, one scoped thread each.
///
/// Reports come back in [`Strategy::ALL`] order.
pub fn solve_all(grid: &Grid) -> Vec<(Strategy, Search)> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = Strategy::ALL
            .into_iter()
            .map(|s| (s, scope.spawn(move || s.solve(grid))))
            .collect();
        handles
            .into_iter()
            .map(|(s, h)| match h.join() {
                Ok(report) => (s, report),
                Err(payload) => {
                    log::warn!("{s} worker panicked");
                    std::panic::resume_unwind(payload)
                }
            })
            .collect()
    })
}
