//! The generic search loop shared by every strategy.
//!
//! A [`Searcher`] grows a tree of [`SearchNode`]s from the start cell using
//! any [`Frontier`] policy. The policy alone decides which strategy runs:
//! a stack gives depth-first, a queue breadth-first, and a priority frontier
//! keyed by `path_cost + manhattan` gives A\*.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use maze_core::Grid;

use crate::explored::ExploredSet;
use crate::frontier::Frontier;
use crate::node::{NodeArena, SearchNode};
use crate::result::{NoSolution, SearchResult};

/// Report of a finished search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    pub result: SearchResult,
    /// Cells whose neighbors were examined.
    pub explored: ExploredSet,
    /// Number of nodes taken from the frontier and processed, the goal
    /// included. Stale duplicates dropped by the explored check do not count.
    pub explored_count: usize,
}

/// Where a [`Searcher`] is in its run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Done(SearchResult),
}

impl SearchState {
    pub fn is_done(&self) -> bool {
        !matches!(self, SearchState::Running)
    }
}

/// Shared flag for stopping a search from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// One in-progress search over a borrowed grid.
pub struct Searcher<'g, F> {
    grid: &'g Grid,
    frontier: F,
    arena: NodeArena,
    explored: ExploredSet,
    explored_count: usize,
    state: SearchState,
}

impl<'g, F: Frontier> Searcher<'g, F> {
    /// Start a search: `frontier` receives the root node at the grid's start.
    pub fn new(grid: &'g Grid, mut frontier: F) -> Self {
        let mut arena = NodeArena::new();
        let root = SearchNode::root(grid.start());
        let id = arena.push(root);
        frontier.add(id, &root);
        Self {
            grid,
            frontier,
            arena,
            explored: ExploredSet::new(grid),
            explored_count: 0,
            state: SearchState::Running,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Expanded cells so far.
    pub fn explored(&self) -> &ExploredSet {
        &self.explored
    }

    pub fn explored_count(&self) -> usize {
        self.explored_count
    }

    /// Process one frontier entry.
    pub fn step(&mut self) -> &SearchState {
        if self.state.is_done() {
            return &self.state;
        }
        if self.frontier.is_empty() {
            self.state = SearchState::Done(SearchResult::Failure(NoSolution));
            return &self.state;
        }
        let id = match self.frontier.remove() {
            Ok(id) => id,
            Err(e) => unreachable!("{e} after a non-empty check"),
        };
        let node = *self.arena.get(id);

        // Stale copy from a non-deduplicating frontier.
        if self.explored.contains(node.state) {
            return &self.state;
        }
        self.explored_count += 1;
        log::trace!(
            "expand {} cost {} ({} pending)",
            node.state,
            node.path_cost,
            self.frontier.len()
        );

        if node.state == self.grid.goal() {
            let solution = self.arena.path_to(id);
            self.state = SearchState::Done(SearchResult::Success(solution));
            return &self.state;
        }

        self.explored.insert(node.state);
        let grid = self.grid;
        for (action, state) in grid.neighbors(node.state) {
            if self.explored.contains(state) {
                continue;
            }
            if self.frontier.dedups() && self.frontier.contains_state(state) {
                continue;
            }
            let child = SearchNode::child(id, &node, action, state);
            let cid = self.arena.push(child);
            self.frontier.add(cid, &child);
        }
        &self.state
    }

    /// Run to completion.
    pub fn finish(mut self) -> Search {
        while !self.step().is_done() {}
        self.into_search()
    }

    /// Run to completion unless `cancel` is raised first, checked once per
    /// iteration. Returns `None` when cancelled.
    pub fn finish_with(mut self, cancel: &CancelToken) -> Option<Search> {
        loop {
            if cancel.is_cancelled() {
                log::debug!("search cancelled after {} expansions", self.explored_count);
                return None;
            }
            if self.step().is_done() {
                return Some(self.into_search());
            }
        }
    }

    fn into_search(self) -> Search {
        let result = match self.state {
            SearchState::Done(result) => result,
            SearchState::Running => unreachable!("search report taken while running"),
        };
        Search {
            result,
            explored: self.explored,
            explored_count: self.explored_count,
        }
    }
}

/// Run a full search over `grid` with the given frontier policy.
pub fn search<F: Frontier>(grid: &Grid, frontier: F) -> Search {
    Searcher::new(grid, frontier).finish()
}
