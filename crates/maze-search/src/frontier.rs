//! Frontier policies: stack (DFS), queue (BFS) and priority (A\*).

use std::collections::{BinaryHeap, VecDeque};
use std::fmt;

use maze_core::Cell;

use crate::distance::manhattan;
use crate::node::{NodeId, SearchNode};

/// `remove` was called on an empty frontier.
///
/// The search loop checks [`Frontier::is_empty`] first, so this only
/// surfaces through direct misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyFrontier;

impl fmt::Display for EmptyFrontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("empty frontier")
    }
}

impl std::error::Error for EmptyFrontier {}

/// Container of discovered but not yet expanded nodes.
pub trait Frontier {
    /// Insert the node stored at `id`.
    fn add(&mut self, id: NodeId, node: &SearchNode);

    /// Take the next node according to the policy.
    fn remove(&mut self) -> Result<NodeId, EmptyFrontier>;

    /// Whether any pending node has `state`. Linear in the frontier size.
    fn contains_state(&self, state: Cell) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the search loop should skip neighbors already pending in this
    /// frontier. Policies that return `false` accept duplicate states and
    /// rely on the explored set to drop stale copies.
    fn dedups(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Stack
// ---------------------------------------------------------------------------

/// Last in, first out.
#[derive(Debug, Default)]
pub struct StackFrontier {
    items: Vec<(NodeId, Cell)>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, id: NodeId, node: &SearchNode) {
        self.items.push((id, node.state));
    }

    fn remove(&mut self) -> Result<NodeId, EmptyFrontier> {
        self.items.pop().map(|(id, _)| id).ok_or(EmptyFrontier)
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.items.iter().any(|&(_, s)| s == state)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

// ---------------------------------------------------------------------------
// Queue
// ---------------------------------------------------------------------------

/// First in, first out.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    items: VecDeque<(NodeId, Cell)>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, id: NodeId, node: &SearchNode) {
        self.items.push_back((id, node.state));
    }

    fn remove(&mut self) -> Result<NodeId, EmptyFrontier> {
        self.items
            .pop_front()
            .map(|(id, _)| id)
            .ok_or(EmptyFrontier)
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.items.iter().any(|&(_, s)| s == state)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Heap entry ordered by `(f, seq)` so that `BinaryHeap` (a max-heap) pops
/// the lowest estimated total cost first, oldest insertion on ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    f: usize,
    seq: u64,
    id: NodeId,
    state: Cell,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Lowest `path_cost + manhattan(state, goal)` first.
#[derive(Debug)]
pub struct PriorityFrontier {
    goal: Cell,
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl PriorityFrontier {
    /// Create a frontier estimating remaining cost towards `goal`.
    pub fn new(goal: Cell) -> Self {
        Self {
            goal,
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Estimated total cost of a node through this frontier's goal.
    #[inline]
    pub fn total_cost(&self, node: &SearchNode) -> usize {
        node.path_cost + manhattan(node.state, self.goal)
    }
}

impl Frontier for PriorityFrontier {
    fn add(&mut self, id: NodeId, node: &SearchNode) {
        let f = self.total_cost(node);
        self.heap.push(Entry {
            f,
            seq: self.seq,
            id,
            state: node.state,
        });
        self.seq += 1;
    }

    fn remove(&mut self) -> Result<NodeId, EmptyFrontier> {
        self.heap.pop().map(|e| e.id).ok_or(EmptyFrontier)
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.heap.iter().any(|e| e.state == state)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn dedups(&self) -> bool {
        false
    }
}
