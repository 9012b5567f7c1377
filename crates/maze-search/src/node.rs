//! Search nodes and the arena that owns them.
//!
//! Parent links are [`NodeId`] handles into a [`NodeArena`] rather than
//! references, so the search tree never forms ownership cycles and path
//! reconstruction is plain index chasing.

use maze_core::{Action, Cell};

use crate::result::Solution;

/// Handle to a node stored in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// An immutable record in the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub state: Cell,
    /// `None` only for the root.
    pub parent: Option<NodeId>,
    /// Move that produced this node from its parent. `None` only for the root.
    pub action: Option<Action>,
    /// Number of moves from the start.
    pub path_cost: usize,
}

impl SearchNode {
    /// The root node at `start`.
    pub fn root(start: Cell) -> Self {
        Self {
            state: start,
            parent: None,
            action: None,
            path_cost: 0,
        }
    }

    /// A child reached from `parent` (stored at `parent_id`) by `action`.
    pub fn child(parent_id: NodeId, parent: &SearchNode, action: Action, state: Cell) -> Self {
        debug_assert!(
            parent.state.is_adjacent(state),
            "{state} is not next to {}",
            parent.state
        );
        Self {
            state,
            parent: Some(parent_id),
            action: Some(action),
            path_cost: parent.path_cost + 1,
        }
    }
}

/// Append-only node storage for one search call.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and return its handle.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Node behind a handle issued by this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parent links from `id` back to the root and return the moves and
    /// cells in start-to-`id` order. The root's own cell is not included.
    pub fn path_to(&self, id: NodeId) -> Solution {
        let mut actions = Vec::new();
        let mut cells = Vec::new();
        let mut node = self.get(id);
        while let (Some(parent), Some(action)) = (node.parent, node.action) {
            actions.push(action);
            cells.push(node.state);
            node = self.get(parent);
        }
        actions.reverse();
        cells.reverse();
        Solution { actions, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_increments_cost() {
        let mut arena = NodeArena::new();
        let root = SearchNode::root(Cell::ZERO);
        let rid = arena.push(root);
        let c = SearchNode::child(rid, &root, Action::Right, Cell::new(0, 1));
        assert_eq!(c.path_cost, 1);
        assert_eq!(c.parent, Some(rid));
        assert_eq!(c.action, Some(Action::Right));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not next to")]
    fn child_must_be_adjacent_to_parent() {
        let root = SearchNode::root(Cell::ZERO);
        SearchNode::child(NodeId(0), &root, Action::Down, Cell::new(2, 0));
    }

    #[test]
    fn path_to_root_is_empty() {
        let mut arena = NodeArena::new();
        let rid = arena.push(SearchNode::root(Cell::new(3, 3)));
        let s = arena.path_to(rid);
        assert!(s.is_empty());
        assert!(s.cells.is_empty());
    }

    #[test]
    fn path_to_walks_parents_in_order() {
        let mut arena = NodeArena::new();
        let root = SearchNode::root(Cell::ZERO);
        let mut id = arena.push(root);
        let moves = [
            (Action::Right, Cell::new(0, 1)),
            (Action::Down, Cell::new(1, 1)),
            (Action::Down, Cell::new(2, 1)),
        ];
        for (a, c) in moves {
            let parent = *arena.get(id);
            id = arena.push(SearchNode::child(id, &parent, a, c));
        }
        // A sibling branch that must not leak into the path.
        let root_copy = *arena.get(NodeId(0));
        arena.push(SearchNode::child(NodeId(0), &root_copy, Action::Down, Cell::new(1, 0)));

        let s = arena.path_to(id);
        assert_eq!(s.actions, vec![Action::Right, Action::Down, Action::Down]);
        assert_eq!(s.cells, vec![Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)]);
        assert_eq!(arena.len(), 5);
    }
}
