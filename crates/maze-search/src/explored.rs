//! Dense per-cell record of expanded states.

use maze_core::{Cell, Grid};

/// Cells that have been expanded during one search.
///
/// Dense bitmap over the grid rectangle; iteration is row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploredSet {
    width: usize,
    bits: Vec<bool>,
    len: usize,
}

impl ExploredSet {
    /// An empty set sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            bits: vec![false; grid.len()],
            len: 0,
        }
    }

    #[inline]
    fn index(&self, c: Cell) -> Option<usize> {
        let i = c.row.checked_mul(self.width)?.checked_add(c.col)?;
        (c.col < self.width && i < self.bits.len()).then_some(i)
    }

    /// Add a cell. Returns `false` if it was already present or lies outside
    /// the grid.
    pub fn insert(&mut self, c: Cell) -> bool {
        let Some(i) = self.index(c) else {
            return false;
        };
        if self.bits[i] {
            return false;
        }
        self.bits[i] = true;
        self.len += 1;
        true
    }

    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.index(c).is_some_and(|i| self.bits[i])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Explored cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(i, _)| Cell::new(i / self.width, i % self.width))
    }
}
