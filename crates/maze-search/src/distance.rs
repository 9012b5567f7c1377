//! Grid distance used by the A* heuristic.

use maze_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent for unit-cost 4-way movement, which makes it
/// the A* heuristic.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_l1() {
        let a = Cell::new(0, 0);
        let b = Cell::new(2, 3);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(manhattan(b, a), 5);
        assert_eq!(manhattan(a, a), 0);
    }
}
