//! Geometry primitives: [`Cell`] and [`Action`].
//!
//! Coordinates are `(row, col)` with rows growing down and columns growing
//! right, matching the line/character layout of a maze text file.

use std::fmt;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid position. Ordered row-major (row first, then column).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell reached by taking `action` from `self`, or `None` if the
    /// move would leave the non-negative quadrant.
    ///
    /// Upper bounds are the grid's concern, see
    /// [`Grid::neighbors`](crate::Grid::neighbors).
    #[inline]
    pub fn step(self, action: Action) -> Option<Self> {
        let (dr, dc) = action.delta();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// Whether `other` is exactly one cardinal move away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// One of the four cardinal moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// All actions in neighbor enumeration order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// `(row, col)` offset applied by this move.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    /// Lowercase name (`"up"`, `"down"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_applies_delta() {
        let c = Cell::new(2, 3);
        assert_eq!(c.step(Action::Up), Some(Cell::new(1, 3)));
        assert_eq!(c.step(Action::Down), Some(Cell::new(3, 3)));
        assert_eq!(c.step(Action::Left), Some(Cell::new(2, 2)));
        assert_eq!(c.step(Action::Right), Some(Cell::new(2, 4)));
    }

    #[test]
    fn step_off_origin_is_none() {
        assert_eq!(Cell::ZERO.step(Action::Up), None);
        assert_eq!(Cell::ZERO.step(Action::Left), None);
        assert_eq!(Cell::ZERO.step(Action::Right), Some(Cell::new(0, 1)));
    }

    #[test]
    fn adjacency() {
        let c = Cell::new(1, 1);
        for a in Action::ALL {
            assert!(c.is_adjacent(c.step(a).unwrap()));
        }
        assert!(c.is_adjacent(Cell::new(0, 1)));
        assert!(c.is_adjacent(Cell::new(1, 2)));
        assert!(!c.is_adjacent(Cell::new(2, 2)));
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(
            cells,
            vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]
        );
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(2, 3).to_string(), "(2, 3)");
        assert_eq!(Action::Right.to_string(), "right");
    }
}
