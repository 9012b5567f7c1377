//! The [`Grid`] type — an immutable wall map with a start and a goal.
//!
//! Storage is a flat row-major `Vec<bool>`; [`Grid::index`] and
//! [`Grid::cell_at`] convert between cells and flat indices so that callers
//! can keep their own dense per-cell tables.

use crate::error::MazeError;
use crate::geom::{Action, Cell};

/// A rectangular maze: walls, one start cell and one goal cell.
///
/// A `Grid` is never mutated after construction and is cheap to share by
/// reference across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    walls: Vec<bool>,
    start: Cell,
    goal: Cell,
}

impl Grid {
    /// Build a grid from its parts.
    ///
    /// `walls` is row-major and must hold exactly `height * width` entries.
    /// Start and goal must be distinct, in bounds and open.
    pub fn new(
        height: usize,
        width: usize,
        walls: Vec<bool>,
        start: Cell,
        goal: Cell,
    ) -> Result<Self, MazeError> {
        if height == 0 || width == 0 {
            return Err(MazeError::InvalidGrid(format!(
                "dimensions must be positive, got {height}x{width}"
            )));
        }
        if walls.len() != height * width {
            return Err(MazeError::InvalidGrid(format!(
                "wall map has {} entries, expected {}",
                walls.len(),
                height * width
            )));
        }
        if start == goal {
            return Err(MazeError::InvalidGrid(format!(
                "start and goal coincide at {start}"
            )));
        }
        let grid = Self {
            height,
            width,
            walls,
            start,
            goal,
        };
        for (name, c) in [("start", start), ("goal", goal)] {
            if !grid.contains(c) {
                return Err(MazeError::InvalidGrid(format!(
                    "{name} {c} is out of bounds"
                )));
            }
            if grid.is_wall(c) {
                return Err(MazeError::InvalidGrid(format!("{name} {c} is on a wall")));
            }
        }
        Ok(grid)
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells (`height * width`).
    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Always `false`: a constructed grid has at least two cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Whether the cell lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.row < self.height && c.col < self.width
    }

    /// Flat row-major index of a cell, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Cell) -> Option<usize> {
        self.contains(c).then(|| c.row * self.width + c.col)
    }

    /// Inverse of [`index`](Self::index). `idx` must be `< len()`.
    #[inline]
    pub fn cell_at(&self, idx: usize) -> Cell {
        Cell::new(idx / self.width, idx % self.width)
    }

    /// Whether the cell is a wall. Out-of-bounds cells count as walls.
    #[inline]
    pub fn is_wall(&self, c: Cell) -> bool {
        self.index(c).is_none_or(|i| self.walls[i])
    }

    /// Number of non-wall cells.
    pub fn open_cells(&self) -> usize {
        self.walls.iter().filter(|&&w| !w).count()
    }

    /// Iterate over every cell in row-major order with its wall flag.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, bool)> + '_ {
        self.walls
            .iter()
            .enumerate()
            .map(|(i, &wall)| (self.cell_at(i), wall))
    }

    /// Open cells reachable from `c` in one move, in the fixed order
    /// up, down, left, right.
    pub fn neighbors(&self, c: Cell) -> impl Iterator<Item = (Action, Cell)> + '_ {
        Action::ALL.into_iter().filter_map(move |a| {
            let n = c.step(a)?;
            (!self.is_wall(n)).then_some((a, n))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(height: usize, width: usize) -> Grid {
        Grid::new(
            height,
            width,
            vec![false; height * width],
            Cell::ZERO,
            Cell::new(height - 1, width - 1),
        )
        .unwrap()
    }

    #[test]
    fn new_and_size() {
        let g = open(3, 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.open_cells(), 12);
        assert!(!g.is_empty());
    }

    #[test]
    fn rejects_bad_parts() {
        let start = Cell::ZERO;
        let goal = Cell::new(0, 1);
        assert!(Grid::new(0, 2, vec![], start, goal).is_err());
        assert!(Grid::new(1, 2, vec![false], start, goal).is_err());
        assert!(Grid::new(1, 2, vec![false; 2], start, start).is_err());
        assert!(Grid::new(1, 2, vec![false, true], start, goal).is_err());
        assert!(Grid::new(1, 2, vec![false; 2], start, Cell::new(3, 0)).is_err());
    }

    #[test]
    fn index_round_trip() {
        let g = open(3, 5);
        for i in 0..g.len() {
            assert_eq!(g.index(g.cell_at(i)), Some(i));
        }
        assert_eq!(g.index(Cell::new(3, 0)), None);
        assert_eq!(g.index(Cell::new(0, 5)), None);
    }

    #[test]
    fn neighbors_order_is_up_down_left_right() {
        let g = open(3, 3);
        let got: Vec<_> = g.neighbors(Cell::new(1, 1)).collect();
        assert_eq!(
            got,
            vec![
                (Action::Up, Cell::new(0, 1)),
                (Action::Down, Cell::new(2, 1)),
                (Action::Left, Cell::new(1, 0)),
                (Action::Right, Cell::new(1, 2)),
            ]
        );
    }

    #[test]
    fn neighbors_respect_bounds_and_walls() {
        // .#
        // ..
        let g = Grid::new(
            2,
            2,
            vec![false, true, false, false],
            Cell::ZERO,
            Cell::new(1, 1),
        )
        .unwrap();
        let got: Vec<_> = g.neighbors(Cell::ZERO).collect();
        assert_eq!(got, vec![(Action::Down, Cell::new(1, 0))]);
        let got: Vec<_> = g.neighbors(Cell::new(1, 1)).map(|(_, c)| c).collect();
        assert_eq!(got, vec![Cell::new(1, 0)]);
    }

    #[test]
    fn out_of_bounds_is_wall() {
        let g = open(2, 2);
        assert!(g.is_wall(Cell::new(2, 0)));
        assert!(!g.is_wall(Cell::new(1, 1)));
    }

    #[test]
    fn cells_iterates_row_major() {
        let g = open(2, 3);
        let cells: Vec<_> = g.cells().map(|(c, _)| c).collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[1], Cell::new(0, 1));
        assert_eq!(cells[3], Cell::new(1, 0));
    }
}
