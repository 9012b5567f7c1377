//! Building a [`Grid`] from its text description.
//!
//! The format is line based:
//!
//! - `A` marks the start and `B` the goal; each must appear exactly once,
//! - a space is an open cell,
//! - any other character is a wall,
//! - rows shorter than the longest one are padded with open cells.

use std::path::Path;
use std::str::FromStr;

use crate::error::MazeError;
use crate::geom::Cell;
use crate::grid::Grid;

const START: char = 'A';
const GOAL: char = 'B';
const OPEN: char = ' ';

impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(MazeError::Empty);
        }
        let starts = s.matches(START).count();
        if starts != 1 {
            return Err(MazeError::StartCount(starts));
        }
        let goals = s.matches(GOAL).count();
        if goals != 1 {
            return Err(MazeError::GoalCount(goals));
        }

        let lines: Vec<Vec<char>> = s.lines().map(|l| l.chars().collect()).collect();
        let height = lines.len();
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);

        let mut walls = Vec::with_capacity(height * width);
        let mut start = Cell::ZERO;
        let mut goal = Cell::ZERO;
        for (row, line) in lines.iter().enumerate() {
            for col in 0..width {
                let wall = match line.get(col) {
                    Some(&START) => {
                        start = Cell::new(row, col);
                        false
                    }
                    Some(&GOAL) => {
                        goal = Cell::new(row, col);
                        false
                    }
                    Some(&OPEN) | None => false,
                    Some(_) => true,
                };
                walls.push(wall);
            }
        }

        log::debug!("parsed {height}x{width} maze, start {start}, goal {goal}");
        Grid::new(height, width, walls, start, goal)
    }
}

impl Grid {
    /// Read and parse a maze file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_markers_and_walls() {
        let g: Grid = "A  #\n# ##\n   B".parse().unwrap();
        assert_eq!(g.height(), 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.start(), Cell::new(0, 0));
        assert_eq!(g.goal(), Cell::new(2, 3));
        assert!(g.is_wall(Cell::new(0, 3)));
        assert!(g.is_wall(Cell::new(1, 0)));
        assert!(!g.is_wall(Cell::new(1, 1)));
        assert_eq!(g.open_cells(), 8);
    }

    #[test]
    fn short_rows_are_padded_open() {
        let g: Grid = "A####\n#\n####B".parse().unwrap();
        assert_eq!(g.width(), 5);
        assert!(g.is_wall(Cell::new(1, 0)));
        for col in 1..5 {
            assert!(!g.is_wall(Cell::new(1, col)));
        }
    }

    #[test]
    fn any_other_character_is_a_wall() {
        let g: Grid = "A.x\n+=B".parse().unwrap();
        assert!(g.is_wall(Cell::new(0, 1)));
        assert!(g.is_wall(Cell::new(0, 2)));
        assert!(g.is_wall(Cell::new(1, 0)));
        assert!(g.is_wall(Cell::new(1, 1)));
    }

    #[test]
    fn crlf_and_trailing_newline() {
        let g: Grid = "A #\r\n  B\r\n".parse().unwrap();
        assert_eq!(g.height(), 2);
        assert_eq!(g.width(), 3);
        assert_eq!(g.goal(), Cell::new(1, 2));
    }

    #[test]
    fn marker_counts_are_checked() {
        assert!(matches!(
            "  B".parse::<Grid>(),
            Err(MazeError::StartCount(0))
        ));
        assert!(matches!(
            "AA B".parse::<Grid>(),
            Err(MazeError::StartCount(2))
        ));
        assert!(matches!(
            "A  ".parse::<Grid>(),
            Err(MazeError::GoalCount(0))
        ));
        assert!(matches!(
            "A\nB\nB".parse::<Grid>(),
            Err(MazeError::GoalCount(2))
        ));
        assert!(matches!("".parse::<Grid>(), Err(MazeError::Empty)));
    }

    #[test]
    fn from_missing_file_is_io_error() {
        let err = Grid::from_file("/nonexistent/maze.txt").unwrap_err();
        assert!(matches!(err, MazeError::Io(_)));
    }
}
