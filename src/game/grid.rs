use rand::Rng;
use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A single addressable cell on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Grid geometry and wrap-around arithmetic.
///
/// The grid is a torus: stepping off one edge lands on the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpace {
    width: i32,
    height: i32,
}

impl GridSpace {
    /// Both dimensions must be positive; `GameConfig::validate` enforces this
    /// before a grid is built from configuration.
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width: width as i32,
            height: height as i32,
        }
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Step `cell` one unit in `direction`, wrapping around the edges
    pub fn wrap(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: (cell.x + dx).rem_euclid(self.width),
            y: (cell.y + dy).rem_euclid(self.height),
        }
    }

    /// Draw a cell uniformly from the whole grid
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell {
            x: rng.gen_range(0..self.width),
            y: rng.gen_range(0..self.height),
        }
    }

    /// Shortest signed offset from `from` to `to` along each axis, taking the
    /// wrap into account
    pub fn offset(&self, from: Cell, to: Cell) -> (i32, i32) {
        let shortest = |delta: i32, size: i32| {
            let d = delta.rem_euclid(size);
            if d > size / 2 { d - size } else { d }
        };
        (
            shortest(to.x - from.x, self.width),
            shortest(to.y - from.y, self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_wrap_interior() {
        let grid = GridSpace::new(32, 24);
        let cell = Cell::new(5, 5);
        assert_eq!(grid.wrap(cell, Direction::Right), Cell::new(6, 5));
        assert_eq!(grid.wrap(cell, Direction::Left), Cell::new(4, 5));
        assert_eq!(grid.wrap(cell, Direction::Down), Cell::new(5, 6));
        assert_eq!(grid.wrap(cell, Direction::Up), Cell::new(5, 4));
    }

    #[test]
    fn test_wrap_every_edge() {
        let grid = GridSpace::new(32, 24);

        for y in 0..24 {
            assert_eq!(grid.wrap(Cell::new(0, y), Direction::Left), Cell::new(31, y));
            assert_eq!(grid.wrap(Cell::new(31, y), Direction::Right), Cell::new(0, y));
        }
        for x in 0..32 {
            assert_eq!(grid.wrap(Cell::new(x, 0), Direction::Up), Cell::new(x, 23));
            assert_eq!(grid.wrap(Cell::new(x, 23), Direction::Down), Cell::new(x, 0));
        }
    }

    #[test]
    fn test_wrap_corners_stay_in_bounds() {
        let grid = GridSpace::new(3, 2);
        for x in 0..3 {
            for y in 0..2 {
                for dir in Direction::ALL {
                    assert!(grid.contains(grid.wrap(Cell::new(x, y), dir)));
                }
            }
        }
    }

    #[test]
    fn test_random_cell_in_bounds() {
        let grid = GridSpace::new(7, 3);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert!(grid.contains(grid.random_cell(&mut rng)));
        }
    }

    #[test]
    fn test_center() {
        assert_eq!(GridSpace::new(32, 24).center(), Cell::new(16, 12));
        assert_eq!(GridSpace::new(5, 5).center(), Cell::new(2, 2));
    }

    #[test]
    fn test_offset_prefers_wrapped_path() {
        let grid = GridSpace::new(10, 10);
        assert_eq!(grid.offset(Cell::new(1, 1), Cell::new(3, 1)), (2, 0));
        assert_eq!(grid.offset(Cell::new(0, 0), Cell::new(9, 0)), (-1, 0));
        assert_eq!(grid.offset(Cell::new(5, 8), Cell::new(5, 1)), (0, 3));
    }

    #[test]
    fn test_bounds_checking() {
        let grid = GridSpace::new(20, 20);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(19, 19)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(20, 0)));
        assert!(!grid.contains(Cell::new(0, 20)));
    }
}
