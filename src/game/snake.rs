use rand::Rng;

use super::direction::Direction;
use super::grid::{Cell, GridSpace};

/// The snake: an ordered body on the grid, head first.
///
/// Growth is lazy. `grow` only raises the target length; the body catches up
/// on the following `advance` by keeping its tail for one extra tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Cell>,
    heading: Direction,
    pending_heading: Option<Direction>,
    target_length: usize,
    last_vacated: Option<Cell>,
    initial_cell: Cell,
}

impl Snake {
    /// Create a length-1 snake at `initial_cell`
    pub fn new(initial_cell: Cell, heading: Direction) -> Self {
        Self {
            body: vec![initial_cell],
            heading,
            pending_heading: None,
            target_length: 1,
            last_vacated: None,
            initial_cell,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Occupied cells, head first
    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn pending_heading(&self) -> Option<Direction> {
        self.pending_heading
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Cell freed by the last `advance`, if the tail moved
    pub fn last_vacated(&self) -> Option<Cell> {
        self.last_vacated
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Request a heading for the next tick. A reversal of the current heading
    /// is dropped; otherwise the latest request replaces any earlier one.
    pub fn set_pending_heading(&mut self, direction: Direction) {
        if !self.heading.is_opposite(direction) {
            self.pending_heading = Some(direction);
        }
    }

    /// Move one cell along the heading
    pub fn advance(&mut self, grid: &GridSpace) {
        if let Some(heading) = self.pending_heading.take() {
            self.heading = heading;
        }

        let new_head = grid.wrap(self.head(), self.heading);
        self.body.insert(0, new_head);

        self.last_vacated = if self.body.len() > self.target_length {
            self.body.pop()
        } else {
            None
        };
    }

    /// True if the head sits on any segment from index 2 onwards.
    ///
    /// Index 1 is skipped: without reversal the head can never land on it.
    pub fn self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(2).any(|&cell| cell == head)
    }

    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Back to a single cell at the starting point with a random heading
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.target_length = 1;
        self.body = vec![self.initial_cell];
        self.heading = Direction::random(rng);
        self.pending_heading = None;
        self.last_vacated = None;
    }
}
