use rand::Rng;

use super::grid::{Cell, GridSpace};

/// The food item. Only `relocate` moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move to a random cell outside `excluded`.
    ///
    /// `excluded` must leave at least one grid cell free, otherwise this never
    /// returns.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        grid: &GridSpace,
        rng: &mut R,
        excluded: &[Cell],
    ) {
        debug_assert!(
            excluded.len() < grid.cell_count(),
            "cannot place food on a full grid"
        );

        loop {
            let candidate = grid.random_cell(rng);
            if !excluded.contains(&candidate) {
                self.position = candidate;
                return;
            }
        }
    }
}
