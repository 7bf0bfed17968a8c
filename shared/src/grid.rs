use crate::grid::CellState::{Alive, Dead};
use rand::Rng;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellState {
    Dead,
    Alive,
}

impl CellState {
    pub fn toggled(self) -> Self {
        match self {
            Dead => Alive,
            Alive => Dead,
        }
    }
}

/// A dense height x width grid of cell states with wraparound topology.
///
/// Coordinates passed to `get`/`set` must be in range; indexing panics
/// otherwise.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<CellState>>,
}

impl Grid {
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, Dead)
    }

    /// A grid with every cell set to `state`.
    pub fn filled(height: usize, width: usize, state: CellState) -> Self {
        Grid {
            cells: vec![vec![state; width]; height],
        }
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, |row| row.len())
    }

    /// Rows in top-to-bottom order, for renderers.
    pub fn rows(&self) -> &[Vec<CellState>] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[row][col] = state;
    }

    /// Count the live cells among the 8 neighbors of `(row, col)`,
    /// wrapping at the grid edges. The cell itself is excluded.
    pub fn live_neighbors(&self, row: usize, col: usize) -> usize {
        let mut count = 0;

        for dr in [-1, 0, 1] {
            for dc in [-1, 0, 1] {
                if dr == 0 && dc == 0 {
                    // Skip the current cell
                    continue;
                }

                let neighbor_row = (row as isize + dr).rem_euclid(self.height() as isize) as usize;
                let neighbor_col = (col as isize + dc).rem_euclid(self.width() as isize) as usize;

                if self.cells[neighbor_row][neighbor_col] == Alive {
                    count += 1;
                }
            }
        }

        count
    }

    /// Set every cell independently to `Alive` with probability 0.5.
    pub fn randomize(&mut self) {
        let mut rng = rand::rng();
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = if rng.random_bool(0.5) { Alive } else { Dead };
            }
        }
    }
}
