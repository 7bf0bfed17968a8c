use crate::grid::CellState::{Alive, Dead};
use crate::grid::Grid;
use crate::patterns;
use log::debug;

/// Survival band and birth threshold for the transition rule.
/// Defaults are the standard Life rule (B3/S23).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rules {
    pub minimum: usize,
    pub maximum: usize,
    pub spawn: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            minimum: 2,
            maximum: 3,
            spawn: 3,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RunState {
    Stopped,
    Running,
}

/// A Game of Life world: a toroidal grid, the rule parameters, a
/// generation counter and the run/stop flag.
///
/// The timer lives outside: a driver holds the world (typically behind
/// a mutex) and calls `step` on its own cadence while `is_running` is
/// true, so no step can execute after `stop` returns.
pub struct World {
    grid: Grid,
    rules: Rules,
    state: RunState,
    generation: u64,
}

impl World {
    pub fn new(height: usize, width: usize) -> Self {
        Self::with_rules(height, width, Rules::default())
    }

    pub fn with_rules(height: usize, width: usize, rules: Rules) -> Self {
        World {
            grid: Grid::new(height, width),
            rules,
            state: RunState::Stopped,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Start accepting ticks. No-op when already running.
    pub fn start(&mut self) {
        if self.state == RunState::Stopped {
            self.state = RunState::Running;
            debug!("started at generation {}", self.generation);
        }
    }

    /// Stop accepting ticks. No-op when already stopped.
    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Stopped;
            debug!("stopped at generation {}", self.generation);
        }
    }

    /// Stop, zero the generation counter and clear the grid.
    pub fn reset(&mut self) {
        self.stop();
        self.generation = 0;
        self.grid = Grid::new(self.grid.height(), self.grid.width());
    }

    /// Advance the world by one generation and report whether the grid
    /// changed.
    ///
    /// The next generation is computed into a fresh all-dead grid and
    /// swapped in wholesale; the current grid is never mutated while it
    /// is being read. The generation counter increments whether or not
    /// anything changed.
    pub fn step(&mut self) -> bool {
        let height = self.grid.height();
        let width = self.grid.width();
        let mut next = Grid::new(height, width);

        for row in 0..height {
            for col in 0..width {
                let neighbors = self.grid.live_neighbors(row, col);
                let survives = (self.rules.minimum..=self.rules.maximum).contains(&neighbors);

                let state = match self.grid.get(row, col) {
                    Alive if survives => Alive,
                    Dead if neighbors == self.rules.spawn => Alive,
                    _ => Dead,
                };
                next.set(row, col, state);
            }
        }

        let changed = next != self.grid;
        self.grid = next;
        self.generation += 1;
        changed
    }

    /// Flip a single cell; toggling the same cell twice restores it.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let state = self.grid.get(row, col).toggled();
        self.grid.set(row, col, state);
    }

    /// Reset, then stamp the named pattern around the grid center.
    /// Unknown names fall back to a single live cell at the center.
    ///
    /// Offsets wrap at the edges, so seeding stays total on grids
    /// smaller than the pattern.
    pub fn seed(&mut self, name: &str) {
        self.reset();

        let height = self.grid.height() as isize;
        let width = self.grid.width() as isize;
        for &(dr, dc) in patterns::lookup(name) {
            let row = (height / 2 + dr).rem_euclid(height) as usize;
            let col = (width / 2 + dc).rem_euclid(width) as usize;
            self.grid.set(row, col, Alive);
        }
        debug!("seeded pattern {:?}", name);
    }

    /// Reset, then fill the grid with random cell states.
    pub fn randomize(&mut self) {
        self.reset();
        self.grid.randomize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_cells(world: &World) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..world.grid().height() {
            for col in 0..world.grid().width() {
                if world.grid().get(row, col) == Alive {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    #[test]
    fn a_lone_cell_dies_after_one_step() {
        let mut world = World::new(5, 5);
        world.toggle_cell(2, 2);

        assert!(world.step());
        assert!(live_cells(&world).is_empty());
        assert_eq!(world.generation(), 1);
    }

    #[test]
    fn a_block_is_stable() {
        let mut world = World::new(6, 6);
        for (row, col) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
            world.toggle_cell(row, col);
        }

        for _ in 0..3 {
            assert!(!world.step());
        }
        assert_eq!(live_cells(&world), vec![(2, 2), (2, 3), (3, 2), (3, 3)]);
        assert_eq!(world.generation(), 3);
    }

    #[test]
    fn a_blinker_oscillates_with_period_two() {
        let mut world = World::new(8, 8);
        for (row, col) in [(3, 4), (4, 4), (5, 4)] {
            world.toggle_cell(row, col);
        }

        world.step();
        assert_eq!(live_cells(&world), vec![(4, 3), (4, 4), (4, 5)]);

        world.step();
        assert_eq!(live_cells(&world), vec![(3, 4), (4, 4), (5, 4)]);
    }

    #[test]
    fn stepping_an_empty_world_changes_nothing_but_the_counter() {
        let mut world = World::new(4, 4);

        assert!(!world.step());
        assert!(live_cells(&world).is_empty());
        assert_eq!(world.generation(), 1);
    }

    #[test]
    fn reset_clears_the_grid_and_the_counter() {
        let mut world = World::new(6, 6);
        world.toggle_cell(1, 1);
        world.toggle_cell(1, 2);
        world.start();
        world.step();
        world.reset();

        assert!(!world.is_running());
        assert_eq!(world.generation(), 0);
        assert!(live_cells(&world).is_empty());
    }

    #[test]
    fn toggling_a_cell_twice_restores_it() {
        let mut world = World::new(4, 4);

        world.toggle_cell(2, 3);
        assert_eq!(world.grid().get(2, 3), Alive);

        world.toggle_cell(2, 3);
        assert_eq!(world.grid().get(2, 3), Dead);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut world = World::new(4, 4);
        assert!(!world.is_running());

        world.start();
        world.start();
        assert!(world.is_running());

        world.stop();
        world.stop();
        assert!(!world.is_running());
    }

    #[test]
    fn seeding_an_unknown_name_lights_the_center_cell() {
        let mut world = World::new(9, 9);
        world.seed("no-such-pattern");

        assert_eq!(live_cells(&world), vec![(4, 4)]);
        assert_eq!(world.generation(), 0);
    }

    #[test]
    fn acorn_and_rabbits_seed_independently() {
        let mut world = World::new(20, 20);

        world.seed("Acorn");
        assert_eq!(live_cells(&world).len(), 6);

        world.seed("Rabbits");
        assert_eq!(live_cells(&world).len(), 9);
    }

    #[test]
    fn seeding_replaces_any_previous_state() {
        let mut world = World::new(20, 20);
        world.toggle_cell(0, 0);
        world.step();
        world.seed("R-pentomino");

        assert_eq!(live_cells(&world).len(), 5);
        assert_eq!(world.generation(), 0);
    }

    #[test]
    fn seeding_wraps_on_a_tiny_grid() {
        let mut world = World::new(3, 3);
        world.seed("Acorn");

        // All 6 offsets land somewhere in range.
        assert!(!live_cells(&world).is_empty());
    }

    #[test]
    fn a_relaxed_minimum_keeps_a_pair_alive() {
        let rules = Rules {
            minimum: 1,
            maximum: 3,
            spawn: 3,
        };
        let mut world = World::with_rules(6, 6, rules);
        world.toggle_cell(2, 2);
        world.toggle_cell(2, 3);

        world.step();
        assert_eq!(live_cells(&world), vec![(2, 2), (2, 3)]);
    }

    #[test]
    fn randomize_resets_the_counter() {
        let mut world = World::new(10, 10);
        world.step();
        world.randomize();

        assert_eq!(world.generation(), 0);
        assert!(!world.is_running());
    }
}
