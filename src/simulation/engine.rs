use std::collections::HashSet;

use rand::Rng;

use crate::config::{SimulationConfig, RANDOM_FACTOR_MAX, RANDOM_FACTOR_MIN};
use crate::simulation::cell::Cell;
use crate::simulation::grid::GridState;
use crate::simulation::patterns::GLIDER_GUN;
use crate::simulation::seed::SeedStrategy;

/// Stateless B3/S23 stepper for a bounded, non-wrapping grid.
#[derive(Debug, Clone, Copy)]
pub struct SimulationEngine {
    config: SimulationConfig,
}

impl SimulationEngine {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SimulationConfig {
        self.config
    }

    /// Compute the next generation.
    ///
    /// Only live cells and their neighbors are visited: the first pass keeps
    /// survivors and collects the frontier, the second pass checks every
    /// frontier cell for a birth. The input is left untouched.
    pub fn step(&self, state: &GridState) -> GridState {
        let mut next = GridState::new();
        let mut frontier = HashSet::with_capacity(state.population() * 8);

        for cell in state {
            let mut live = 0;
            for neighbor in self.neighbors(cell) {
                if state.contains(neighbor) {
                    live += 1;
                }
                frontier.insert(neighbor);
            }
            if live == 2 || live == 3 {
                next.add(cell);
            }
        }

        for cell in frontier {
            if self.live_neighbor_count(state, cell) == 3 {
                next.add(cell);
            }
        }

        next
    }

    /// Up to 8 adjacent cells.
    ///
    /// A candidate is kept when `0 <= column <= grid_width` and
    /// `0 <= row <= grid_height`. The upper bound is inclusive, so the
    /// column and row just past the visible field take part in the
    /// simulation.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> {
        let SimulationConfig {
            grid_width,
            grid_height,
        } = self.config;

        (-1..=1)
            .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
            .filter(|&offset| offset != (0, 0))
            .filter_map(move |(dx, dy)| cell.offset(dx, dy))
            .filter(move |c| {
                (0..=grid_width).contains(&c.column) && (0..=grid_height).contains(&c.row)
            })
    }

    pub fn live_neighbor_count(&self, state: &GridState, cell: Cell) -> usize {
        self.neighbors(cell).filter(|&n| state.contains(n)).count()
    }

    /// The glider gun at its fixed anchor
    pub fn seed_pattern() -> GridState {
        GLIDER_GUN.iter().copied().map(Cell::from).collect()
    }

    /// `count` independent uniform samples of
    /// `(column in [0, grid_height), row in [0, grid_width))`.
    ///
    /// The first coordinate is drawn from the height range. Duplicate
    /// samples collapse, so the population is at most `count`.
    pub fn generate_random<R>(count: usize, grid_width: i32, grid_height: i32, rng: &mut R) -> GridState
    where
        R: Rng,
    {
        if grid_width <= 0 || grid_height <= 0 {
            return GridState::new();
        }

        (0..count)
            .map(|_| Cell::new(rng.gen_range(0..grid_height), rng.gen_range(0..grid_width)))
            .collect()
    }

    /// Sample count used by the randomize action
    pub fn random_population_size<R>(&self, rng: &mut R) -> usize
    where
        R: Rng,
    {
        let factor = rng.gen_range(RANDOM_FACTOR_MIN..RANDOM_FACTOR_MAX);
        factor * self.config.grid_width.max(0) as usize
    }

    /// Random population sized by [`Self::random_population_size`]
    pub fn random_population<R>(&self, rng: &mut R) -> GridState
    where
        R: Rng,
    {
        let count = self.random_population_size(rng);
        Self::generate_random(count, self.config.grid_width, self.config.grid_height, rng)
    }

    pub fn initial_state<R>(&self, strategy: SeedStrategy, rng: &mut R) -> GridState
    where
        R: Rng,
    {
        match strategy {
            SeedStrategy::Empty => GridState::new(),
            SeedStrategy::Pattern => Self::seed_pattern(),
            SeedStrategy::Random => self.random_population(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const SEED: u64 = 42;

    fn engine() -> SimulationEngine {
        SimulationEngine::new(SimulationConfig::new(90, 90))
    }

    fn grid(cells: &[(i32, i32)]) -> GridState {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        assert_eq!(engine().step(&GridState::new()), GridState::new());
    }

    #[test]
    fn test_block_is_still_life() {
        let block = grid(&[(40, 40), (41, 40), (40, 41), (41, 41)]);
        assert_eq!(engine().step(&block), block);
    }

    #[test]
    fn test_blinker_has_period_two() {
        let engine = engine();
        let horizontal = grid(&[(49, 50), (50, 50), (51, 50)]);
        let vertical = grid(&[(50, 49), (50, 50), (50, 51)]);

        let once = engine.step(&horizontal);
        assert_eq!(once, vertical);
        assert_eq!(engine.step(&once), horizontal);
    }

    #[test]
    fn test_isolated_cell_dies() {
        assert!(engine().step(&grid(&[(30, 30)])).is_empty());
    }

    #[test]
    fn test_l_tromino_fills_corner() {
        let tromino = grid(&[(5, 5), (6, 5), (5, 6)]);
        let next = engine().step(&tromino);

        assert!(next.contains(Cell::new(6, 6)));
        assert_eq!(next, grid(&[(5, 5), (6, 5), (5, 6), (6, 6)]));
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let state = grid(&[(10, 10), (11, 10), (12, 10)]);
        let before = state.clone();
        let _ = engine().step(&state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_interior_cell_has_eight_neighbors() {
        let neighbors: HashSet<Cell> = engine().neighbors(Cell::new(10, 10)).collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&Cell::new(10, 10)));
    }

    #[test]
    fn test_corner_cell_has_three_neighbors() {
        let neighbors: HashSet<Cell> = engine().neighbors(Cell::new(0, 0)).collect();
        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)].into_iter().map(Cell::from).collect::<HashSet<_>>());
    }

    #[test]
    fn test_neighbor_bound_includes_grid_width() {
        let config = SimulationConfig::new(10, 10);
        let engine = SimulationEngine::new(config);

        let neighbors: HashSet<Cell> = engine.neighbors(Cell::new(9, 5)).collect();
        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.contains(&Cell::new(10, 5)));

        // one further is out
        let neighbors: HashSet<Cell> = engine.neighbors(Cell::new(10, 10)).collect();
        assert_eq!(neighbors, [(9, 9), (10, 9), (9, 10)].into_iter().map(Cell::from).collect::<HashSet<_>>());
    }

    #[test]
    fn test_blinker_spills_into_column_past_the_field() {
        let engine = SimulationEngine::new(SimulationConfig::new(10, 10));
        let vertical = grid(&[(9, 4), (9, 5), (9, 6)]);
        assert_eq!(engine.step(&vertical), grid(&[(8, 5), (9, 5), (10, 5)]));
    }

    #[test]
    fn test_extreme_coordinates_step_without_overflow() {
        let engine = engine();
        let state = grid(&[(i32::MAX, 0), (i32::MIN, i32::MAX), (-7, 1000)]);

        assert!(engine.step(&state).is_empty());
        assert_eq!(engine.neighbors(Cell::new(i32::MAX, 5)).count(), 0);
    }

    #[test]
    fn test_cells_past_the_bound_are_not_counted() {
        // (11, 5) would make (10, 5) a birth if it were counted
        let engine = SimulationEngine::new(SimulationConfig::new(10, 10));
        let state = grid(&[(11, 5), (10, 4), (10, 6)]);
        assert!(engine.step(&state).is_empty());
    }

    #[test]
    fn test_no_wraparound_at_left_edge() {
        let engine = SimulationEngine::new(SimulationConfig::new(10, 10));
        let vertical = grid(&[(0, 4), (0, 5), (0, 6)]);
        assert_eq!(engine.step(&vertical), grid(&[(0, 5), (1, 5)]));
    }

    #[test]
    fn test_seed_pattern_is_idempotent() {
        let first = SimulationEngine::seed_pattern();
        let engine = engine();
        let _ = engine.step(&first);
        let second = SimulationEngine::seed_pattern();
        assert_eq!(first.population(), 36);
        assert_eq!(first, second);
    }

    #[test]
    fn test_glider_gun_keeps_running() {
        let engine = engine();
        let mut state = SimulationEngine::seed_pattern();
        for _ in 0..30 {
            state = engine.step(&state);
        }
        // back in phase with one glider (5 cells) emitted
        assert_eq!(state.population(), 41);
    }

    #[test]
    fn test_generate_random_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let (width, height) = (40, 25);
        let count = 500;

        let state = SimulationEngine::generate_random(count, width, height, &mut rng);
        assert!(state.population() <= count);
        assert!(!state.is_empty());
        for cell in &state {
            assert!((0..height).contains(&cell.column));
            assert!((0..width).contains(&cell.row));
        }
    }

    #[test]
    fn test_generate_random_is_reproducible() {
        let a = SimulationEngine::generate_random(200, 90, 90, &mut ChaCha8Rng::seed_from_u64(SEED));
        let b = SimulationEngine::generate_random(200, 90, 90, &mut ChaCha8Rng::seed_from_u64(SEED));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_random_degenerate_inputs() {
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        assert!(SimulationEngine::generate_random(0, 90, 90, &mut rng).is_empty());
        assert!(SimulationEngine::generate_random(100, 0, 90, &mut rng).is_empty());
    }

    #[test]
    fn test_random_population_size_range() {
        let engine = engine();
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        for _ in 0..100 {
            let size = engine.random_population_size(&mut rng);
            assert_eq!(size % 90, 0);
            assert!((RANDOM_FACTOR_MIN * 90..RANDOM_FACTOR_MAX * 90).contains(&size));
        }
    }

    #[test]
    fn test_initial_state_strategies() {
        let engine = engine();
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        assert!(engine.initial_state(SeedStrategy::Empty, &mut rng).is_empty());
        assert_eq!(
            engine.initial_state(SeedStrategy::Pattern, &mut rng),
            SimulationEngine::seed_pattern()
        );
        let random = engine.initial_state(SeedStrategy::Random, &mut rng);
        assert!(random.population() > 0);
        assert!(random.population() < RANDOM_FACTOR_MAX * 90);
    }
}
