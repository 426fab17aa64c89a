use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::UPDATE_FREQUENCY;
use crate::simulation::{Cell, GridState, SeedStrategy, SimulationEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Paused,
    Playing,
}

/// User requests, already translated from window events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePlay,
    /// Empty the grid, pause and reset the frame counter
    Clear,
    /// Replace the grid with a random population
    Randomize,
    ToggleCell(Cell),
}

/// Interactive simulation state owned by the display loop.
///
/// Holds the one live [`GridState`]; every frame calls [`Session::tick`],
/// which advances a generation once `update_frequency` playing frames have
/// passed.
pub struct Session<R = ChaCha8Rng> {
    engine: SimulationEngine,
    state: GridState,
    play_state: PlayState,
    frame_counter: u32,
    update_frequency: u32,
    generation: u64,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(engine: SimulationEngine, strategy: SeedStrategy, mut rng: R) -> Self {
        let state = engine.initial_state(strategy, &mut rng);
        log::info!(
            "Seeded grid with strategy `{}` (population {})",
            strategy,
            state.population()
        );

        Self {
            engine,
            state,
            play_state: PlayState::Paused,
            frame_counter: 0,
            update_frequency: UPDATE_FREQUENCY,
            generation: 0,
            rng,
        }
    }

    /// Override the number of playing frames per generation (minimum 1)
    #[cfg(test)]
    pub fn with_update_frequency(mut self, frames: u32) -> Self {
        self.update_frequency = frames.max(1);
        self
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    pub fn is_playing(&self) -> bool {
        self.play_state == PlayState::Playing
    }

    /// Generations computed since start-up
    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the frame counter; returns true when a generation was computed
    pub fn tick(&mut self) -> bool {
        if self.is_playing() {
            self.frame_counter += 1;
        }

        if self.frame_counter < self.update_frequency {
            return false;
        }

        self.frame_counter = 0;
        // the new state only replaces the old one once it is complete
        let next = self.engine.step(&self.state);
        self.state = next;
        self.generation += 1;
        log::debug!(
            "Generation {}: population {}",
            self.generation,
            self.state.population()
        );
        true
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::TogglePlay => {
                self.play_state = match self.play_state {
                    PlayState::Paused => PlayState::Playing,
                    PlayState::Playing => PlayState::Paused,
                };
                log::info!("{:?} at generation {}", self.play_state, self.generation);
            }
            Command::Clear => {
                self.state.clear();
                self.play_state = PlayState::Paused;
                self.frame_counter = 0;
                log::info!("Grid cleared");
            }
            Command::Randomize => {
                self.state = self.engine.random_population(&mut self.rng);
                log::info!("Randomized grid (population {})", self.state.population());
            }
            Command::ToggleCell(cell) => {
                let live = self.state.toggle(cell);
                log::debug!("Toggled ({}, {}) -> {}", cell.column, cell.row, live);
            }
        }
    }

    /// Toggle the cell under a pixel position
    pub fn toggle_at_pixel(&mut self, x: f64, y: f64, tile_size: u32) -> Option<Cell> {
        let cell = Cell::from_pixel(x, y, tile_size)?;
        self.apply(Command::ToggleCell(cell));
        Some(cell)
    }

    /// Window title for the current state
    pub fn caption(&self) -> String {
        let mode = match self.play_state() {
            PlayState::Playing => "Playing",
            PlayState::Paused => "Paused",
        };
        format!("{} (Population: {})", mode, self.state.population())
    }
}
