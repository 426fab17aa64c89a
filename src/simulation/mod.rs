mod cell;
mod engine;
mod grid;
mod patterns;
mod seed;

pub use cell::Cell;
pub use engine::SimulationEngine;
pub use grid::GridState;
pub use seed::{ParseSeedStrategyError, SeedStrategy};
