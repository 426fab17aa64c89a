/// Window dimensions in physical pixels (900x900, 90x90 tiles)
pub const WINDOW_WIDTH: u32 = 900;
pub const WINDOW_HEIGHT: u32 = 900;

/// Side length of one cell in pixels
pub const TILE_SIZE: u32 = 10;

/// Frame rate cap for the display loop
pub const FPS: u32 = 60;

/// Number of playing frames between two generations
pub const UPDATE_FREQUENCY: u32 = 6;

/// Random population size is `uniform[MIN, MAX) * grid_width`
pub const RANDOM_FACTOR_MIN: usize = 15;
pub const RANDOM_FACTOR_MAX: usize = 30;

// ============================================
// Colours (sRGB RGBA)
// ============================================

pub const LIVE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const DEAD_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Grid lines, (176, 175, 182) / 255
pub const LINE_COLOR: [f32; 4] = [0.690, 0.686, 0.714, 1.0];

/// Immutable grid dimensions shared by the engine and the session.
///
/// The dimensions are in tiles, not pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub grid_width: i32,
    pub grid_height: i32,
}

impl SimulationConfig {
    pub fn new(grid_width: i32, grid_height: i32) -> Self {
        Self {
            grid_width,
            grid_height,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(
            (WINDOW_WIDTH / TILE_SIZE) as i32,
            (WINDOW_HEIGHT / TILE_SIZE) as i32,
        )
    }
}
