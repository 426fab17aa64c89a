use thiserror::Error;

use crate::simulation::ParseSeedStrategyError;

/// Top-level error returned from `main`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid arguments: {0}")]
    Args(#[from] ArgsError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("gpu initialization failed: {0}")]
    Gpu(#[from] GpuError),
}

/// Command-line parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error(transparent)]
    Strategy(#[from] ParseSeedStrategyError),

    #[error("rng seed `{0}` is not an unsigned integer")]
    Seed(String),

    #[error("unexpected argument `{0}`")]
    Unexpected(String),
}

/// Failures while bringing up the wgpu surface.
#[derive(Debug, Error)]
pub enum GpuError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface not supported by adapter")]
    UnsupportedSurface,
}

pub type AppResult<T> = Result<T, AppError>;
