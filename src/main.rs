mod app;
mod cli;
mod config;
mod error;
mod gpu;
mod session;
mod simulation;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use winit::event_loop::EventLoop;

use app::App;
use cli::Args;
use config::SimulationConfig;
use error::AppResult;
use session::Session;
use simulation::SimulationEngine;

fn main() -> AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse(std::env::args().skip(1)).inspect_err(|err| log::error!("{}", err))?;

    let rng = match args.seed {
        Some(seed) => {
            log::info!("Using rng seed {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let engine = SimulationEngine::new(SimulationConfig::default());
    let session = Session::new(engine, args.strategy, rng);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(session);
    event_loop.run_app(&mut app)?;

    app.finish()
}
