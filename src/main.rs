//! Volley Pong entry point
//!
//! Native builds run a headless match with both paddles held at the center
//! and print the final state as JSON. The browser build is driven from
//! JavaScript through `platform::web`.
//!
//! Usage: `volley-pong [config.json|-] [frames] [seed]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::error::Error;

    use volley_pong::sim::{Engine, GameEvent};
    use volley_pong::{Config, FrameDriver, TickInput};

    /// Frames simulated when none are given (about a minute at 60 Hz)
    const DEFAULT_FRAMES: u64 = 3600;

    pub fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
        let config = match args.first().map(String::as_str) {
            None | Some("-") => Config::default(),
            Some(path) => Config::load(path)?,
        };
        let frames = match args.get(1) {
            Some(n) => n.parse::<u64>()?,
            None => DEFAULT_FRAMES,
        };
        let engine = match args.get(2) {
            Some(seed) => Engine::with_seed(config, seed.parse::<u64>()?)?,
            None => Engine::new(config)?,
        };

        let mut driver = FrameDriver::new(engine);
        let input = TickInput::default();
        let (mut volleys, mut matches, mut hits) = (0u32, 0u32, 0u32);

        for _ in 0..frames {
            for event in driver.frame(&input) {
                match event {
                    GameEvent::PaddleHit { .. } => hits += 1,
                    GameEvent::VolleyEnd { .. } => volleys += 1,
                    GameEvent::MatchEnd { .. } => matches += 1,
                    GameEvent::WallBounce { .. } => {}
                }
            }
        }

        log::info!(
            "{} frames: {} volleys, {} matches, {} paddle hits",
            frames,
            volleys,
            matches,
            hits
        );
        println!("{}", serde_json::to_string_pretty(&driver.engine().snapshot())?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Volley Pong (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match headless::run(&args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_main, this is just to satisfy the compiler
}
