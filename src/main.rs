//! Vision Attack entry point
//!
//! Headless host: loads the dictionary, drives the clock at the configured
//! frame rate with wall-clock time, and draws each snapshot to the terminal
//! (or as JSON lines for an external UI).

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use clap::Parser;

    use vision_attack::consts::{DEFAULT_DICT_PATH, DEFAULT_SECRET, DEFAULT_USER};
    use vision_attack::renderer::{JsonLinesRenderer, Renderer, TerminalRenderer};
    use vision_attack::{Dictionary, EngineConfig, Result, SimulationClock};

    /// Simulated dictionary attack against a local, fake account
    #[derive(Parser, Debug)]
    #[command(name = "vision-attack", version, about)]
    pub struct Args {
        /// Word list, one candidate per line
        #[arg(short, long, default_value = DEFAULT_DICT_PATH)]
        pub dictionary: PathBuf,

        /// Password the simulated account uses
        #[arg(short, long, default_value = DEFAULT_SECRET)]
        pub secret: String,

        /// Account name shown in the header
        #[arg(short, long, default_value = DEFAULT_USER)]
        pub user: String,

        /// JSON engine config
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Fixed RNG seed (overrides the config)
        #[arg(long)]
        pub seed: Option<u64>,

        /// Candidates tested per frame (overrides the config)
        #[arg(long)]
        pub chunk_size: Option<usize>,

        /// Emit snapshots as JSON lines instead of a status line
        #[arg(long)]
        pub json: bool,

        /// Give up after this many seconds
        #[arg(long, default_value_t = 120.0)]
        pub timeout: f64,
    }

    fn load_config(args: &Args) -> Result<EngineConfig> {
        let mut config = match &args.config {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };
        if args.seed.is_some() {
            config.seed = args.seed;
        }
        if let Some(chunk_size) = args.chunk_size {
            config.attack.chunk_size = chunk_size;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn run(args: Args) -> Result<()> {
        let config = load_config(&args)?;
        let dictionary = Dictionary::load(&args.dictionary, &args.secret)?;
        log::info!(
            "Target: {} | Dictionary: {} ({} words)",
            args.user,
            dictionary.source,
            dictionary.len()
        );

        let frame = Duration::from_secs_f64(config.frame_interval());
        let palette = config.palette.clone();
        let mut clock = SimulationClock::new(config, dictionary.into_words(), &args.secret)?;

        let mut renderer: Box<dyn Renderer> = if args.json {
            Box::new(JsonLinesRenderer::new(io::stdout().lock()))
        } else {
            Box::new(TerminalRenderer::new(io::stdout().lock()).with_palette(palette))
        };

        clock.start();
        let origin = Instant::now();
        loop {
            let tick_start = Instant::now();
            let now = origin.elapsed().as_secs_f64();
            let snapshot = clock.tick(now);
            renderer.draw(&snapshot)?;

            if snapshot.status.is_terminal() && snapshot.is_settled() {
                break;
            }
            if now > args.timeout {
                log::warn!("Timed out after {:.1}s", now);
                break;
            }

            if let Some(rest) = frame.checked_sub(tick_start.elapsed()) {
                std::thread::sleep(rest);
            }
        }

        renderer.finish()?;
        log::info!("Finished: {}", clock.status().as_str());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Vision Attack starting...");

    let args = native::Args::parse();
    if let Err(e) = native::run(args) {
        log::error!("{}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive SimulationClock directly; there is no standalone entry point
}
