//! Vision Attack - a tick-driven dictionary attack simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (attack scan, particles, success overlay, clock)
//! - `config`: Immutable engine configuration
//! - `dictionary`: Candidate list loading with a built-in fallback
//! - `renderer`: Surface adapters that draw frame snapshots
//!
//! Nothing here simulates real cryptography: the "attack" is a linear scan
//! over a shuffled word list, paced a chunk at a time so the frame loop stays
//! responsive.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::EngineConfig;
pub use dictionary::Dictionary;
pub use error::{EngineError, Result};
pub use sim::{EngineStatus, FrameSnapshot, SimulationClock};

/// Engine defaults
pub mod consts {
    /// Target frame rate of the host loop
    pub const FPS: u32 = 60;
    /// Candidates scanned per tick
    pub const CHUNK_SIZE: usize = 250;
    /// Floor for elapsed-time denominators (seconds)
    pub const MIN_ELAPSED: f64 = 1e-3;

    /// Window size the relative placements are expressed against
    pub const WINDOW_WIDTH: f32 = 1280.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;

    /// Floating panel bob (pixels, seconds)
    pub const FLOAT_AMPLITUDE: f32 = 8.0;
    pub const FLOAT_PERIOD: f64 = 6.0;

    /// Particles per success burst
    pub const BURST_COUNT: usize = 36;
    /// Hard cap on live particles
    pub const MAX_PARTICLES: usize = 256;

    /// Default target account and secret
    pub const DEFAULT_USER: &str = "admin";
    pub const DEFAULT_SECRET: &str = "1231232024";
    pub const DEFAULT_DICT_PATH: &str = "dic/fakerockyou.txt";
}

/// Frame interval in seconds for a given frame rate
#[inline]
pub fn frame_interval_secs(fps: u32) -> f64 {
    1.0 / fps.max(1) as f64
}
