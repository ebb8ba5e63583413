//! Engine configuration
//!
//! Every tunable the simulation reads lives here. The config is built once,
//! validated, and handed to the clock by value; nothing mutates it afterwards.
//! Loaded from JSON; missing sections fall back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{EngineError, Result};

/// Inclusive numeric range sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Symmetric range around zero
    pub const fn symmetric(half: f32) -> Self {
        Self::new(-half, half)
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max && self.min.is_finite() && self.max.is_finite()
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Attack scan tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackConfig {
    /// Candidates tested per tick
    pub chunk_size: usize,
    /// Reinsert the secret into the latter two-thirds of every run
    pub guarantee_secret: bool,
    /// Floor for the elapsed-time denominator (seconds)
    pub min_elapsed: f64,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            guarantee_secret: true,
            min_elapsed: MIN_ELAPSED,
        }
    }
}

/// Floating panel motion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatConfig {
    /// Peak vertical offset in pixels
    pub amplitude: f32,
    /// Seconds per full bob
    pub period: f64,
}

impl Default for FloatConfig {
    fn default() -> Self {
        Self {
            amplitude: FLOAT_AMPLITUDE,
            period: FLOAT_PERIOD,
        }
    }
}

/// Success burst particles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub burst_count: usize,
    pub radius: Span,
    pub velocity_x: Span,
    /// Negative is up (screen coordinates)
    pub velocity_y: Span,
    /// Seconds
    pub life_span: Span,
    /// Spawn jitter around the burst origin (half-widths)
    pub spread_x: Span,
    pub spread_y: Span,
    /// Vertical bob added over the particle's life
    pub bob_amplitude: f32,
    /// Fraction of the radius lost by end of life
    pub shrink: f32,
    pub max_particles: usize,
}

impl ParticleConfig {
    /// Longest life any particle can be spawned with
    pub fn max_life_span(&self) -> f32 {
        self.life_span.max
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            burst_count: BURST_COUNT,
            radius: Span::new(6.0, 14.0),
            velocity_x: Span::symmetric(80.0),
            velocity_y: Span::new(-120.0, -30.0),
            life_span: Span::new(0.8, 1.8),
            spread_x: Span::symmetric(140.0),
            spread_y: Span::symmetric(40.0),
            bob_amplitude: 20.0,
            shrink: 0.4,
            max_particles: MAX_PARTICLES,
        }
    }
}

/// "ACCESS GRANTED" overlay animation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Progress right after activation (non-zero so the first frame shows)
    pub initial_progress: f32,
    /// Progress added per tick, not scaled by frame time
    pub step: f32,
    /// Extra scale at mid-animation
    pub scale_peak: f32,
    /// Opacity = progress * fade_in_rate, capped at 1
    pub fade_in_rate: f32,
    /// Glow channel = glow_base + glow_swing * sin(progress * pi), out of 255
    pub glow_base: f32,
    pub glow_swing: f32,
    /// Vertical lift at mid-animation, relative to window height
    pub lift: f32,
    /// Overlay anchor relative to the window
    pub anchor_x: f32,
    pub anchor_y: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            initial_progress: 0.01,
            step: 0.02,
            scale_peak: 0.2,
            fade_in_rate: 1.5,
            glow_base: 150.0,
            glow_swing: 105.0,
            lift: 0.02,
            anchor_x: 0.5,
            anchor_y: 0.2,
        }
    }
}

/// Hex colours for the render adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub accent: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub error: String,
    pub success_glow: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#121218".to_string(),
            accent: "#4FD1FF".to_string(),
            text_primary: "#F5F6F7".to_string(),
            text_secondary: "#C7CCD6".to_string(),
            error: "#FF5F7B".to_string(),
            success_glow: "#74F9FF".to_string(),
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed RNG seed; `None` draws one from the OS per session
    pub seed: Option<u64>,
    /// Host tick rate
    pub frame_rate: u32,
    pub window_width: f32,
    pub window_height: f32,
    pub attack: AttackConfig,
    pub float: FloatConfig,
    pub particles: ParticleConfig,
    pub overlay: OverlayConfig,
    pub palette: Palette,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_rate: FPS,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            attack: AttackConfig::default(),
            float: FloatConfig::default(),
            particles: ParticleConfig::default(),
            overlay: OverlayConfig::default(),
            palette: Palette::default(),
        }
    }
}

impl EngineConfig {
    /// Default config with a fixed seed (tests, replays)
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
        let config = Self::from_json(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| EngineError::io(path, e))?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }

    /// Seconds between host ticks
    pub fn frame_interval(&self) -> f64 {
        crate::frame_interval_secs(self.frame_rate)
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(EngineError::InvalidConfig(msg.to_string()));

        if self.frame_rate == 0 {
            return invalid("frame_rate must be positive");
        }
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return invalid("window dimensions must be positive");
        }
        if self.attack.chunk_size == 0 {
            return invalid("attack.chunk_size must be at least 1");
        }
        if self.attack.min_elapsed <= 0.0 {
            return invalid("attack.min_elapsed must be positive");
        }
        if self.float.period <= 0.0 {
            return invalid("float.period must be positive");
        }

        let p = &self.particles;
        let spans = [
            ("particles.radius", p.radius),
            ("particles.velocity_x", p.velocity_x),
            ("particles.velocity_y", p.velocity_y),
            ("particles.life_span", p.life_span),
            ("particles.spread_x", p.spread_x),
            ("particles.spread_y", p.spread_y),
        ];
        for (name, span) in spans {
            if !span.is_ordered() {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must satisfy min <= max, got {}..{}",
                    span.min, span.max
                )));
            }
        }
        if p.life_span.min <= 0.0 {
            return invalid("particles.life_span must be positive");
        }
        if !(0.0..=1.0).contains(&p.shrink) {
            return invalid("particles.shrink must be within 0..=1");
        }

        let o = &self.overlay;
        if o.step <= 0.0 {
            return invalid("overlay.step must be positive");
        }
        if !(o.initial_progress > 0.0 && o.initial_progress < 1.0) {
            return invalid("overlay.initial_progress must be within (0, 1)");
        }

        Ok(())
    }
}
