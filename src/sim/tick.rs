//! Frame clock
//!
//! The host calls [`SimulationClock::tick`] once per frame with a wall-clock
//! timestamp. Each tick applies any queued command, moves the floating
//! panel, scans one chunk of the dictionary, steps the particles and the
//! success overlay, and returns a [`FrameSnapshot`]. The clock owns all
//! simulation state; the host only reads snapshots.

use std::f64::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::attack::{AdvanceResult, AttackSimulator};
use super::particle::ParticleField;
use super::progress::ProgressIndicator;
use super::snapshot::{AttackView, FrameSnapshot, StatusText};
use super::state::{RngState, SimRng, Timestamp};
use super::success::SuccessPresenter;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};

/// Engine state as seen by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EngineStatus {
    /// Nothing running
    #[default]
    Idle,
    /// Scanning a chunk per tick
    Running,
    /// Secret matched; overlay and burst triggered
    JustFound,
    /// Dictionary ran out
    JustExhausted,
}

impl EngineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineStatus::Idle => "Idle",
            EngineStatus::Running => "Running",
            EngineStatus::JustFound => "Found",
            EngineStatus::JustExhausted => "Exhausted",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, EngineStatus::JustFound | EngineStatus::JustExhausted)
    }
}

/// Host commands, applied at the start of the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a fresh run (restarts if one is active)
    Start,
    /// Stop and reset to Idle
    Stop,
}

/// Fixed-tick scheduler that owns the whole simulation
#[derive(Debug, Clone)]
pub struct SimulationClock {
    config: EngineConfig,
    rng_state: RngState,
    rng: SimRng,
    candidates: Vec<String>,
    secret: String,
    attack: AttackSimulator,
    particles: ParticleField,
    presenter: SuccessPresenter,
    progress: ProgressIndicator,
    status: EngineStatus,
    view: AttackView,
    /// Per-session phase offset (seconds)
    float_phase_offset: f64,
    float_offset: f32,
    pending: Option<Command>,
    ticks: u64,
}

impl SimulationClock {
    /// Build a clock over a validated config and a non-empty candidate list
    pub fn new(config: EngineConfig, candidates: Vec<String>, secret: &str) -> Result<Self> {
        config.validate()?;
        if candidates.is_empty() {
            return Err(EngineError::InvalidInput(
                "candidate list is empty".to_string(),
            ));
        }

        let rng_state = RngState::from_option(config.seed);
        let mut rng = rng_state.to_rng();
        let float_phase_offset = rng.random_range(0.0..1.0);

        log::info!(
            "Clock initialized: {} candidates, seed {}, {} Hz",
            candidates.len(),
            rng_state.seed,
            config.frame_rate
        );

        Ok(Self {
            attack: AttackSimulator::new(config.attack.clone()),
            presenter: SuccessPresenter::new(config.overlay.clone()),
            config,
            rng_state,
            rng,
            candidates,
            secret: secret.to_string(),
            particles: ParticleField::new(),
            progress: ProgressIndicator::new(),
            status: EngineStatus::Idle,
            view: AttackView::default(),
            float_phase_offset,
            float_offset: 0.0,
            pending: None,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rng_state(&self) -> RngState {
        self.rng_state
    }

    pub fn status(&self) -> EngineStatus {
        self.status
    }

    pub fn attack(&self) -> &AttackSimulator {
        &self.attack
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn presenter(&self) -> &SuccessPresenter {
        &self.presenter
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn pending(&self) -> Option<Command> {
        self.pending
    }

    /// Replace the dictionary used by the next run
    pub fn set_candidates(&mut self, candidates: Vec<String>) -> Result<()> {
        if candidates.is_empty() {
            return Err(EngineError::InvalidInput(
                "candidate list is empty".to_string(),
            ));
        }
        log::info!("Dictionary replaced ({} candidates)", candidates.len());
        self.candidates = candidates;
        Ok(())
    }

    /// Queue a start (or restart)
    pub fn start(&mut self) {
        self.pending = Some(Command::Start);
    }

    /// Queue a stop/reset
    pub fn stop(&mut self) {
        self.pending = Some(Command::Stop);
    }

    /// Single action button: stop while running, start otherwise
    pub fn toggle(&mut self) {
        let running = match self.pending {
            Some(Command::Start) => true,
            Some(Command::Stop) => false,
            None => self.status == EngineStatus::Running,
        };
        if running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Advance one frame and return what to draw
    pub fn tick(&mut self, now: Timestamp) -> FrameSnapshot {
        if let Some(command) = self.pending.take() {
            self.apply(command, now);
        }

        self.update_float(now);

        if self.status == EngineStatus::Running {
            self.update_attack(now);
        }

        self.particles.step(now);

        if self.presenter.is_active() {
            self.presenter.step();
        }

        self.ticks += 1;
        self.snapshot(now)
    }

    fn apply(&mut self, command: Command, now: Timestamp) {
        match command {
            Command::Start => {
                self.particles.clear();
                self.presenter.dismiss();
                self.progress.reset();
                self.view = AttackView::default();
                match self
                    .attack
                    .start(&self.candidates, &self.secret, now, &mut self.rng)
                {
                    Ok(_) => self.status = EngineStatus::Running,
                    Err(e) => {
                        log::error!("Failed to start attack: {}", e);
                        self.status = EngineStatus::Idle;
                    }
                }
            }
            Command::Stop => {
                self.attack.stop();
                self.particles.clear();
                self.presenter.dismiss();
                self.progress.reset();
                self.view = AttackView::default();
                self.status = EngineStatus::Idle;
            }
        }
    }

    fn update_float(&mut self, now: Timestamp) {
        let period = self.config.float.period;
        let phase = (now + self.float_phase_offset).rem_euclid(period);
        self.float_offset = self.config.float.amplitude * (TAU * phase / period).sin() as f32;
    }

    fn update_attack(&mut self, now: Timestamp) {
        let chunk = self.config.attack.chunk_size;
        match self.attack.advance(chunk, now) {
            Some(AdvanceResult::InProgress(p)) => {
                self.progress.set(p.progress);
                self.view = AttackView {
                    candidate: Some(p.candidate),
                    attempts: p.attempts,
                    elapsed: Some(p.elapsed),
                    throughput: Some(p.throughput),
                };
            }
            Some(AdvanceResult::Found {
                candidate,
                attempts,
                elapsed,
            }) => {
                self.status = EngineStatus::JustFound;
                self.progress.set(1.0);
                self.view = AttackView {
                    candidate: Some(candidate),
                    attempts,
                    elapsed: Some(elapsed),
                    throughput: None,
                };
                self.presenter.activate();
                let origin = self.burst_origin();
                let count = self.config.particles.burst_count;
                self.particles
                    .spawn_burst(origin, count, now, &mut self.rng, &self.config.particles);
            }
            Some(AdvanceResult::Exhausted { attempts }) => {
                self.status = EngineStatus::JustExhausted;
                let len = self.attack.run().map_or(0, |r| r.len());
                if len > 0 {
                    self.progress.set(attempts as f32 / len as f32);
                }
                self.view = AttackView {
                    candidate: None,
                    attempts,
                    elapsed: None,
                    throughput: None,
                };
            }
            None => {
                log::warn!("Clock was running without an attack run");
                self.status = EngineStatus::Idle;
            }
        }
    }

    /// Overlay anchor in window pixels
    pub fn burst_origin(&self) -> Vec2 {
        Vec2::new(
            self.config.window_width * self.config.overlay.anchor_x,
            self.config.window_height * self.config.overlay.anchor_y,
        )
    }

    fn snapshot(&self, now: Timestamp) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.ticks,
            now,
            status: self.status,
            float_offset: self.float_offset,
            attack: self.view.clone(),
            text: StatusText::describe(self.status, &self.view),
            progress: self.progress.fraction(),
            progress_label: self.progress.label(),
            particles: self.particles.sprites(),
            overlay: self.presenter.style(),
        }
    }
}
