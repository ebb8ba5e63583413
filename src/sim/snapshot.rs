//! Per-tick frame snapshot
//!
//! Everything a renderer may read. Built fresh by the clock every tick and
//! never mutated afterwards, so it can be handed to another thread or
//! serialized as-is.

use serde::{Deserialize, Serialize};

use super::particle::ParticleSprite;
use super::success::OverlayStyle;
use super::tick::EngineStatus;

/// Attack telemetry as last reported by the scan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackView {
    /// Last tested candidate (the secret once found)
    pub candidate: Option<String>,
    pub attempts: u64,
    /// Seconds since start; total time once found
    pub elapsed: Option<f64>,
    /// Attempts per second while running
    pub throughput: Option<f64>,
}

/// Display strings for the status panel and action button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusText {
    pub attempt: String,
    pub counter: String,
    pub speed: String,
    pub elapsed: String,
    pub action: String,
}

impl StatusText {
    pub fn describe(status: EngineStatus, view: &AttackView) -> Self {
        let counter = format!("Total attempts: {}", view.attempts);
        match status {
            EngineStatus::Idle => Self {
                attempt: "Current attempt: -".to_string(),
                counter: "Total attempts: 0".to_string(),
                speed: "Speed: 0 attempts/s".to_string(),
                elapsed: "Elapsed: 0.00 s".to_string(),
                action: "START ATTACK".to_string(),
            },
            EngineStatus::Running => Self {
                attempt: format!(
                    "Current attempt: {}",
                    view.candidate.as_deref().unwrap_or("-")
                ),
                counter,
                speed: format!(
                    "Speed: {} attempts/s",
                    group_thousands(view.throughput.unwrap_or(0.0).round() as u64)
                ),
                elapsed: format!("Elapsed: {:.2} s", view.elapsed.unwrap_or(0.0)),
                action: "STOP".to_string(),
            },
            EngineStatus::JustFound => Self {
                attempt: format!(
                    "Password found: {}",
                    view.candidate.as_deref().unwrap_or("-")
                ),
                counter,
                speed: format!("Total time: {:.2} s", view.elapsed.unwrap_or(0.0)),
                elapsed: "Status: access granted".to_string(),
                action: "RESTART".to_string(),
            },
            EngineStatus::JustExhausted => Self {
                attempt: "Password not found".to_string(),
                counter,
                speed: "Speed: -".to_string(),
                elapsed: "Elapsed: -".to_string(),
                action: "RESTART".to_string(),
            },
        }
    }
}

/// Format with space-separated thousands groups ("1 234 567")
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Immutable renderable state for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Ticks processed so far, this one included
    pub tick: u64,
    /// Host timestamp this frame was computed for
    pub now: f64,
    pub status: EngineStatus,
    /// Floating panel vertical offset in pixels
    pub float_offset: f32,
    pub attack: AttackView,
    pub text: StatusText,
    /// Completion fraction, 0-1
    pub progress: f32,
    /// Progress ring label, e.g. "42%"
    pub progress_label: String,
    pub particles: Vec<ParticleSprite>,
    pub overlay: OverlayStyle,
}

impl FrameSnapshot {
    /// Nothing left to animate: run over, particles gone, overlay pulse done
    pub fn is_settled(&self) -> bool {
        self.status != EngineStatus::Running && self.particles.is_empty() && !self.overlay_animating()
    }

    fn overlay_animating(&self) -> bool {
        self.overlay.visible && !self.overlay.settled
    }
}
