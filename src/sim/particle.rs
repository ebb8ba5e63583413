//! Success burst particles
//!
//! Particles are driven purely by their age: position, opacity and size are
//! recomputed from `t = age / life_span` each step, never integrated, so the
//! same timestamps always give the same frame.

use std::f32::consts::PI;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{SimRng, Timestamp};
use crate::config::{ParticleConfig, Span};

/// Cubic ease-out: fast start, settles at 1
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// What the renderer needs to draw one particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleSprite {
    pub pos: Vec2,
    pub radius: f32,
    /// 1 at birth, 0 at death
    pub opacity: f32,
}

/// A single glowing particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub origin: Vec2,
    pub vel: Vec2,
    pub birth: Timestamp,
    /// Seconds
    pub life_span: f32,
    pub radius: f32,
    bob_amplitude: f32,
    shrink: f32,
    /// Renderable state from the last step
    pos: Vec2,
    opacity: f32,
    size: f32,
}

impl Particle {
    pub fn new(origin: Vec2, vel: Vec2, birth: Timestamp, life_span: f32, radius: f32) -> Self {
        let defaults = ParticleConfig::default();
        Self {
            origin,
            vel,
            birth,
            life_span,
            radius,
            bob_amplitude: defaults.bob_amplitude,
            shrink: defaults.shrink,
            pos: origin,
            opacity: 1.0,
            size: radius,
        }
    }

    /// Override the motion shape (bob height, end-of-life shrink)
    pub fn with_motion(mut self, bob_amplitude: f32, shrink: f32) -> Self {
        self.bob_amplitude = bob_amplitude;
        self.shrink = shrink;
        self
    }

    /// Normalized age; the particle is live while this is below 1
    pub fn age(&self, now: Timestamp) -> f32 {
        (((now - self.birth) / self.life_span as f64) as f32).max(0.0)
    }

    pub fn is_alive(&self, now: Timestamp) -> bool {
        self.age(now) < 1.0
    }

    /// Recompute renderable state for `now`. Returns false once expired.
    pub fn step(&mut self, now: Timestamp) -> bool {
        let t = self.age(now);
        if t >= 1.0 {
            return false;
        }

        let eased = ease_out_cubic(t);
        let bob = self.bob_amplitude * (t * PI).sin();
        self.pos = self.origin + self.vel * eased + Vec2::new(0.0, bob);
        self.opacity = 1.0 - t;
        self.size = self.radius * (1.0 - t * self.shrink);
        true
    }

    pub fn sprite(&self) -> ParticleSprite {
        ParticleSprite {
            pos: self.pos,
            radius: self.size,
            opacity: self.opacity,
        }
    }
}

fn sample(rng: &mut SimRng, span: Span) -> f32 {
    if span.min >= span.max {
        span.min
    } else {
        rng.random_range(span.min..=span.max)
    }
}

/// The live particle set
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Spawn up to `count` particles around `origin`, born at `now`.
    ///
    /// Spawning stops at `config.max_particles` live particles. Returns how
    /// many were actually added.
    pub fn spawn_burst(
        &mut self,
        origin: Vec2,
        count: usize,
        now: Timestamp,
        rng: &mut SimRng,
        config: &ParticleConfig,
    ) -> usize {
        let room = config.max_particles.saturating_sub(self.particles.len());
        let count = count.min(room);

        for _ in 0..count {
            let jitter = Vec2::new(sample(rng, config.spread_x), sample(rng, config.spread_y));
            let life_span = sample(rng, config.life_span);
            let radius = sample(rng, config.radius);
            let vel = Vec2::new(sample(rng, config.velocity_x), sample(rng, config.velocity_y));
            self.particles.push(
                Particle::new(origin + jitter, vel, now, life_span, radius)
                    .with_motion(config.bob_amplitude, config.shrink),
            );
        }

        log::debug!(
            "Spawned {} particles at ({:.0}, {:.0}), {} live",
            count,
            origin.x,
            origin.y,
            self.particles.len()
        );
        count
    }

    /// Step every particle and drop the expired ones. Returns the number removed.
    pub fn step(&mut self, now: Timestamp) -> usize {
        let before = self.particles.len();
        self.particles.retain_mut(|p| p.step(now));
        before - self.particles.len()
    }

    pub fn sprites(&self) -> Vec<ParticleSprite> {
        self.particles.iter().map(Particle::sprite).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::RngState;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_particle_motion_midlife() {
        let mut p = Particle::new(Vec2::new(10.0, 20.0), Vec2::new(80.0, -100.0), 0.0, 1.0, 10.0);
        assert!(p.step(0.5));
        let s = p.sprite();
        // eased 0.875, bob 20 * sin(pi / 2)
        assert!((s.pos.x - (10.0 + 70.0)).abs() < 1e-4);
        assert!((s.pos.y - (20.0 - 87.5 + 20.0)).abs() < 1e-4);
        assert!((s.opacity - 0.5).abs() < 1e-6);
        assert!((s.radius - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_particle_dies_at_end_of_life() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::X, 100.0, 1.25, 6.0);
        assert!(p.step(100.0));
        assert!(p.step(101.2499));
        assert!(!p.step(101.25));
        assert!(!p.step(102.0));
    }

    #[test]
    fn test_dead_particle_keeps_last_frame() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(0.0, -50.0), 0.0, 1.0, 6.0);
        p.step(0.9);
        let last = p.sprite();
        assert!(!p.step(1.5));
        assert_eq!(p.sprite(), last);
    }

    #[test]
    fn test_burst_respects_ranges() {
        let config = ParticleConfig::default();
        let mut rng = RngState::new(17).to_rng();
        let mut field = ParticleField::new();
        let origin = Vec2::new(640.0, 144.0);
        assert_eq!(field.spawn_burst(origin, 36, 0.0, &mut rng, &config), 36);

        for p in field.iter() {
            assert!(config.radius.contains(p.radius));
            assert!(config.life_span.contains(p.life_span));
            assert!(config.velocity_x.contains(p.vel.x));
            assert!(config.velocity_y.contains(p.vel.y));
            assert!(p.vel.y < 0.0);
            assert!((p.origin.x - origin.x).abs() <= 140.0 + 1e-3);
            assert!((p.origin.y - origin.y).abs() <= 40.0 + 1e-3);
        }
    }

    #[test]
    fn test_burst_capped() {
        let config = ParticleConfig {
            max_particles: 50,
            ..ParticleConfig::default()
        };
        let mut rng = RngState::new(1).to_rng();
        let mut field = ParticleField::new();
        assert_eq!(field.spawn_burst(Vec2::ZERO, 36, 0.0, &mut rng, &config), 36);
        assert_eq!(field.spawn_burst(Vec2::ZERO, 36, 0.0, &mut rng, &config), 14);
        assert_eq!(field.len(), 50);
    }

    #[test]
    fn test_field_drains() {
        let config = ParticleConfig::default();
        let mut rng = RngState::new(23).to_rng();
        let mut field = ParticleField::new();
        field.spawn_burst(Vec2::ZERO, 36, 0.0, &mut rng, &config);

        let mut now = 0.0;
        let mut last = field.len();
        while now <= config.max_life_span() as f64 + 0.1 {
            field.step(now);
            assert!(field.len() <= last);
            last = field.len();
            now += 1.0 / 60.0;
        }
        assert!(field.is_empty());
    }
}
