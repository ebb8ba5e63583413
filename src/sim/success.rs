//! "ACCESS GRANTED" overlay animation
//!
//! A one-shot pulse: progress climbs by a fixed amount every tick (frame
//! rate dependent on purpose), the overlay swells and brightens, then the
//! progress wraps to 0 while the overlay stays lit in its resting colour.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::config::OverlayConfig;

/// Render parameters for the overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    /// Overlay is on screen
    pub visible: bool,
    /// Font scale multiplier (1 = base size)
    pub scale: f32,
    /// 0-1
    pub opacity: f32,
    /// Glow channel, 0-1
    pub glow: f32,
    /// Vertical lift relative to window height
    pub lift: f32,
    /// Animation finished; draw in the fully-lit resting colour
    pub settled: bool,
}

impl OverlayStyle {
    pub const HIDDEN: Self = Self {
        visible: false,
        scale: 1.0,
        opacity: 0.0,
        glow: 0.0,
        lift: 0.0,
        settled: false,
    };
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::HIDDEN
    }
}

/// Drives the overlay pulse
#[derive(Debug, Clone)]
pub struct SuccessPresenter {
    config: OverlayConfig,
    progress: f32,
    active: bool,
    style: OverlayStyle,
}

impl SuccessPresenter {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            progress: 0.0,
            active: false,
            style: OverlayStyle::HIDDEN,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn style(&self) -> OverlayStyle {
        self.style
    }

    /// Arm the pulse and show the overlay. Re-arms if already running.
    pub fn activate(&mut self) {
        self.progress = self.config.initial_progress;
        self.active = true;
        self.style = OverlayStyle {
            visible: true,
            ..OverlayStyle::HIDDEN
        };
    }

    /// Hide the overlay and cancel any pulse in flight
    pub fn dismiss(&mut self) {
        self.progress = 0.0;
        self.active = false;
        self.style = OverlayStyle::HIDDEN;
    }

    /// Advance one tick. No-op while inactive.
    pub fn step(&mut self) {
        if !self.active {
            return;
        }

        let c = &self.config;
        self.progress = (self.progress + c.step).min(1.0);
        let p = self.progress;
        let swell = (p * PI).sin();

        self.style = OverlayStyle {
            visible: true,
            scale: 1.0 + c.scale_peak * swell,
            opacity: (p * c.fade_in_rate).min(1.0),
            glow: ((c.glow_base + c.glow_swing * swell) / 255.0).clamp(0.0, 1.0),
            lift: c.lift * swell,
            settled: false,
        };

        if p >= 1.0 {
            // Hold the final lit frame
            self.progress = 0.0;
            self.active = false;
            self.style.opacity = 1.0;
            self.style.settled = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presenter() -> SuccessPresenter {
        SuccessPresenter::new(OverlayConfig::default())
    }

    #[test]
    fn test_activate_shows_first_frame() {
        let mut s = presenter();
        assert!(!s.style().visible);
        s.activate();
        assert!(s.is_active());
        assert!(s.progress() > 0.0);
        assert!(s.style().visible);
    }

    #[test]
    fn test_pulse_completes_in_fifty_ticks() {
        let mut s = presenter();
        s.activate();
        let mut last = s.progress();
        let mut ticks = 0;
        while s.is_active() {
            s.step();
            ticks += 1;
            if s.is_active() {
                assert!(s.progress() >= last);
                last = s.progress();
            }
            assert!(ticks <= 100, "pulse never finished");
        }
        assert_eq!(ticks, 50);
        assert_eq!(s.progress(), 0.0);
    }

    #[test]
    fn test_settles_lit() {
        let mut s = presenter();
        s.activate();
        while s.is_active() {
            s.step();
        }
        let style = s.style();
        assert!(style.visible);
        assert!(style.settled);
        assert_eq!(style.opacity, 1.0);
        assert!((style.scale - 1.0).abs() < 1e-5);

        // Further steps leave the resting frame alone
        s.step();
        assert_eq!(s.style(), style);
    }

    #[test]
    fn test_midpoint_peaks() {
        let mut s = presenter();
        s.activate();
        for _ in 0..25 {
            s.step();
        }
        // progress 0.51
        let style = s.style();
        assert!(style.scale > 1.19);
        assert!((style.opacity - 0.765).abs() < 1e-4);
        assert!(style.glow > 0.99);
    }

    #[test]
    fn test_rearm_restarts_pulse() {
        let mut s = presenter();
        s.activate();
        for _ in 0..10 {
            s.step();
        }
        s.activate();
        assert!((s.progress() - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_dismiss_hides() {
        let mut s = presenter();
        s.activate();
        s.step();
        s.dismiss();
        assert!(!s.is_active());
        assert_eq!(s.style(), OverlayStyle::HIDDEN);
    }
}
