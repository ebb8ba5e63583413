//! Completion value behind the progress ring

use serde::{Deserialize, Serialize};

/// Clamped completion fraction with display helpers
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressIndicator {
    fraction: f32,
}

impl ProgressIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set completion; NaN reads as 0
    pub fn set(&mut self, fraction: f32) {
        self.fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
    }

    pub fn reset(&mut self) {
        self.fraction = 0.0;
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Whole percent, truncated
    pub fn percent(&self) -> u32 {
        (self.fraction * 100.0) as u32
    }

    /// Zero-padded label, e.g. "07%"
    pub fn label(&self) -> String {
        format!("{:02}%", self.percent())
    }

    /// Ring sweep in degrees
    pub fn arc_extent(&self) -> f32 {
        360.0 * self.fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps() {
        let mut p = ProgressIndicator::new();
        p.set(1.7);
        assert_eq!(p.fraction(), 1.0);
        assert_eq!(p.label(), "100%");
        p.set(-0.2);
        assert_eq!(p.fraction(), 0.0);
        p.set(f32::NAN);
        assert_eq!(p.fraction(), 0.0);
    }

    #[test]
    fn test_label_and_extent() {
        let mut p = ProgressIndicator::new();
        p.set(0.075);
        assert_eq!(p.percent(), 7);
        assert_eq!(p.label(), "07%");
        assert!((p.arc_extent() - 27.0).abs() < 1e-4);
        p.reset();
        assert_eq!(p.label(), "00%");
    }
}
