//! Colour helpers shared by the render adapters

use crate::config::Palette;
use crate::sim::OverlayStyle;

/// RGBA, each channel 0-1
pub type Rgba = [f32; 4];

/// Parse "#RRGGBB" or "#RRGGBBAA"
pub fn parse_hex(hex: &str) -> Option<Rgba> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    let alpha = if hex.len() == 8 { channel(6)? } else { 1.0 };
    Some([channel(0)?, channel(2)?, channel(4)?, alpha])
}

/// 8-bit RGB channels for terminal colour (alpha dropped)
pub fn to_rgb8(color: Rgba) -> [u8; 3] {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    [c(color[0]), c(color[1]), c(color[2])]
}

/// Palette entry with a white fallback for malformed hex
pub fn palette_color(hex: &str) -> Rgba {
    parse_hex(hex).unwrap_or([1.0, 1.0, 1.0, 1.0])
}

/// Overlay text colour: glow channel while pulsing, resting glow colour once settled
pub fn overlay_color(style: &OverlayStyle, palette: &Palette) -> Rgba {
    if style.settled {
        return palette_color(&palette.success_glow);
    }
    [style.opacity, style.glow, 1.0, style.opacity]
}

/// Text bar for terminal output, `width` cells
pub fn progress_bar(progress: f32, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
