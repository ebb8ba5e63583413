//! Terminal adapter: one status line per frame
//!
//! The interactive mode redraws a single coloured line in place using
//! crossterm; line mode prints plain newline-terminated text for logs and pipes.

use std::io::Write;

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use super::Renderer;
use super::style::{Rgba, overlay_color, palette_color, progress_bar, to_rgb8};
use crate::config::Palette;
use crate::error::Result;
use crate::sim::{EngineStatus, FrameSnapshot};

const BAR_WIDTH: usize = 24;
const BANNER: &str = "ACCESS GRANTED";

fn term_color(color: Rgba) -> Color {
    let [r, g, b] = to_rgb8(color);
    Color::Rgb { r, g, b }
}

/// Redraws a status line in place, or writes full lines when `line_mode` is set
pub struct TerminalRenderer<W: Write> {
    out: W,
    palette: Palette,
    line_mode: bool,
    last_status: Option<EngineStatus>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            palette: Palette::default(),
            line_mode: false,
            last_status: None,
        }
    }

    /// Emit one uncoloured line per frame (logs, pipes, tests)
    pub fn with_line_mode(mut self) -> Self {
        self.line_mode = true;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Status text between the bar and the banner
    fn body(frame: &FrameSnapshot) -> String {
        let mut body = format!(
            " {:>4} | {} | {} | {} | {}",
            frame.progress_label,
            frame.text.attempt,
            frame.text.counter,
            frame.text.speed,
            frame.text.elapsed,
        );
        if !frame.particles.is_empty() {
            body.push_str(&format!(" | {} sparks", frame.particles.len()));
        }
        body
    }

    /// Plain text for one frame, without line terminators
    pub fn format_frame(frame: &FrameSnapshot) -> String {
        let mut line = progress_bar(frame.progress, BAR_WIDTH);
        line.push_str(&Self::body(frame));
        if frame.overlay.visible {
            line.push_str(" | ");
            line.push_str(BANNER);
        }
        line
    }

    fn draw_styled(&mut self, frame: &FrameSnapshot) -> Result<()> {
        let accent = term_color(palette_color(&self.palette.accent));
        let body_color = match frame.status {
            EngineStatus::JustExhausted => term_color(palette_color(&self.palette.error)),
            _ => term_color(palette_color(&self.palette.text_primary)),
        };

        queue!(
            self.out,
            cursor::MoveToColumn(0),
            SetForegroundColor(accent),
            Print(progress_bar(frame.progress, BAR_WIDTH)),
            SetForegroundColor(body_color),
            Print(Self::body(frame)),
        )?;
        if frame.overlay.visible {
            let banner = term_color(overlay_color(&frame.overlay, &self.palette));
            queue!(
                self.out,
                ResetColor,
                Print(" | "),
                SetForegroundColor(banner),
                Print(BANNER),
            )?;
        }
        queue!(self.out, ResetColor, Clear(ClearType::UntilNewLine))?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, frame: &FrameSnapshot) -> Result<()> {
        let status_changed = self.last_status != Some(frame.status);

        if self.line_mode {
            writeln!(self.out, "{}", Self::format_frame(frame))?;
        } else {
            // Keep the final line of each phase on screen
            if status_changed && self.last_status.is_some() {
                queue!(self.out, Print("\n"))?;
            }
            self.draw_styled(frame)?;
        }
        self.out.flush()?;
        self.last_status = Some(frame.status);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if !self.line_mode {
            queue!(self.out, ResetColor, Print("\n"))?;
        }
        self.out.flush()?;
        Ok(())
    }
}
