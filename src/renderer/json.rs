//! JSON-lines adapter for external UIs

use std::io::Write;

use super::Renderer;
use crate::error::Result;
use crate::sim::FrameSnapshot;

/// Serializes each snapshot as one line of JSON
pub struct JsonLinesRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn draw(&mut self, frame: &FrameSnapshot) -> Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::sim::{EngineStatus, SimulationClock};

    #[test]
    fn test_snapshot_lines_parse_back() {
        let words = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut clock = SimulationClock::new(EngineConfig::seeded(4), words, "b").unwrap();
        clock.start();
        let mut renderer = JsonLinesRenderer::new(Vec::new());
        let frame = clock.tick(0.5);
        renderer.draw(&frame).unwrap();
        renderer.finish().unwrap();

        let bytes = renderer.into_inner();
        let text = String::from_utf8(bytes).unwrap();
        let back: FrameSnapshot = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(back.status, EngineStatus::JustFound);
        assert_eq!(back.particles.len(), frame.particles.len());
    }
}
