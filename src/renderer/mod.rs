//! Rendering adapters
//!
//! The engine never draws. Each adapter turns a [`FrameSnapshot`] into output
//! for one surface; a GUI host would add its own adapter next to these.

pub mod json;
pub mod style;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

pub use json::JsonLinesRenderer;
#[cfg(not(target_arch = "wasm32"))]
pub use terminal::TerminalRenderer;

use crate::error::Result;
use crate::sim::FrameSnapshot;

/// A surface that can draw frame snapshots
pub trait Renderer {
    /// Draw one frame
    fn draw(&mut self, frame: &FrameSnapshot) -> Result<()>;

    /// Flush anything buffered once the host loop ends
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
