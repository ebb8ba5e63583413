//! Error types for the simulation engine.
//!
//! The core itself has a single failure mode (starting a run without
//! candidates); the rest comes from the collaborators around it: config
//! files and dictionary files.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors surfaced by the engine and its loaders.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Caller handed the engine something it cannot run with
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration failed validation
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Reading or writing a file failed
    #[error("i/o error on {path}: {source}")]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Writing to a render surface failed
    #[error("render surface error: {0}")]
    Surface(#[from] io::Error),

    /// JSON (de)serialization failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true for errors caused by caller input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InvalidConfig(_))
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, EngineError>;
