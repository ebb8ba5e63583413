//! Shared simulation primitives
//!
//! Timestamps and the seeded RNG every random draw goes through.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Wall-clock seconds as supplied by the host
pub type Timestamp = f64;

/// RNG used for shuffles, spawn parameters and the float offset
pub type SimRng = Pcg32;

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Use the given seed, or draw a fresh one from the thread RNG
    pub fn from_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::new(rand::rng().random()),
        }
    }

    pub fn to_rng(&self) -> SimRng {
        Pcg32::seed_from_u64(self.seed)
    }
}
