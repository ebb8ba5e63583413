//! Deterministic simulation module
//!
//! All engine logic lives here. This module must stay free of rendering and
//! platform code:
//! - Time comes in as a host timestamp, never read from the OS
//! - Seeded RNG only
//! - Bounded work per tick (chunked scan)

pub mod attack;
pub mod particle;
pub mod progress;
pub mod snapshot;
pub mod state;
pub mod success;
pub mod tick;

pub use attack::{AdvanceResult, AttackProgress, AttackRun, AttackSimulator, secret_insert_index};
pub use particle::{Particle, ParticleField, ParticleSprite, ease_out_cubic};
pub use progress::ProgressIndicator;
pub use snapshot::{AttackView, FrameSnapshot, StatusText, group_thousands};
pub use state::{RngState, SimRng, Timestamp};
pub use success::{OverlayStyle, SuccessPresenter};
pub use tick::{Command, EngineStatus, SimulationClock};
