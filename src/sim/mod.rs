//! Deterministic game core
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per captured video frame
//! - Seeded RNG only (confetti)
//! - No capture, rendering, or platform dependencies

pub mod confetti;
pub mod state;
pub mod tick;

pub use confetti::{Confetti, ConfettiSky};
pub use state::{GameClock, GameState, HeldDisk, rod_index_from_x};
pub use tick::{FrameInput, HeldSnapshot, ParticleSnapshot, RenderSnapshot, tick};
