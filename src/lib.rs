//! Pinch Hanoi - a hand-gesture-controlled Tower of Hanoi
//!
//! Core modules:
//! - `gesture`: Pinch/point interpretation from hand landmarks
//! - `sim`: Deterministic game core (rods, held disk, confetti, frame tick)
//!
//! Video capture, hand-landmark inference, and on-screen drawing are
//! external collaborators: the core consumes a per-frame `Option<HandFrame>`
//! and emits an immutable `RenderSnapshot`.

pub mod gesture;
pub mod sim;

pub use gesture::{GestureEvent, HandFrame, interpret};
pub use sim::{ConfettiSky, FrameInput, GameState, RenderSnapshot, tick};

/// Game configuration constants
pub mod consts {
    /// Number of rods (fixed for the process lifetime)
    pub const ROD_COUNT: usize = 3;
    /// Number of disks; sizes run 1 (smallest) to DISK_COUNT (largest)
    pub const DISK_COUNT: u8 = 3;

    /// Pinch threshold: thumb-tip to index-fingertip distance in
    /// normalized [0,1] frame coordinates. Tuned, not derived.
    pub const PINCH_THRESHOLD: f32 = 0.06;

    /// Confetti burst size on win
    pub const CONFETTI_COUNT: usize = 200;
    /// Confetti spawns within this many pixels of the top of the frame
    pub const CONFETTI_SPAWN_BAND: f32 = 50.0;
    /// Downward acceleration applied to confetti velocity each tick
    pub const CONFETTI_GRAVITY: f32 = 0.2;
    /// Confetti lifetime range in ticks (inclusive)
    pub const CONFETTI_LIFE_MIN: i32 = 60;
    /// Upper end of the confetti lifetime range
    pub const CONFETTI_LIFE_MAX: i32 = 100;
}
