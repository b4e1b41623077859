//! Per-frame orchestration
//!
//! One tick per captured video frame: interpret the hand observation,
//! drive the puzzle while the game is unresolved, latch the win, advance
//! the confetti afterwards, and hand the renderer an immutable snapshot.
//! Data flows one way; nothing here calls back upstream.

use serde::Serialize;

use super::confetti::ConfettiSky;
use super::state::GameState;
use crate::gesture::{self, GestureEvent, HandFrame};

/// Everything the capture collaborator supplies for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// At most one detected hand; `None` means "no input this frame"
    pub hand: Option<HandFrame>,
    /// Frame dimensions in pixels
    pub width: f32,
    pub height: f32,
}

/// Held disk as exposed to the renderer
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HeldSnapshot {
    pub size: u8,
    pub pos: (i32, i32),
}

/// Confetti particle as exposed to the renderer (velocity and lifetime
/// stay internal)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParticleSnapshot {
    pub pos: (f32, f32),
    pub color: (u8, u8, u8),
}

/// Immutable per-frame render contract
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub rods: [Vec<u8>; 3],
    pub held: Option<HeldSnapshot>,
    pub elapsed_seconds: u64,
    pub has_won: bool,
    pub particles: Vec<ParticleSnapshot>,
}

/// Advance the game by one frame and produce the render snapshot.
///
/// While unresolved, `Pinching` frames drive pickup/drag and the first
/// hand-present non-pinch frame after a pinch releases the disk
/// (edge-triggered; a vanished hand freezes the held disk instead of
/// dropping it). The win check runs only until it first passes, after
/// which input is ignored and only the confetti advances.
pub fn tick(state: &mut GameState, sky: &mut ConfettiSky, input: &FrameInput) -> RenderSnapshot {
    let event = gesture::interpret(input.hand.as_ref(), input.width, input.height);

    if !state.has_won {
        match event {
            GestureEvent::Pinching(pos) => {
                state.on_pinch(pos, input.width);
                state.pinch_active = true;
            }
            GestureEvent::Pointing(pos) => {
                if state.pinch_active {
                    log::debug!("pinch released at {pos}");
                    state.on_release(pos, input.width);
                }
                state.pinch_active = false;
            }
            // No input this frame; the pinch bit carries over so a hand
            // that reappears unpinched still releases.
            GestureEvent::NoHand => {}
        }

        if state.is_won() {
            state.has_won = true;
            state.clock.stop();
            log::info!("solved in {}s", state.clock.elapsed_secs());
            sky.spawn_burst(input.width);
        }
    } else {
        sky.update();
    }

    snapshot(state, sky)
}

fn snapshot(state: &GameState, sky: &ConfettiSky) -> RenderSnapshot {
    RenderSnapshot {
        rods: state.rods.clone(),
        held: state.held.map(|h| HeldSnapshot {
            size: h.size,
            pos: (h.pos.x as i32, h.pos.y as i32),
        }),
        elapsed_seconds: state.clock.elapsed_secs(),
        has_won: state.has_won,
        particles: sky
            .particles()
            .iter()
            .map(|p| ParticleSnapshot {
                pos: (p.pos.x, p.pos.y),
                color: (p.color[0], p.color[1], p.color[2]),
            })
            .collect(),
    }
}
