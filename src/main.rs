//! Pinch Hanoi entry point
//!
//! The real frontend pairs this core with a webcam and a hand-landmark
//! model. Those collaborators live outside the crate, so the binary drives
//! the full per-frame loop from a scripted hand source that performs the
//! canonical 7-move solve, printing each render snapshot transition.

use pinch_hanoi::gesture::{HandFrame, Landmark};
use pinch_hanoi::sim::{ConfettiSky, FrameInput, GameState, tick};

const FRAME_WIDTH: f32 = 640.0;
const FRAME_HEIGHT: f32 = 480.0;

/// Scripted stand-in for the vision collaborator: yields one
/// `Option<HandFrame>` per frame, walking the optimal solution as
/// pinch/drag/release triples with a lost-hand gap in the middle.
struct ScriptedHand {
    frames: std::vec::IntoIter<Option<HandFrame>>,
}

impl ScriptedHand {
    fn solve_script() -> Self {
        let moves = [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)];
        let mut frames = Vec::new();
        for (from, to) in moves {
            frames.push(Some(hand_over(from, true)));
            frames.push(Some(hand_over(to, true)));
            // Tracking drops out mid-drag on the way to the target;
            // the held disk must freeze rather than fall.
            frames.push(None);
            frames.push(Some(hand_over(to, true)));
            frames.push(Some(hand_over(to, false)));
        }
        Self {
            frames: frames.into_iter(),
        }
    }

    /// Next frame's observation, or `None` when the source is exhausted
    fn next_frame(&mut self) -> Option<Option<HandFrame>> {
        self.frames.next()
    }
}

/// A hand hovering over the given rod's column, pinched or open
fn hand_over(rod: usize, pinched: bool) -> HandFrame {
    let x = (rod as f32 + 0.5) / 3.0;
    let spread = if pinched { 0.02 } else { 0.25 };
    HandFrame::new(Landmark::new(x + spread, 0.5), Landmark::new(x, 0.5))
}

fn main() {
    env_logger::init();
    log::info!("Pinch Hanoi starting (scripted demo source)");

    let mut state = GameState::new();
    let mut sky = ConfettiSky::new(rand::random());
    let mut source = ScriptedHand::solve_script();

    // One tick per frame until the source is exhausted, then keep ticking
    // until the celebration drains, exactly as a camera loop would.
    while let Some(hand) = source.next_frame() {
        let input = FrameInput {
            hand,
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
        };
        tick(&mut state, &mut sky, &input);
    }

    let idle = FrameInput {
        hand: None,
        width: FRAME_WIDTH,
        height: FRAME_HEIGHT,
    };
    let mut snapshot = tick(&mut state, &mut sky, &idle);
    while !snapshot.particles.is_empty() {
        snapshot = tick(&mut state, &mut sky, &idle);
    }

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
    log::info!(
        "solved = {}, elapsed = {}s",
        snapshot.has_won,
        snapshot.elapsed_seconds
    );
}
