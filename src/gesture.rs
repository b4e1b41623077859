//! Pinch/point interpretation from hand landmarks
//!
//! The vision collaborator hands us, per frame, either nothing or the
//! thumb-tip and index-fingertip of a single tracked hand in normalized
//! [0,1] coordinates. This module turns that into one of three discrete
//! events. It is a pure function of the landmarks and frame dimensions;
//! edge detection across frames lives in `sim::tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PINCH_THRESHOLD;

/// Hand landmark indices (MediaPipe hand landmark model convention)
///
/// The full model emits 21 landmarks; the game consumes two.
pub mod landmarks {
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_FINGER_TIP: usize = 8;
}

/// A single landmark in normalized [0,1] frame coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another landmark, in normalized space
    pub fn distance_to(&self, other: &Landmark) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// The two landmarks the game consumes, for one detected hand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandFrame {
    pub thumb_tip: Landmark,
    pub index_tip: Landmark,
}

impl HandFrame {
    pub fn new(thumb_tip: Landmark, index_tip: Landmark) -> Self {
        Self { thumb_tip, index_tip }
    }

    /// Thumb and index fingertip close enough to count as a pinch
    pub fn is_pinched(&self) -> bool {
        self.thumb_tip.distance_to(&self.index_tip) < PINCH_THRESHOLD
    }

    /// Index fingertip projected into pixel space
    pub fn pointer_px(&self, width: f32, height: f32) -> Vec2 {
        Vec2::new(self.index_tip.x * width, self.index_tip.y * height)
    }
}

/// Discrete per-frame gesture event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// No hand detected this frame; downstream treats this as no input
    NoHand,
    /// Hand present, fingers apart; position is the index tip in pixels
    Pointing(Vec2),
    /// Thumb and index pinched together; position is the index tip in pixels
    Pinching(Vec2),
}

/// Convert an optional hand observation into a gesture event.
///
/// Pointer position is always the index fingertip, scaled by the frame
/// dimensions. No state is kept here.
pub fn interpret(hand: Option<&HandFrame>, width: f32, height: f32) -> GestureEvent {
    match hand {
        None => GestureEvent::NoHand,
        Some(h) => {
            let pos = h.pointer_px(width, height);
            if h.is_pinched() {
                GestureEvent::Pinching(pos)
            } else {
                GestureEvent::Pointing(pos)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(thumb: (f32, f32), index: (f32, f32)) -> HandFrame {
        HandFrame::new(
            Landmark::new(thumb.0, thumb.1),
            Landmark::new(index.0, index.1),
        )
    }

    #[test]
    fn test_no_hand() {
        assert_eq!(interpret(None, 640.0, 480.0), GestureEvent::NoHand);
    }

    #[test]
    fn test_pinch_within_threshold() {
        let h = hand((0.50, 0.50), (0.53, 0.50));
        assert!(h.is_pinched());
        match interpret(Some(&h), 640.0, 480.0) {
            GestureEvent::Pinching(pos) => {
                assert!((pos.x - 0.53 * 640.0).abs() < 1e-4);
                assert!((pos.y - 0.50 * 480.0).abs() < 1e-4);
            }
            other => panic!("expected Pinching, got {other:?}"),
        }
    }

    #[test]
    fn test_fingers_apart_is_pointing() {
        let h = hand((0.3, 0.5), (0.6, 0.5));
        assert!(!h.is_pinched());
        match interpret(Some(&h), 640.0, 480.0) {
            GestureEvent::Pointing(pos) => {
                assert!((pos.x - 0.6 * 640.0).abs() < 1e-4);
            }
            other => panic!("expected Pointing, got {other:?}"),
        }
    }

    #[test]
    fn test_threshold_boundary() {
        // Exactly at the threshold is not a pinch (strict less-than)
        let h = hand((0.5, 0.5), (0.5 + PINCH_THRESHOLD, 0.5));
        assert!(!h.is_pinched());
        // Just inside
        let h = hand((0.5, 0.5), (0.5 + PINCH_THRESHOLD - 0.001, 0.5));
        assert!(h.is_pinched());
    }

    #[test]
    fn test_distance_uses_both_axes() {
        let h = hand((0.5, 0.5), (0.54, 0.55));
        // hypot(0.04, 0.05) ~ 0.064 > 0.06
        assert!(!h.is_pinched());
    }
}
