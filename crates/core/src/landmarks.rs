//! Hand landmark model.
//!
//! A detected hand is reported as [`LANDMARK_COUNT`] normalized 2-D points
//! in a fixed anatomical order (wrist first, then four joints per digit from
//! the thumb outwards). Coordinates are relative to the frame: `x` grows to
//! the right, `y` grows downwards.

use serde::{Deserialize, Serialize};

use crate::handedness::Handedness;

// ---------------------------------------------------------------------------
// Landmark indices
// ---------------------------------------------------------------------------

/// Number of landmarks in a complete hand observation.
pub const LANDMARK_COUNT: usize = 21;

pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// `(tip, pip)` index pairs for the four non-thumb fingers.
pub const FINGER_TIP_PIP_PAIRS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A single normalized point, both coordinates nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One detected hand as reported by the landmark source.
///
/// `handedness` is the *raw* label, i.e. what the detector saw. It still has
/// to go through [`correct`](crate::handedness::correct) before
/// classification when the frame was mirrored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    pub handedness: Handedness,
    pub landmarks: Vec<Landmark>,
}

impl HandObservation {
    pub fn new(handedness: Handedness, landmarks: Vec<Landmark>) -> Self {
        Self {
            handedness,
            landmarks,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
