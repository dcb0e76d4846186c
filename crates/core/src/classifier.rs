//! Raised-finger classification for a single hand.
//!
//! Purely geometric: the thumb is judged on the horizontal axis against its
//! IP joint, the other four fingers on the vertical axis against their PIP
//! joints. This assumes an upright hand with the palm roughly facing the
//! camera and is an approximation under any other orientation.

use crate::handedness::Handedness;
use crate::landmarks::{Landmark, FINGER_TIP_PIP_PAIRS, LANDMARK_COUNT, THUMB_IP, THUMB_TIP};

/// Maximum value [`classify`] can return.
pub const MAX_FINGERS_PER_HAND: u32 = 5;

/// Count raised fingers on one hand.
///
/// `handedness` must be the *corrected* side. Returns a value in
/// `0..=MAX_FINGERS_PER_HAND`; a hand with fewer than 21 landmarks counts
/// as zero.
pub fn classify(landmarks: &[Landmark], handedness: Handedness) -> u32 {
    if landmarks.len() < LANDMARK_COUNT {
        return 0;
    }

    let thumb = u32::from(thumb_raised(landmarks, handedness));
    let fingers = FINGER_TIP_PIP_PAIRS
        .iter()
        .filter(|&&(tip, pip)| landmarks[tip].y < landmarks[pip].y)
        .count() as u32;

    thumb + fingers
}

/// The thumb extends sideways, towards the outside of the hand, so the
/// comparison direction flips with the side.
fn thumb_raised(landmarks: &[Landmark], handedness: Handedness) -> bool {
    let tip_x = landmarks[THUMB_TIP].x;
    let ip_x = landmarks[THUMB_IP].x;
    match handedness {
        Handedness::Right => tip_x > ip_x,
        Handedness::Left => tip_x < ip_x,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
