//! Per-frame finger total.

use crate::classifier::classify;
use crate::handedness::correct;
use crate::landmarks::HandObservation;

/// Sum the raised fingers of every hand detected in one frame.
///
/// Each observation's raw label is corrected for `mirrored` before it is
/// classified. Hand order does not matter and zero hands yield `0`.
pub fn aggregate(hands: &[HandObservation], mirrored: bool) -> u32 {
    hands
        .iter()
        .map(|hand| classify(&hand.landmarks, correct(hand.handedness, mirrored)))
        .sum()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
