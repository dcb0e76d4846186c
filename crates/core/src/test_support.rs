//! Canonical landmark sets shared by the unit tests.

use crate::handedness::Handedness;
use crate::landmarks::{Landmark, FINGER_TIP_PIP_PAIRS, LANDMARK_COUNT, THUMB_IP, THUMB_TIP};

/// Every finger extended: tips above their PIP joints and the thumb tip
/// past its IP joint on the outer side of `side`.
pub(crate) fn open_hand(side: Handedness) -> Vec<Landmark> {
    let mut hand = vec![Landmark::new(0.5, 0.5); LANDMARK_COUNT];
    for (tip, pip) in FINGER_TIP_PIP_PAIRS {
        hand[pip] = Landmark::new(0.5, 0.5);
        hand[tip] = Landmark::new(0.5, 0.2);
    }
    hand[THUMB_IP] = Landmark::new(0.5, 0.6);
    hand[THUMB_TIP] = match side {
        Handedness::Right => Landmark::new(0.7, 0.6),
        Handedness::Left => Landmark::new(0.3, 0.6),
    };
    hand
}

/// Every finger curled: tips below their PIP joints and the thumb tip
/// tucked towards the palm.
pub(crate) fn fist(side: Handedness) -> Vec<Landmark> {
    let mut hand = vec![Landmark::new(0.5, 0.5); LANDMARK_COUNT];
    for (tip, pip) in FINGER_TIP_PIP_PAIRS {
        hand[pip] = Landmark::new(0.5, 0.5);
        hand[tip] = Landmark::new(0.5, 0.7);
    }
    hand[THUMB_IP] = Landmark::new(0.5, 0.6);
    hand[THUMB_TIP] = match side {
        Handedness::Right => Landmark::new(0.4, 0.6),
        Handedness::Left => Landmark::new(0.6, 0.6),
    };
    hand
}
