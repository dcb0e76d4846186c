//! Handedness labels and mirrored-image correction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Anatomical side of a detected hand.
///
/// Deserialized through [`FromStr`], so an unknown detector label surfaces
/// as [`CoreError::UnknownHandedness`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// The opposite side.
    pub fn swapped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Label as emitted by the landmark detector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Handedness {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Left" => Ok(Self::Left),
            "Right" => Ok(Self::Right),
            other => Err(CoreError::UnknownHandedness(other.to_string())),
        }
    }
}

impl TryFrom<String> for Handedness {
    type Error = CoreError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// Map a detector label to the true anatomical side.
///
/// A detector fed a horizontally mirrored image sees every hand as its
/// opposite, so the label is swapped when `mirrored` is set and passed
/// through otherwise.
pub fn correct(raw: Handedness, mirrored: bool) -> Handedness {
    if mirrored {
        raw.swapped()
    } else {
        raw
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- correct --------------------------------------------------------------

    #[test]
    fn mirrored_swaps_label() {
        assert_eq!(correct(Handedness::Left, true), Handedness::Right);
        assert_eq!(correct(Handedness::Right, true), Handedness::Left);
    }

    #[test]
    fn unmirrored_passes_through() {
        assert_eq!(correct(Handedness::Left, false), Handedness::Left);
        assert_eq!(correct(Handedness::Right, false), Handedness::Right);
    }

    #[test]
    fn double_mirroring_is_identity() {
        for side in [Handedness::Left, Handedness::Right] {
            assert_eq!(correct(correct(side, true), true), side);
        }
    }

    // -- parsing --------------------------------------------------------------

    #[test]
    fn parses_detector_labels() {
        assert_eq!("Left".parse::<Handedness>().unwrap(), Handedness::Left);
        assert_eq!("Right".parse::<Handedness>().unwrap(), Handedness::Right);
    }

    #[test]
    fn unknown_label_rejected() {
        assert_matches!(
            "Both".parse::<Handedness>(),
            Err(CoreError::UnknownHandedness(label)) if label == "Both"
        );
    }

    #[test]
    fn deserializes_through_label_parser() {
        let side: Handedness = serde_json::from_str(r#""Right""#).unwrap();
        assert_eq!(side, Handedness::Right);

        let err = serde_json::from_str::<Handedness>(r#""right""#).unwrap_err();
        assert!(err.to_string().contains("Unknown handedness label: 'right'"));
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&Handedness::Left).unwrap(), r#""Left""#);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Handedness::Right.to_string(), "Right");
    }
}
