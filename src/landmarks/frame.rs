//! Raw per-frame detector output.
//!
//! A [`DetectionFrame`] is exactly what the external detector hands to its
//! per-frame callback.  Nothing here is validated yet; [`RawHand::pose`]
//! performs the 21-landmark check.

use serde::{Deserialize, Serialize};

use super::pose::{HandPose, Handedness, Landmark, PoseError};

/// One detected hand, as reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawHand {
    #[serde(default)]
    pub handedness: Handedness,
    pub landmarks: Vec<Landmark>,
}

impl RawHand {
    pub fn new(handedness: Handedness, landmarks: Vec<Landmark>) -> Self {
        Self {
            handedness,
            landmarks,
        }
    }

    /// Validate the landmark list into a [`HandPose`].
    pub fn pose(&self) -> Result<HandPose, PoseError> {
        HandPose::from_slice(&self.landmarks)
    }
}

/// Zero or more hands seen in a single camera frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionFrame {
    #[serde(default)]
    pub hands: Vec<RawHand>,
}

impl DetectionFrame {
    /// A frame in which the detector found nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_hands(hands: Vec<RawHand>) -> Self {
        Self { hands }
    }

    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}
