//! [`Landmark`], [`HandPose`] and [`Handedness`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of landmarks the detector reports per hand.
pub const LANDMARK_COUNT: usize = 21;

// ---------------------------------------------------------------------------
// PoseError
// ---------------------------------------------------------------------------

/// A landmark list that cannot be treated as a hand pose.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoseError {
    /// The detector contract is 21 points per hand; anything else is a defect
    /// upstream and must not reach the classifier.
    #[error("hand pose needs {expected} landmarks, got {got}")]
    WrongLandmarkCount { expected: usize, got: usize },
}

// ---------------------------------------------------------------------------
// Landmark
// ---------------------------------------------------------------------------

/// A single detector point.
///
/// `x` and `y` are normalised to the frame (y grows downward); `z` is a
/// unit-less depth relative to the wrist.  Stored as `f64` so exported
/// datasets keep the detector's full precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Euclidean distance in the image plane; `z` is ignored.
pub fn planar_distance(a: &Landmark, b: &Landmark) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

// ---------------------------------------------------------------------------
// HandPose
// ---------------------------------------------------------------------------

/// Exactly [`LANDMARK_COUNT`] landmarks in anatomical order.
///
/// Serialises as a plain JSON array of `{x, y, z}` objects; deserialising an
/// array of the wrong length fails with [`PoseError::WrongLandmarkCount`].
///
/// ```
/// use sign_to_text::landmarks::{HandPose, Landmark, PoseError};
///
/// let pose = HandPose::try_from(vec![Landmark::default(); 21]).unwrap();
/// assert_eq!(pose.landmarks().len(), 21);
///
/// let err = HandPose::try_from(vec![Landmark::default(); 20]).unwrap_err();
/// assert_eq!(err, PoseError::WrongLandmarkCount { expected: 21, got: 20 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct HandPose {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandPose {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Validate a borrowed landmark slice.
    pub fn from_slice(landmarks: &[Landmark]) -> Result<Self, PoseError> {
        let points: [Landmark; LANDMARK_COUNT] =
            landmarks
                .try_into()
                .map_err(|_| PoseError::WrongLandmarkCount {
                    expected: LANDMARK_COUNT,
                    got: landmarks.len(),
                })?;
        Ok(Self { points })
    }

    /// Landmark at an anatomical index (see the constants in
    /// [`crate::landmarks`]).
    ///
    /// # Panics
    ///
    /// Panics if `index >= LANDMARK_COUNT`.
    pub fn point(&self, index: usize) -> &Landmark {
        &self.points[index]
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }
}

impl TryFrom<Vec<Landmark>> for HandPose {
    type Error = PoseError;

    fn try_from(landmarks: Vec<Landmark>) -> Result<Self, Self::Error> {
        Self::from_slice(&landmarks)
    }
}

impl From<HandPose> for Vec<Landmark> {
    fn from(pose: HandPose) -> Self {
        pose.points.to_vec()
    }
}

// ---------------------------------------------------------------------------
// Handedness
// ---------------------------------------------------------------------------

/// Left/right label attached by the detector.  Anything unrecognised maps to
/// `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Handedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Handedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
