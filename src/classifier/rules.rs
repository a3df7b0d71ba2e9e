//! Hand-authored geometric rules.
//!
//! Each rule is an independent threshold test on fingertip positions.  The
//! tests overlap for some poses, so [`DEFAULT_RULES`] is evaluated in order
//! and the first match wins:
//!
//! | # | Sign      | Test                                                            |
//! |---|-----------|-----------------------------------------------------------------|
//! | 1 | A         | other tips below index tip, thumb–index < 0.08                  |
//! | 2 | B         | thumb left of index, tips descend index→pinky, thumb–index > 0.15 |
//! | 3 | C         | 0.05 < thumb–index < 0.13, index/middle/ring tips close, above wrist |
//! | 4 | HELLO     | all tips above wrist, wrist→index-MCP angle in (-70°, -10°)     |
//! | 5 | THANK YOU | thumb right of index, tips descend index→pinky, thumb+index above wrist |
//!
//! Image y grows downward, so "below" means a larger `y`.  Distances are
//! planar.  The thresholds are exact and must not be tuned.

use serde::{Deserialize, Serialize};

use crate::landmarks::{
    planar_distance, HandPose, FINGERTIPS, INDEX_MCP, INDEX_TIP, MIDDLE_TIP, PINKY_TIP, RING_TIP,
    THUMB_TIP, WRIST,
};

// ---------------------------------------------------------------------------
// Sign
// ---------------------------------------------------------------------------

/// A recognised sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "HELLO")]
    Hello,
    #[serde(rename = "THANK YOU")]
    ThankYou,
}

impl Sign {
    /// Text appended to the message when this sign is emitted.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::Hello => "HELLO",
            Self::ThankYou => "THANK YOU",
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// One entry of a rule table: the sign produced when `matches` holds.
#[derive(Clone, Copy)]
pub struct Rule {
    pub sign: Sign,
    pub matches: fn(&HandPose) -> bool,
}

impl Rule {
    pub const fn new(sign: Sign, matches: fn(&HandPose) -> bool) -> Self {
        Self { sign, matches }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("sign", &self.sign)
            .finish_non_exhaustive()
    }
}

/// The built-in rule table, highest priority first.
pub const DEFAULT_RULES: &[Rule] = &[
    Rule::new(Sign::A, is_a),
    Rule::new(Sign::B, is_b),
    Rule::new(Sign::C, is_c),
    Rule::new(Sign::Hello, is_hello),
    Rule::new(Sign::ThankYou, is_thank_you),
];

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

const A_MAX_THUMB_INDEX: f64 = 0.08;
const B_MIN_THUMB_INDEX: f64 = 0.15;
const C_MIN_THUMB_INDEX: f64 = 0.05;
const C_MAX_THUMB_INDEX: f64 = 0.13;
const C_MAX_ADJACENT_TIPS: f64 = 0.07;
const HELLO_MIN_ANGLE_DEG: f64 = -70.0;
const HELLO_MAX_ANGLE_DEG: f64 = -10.0;

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn thumb_index_distance(pose: &HandPose) -> f64 {
    planar_distance(pose.point(THUMB_TIP), pose.point(INDEX_TIP))
}

/// Index, middle, ring and pinky tips strictly descending in the image.
fn tips_descend_from_index(pose: &HandPose) -> bool {
    let index = pose.point(INDEX_TIP).y;
    let middle = pose.point(MIDDLE_TIP).y;
    let ring = pose.point(RING_TIP).y;
    let pinky = pose.point(PINKY_TIP).y;
    index < middle && middle < ring && ring < pinky
}

/// Closed fist with the index tip highest and touching the thumb.
pub fn is_a(pose: &HandPose) -> bool {
    let index_y = pose.point(INDEX_TIP).y;
    [THUMB_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP]
        .iter()
        .all(|&tip| pose.point(tip).y > index_y)
        && thumb_index_distance(pose) < A_MAX_THUMB_INDEX
}

/// Flat hand, thumb held away on the left of the index.
pub fn is_b(pose: &HandPose) -> bool {
    pose.point(THUMB_TIP).x < pose.point(INDEX_TIP).x
        && tips_descend_from_index(pose)
        && thumb_index_distance(pose) > B_MIN_THUMB_INDEX
}

/// Curved hand: thumb and index partly open, other tips bunched above the
/// wrist.
pub fn is_c(pose: &HandPose) -> bool {
    let thumb_index = thumb_index_distance(pose);
    let wrist_y = pose.point(WRIST).y;
    let middle = pose.point(MIDDLE_TIP);
    let ring = pose.point(RING_TIP);

    thumb_index > C_MIN_THUMB_INDEX
        && thumb_index < C_MAX_THUMB_INDEX
        && planar_distance(pose.point(INDEX_TIP), middle) < C_MAX_ADJACENT_TIPS
        && planar_distance(middle, ring) < C_MAX_ADJACENT_TIPS
        && middle.y < wrist_y
        && ring.y < wrist_y
}

/// Angle in degrees of the vector from the index MCP to the wrist.
pub fn wrist_to_index_mcp_angle(pose: &HandPose) -> f64 {
    let wrist = pose.point(WRIST);
    let mcp = pose.point(INDEX_MCP);
    (wrist.y - mcp.y).atan2(wrist.x - mcp.x).to_degrees()
}

/// Raised open hand, tilted.
pub fn is_hello(pose: &HandPose) -> bool {
    let wrist_y = pose.point(WRIST).y;
    if !FINGERTIPS.iter().all(|&tip| pose.point(tip).y < wrist_y) {
        return false;
    }
    let angle = wrist_to_index_mcp_angle(pose);
    angle > HELLO_MIN_ANGLE_DEG && angle < HELLO_MAX_ANGLE_DEG
}

/// Flat hand with the thumb on the right of the index, raised above the wrist.
pub fn is_thank_you(pose: &HandPose) -> bool {
    let wrist_y = pose.point(WRIST).y;
    pose.point(THUMB_TIP).x > pose.point(INDEX_TIP).x
        && tips_descend_from_index(pose)
        && pose.point(THUMB_TIP).y < wrist_y
        && pose.point(INDEX_TIP).y < wrist_y
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
