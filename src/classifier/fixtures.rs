//! Hand-built poses for tests.  Every point starts at the neutral
//! `(0.5, 0.5, 0.0)`; overrides set `(x, y)` for specific indices.

use crate::landmarks::{
    HandPose, Handedness, Landmark, RawHand, INDEX_MCP, INDEX_TIP, LANDMARK_COUNT, MIDDLE_TIP,
    PINKY_TIP, RING_TIP, THUMB_TIP, WRIST,
};

pub fn pose_with(overrides: &[(usize, f64, f64)]) -> HandPose {
    let mut points = [Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
    for &(index, x, y) in overrides {
        points[index].x = x;
        points[index].y = y;
    }
    HandPose::new(points)
}

/// Satisfies no rule.
pub fn neutral_pose() -> HandPose {
    pose_with(&[])
}

pub fn a_pose() -> HandPose {
    pose_with(&[
        (WRIST, 0.50, 0.80),
        (INDEX_TIP, 0.50, 0.30),
        (THUMB_TIP, 0.52, 0.35),
        (MIDDLE_TIP, 0.50, 0.40),
        (RING_TIP, 0.50, 0.40),
        (PINKY_TIP, 0.50, 0.40),
    ])
}

pub fn b_pose() -> HandPose {
    pose_with(&[
        (WRIST, 0.50, 0.80),
        (THUMB_TIP, 0.20, 0.50),
        (INDEX_TIP, 0.50, 0.20),
        (MIDDLE_TIP, 0.55, 0.25),
        (RING_TIP, 0.60, 0.30),
        (PINKY_TIP, 0.65, 0.35),
    ])
}

pub fn c_pose() -> HandPose {
    pose_with(&[
        (WRIST, 0.50, 0.80),
        (THUMB_TIP, 0.50, 0.40),
        (INDEX_TIP, 0.50, 0.30),
        (MIDDLE_TIP, 0.52, 0.32),
        (RING_TIP, 0.54, 0.34),
    ])
}

pub fn hello_pose() -> HandPose {
    pose_with(&[
        (WRIST, 0.50, 0.60),
        (INDEX_MCP, 0.40, 0.70),
        (THUMB_TIP, 0.30, 0.50),
        (INDEX_TIP, 0.40, 0.40),
        (MIDDLE_TIP, 0.50, 0.35),
        (RING_TIP, 0.60, 0.40),
        (PINKY_TIP, 0.70, 0.45),
    ])
}

pub fn thank_you_pose() -> HandPose {
    pose_with(&[
        (WRIST, 0.50, 0.80),
        (THUMB_TIP, 0.60, 0.50),
        (INDEX_TIP, 0.40, 0.30),
        (MIDDLE_TIP, 0.45, 0.35),
        (RING_TIP, 0.50, 0.40),
        (PINKY_TIP, 0.55, 0.45),
    ])
}

/// Raise the wrist to y = 0.6 and tilt the index MCP to -45°, which turns
/// most fingers-up poses into HELLO candidates as well.
pub fn with_hello_wrist(pose: HandPose) -> HandPose {
    let mut points = *pose.landmarks();
    points[WRIST] = Landmark::new(0.50, 0.60, 0.0);
    points[INDEX_MCP] = Landmark::new(0.40, 0.70, 0.0);
    HandPose::new(points)
}

pub fn raw_hand(pose: &HandPose) -> RawHand {
    RawHand::new(Handedness::Right, pose.landmarks().to_vec())
}
