//! Read-only display state published after every frame.
//!
//! [`DisplayState`] is the single source of truth for whatever presents the
//! session: tracker status, the current prediction, per-hand debug
//! summaries, the live message and the collection controls.
//!
//! Debug summaries round coordinates for display only; the session keeps the
//! detector's values untouched.

use crate::classifier::Sign;
use crate::landmarks::{Handedness, Landmark, RawHand};

// ---------------------------------------------------------------------------
// TrackerStatus
// ---------------------------------------------------------------------------

/// Whether frames are arriving from the detector.
///
/// ```text
/// Waiting ──first frame──▶ Tracking
/// any ──detector/camera failure──▶ Unavailable
/// Unavailable ──next frame──▶ Tracking
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TrackerStatus {
    /// No frame has been processed yet.
    #[default]
    Waiting,

    /// Frames are being processed.
    Tracking,

    /// The detector or camera failed (e.g. permission denied).  Non-fatal;
    /// the tracker keeps accepting frames.
    Unavailable { reason: String },
}

impl TrackerStatus {
    /// A short human-readable label suitable for a status bar.
    ///
    /// ```
    /// use sign_to_text::pipeline::TrackerStatus;
    ///
    /// assert_eq!(TrackerStatus::Waiting.label(), "Waiting");
    /// assert_eq!(TrackerStatus::Tracking.label(), "Tracking");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            TrackerStatus::Waiting => "Waiting",
            TrackerStatus::Tracking => "Tracking",
            TrackerStatus::Unavailable { .. } => "Unavailable",
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, TrackerStatus::Unavailable { .. })
    }
}

// ---------------------------------------------------------------------------
// HandSummary
// ---------------------------------------------------------------------------

/// Debug view of one detected hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HandSummary {
    pub handedness: Handedness,
    /// Coordinates rounded to the configured number of decimals.
    pub landmarks: Vec<Landmark>,
}

impl HandSummary {
    pub fn from_raw(hand: &RawHand, precision: u32) -> Self {
        Self {
            handedness: hand.handedness,
            landmarks: hand
                .landmarks
                .iter()
                .map(|p| {
                    Landmark::new(
                        round_to(p.x, precision),
                        round_to(p.y, precision),
                        round_to(p.z, precision),
                    )
                })
                .collect(),
        }
    }
}

/// Round `value` to `decimals` places for display.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

// ---------------------------------------------------------------------------
// DisplayState
// ---------------------------------------------------------------------------

/// Everything the presentation layer reads after each frame.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    pub status: TrackerStatus,

    /// Most recently emitted sign.  Cleared when a frame has no hands.
    pub prediction: Option<Sign>,

    /// Hands in the last frame, including any that failed validation.
    pub hands_detected: usize,

    /// One summary per hand in the last frame.
    pub hands: Vec<HandSummary>,

    /// Live message text.
    pub message: String,

    pub collecting: bool,
    pub active_label: String,
    pub samples_collected: usize,
}

impl DisplayState {
    /// Prediction text, or `""` when there is none.
    pub fn prediction_text(&self) -> &'static str {
        self.prediction.map(|s| s.as_str()).unwrap_or("")
    }

    /// `true` when the last frame contained no hands.
    pub fn no_hands_detected(&self) -> bool {
        self.hands_detected == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
