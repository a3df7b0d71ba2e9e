//! Detection adapter — per-frame glue between the detector callback, the
//! classifier and the session.
//!
//! # Frame flow
//!
//! ```text
//! DetectionFrame
//!   ├─ no hands → prediction cleared, hands_detected = 0, nothing classified
//!   └─ for each hand
//!        ├─ RawHand::pose()            Err → warn, hand skipped
//!        ├─ classifier.classify(pose)
//!        ├─ session.on_classification  (cooldown gate)
//!        └─ session.on_sample          (unconditional)
//! ```
//!
//! Everything runs synchronously inside [`SignTracker::process_frame`]; the
//! caller is the detector's per-frame callback.

use std::path::PathBuf;
use std::time::Instant;

use crate::classifier::{RuleClassifier, Sign, SignClassifier};
use crate::config::AppConfig;
use crate::landmarks::{DetectionFrame, Handedness, PoseError};
use crate::session::{DatasetError, Session};

use super::state::{DisplayState, HandSummary, TrackerStatus};

// ---------------------------------------------------------------------------
// FrameReport
// ---------------------------------------------------------------------------

/// What happened to one hand of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HandOutcome {
    pub handedness: Handedness,
    /// Classification, or the reason the hand was rejected.
    pub result: Result<Option<Sign>, PoseError>,
    /// The sign passed the cooldown gate and was appended to the message.
    pub emitted: bool,
    /// The pose was stored as a collected sample.
    pub sampled: bool,
}

/// Per-frame result returned by [`SignTracker::process_frame`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub hands_detected: usize,
    pub outcomes: Vec<HandOutcome>,
}

impl FrameReport {
    /// Signs appended to the message during this frame.
    pub fn emitted(&self) -> Vec<Sign> {
        self.outcomes
            .iter()
            .filter(|o| o.emitted)
            .filter_map(|o| o.result.as_ref().ok().copied().flatten())
            .collect()
    }

    /// Hands dropped for failing pose validation.
    pub fn rejected(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    pub fn sampled(&self) -> usize {
        self.outcomes.iter().filter(|o| o.sampled).count()
    }
}

// ---------------------------------------------------------------------------
// SignTracker
// ---------------------------------------------------------------------------

/// Owns one session and drives it from detector frames.
///
/// ```rust
/// use std::time::Instant;
/// use sign_to_text::config::AppConfig;
/// use sign_to_text::landmarks::DetectionFrame;
/// use sign_to_text::pipeline::SignTracker;
///
/// let mut tracker = SignTracker::new(&AppConfig::default());
/// let report = tracker.process_frame(&DetectionFrame::empty(), Instant::now());
///
/// assert_eq!(report.hands_detected, 0);
/// assert!(tracker.display().no_hands_detected());
/// ```
pub struct SignTracker {
    classifier: Box<dyn SignClassifier>,
    session: Session,
    display: DisplayState,
    config: AppConfig,
}

impl SignTracker {
    /// Tracker with the built-in rule table.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_classifier(config, Box::new(RuleClassifier::default()))
    }

    pub fn with_classifier(config: &AppConfig, classifier: Box<dyn SignClassifier>) -> Self {
        let mut tracker = Self {
            classifier,
            session: Session::from_config(config),
            display: DisplayState::default(),
            config: config.clone(),
        };
        tracker.sync_display();
        tracker
    }

    // -----------------------------------------------------------------------
    // Per-frame callback
    // -----------------------------------------------------------------------

    /// Process one detector frame observed at `now`.
    pub fn process_frame(&mut self, frame: &DetectionFrame, now: Instant) -> FrameReport {
        self.display.status = TrackerStatus::Tracking;

        let hands_detected = frame.hand_count();
        let max_hands = self.config.detector.max_num_hands;
        if hands_detected > max_hands {
            log::warn!("tracker: frame has {hands_detected} hands, detector limit is {max_hands}");
        }

        let precision = self.config.display.debug_precision;
        let mut report = FrameReport {
            hands_detected,
            outcomes: Vec::with_capacity(hands_detected),
        };
        let mut summaries = Vec::with_capacity(hands_detected);

        for (i, hand) in frame.hands.iter().enumerate() {
            summaries.push(HandSummary::from_raw(hand, precision));

            let pose = match hand.pose() {
                Ok(pose) => pose,
                Err(e) => {
                    log::warn!("tracker: skipping hand {i} ({}): {e}", hand.handedness);
                    report.outcomes.push(HandOutcome {
                        handedness: hand.handedness,
                        result: Err(e),
                        emitted: false,
                        sampled: false,
                    });
                    continue;
                }
            };

            let sign = self.classifier.classify(&pose);
            log::debug!("tracker: hand {i} ({}) → {sign:?}", hand.handedness);

            let emitted = self.session.on_classification(sign, now);
            if emitted {
                self.display.prediction = sign;
            }
            let sampled = self.session.on_sample(&pose);

            report.outcomes.push(HandOutcome {
                handedness: hand.handedness,
                result: Ok(sign),
                emitted,
                sampled,
            });
        }

        if hands_detected == 0 {
            self.display.prediction = None;
        }
        self.display.hands_detected = hands_detected;
        self.display.hands = summaries;
        self.sync_display();

        report
    }

    /// Process a frame stamped with the current monotonic time.
    pub fn process_frame_now(&mut self, frame: &DetectionFrame) -> FrameReport {
        self.process_frame(frame, Instant::now())
    }

    /// Surface a detector or camera failure.  The tracker stays usable.
    pub fn report_detector_unavailable(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::warn!("tracker: detector unavailable: {reason}");
        self.display.status = TrackerStatus::Unavailable { reason };
    }

    // -----------------------------------------------------------------------
    // User controls
    // -----------------------------------------------------------------------

    pub fn clear_message(&mut self) {
        self.session.clear_message();
        self.sync_display();
    }

    pub fn toggle_collection(&mut self) -> bool {
        let enabled = self.session.toggle_collection();
        self.sync_display();
        enabled
    }

    pub fn set_active_label(&mut self, label: impl Into<String>) {
        self.session.set_active_label(label);
        self.sync_display();
    }

    pub fn export_samples(&self) -> Result<String, DatasetError> {
        self.session.export_samples()
    }

    /// Write the dataset to the configured export path and return that path.
    pub fn download_samples(&self) -> Result<PathBuf, DatasetError> {
        let path = self.config.collection.export_path();
        self.session.save_samples(&path)?;
        Ok(path)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn sync_display(&mut self) {
        let collector = self.session.collector();
        self.display.message = self.session.message();
        self.display.collecting = collector.is_enabled();
        self.display.active_label = collector.active_label().to_owned();
        self.display.samples_collected = collector.len();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
