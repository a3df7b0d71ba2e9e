//! Per-session state: the emitted message and the collected dataset.
//!
//! [`Session`] owns everything that outlives a single frame.  One instance
//! per tracking session; nothing here is global.
//!
//! | Operation                | Effect                                          |
//! |--------------------------|-------------------------------------------------|
//! | `on_classification`      | cooldown gate → append to message               |
//! | `on_sample`              | append `(active label, pose)` when collecting   |
//! | `clear_message`          | empty the message, samples untouched            |
//! | `toggle_collection`      | flip collection on/off                          |
//! | `set_active_label`       | label for subsequent samples                    |
//! | `export_samples`         | JSON dataset document                           |
//! | `save_samples`           | write that document to disk                     |

pub mod accumulator;
pub mod dataset;

use std::path::Path;
use std::time::Instant;

use crate::classifier::Sign;
use crate::config::AppConfig;
use crate::landmarks::HandPose;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use accumulator::{MessageAccumulator, DEFAULT_COOLDOWN};
pub use dataset::{
    export_samples, load_samples, parse_samples, save_samples, DatasetError, LabeledSample,
    SampleCollector,
};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Session state owned by one tracker.
///
/// ```rust
/// use std::time::Instant;
/// use sign_to_text::classifier::Sign;
/// use sign_to_text::session::Session;
///
/// let mut session = Session::default();
/// session.on_classification(Some(Sign::Hello), Instant::now());
/// assert_eq!(session.message(), "HELLO");
///
/// session.clear_message();
/// assert_eq!(session.message(), "");
/// ```
#[derive(Default)]
pub struct Session {
    accumulator: MessageAccumulator,
    collector: SampleCollector,
}

impl Session {
    pub fn new(accumulator: MessageAccumulator, collector: SampleCollector) -> Self {
        Self {
            accumulator,
            collector,
        }
    }

    /// Build a session from the `recognition` and `collection` settings.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            MessageAccumulator::new(
                config.recognition.cooldown(),
                config.recognition.separator.clone(),
            ),
            SampleCollector::new(
                config.collection.start_enabled,
                config.collection.initial_label.clone(),
            ),
        )
    }

    /// Cooldown-gated append.  Returns `true` when `sign` was emitted.
    pub fn on_classification(&mut self, sign: Option<Sign>, now: Instant) -> bool {
        self.accumulator.on_classification(sign, now)
    }

    /// Record `pose` under the active label if collection is on.
    pub fn on_sample(&mut self, pose: &HandPose) -> bool {
        self.collector.record(pose)
    }

    pub fn clear_message(&mut self) {
        self.accumulator.clear();
        log::info!("session: message cleared");
    }

    /// Returns the new collection state.
    pub fn toggle_collection(&mut self) -> bool {
        let enabled = self.collector.toggle();
        log::info!(
            "session: collection {} (label {:?})",
            if enabled { "started" } else { "stopped" },
            self.collector.active_label()
        );
        enabled
    }

    pub fn set_active_label(&mut self, label: impl Into<String>) {
        self.collector.set_active_label(label);
    }

    pub fn export_samples(&self) -> Result<String, DatasetError> {
        export_samples(self.collector.samples())
    }

    pub fn save_samples(&self, path: &Path) -> Result<(), DatasetError> {
        save_samples(self.collector.samples(), path)
    }

    pub fn message(&self) -> String {
        self.accumulator.message()
    }

    pub fn accumulator(&self) -> &MessageAccumulator {
        &self.accumulator
    }

    pub fn collector(&self) -> &SampleCollector {
        &self.collector
    }

    pub fn samples(&self) -> &[LabeledSample] {
        self.collector.samples()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
