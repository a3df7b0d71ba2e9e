//! Manual landmark collection and the exported training dataset.
//!
//! While collection is enabled and a label is set, every observed hand is
//! stored verbatim as a [`LabeledSample`].  The dataset is exported as a
//! pretty-printed JSON array:
//!
//! ```json
//! [
//!   {
//!     "label": "A",
//!     "landmarks": [ { "x": 0.51, "y": 0.32, "z": -0.04 }, ... 21 entries ]
//!   }
//! ]
//! ```
//!
//! Coordinates are written at full `f64` precision and parse back to the
//! identical values.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::landmarks::HandPose;

// ---------------------------------------------------------------------------
// DatasetError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to serialise dataset: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Malformed JSON, or a sample without exactly 21 landmarks.
    #[error("failed to parse dataset: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("dataset I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// LabeledSample
// ---------------------------------------------------------------------------

/// One collected hand pose and the label the user assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSample {
    pub label: String,
    pub landmarks: HandPose,
}

// ---------------------------------------------------------------------------
// Export / parse
// ---------------------------------------------------------------------------

/// Serialise samples as the dataset document.  An empty slice gives `[]`.
pub fn export_samples(samples: &[LabeledSample]) -> Result<String, DatasetError> {
    serde_json::to_string_pretty(samples).map_err(DatasetError::Serialize)
}

/// Parse a dataset document back into samples.
pub fn parse_samples(document: &str) -> Result<Vec<LabeledSample>, DatasetError> {
    serde_json::from_str(document).map_err(DatasetError::Parse)
}

/// Export `samples` to `path`, creating parent directories as needed.
pub fn save_samples(samples: &[LabeledSample], path: &Path) -> Result<(), DatasetError> {
    let document = export_samples(samples)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, document)?;
    log::info!(
        "dataset: wrote {} sample(s) to {}",
        samples.len(),
        path.display()
    );
    Ok(())
}

/// Load a dataset file previously written by [`save_samples`].
pub fn load_samples(path: &Path) -> Result<Vec<LabeledSample>, DatasetError> {
    let document = std::fs::read_to_string(path)?;
    parse_samples(&document)
}

// ---------------------------------------------------------------------------
// SampleCollector
// ---------------------------------------------------------------------------

/// Append-only sample store with its user-controlled toggle and label.
#[derive(Debug, Default)]
pub struct SampleCollector {
    enabled: bool,
    active_label: String,
    samples: Vec<LabeledSample>,
}

impl SampleCollector {
    pub fn new(enabled: bool, active_label: impl Into<String>) -> Self {
        Self {
            enabled,
            active_label: active_label.into(),
            samples: Vec::new(),
        }
    }

    /// Store `pose` under the active label.
    ///
    /// No-op unless collection is enabled and the label is non-empty.
    /// Returns `true` when a sample was appended.
    pub fn record(&mut self, pose: &HandPose) -> bool {
        if !self.enabled || self.active_label.is_empty() {
            return false;
        }
        self.samples.push(LabeledSample {
            label: self.active_label.clone(),
            landmarks: *pose,
        });
        true
    }

    /// Flip collection on/off and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn set_active_label(&mut self, label: impl Into<String>) {
        self.active_label = label.into();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn active_label(&self) -> &str {
        &self.active_label
    }

    pub fn samples(&self) -> &[LabeledSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
