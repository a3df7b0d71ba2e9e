//! Replay driver — feeds a JSON Lines event stream through a [`SignTracker`].
//!
//! Each line is one [`InputEvent`]: a detector frame or a user control.
//!
//! ```text
//! {"type":"frame","timestamp_ms":0,"hands":[{"handedness":"Right","landmarks":[...]}]}
//! {"type":"set_label","label":"A"}
//! {"type":"toggle_collection"}
//! {"type":"clear_message"}
//! {"type":"export"}
//! {"type":"detector_unavailable","reason":"camera permission denied"}
//! ```
//!
//! `timestamp_ms` is relative to the start of the replay; frames without it
//! are stamped with `Instant::now()`.  Lines that fail to parse are logged
//! and skipped.

use std::io::BufRead;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::classifier::Sign;
use crate::landmarks::DetectionFrame;

use super::tracker::SignTracker;

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// One line of the replay stream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Detector output for one camera frame.
    Frame {
        #[serde(default)]
        timestamp_ms: Option<u64>,
        #[serde(flatten)]
        frame: DetectionFrame,
    },
    SetLabel {
        label: String,
    },
    ToggleCollection,
    ClearMessage,
    /// Download the collected dataset.
    Export,
    DetectorUnavailable {
        reason: String,
    },
}

impl InputEvent {
    pub fn parse(line: &str) -> Result<Self> {
        serde_json::from_str(line).context("malformed replay event")
    }
}

// ---------------------------------------------------------------------------
// ReplaySummary
// ---------------------------------------------------------------------------

/// Totals for one replay run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaySummary {
    pub frames: usize,
    pub emitted: Vec<Sign>,
    pub rejected_hands: usize,
    pub skipped_lines: usize,
    /// Dataset files written by `export` events.
    pub exports: Vec<PathBuf>,
    pub final_message: String,
}

// ---------------------------------------------------------------------------
// ReplayRunner
// ---------------------------------------------------------------------------

pub struct ReplayRunner {
    tracker: SignTracker,
    started: Instant,
    summary: ReplaySummary,
}

impl ReplayRunner {
    pub fn new(tracker: SignTracker) -> Self {
        Self {
            tracker,
            started: Instant::now(),
            summary: ReplaySummary::default(),
        }
    }

    /// Consume `reader` line by line until EOF.
    ///
    /// # Errors
    ///
    /// Only a failure to read from `reader` aborts the run.
    pub fn run<R: BufRead>(mut self, reader: R) -> Result<(SignTracker, ReplaySummary)> {
        for (number, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("reading replay line {}", number + 1))?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match InputEvent::parse(line) {
                Ok(event) => self.handle(event),
                Err(e) => {
                    log::warn!("replay: skipping line {}: {e:#}", number + 1);
                    self.summary.skipped_lines += 1;
                }
            }
        }

        self.summary.final_message = self.tracker.display().message.clone();
        log::info!(
            "replay: {} frame(s), {} sign(s) emitted",
            self.summary.frames,
            self.summary.emitted.len()
        );
        Ok((self.tracker, self.summary))
    }

    fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Frame {
                timestamp_ms,
                frame,
            } => {
                let now = match timestamp_ms {
                    Some(ms) => self.started + Duration::from_millis(ms),
                    None => Instant::now(),
                };
                let report = self.tracker.process_frame(&frame, now);
                self.summary.frames += 1;
                self.summary.rejected_hands += report.rejected();
                self.summary.emitted.extend(report.emitted());
            }
            InputEvent::SetLabel { label } => self.tracker.set_active_label(label),
            InputEvent::ToggleCollection => {
                self.tracker.toggle_collection();
            }
            InputEvent::ClearMessage => self.tracker.clear_message(),
            InputEvent::Export => match self.tracker.download_samples() {
                Ok(path) => self.summary.exports.push(path),
                Err(e) => log::error!("replay: dataset export failed: {e}"),
            },
            InputEvent::DetectorUnavailable { reason } => {
                self.tracker.report_detector_unavailable(reason)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
