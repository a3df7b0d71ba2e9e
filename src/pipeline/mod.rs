//! Frame pipeline for sign-to-text.
//!
//! This module wires detector frames → classifier → session and exposes the
//! display state the presentation layer reads after every frame.
//!
//! # Architecture
//!
//! ```text
//! detector callback / ReplayRunner
//!        │  DetectionFrame
//!        ▼
//! SignTracker::process_frame()   ← synchronous, one call per frame
//!        │
//!        ├─ per hand: classify → on_classification → on_sample
//!        └─ zero hands: clear prediction, hands_detected = 0
//!
//! DisplayState ←─── read by the presentation shell after each call
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use sign_to_text::config::AppConfig;
//! use sign_to_text::pipeline::{ReplayRunner, SignTracker};
//!
//! let config = AppConfig::load().unwrap_or_default();
//! let tracker = SignTracker::new(&config);
//!
//! let stdin = std::io::stdin();
//! let (tracker, summary) = ReplayRunner::new(tracker).run(stdin.lock()).unwrap();
//!
//! println!("{}", summary.final_message);
//! println!("status: {}", tracker.display().status.label());
//! ```

pub mod runner;
pub mod state;
pub mod tracker;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::{InputEvent, ReplayRunner, ReplaySummary};
pub use state::{round_to, DisplayState, HandSummary, TrackerStatus};
pub use tracker::{FrameReport, HandOutcome, SignTracker};
