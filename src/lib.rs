//! Sign-to-text: static hand-pose classification over detector landmarks.
//!
//! ```text
//! DetectionFrame ──▶ SignTracker::process_frame
//!                        │
//!                        ├─ RawHand::pose()                 → HandPose (21 points)
//!                        ├─ SignClassifier::classify        → Option<Sign>
//!                        ├─ Session::on_classification      (cooldown gate)
//!                        └─ Session::on_sample              (data collection)
//!
//! DisplayState  ←─── read by the presentation shell after every frame
//! ```

pub mod classifier;
pub mod config;
pub mod landmarks;
pub mod pipeline;
pub mod session;
