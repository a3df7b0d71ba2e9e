//! Static sign classification.
//!
//! This module provides:
//! * [`Sign`] — the labels the built-in rules can produce.
//! * [`Rule`] / [`DEFAULT_RULES`] — the priority-ordered rule table.
//! * [`SignClassifier`] — trait used by the pipeline.
//! * [`RuleClassifier`] — first-match evaluation over a rule table.
//! * [`classify_landmarks`] — classify an unvalidated landmark slice.
//!
//! # Quick start
//!
//! ```rust
//! use sign_to_text::classifier::{RuleClassifier, SignClassifier};
//! use sign_to_text::landmarks::{HandPose, Landmark};
//!
//! let classifier = RuleClassifier::default();
//! let pose = HandPose::new([Landmark::new(0.5, 0.5, 0.0); 21]);
//!
//! // Every point on top of each other matches nothing.
//! assert_eq!(classifier.classify(&pose), None);
//! ```

pub mod engine;
pub mod rules;

#[cfg(test)]
pub(crate) mod fixtures;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use engine::{classify_landmarks, RuleClassifier, SignClassifier};
pub use rules::{Rule, Sign, DEFAULT_RULES};
