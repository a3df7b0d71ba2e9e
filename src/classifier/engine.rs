//! [`SignClassifier`] trait and the rule-table implementation.
//!
//! [`SignClassifier`] is the seam the pipeline depends on.  It is object-safe
//! and `Send + Sync` so a classifier can sit behind a `Box<dyn SignClassifier>`.
//!
//! [`RuleClassifier`] walks a [`Rule`] table in order and returns the sign of
//! the first rule whose predicate holds.  No state is kept between calls.

use crate::landmarks::{HandPose, Landmark, PoseError};

use super::rules::{Rule, Sign, DEFAULT_RULES};

// ---------------------------------------------------------------------------
// SignClassifier trait
// ---------------------------------------------------------------------------

/// Maps one hand pose to a sign, or `None` when nothing matches.
///
/// Implementations must be pure: the same pose always yields the same result.
pub trait SignClassifier: Send + Sync {
    fn classify(&self, pose: &HandPose) -> Option<Sign>;
}

const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn SignClassifier>) {}
};

// ---------------------------------------------------------------------------
// RuleClassifier
// ---------------------------------------------------------------------------

/// First-match classifier over a priority-ordered rule table.
#[derive(Debug, Clone)]
pub struct RuleClassifier {
    rules: Vec<Rule>,
}

impl RuleClassifier {
    /// Build a classifier from a custom table.  Earlier rules win.
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Default for RuleClassifier {
    fn default() -> Self {
        Self::with_rules(DEFAULT_RULES.to_vec())
    }
}

impl SignClassifier for RuleClassifier {
    fn classify(&self, pose: &HandPose) -> Option<Sign> {
        self.rules
            .iter()
            .find(|rule| (rule.matches)(pose))
            .map(|rule| rule.sign)
    }
}

// ---------------------------------------------------------------------------
// classify_landmarks
// ---------------------------------------------------------------------------

/// Classify a landmark slice straight from the detector.
///
/// # Errors
///
/// [`PoseError::WrongLandmarkCount`] when the slice is not exactly 21 points.
/// A malformed hand is never reported as "no match".
pub fn classify_landmarks(
    classifier: &dyn SignClassifier,
    landmarks: &[Landmark],
) -> Result<Option<Sign>, PoseError> {
    let pose = HandPose::from_slice(landmarks)?;
    Ok(classifier.classify(&pose))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::fixtures::*;
    use crate::classifier::rules::{is_a, is_b, is_c, is_hello, is_thank_you};
    use crate::landmarks::{INDEX_TIP, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP, WRIST};

    fn classify(pose: &HandPose) -> Option<Sign> {
        RuleClassifier::default().classify(pose)
    }

    // ---- One sign per rule -------------------------------------------------

    #[test]
    fn classifies_a() {
        assert_eq!(classify(&a_pose()), Some(Sign::A));
    }

    #[test]
    fn classifies_b() {
        assert_eq!(classify(&b_pose()), Some(Sign::B));
    }

    #[test]
    fn classifies_c() {
        assert_eq!(classify(&c_pose()), Some(Sign::C));
    }

    #[test]
    fn classifies_hello() {
        assert_eq!(classify(&hello_pose()), Some(Sign::Hello));
    }

    #[test]
    fn classifies_thank_you() {
        assert_eq!(classify(&thank_you_pose()), Some(Sign::ThankYou));
    }

    #[test]
    fn unmatched_pose_is_none() {
        assert_eq!(classify(&neutral_pose()), None);
    }

    // ---- Priority on overlap -----------------------------------------------

    #[test]
    fn a_wins_over_c() {
        let pose = pose_with(&[
            (WRIST, 0.50, 0.80),
            (INDEX_TIP, 0.50, 0.30),
            (THUMB_TIP, 0.50, 0.36),
            (MIDDLE_TIP, 0.52, 0.32),
            (RING_TIP, 0.54, 0.34),
            (PINKY_TIP, 0.50, 0.40),
        ]);
        assert!(is_a(&pose) && is_c(&pose));
        assert_eq!(classify(&pose), Some(Sign::A));
    }

    #[test]
    fn b_wins_over_hello() {
        let pose = with_hello_wrist(b_pose());
        assert!(is_b(&pose) && is_hello(&pose));
        assert_eq!(classify(&pose), Some(Sign::B));
    }

    #[test]
    fn c_wins_over_hello() {
        let pose = with_hello_wrist(c_pose());
        assert!(is_c(&pose) && is_hello(&pose));
        assert_eq!(classify(&pose), Some(Sign::C));
    }

    #[test]
    fn hello_wins_over_thank_you() {
        let pose = with_hello_wrist(thank_you_pose());
        assert!(is_hello(&pose) && is_thank_you(&pose));
        assert_eq!(classify(&pose), Some(Sign::Hello));
    }

    // ---- Custom tables -----------------------------------------------------

    #[test]
    fn custom_table_order_decides() {
        let pose = with_hello_wrist(thank_you_pose());
        let classifier = RuleClassifier::with_rules(vec![
            Rule::new(Sign::ThankYou, is_thank_you),
            Rule::new(Sign::Hello, is_hello),
        ]);
        assert_eq!(classifier.classify(&pose), Some(Sign::ThankYou));
    }

    #[test]
    fn empty_table_matches_nothing() {
        let classifier = RuleClassifier::with_rules(Vec::new());
        assert_eq!(classifier.classify(&a_pose()), None);
    }

    #[test]
    fn classification_is_deterministic() {
        let classifier = RuleClassifier::default();
        let pose = hello_pose();
        let first = classifier.classify(&pose);
        for _ in 0..10 {
            assert_eq!(classifier.classify(&pose), first);
        }
    }

    // ---- Malformed input ---------------------------------------------------

    #[test]
    fn short_landmark_list_is_an_error() {
        let classifier = RuleClassifier::default();
        let landmarks = a_pose().landmarks()[..20].to_vec();
        let err = classify_landmarks(&classifier, &landmarks).unwrap_err();
        assert_eq!(
            err,
            PoseError::WrongLandmarkCount {
                expected: 21,
                got: 20
            }
        );
    }

    #[test]
    fn full_landmark_list_classifies() {
        let classifier = RuleClassifier::default();
        let landmarks = b_pose().landmarks().to_vec();
        assert_eq!(
            classify_landmarks(&classifier, &landmarks),
            Ok(Some(Sign::B))
        );
    }
}
