//! Cooldown-gated message accumulation.
//!
//! [`MessageAccumulator`] turns a per-frame stream of classifications into a
//! transcript.  A sign is appended only when the cooldown has fully elapsed
//! since the last *accepted* emission; suppressed attempts do not restart the
//! clock.  A pose that is held keeps re-emitting once per cooldown period.
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use sign_to_text::classifier::Sign;
//! use sign_to_text::session::MessageAccumulator;
//!
//! let mut acc = MessageAccumulator::new(Duration::from_millis(1500), " ");
//! let t0 = Instant::now();
//!
//! assert!(acc.on_classification(Some(Sign::A), t0));
//! assert!(!acc.on_classification(Some(Sign::B), t0 + Duration::from_millis(500)));
//! assert!(acc.on_classification(Some(Sign::B), t0 + Duration::from_millis(1600)));
//! assert_eq!(acc.message(), "A B");
//! ```

use std::time::{Duration, Instant};

use crate::classifier::Sign;

/// Default gap between two accepted emissions.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(1500);

pub struct MessageAccumulator {
    tokens: Vec<Sign>,
    last_emission: Option<Instant>,
    cooldown: Duration,
    separator: String,
}

impl MessageAccumulator {
    pub fn new(cooldown: Duration, separator: impl Into<String>) -> Self {
        Self {
            tokens: Vec::new(),
            last_emission: None,
            cooldown,
            separator: separator.into(),
        }
    }

    /// Feed one classification result.
    ///
    /// Returns `true` when `sign` was appended.  `None` never emits and never
    /// touches the cooldown clock.
    pub fn on_classification(&mut self, sign: Option<Sign>, now: Instant) -> bool {
        let Some(sign) = sign else {
            return false;
        };

        if !self.cooldown_elapsed(now) {
            log::debug!("accumulator: {sign} suppressed by cooldown");
            return false;
        }

        self.tokens.push(sign);
        self.last_emission = Some(now);
        log::info!("accumulator: emitted {sign}");
        true
    }

    /// Whether a sign arriving at `now` would be accepted.
    pub fn cooldown_elapsed(&self, now: Instant) -> bool {
        match self.last_emission {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.cooldown,
        }
    }

    /// The transcript: emitted signs joined by the separator, with no leading
    /// or trailing separator.
    pub fn message(&self) -> String {
        self.tokens
            .iter()
            .map(Sign::as_str)
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    /// Emitted signs in order.
    pub fn tokens(&self) -> &[Sign] {
        &self.tokens
    }

    pub fn last_emission(&self) -> Option<Instant> {
        self.last_emission
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Empty the transcript.  The cooldown clock is left as is.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

impl Default for MessageAccumulator {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN, " ")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn first_sign_is_emitted_immediately() {
        let mut acc = MessageAccumulator::default();
        assert!(acc.on_classification(Some(Sign::A), Instant::now()));
        assert_eq!(acc.message(), "A");
    }

    #[test]
    fn held_pose_emits_once_per_cooldown() {
        let mut acc = MessageAccumulator::default();
        let t0 = Instant::now();

        let emitted: Vec<u64> = [0, 500, 1000, 1600, 3100]
            .into_iter()
            .filter(|&ms| acc.on_classification(Some(Sign::A), at(t0, ms)))
            .collect();

        assert_eq!(emitted, vec![0, 1600, 3100]);
        assert_eq!(acc.message(), "A A A");
        assert_eq!(acc.last_emission(), Some(at(t0, 3100)));
    }

    #[test]
    fn exactly_cooldown_is_still_suppressed() {
        let mut acc = MessageAccumulator::default();
        let t0 = Instant::now();
        acc.on_classification(Some(Sign::A), t0);
        assert!(!acc.on_classification(Some(Sign::B), at(t0, 1500)));
        assert!(acc.on_classification(Some(Sign::B), at(t0, 1501)));
    }

    #[test]
    fn suppressed_attempt_does_not_restart_cooldown() {
        let mut acc = MessageAccumulator::default();
        let t0 = Instant::now();
        acc.on_classification(Some(Sign::A), t0);
        acc.on_classification(Some(Sign::A), at(t0, 1400));
        // Measured from t0, not from 1400.
        assert!(acc.on_classification(Some(Sign::A), at(t0, 1600)));
    }

    #[test]
    fn no_match_changes_nothing() {
        let mut acc = MessageAccumulator::default();
        let t0 = Instant::now();
        acc.on_classification(Some(Sign::C), t0);

        assert!(!acc.on_classification(None, at(t0, 5000)));
        assert_eq!(acc.last_emission(), Some(t0));
        assert_eq!(acc.tokens(), &[Sign::C]);
    }

    #[test]
    fn different_signs_share_one_cooldown() {
        let mut acc = MessageAccumulator::default();
        let t0 = Instant::now();
        acc.on_classification(Some(Sign::Hello), t0);
        assert!(!acc.on_classification(Some(Sign::ThankYou), at(t0, 200)));
        assert_eq!(acc.message(), "HELLO");
    }

    #[test]
    fn multi_word_signs_join_cleanly() {
        let mut acc = MessageAccumulator::default();
        let t0 = Instant::now();
        acc.on_classification(Some(Sign::Hello), t0);
        acc.on_classification(Some(Sign::ThankYou), at(t0, 2000));
        assert_eq!(acc.message(), "HELLO THANK YOU");
        assert_eq!(acc.tokens().len(), 2);
    }

    #[test]
    fn clear_empties_message_but_keeps_clock() {
        let mut acc = MessageAccumulator::default();
        let t0 = Instant::now();
        acc.on_classification(Some(Sign::A), t0);
        acc.clear();

        assert_eq!(acc.message(), "");
        assert!(!acc.on_classification(Some(Sign::A), at(t0, 100)));
    }

    #[test]
    fn custom_separator_and_cooldown() {
        let mut acc = MessageAccumulator::new(Duration::from_millis(100), "-");
        let t0 = Instant::now();
        acc.on_classification(Some(Sign::A), t0);
        acc.on_classification(Some(Sign::B), at(t0, 101));
        assert_eq!(acc.message(), "A-B");
    }
}
