//! Debounced search input.
//!
//! Time is passed in by the caller so the controller stays deterministic and
//! testable without a clock.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct SearchDebounce {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl SearchDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records the latest keystroke; any earlier pending term is replaced and
    /// the delay restarts. A delay past the clock's range fires at once.
    pub fn schedule(&mut self, term: impl Into<String>, now: Instant) {
        let due = now.checked_add(self.delay).unwrap_or(now);
        self.pending = Some((term.into(), due));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the pending term once its delay has elapsed.
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        let due = self.pending.as_ref().map(|(_, due)| *due)?;
        if now >= due {
            self.pending.take().map(|(term, _)| term)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_delay() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::new(Duration::from_millis(300));
        debounce.schedule("al", start);

        assert_eq!(debounce.take_due(start + Duration::from_millis(299)), None);
        assert_eq!(
            debounce.take_due(start + Duration::from_millis(300)).as_deref(),
            Some("al")
        );
        assert!(!debounce.is_pending());
    }

    #[test]
    fn new_keystroke_restarts_delay() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::new(Duration::from_millis(300));
        debounce.schedule("a", start);
        debounce.schedule("al", start + Duration::from_millis(200));

        assert_eq!(debounce.take_due(start + Duration::from_millis(400)), None);
        assert_eq!(
            debounce.take_due(start + Duration::from_millis(500)).as_deref(),
            Some("al")
        );
    }

    #[test]
    fn oversized_delay_fires_immediately() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::new(Duration::MAX);
        debounce.schedule("al", start);
        assert_eq!(debounce.take_due(start).as_deref(), Some("al"));
    }

    #[test]
    fn cancel_drops_pending_term() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::new(Duration::ZERO);
        debounce.schedule("x", start);
        debounce.cancel();
        assert_eq!(debounce.take_due(start), None);
    }
}
