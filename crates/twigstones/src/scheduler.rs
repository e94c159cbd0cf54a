//! Delayed AI moves.
//!
//! The engine has no notion of time. The UI asks a scheduler to fire
//! after a human move and plays the AI turn when it comes due. Time is
//! always passed in, so tests drive the clock by hand.

use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Decides when a pending AI move should be played.
pub trait AiScheduler {
    /// Arms the scheduler, replacing any pending request.
    fn schedule(&mut self, now: Instant);

    /// Drops any pending request.
    fn cancel(&mut self);

    /// Whether a request is armed.
    fn is_pending(&self) -> bool;

    /// Time left before the pending request is due.
    fn remaining(&self, now: Instant) -> Option<Duration>;

    /// Returns true exactly once when the pending request is due,
    /// disarming it.
    fn take_due(&mut self, now: Instant) -> bool;
}

/// Fires a fixed delay after being scheduled.
#[derive(Debug, Clone)]
pub struct DelayScheduler {
    delay: Duration,
    due: Option<Instant>,
}

impl DelayScheduler {
    /// Creates a scheduler with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay, due: None }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl AiScheduler for DelayScheduler {
    #[instrument(skip(self, now), fields(delay_ms = self.delay.as_millis()))]
    fn schedule(&mut self, now: Instant) {
        debug!("AI move scheduled");
        self.due = Some(now + self.delay);
    }

    fn cancel(&mut self) {
        if self.due.take().is_some() {
            debug!("Pending AI move cancelled");
        }
    }

    fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due.map(|due| due.saturating_duration_since(now))
    }

    fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
