//! Quiet-period debouncing.
//!
//! A single pending deadline per instance: every change replaces it, so
//! only the most recent scheduling wins. Callers poll for dueness from
//! their own event loop; nothing here spawns timers or threads.

use std::time::{Duration, Instant};

/// Quiet period the dashboard uses for search input.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            deadline: None,
        }
    }

    /// Record a change, (re)arming the deadline at now + quiet period.
    /// A pending deadline is replaced, never extended piecemeal.
    pub fn mark_change(&mut self) {
        self.mark_change_at(Instant::now());
    }

    /// As [`mark_change`](Self::mark_change), with an explicit clock
    /// reading. Exists so state transitions stay testable without sleeping.
    pub fn mark_change_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet_period);
    }

    /// Whether a change is waiting for its quiet period to elapse.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self) -> bool {
        self.is_due_at(Instant::now())
    }

    pub fn is_due_at(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Drop the pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Consume the pending deadline if its quiet period has elapsed.
    /// Returns whether it fired; at most one fire per recorded change.
    pub fn try_fire(&mut self) -> bool {
        self.try_fire_at(Instant::now())
    }

    pub fn try_fire_at(&mut self, now: Instant) -> bool {
        if self.is_due_at(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}
